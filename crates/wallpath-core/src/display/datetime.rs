//! Timestamp and duration formatting.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a timestamp in the system time zone as `YYYY-MM-DD HH:MM:SS TZ`.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let zoned = self.0.to_zoned(TimeZone::system());
        write!(f, "{}", zoned.strftime("%Y-%m-%d %H:%M:%S %Z"))
    }
}

/// Formats an optional duration in seconds with millisecond precision.
///
/// ```rust
/// use wallpath_core::display::Seconds;
///
/// assert_eq!(Seconds(Some(0.01234)).to_string(), "0.012 s");
/// assert_eq!(Seconds(None).to_string(), "n/a");
/// ```
pub struct Seconds(pub Option<f64>);

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(seconds) => write!(f, "{seconds:.3} s"),
            None => write!(f, "n/a"),
        }
    }
}
