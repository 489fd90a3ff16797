//! Collection wrapper types with empty-collection handling.

use std::fmt;

use crate::models::{QueuedMessage, RobotAction, TrajectorySummary};

/// Newtype wrapper for displaying a trajectory listing.
///
/// ```rust
/// use jiff::Timestamp;
/// use wallpath_core::{display::TrajectorySummaries, models::TrajectorySummary};
///
/// let summary = TrajectorySummary {
///     id: 1,
///     wall_width: 5.0,
///     wall_height: 3.0,
///     created_at: Timestamp::now(),
///     total_points: 189,
///     execution_time: Some(0.002),
/// };
///
/// let output = TrajectorySummaries(vec![summary]).to_string();
/// assert!(output.contains("189 points"));
/// ```
pub struct TrajectorySummaries(pub Vec<TrajectorySummary>);

impl TrajectorySummaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrajectorySummary> {
        self.0.iter()
    }
}

impl fmt::Display for TrajectorySummaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No trajectories found.");
        }

        writeln!(f, "# Trajectories")?;
        writeln!(f)?;
        for summary in &self.0 {
            write!(f, "{summary}")?;
        }
        Ok(())
    }
}

/// The action log of one execution session.
pub struct RobotActions {
    pub session_id: String,
    pub actions: Vec<RobotAction>,
}

impl RobotActions {
    pub fn new(session_id: impl Into<String>, actions: Vec<RobotAction>) -> Self {
        Self {
            session_id: session_id.into(),
            actions,
        }
    }
}

impl fmt::Display for RobotActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.actions.is_empty() {
            return writeln!(f, "No actions logged for session {}.", self.session_id);
        }

        writeln!(f, "# Session {}", self.session_id)?;
        writeln!(f)?;
        for action in &self.actions {
            write!(f, "{action}")?;
        }
        Ok(())
    }
}

/// Messages of one topic.
pub struct Messages {
    pub topic: String,
    pub messages: Vec<QueuedMessage>,
}

impl Messages {
    pub fn new(topic: impl Into<String>, messages: Vec<QueuedMessage>) -> Self {
        Self {
            topic: topic.into(),
            messages,
        }
    }
}

impl fmt::Display for Messages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.messages.is_empty() {
            return writeln!(f, "No messages on topic '{}'.", self.topic);
        }

        writeln!(f, "# Messages on '{}'", self.topic)?;
        writeln!(f)?;
        for message in &self.messages {
            write!(f, "{message}")?;
        }
        Ok(())
    }
}
