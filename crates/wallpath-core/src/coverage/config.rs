//! Sweep parameters and their validation.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WallpathError};

/// Default tool speed while the tool is engaged.
pub const DEFAULT_WORKING_SPEED: f64 = 0.1;
/// Default speed while passing over an obstacle.
pub const DEFAULT_TRANSIT_SPEED: f64 = 0.2;
/// Default speed of the lateral move that starts each lane.
pub const DEFAULT_REPOSITION_SPEED: f64 = 0.15;

/// Immutable parameters governing a coverage sweep.
///
/// `step = tool_width - overlap` is the lateral distance between lanes and
/// must be positive, otherwise the lane loop could never terminate.
///
/// ```rust
/// use wallpath_core::coverage::PlanningConfig;
///
/// let config = PlanningConfig::new(0.1, 0.02, 0.05);
/// assert!(config.validate().is_ok());
/// assert!((config.step() - 0.08).abs() < 1e-12);
///
/// let stalled = PlanningConfig::new(0.1, 0.1, 0.05);
/// assert!(stalled.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PlanningConfig {
    /// Width of the tool footprint
    pub tool_width: f64,
    /// Overlap between neighbouring lanes, `0 <= overlap < tool_width`
    pub overlap: f64,
    /// Clearance kept around every obstacle
    pub safety_margin: f64,
    #[serde(default = "default_working_speed")]
    pub working_speed: f64,
    #[serde(default = "default_transit_speed")]
    pub transit_speed: f64,
    #[serde(default = "default_reposition_speed")]
    pub reposition_speed: f64,
}

fn default_working_speed() -> f64 {
    DEFAULT_WORKING_SPEED
}

fn default_transit_speed() -> f64 {
    DEFAULT_TRANSIT_SPEED
}

fn default_reposition_speed() -> f64 {
    DEFAULT_REPOSITION_SPEED
}

impl Default for PlanningConfig {
    fn default() -> Self {
        Self::new(0.1, 0.02, 0.05)
    }
}

impl PlanningConfig {
    /// Creates a config with the default speed tiers.
    pub fn new(tool_width: f64, overlap: f64, safety_margin: f64) -> Self {
        Self {
            tool_width,
            overlap,
            safety_margin,
            working_speed: DEFAULT_WORKING_SPEED,
            transit_speed: DEFAULT_TRANSIT_SPEED,
            reposition_speed: DEFAULT_REPOSITION_SPEED,
        }
    }

    /// Replaces the speed tiers.
    pub fn with_speeds(mut self, working: f64, transit: f64, reposition: f64) -> Self {
        self.working_speed = working;
        self.transit_speed = transit;
        self.reposition_speed = reposition;
        self
    }

    /// Lateral distance between consecutive lanes.
    pub fn step(&self) -> f64 {
        self.tool_width - self.overlap
    }

    /// Checks every field, reporting the first violation.
    ///
    /// # Errors
    ///
    /// Returns `WallpathError::InvalidToolConfig` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if !self.tool_width.is_finite() || self.tool_width <= 0.0 {
            return Err(WallpathError::invalid_tool_config("tool_width")
                .with_reason(format!("must be a positive number, got {}", self.tool_width)));
        }
        if !self.overlap.is_finite() || self.overlap < 0.0 {
            return Err(WallpathError::invalid_tool_config("overlap")
                .with_reason(format!("must be non-negative, got {}", self.overlap)));
        }
        if self.overlap >= self.tool_width || self.step() <= 0.0 {
            return Err(WallpathError::invalid_tool_config("overlap").with_reason(format!(
                "must be smaller than tool_width {}, got {}",
                self.tool_width, self.overlap
            )));
        }
        if !self.safety_margin.is_finite() || self.safety_margin < 0.0 {
            return Err(WallpathError::invalid_tool_config("safety_margin")
                .with_reason(format!("must be non-negative, got {}", self.safety_margin)));
        }

        let speeds = [
            ("working_speed", self.working_speed),
            ("transit_speed", self.transit_speed),
            ("reposition_speed", self.reposition_speed),
        ];
        for (field, speed) in speeds {
            if !speed.is_finite() || speed < 0.0 {
                return Err(WallpathError::invalid_tool_config(field)
                    .with_reason(format!("must be non-negative, got {speed}")));
            }
        }

        Ok(())
    }
}
