//! Trajectory point model.

use serde::{Deserialize, Serialize};

/// One point of a generated trajectory.
///
/// The sequence order defines the path: the robot moves point to point in
/// order. `angle` is a heading in degrees, `speed` is in work-area units per
/// second.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TrajectoryPoint {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub angle: f64,
    #[serde(default = "default_speed")]
    pub speed: f64,
    /// Whether the tool is engaged at this point
    #[serde(default = "default_tool_active")]
    pub tool_active: bool,
}

fn default_speed() -> f64 {
    0.1
}

fn default_tool_active() -> bool {
    true
}

impl TrajectoryPoint {
    /// A point with the tool engaged.
    pub fn working(x: f64, y: f64, angle: f64, speed: f64) -> Self {
        Self {
            x,
            y,
            angle,
            speed,
            tool_active: true,
        }
    }

    /// A point with the tool disengaged.
    pub fn transit(x: f64, y: f64, angle: f64, speed: f64) -> Self {
        Self {
            x,
            y,
            angle,
            speed,
            tool_active: false,
        }
    }
}
