//! Parameter structures for controller operations.
//!
//! These structures carry no interface-specific derives. The CLI defines its
//! own `clap` argument structs and converts them with `From`; documents read
//! from disk deserialize straight into them through `serde`.

use serde::{Deserialize, Serialize};

use crate::{
    coverage::PlanningConfig,
    models::{LogLevel, Obstacle, TrajectoryPoint, WorkArea},
};

fn default_tool_width() -> f64 {
    0.1
}

fn default_overlap() -> f64 {
    0.02
}

fn default_safety_margin() -> f64 {
    0.05
}

fn default_trajectory_limit() -> u32 {
    10
}

fn default_message_limit() -> u32 {
    50
}

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the trajectory to operate on
    pub id: u64,
}

/// Parameters for generating a coverage trajectory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateTrajectory {
    pub wall_width: f64,
    pub wall_height: f64,
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,
    #[serde(default = "default_tool_width")]
    pub tool_width: f64,
    #[serde(default = "default_overlap")]
    pub overlap: f64,
    #[serde(default = "default_safety_margin")]
    pub safety_margin: f64,
}

impl Default for GenerateTrajectory {
    fn default() -> Self {
        Self {
            wall_width: 0.0,
            wall_height: 0.0,
            obstacles: Vec::new(),
            tool_width: default_tool_width(),
            overlap: default_overlap(),
            safety_margin: default_safety_margin(),
        }
    }
}

impl GenerateTrajectory {
    pub fn work_area(&self) -> WorkArea {
        WorkArea::new(self.wall_width, self.wall_height)
    }

    /// Planning config with the default speed tiers.
    pub fn config(&self) -> PlanningConfig {
        PlanningConfig::new(self.tool_width, self.overlap, self.safety_margin)
    }
}

/// A trajectory document to store as-is.
///
/// The points field is named `trajectory` in the document format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaveTrajectory {
    pub wall_width: f64,
    pub wall_height: f64,
    #[serde(default)]
    pub obstacles: Vec<Obstacle>,
    #[serde(rename = "trajectory")]
    pub points: Vec<TrajectoryPoint>,
    /// Generation time in seconds, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub execution_time: Option<f64>,
}

/// Parameters for listing stored trajectories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListTrajectories {
    /// Maximum number of trajectories returned
    #[serde(default = "default_trajectory_limit")]
    pub limit: u32,
}

impl Default for ListTrajectories {
    fn default() -> Self {
        Self {
            limit: default_trajectory_limit(),
        }
    }
}

/// Parameters for reading the action log of one execution session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionActions {
    pub session_id: String,
}

/// Parameters for listing the messages of one topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListMessages {
    pub topic: String,
    #[serde(default = "default_message_limit")]
    pub limit: u32,
}

impl ListMessages {
    /// Lists `topic` with the default limit.
    pub fn topic(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            limit: default_message_limit(),
        }
    }
}

/// Parameters for publishing a message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublishMessage {
    pub topic: String,
    pub message: String,
    /// Messages above priority 5 are delivered immediately
    #[serde(default)]
    pub priority: i32,
}

/// Parameters for processing pending messages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessMessages {
    /// Restrict delivery to one topic
    #[serde(default)]
    pub topic: Option<String>,
}

/// A request record for the system log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RequestLog {
    #[serde(default)]
    pub level: LogLevel,
    pub message: String,
    #[serde(default)]
    pub request_id: Option<String>,
    /// Request duration in seconds
    #[serde(default)]
    pub execution_time: Option<f64>,
}
