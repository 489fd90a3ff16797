//! Robot action log records.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::ActionKind;

/// One narrated action of an execution session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RobotAction {
    pub session_id: String,
    pub action_type: ActionKind,
    /// Human-readable description of the action
    pub details: String,
    pub timestamp: Timestamp,
    pub position_x: Option<f64>,
    pub position_y: Option<f64>,
}
