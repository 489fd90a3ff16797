//! System log records and status statistics.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::LogLevel;

/// One request log record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemLogEntry {
    pub level: LogLevel,
    pub message: String,
    pub request_id: Option<String>,
    /// Request duration in seconds
    pub execution_time: Option<f64>,
    pub timestamp: Timestamp,
}

/// Aggregated system statistics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SystemStatus {
    pub total_trajectories: u64,
    /// Mean request duration in seconds, rounded to milliseconds
    pub average_request_time: f64,
    pub recent_logs: Vec<SystemLogEntry>,
}
