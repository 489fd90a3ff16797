//! Status and kind enumerations for actions, messages and log records.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of narrated robot actions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    /// An execution session was opened
    SessionStart,
    /// The robot is placed at the first point
    MoveStart,
    /// Move with no vertical change
    MoveHorizontal,
    /// Move with no horizontal change
    MoveVertical,
    /// Move changing both coordinates
    MoveDiagonal,
    /// Heading change between consecutive points
    Turn,
}

impl FromStr for ActionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "SESSION_START" => Ok(ActionKind::SessionStart),
            "MOVE_START" => Ok(ActionKind::MoveStart),
            "MOVE_HORIZONTAL" => Ok(ActionKind::MoveHorizontal),
            "MOVE_VERTICAL" => Ok(ActionKind::MoveVertical),
            "MOVE_DIAGONAL" => Ok(ActionKind::MoveDiagonal),
            "TURN" => Ok(ActionKind::Turn),
            _ => Err(format!("Invalid action type: {s}")),
        }
    }
}

impl ActionKind {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::SessionStart => "SESSION_START",
            ActionKind::MoveStart => "MOVE_START",
            ActionKind::MoveHorizontal => "MOVE_HORIZONTAL",
            ActionKind::MoveVertical => "MOVE_VERTICAL",
            ActionKind::MoveDiagonal => "MOVE_DIAGONAL",
            ActionKind::Turn => "TURN",
        }
    }
}

/// Delivery state of a queued message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    /// Waiting for delivery
    #[default]
    Pending,

    /// Delivered to the channel's handlers
    Processed,
}

impl FromStr for MessageStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(MessageStatus::Pending),
            "processed" => Ok(MessageStatus::Processed),
            _ => Err(format!("Invalid message status: {s}")),
        }
    }
}

impl MessageStatus {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageStatus::Pending => "pending",
            MessageStatus::Processed => "processed",
        }
    }
}

/// Severity of a system log record.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum LogLevel {
    #[default]
    Info,
    Warning,
    Error,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "INFO" => Ok(LogLevel::Info),
            "WARNING" | "WARN" => Ok(LogLevel::Warning),
            "ERROR" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {s}")),
        }
    }
}

impl LogLevel {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        }
    }
}
