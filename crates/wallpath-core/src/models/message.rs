//! Queued message records.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::MessageStatus;

/// A message persisted in the queue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueuedMessage {
    pub id: u64,
    pub topic: String,
    pub message: String,
    /// Higher values are delivered first
    pub priority: i32,
    #[serde(default)]
    pub status: MessageStatus,
    pub created_at: Timestamp,
    pub processed_at: Option<Timestamp>,
    pub retry_count: u32,
}
