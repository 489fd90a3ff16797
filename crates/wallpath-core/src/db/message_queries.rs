//! Message queue persistence.

use jiff::Timestamp;
use rusqlite::{params, Row};

use super::utils::{enum_column, optional_timestamp_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{MessageStatus, QueuedMessage},
};

const MESSAGE_COLUMNS: &str =
    "id, topic, message, priority, status, created_at, processed_at, retry_count";
const INSERT_MESSAGE_SQL: &str =
    "INSERT INTO message_queue (topic, message, priority, status, created_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const MARK_PROCESSED_SQL: &str =
    "UPDATE message_queue SET status = ?1, processed_at = ?2 WHERE id = ?3";

impl super::Database {
    fn build_message_from_row(row: &Row) -> rusqlite::Result<QueuedMessage> {
        Ok(QueuedMessage {
            id: row.get::<_, i64>(0)? as u64,
            topic: row.get(1)?,
            message: row.get(2)?,
            priority: row.get(3)?,
            status: enum_column(row, 4)?,
            created_at: timestamp_column(row, 5)?,
            processed_at: optional_timestamp_column(row, 6)?,
            retry_count: row.get::<_, i64>(7)? as u32,
        })
    }

    /// Adds a pending message to the queue.
    pub fn enqueue_message(
        &mut self,
        topic: &str,
        message: &str,
        priority: i32,
    ) -> Result<QueuedMessage> {
        let now = Timestamp::now();

        self.connection
            .execute(
                INSERT_MESSAGE_SQL,
                params![
                    topic,
                    message,
                    priority,
                    MessageStatus::Pending.as_str(),
                    now.to_string()
                ],
            )
            .db_context("Failed to insert message")?;

        Ok(QueuedMessage {
            id: self.connection.last_insert_rowid() as u64,
            topic: topic.to_string(),
            message: message.to_string(),
            priority,
            status: MessageStatus::Pending,
            created_at: now,
            processed_at: None,
            retry_count: 0,
        })
    }

    /// Pending messages, optionally of one topic, in delivery order.
    ///
    /// Higher priority first; equal priorities in the order they were queued.
    pub fn pending_messages(&self, topic: Option<&str>) -> Result<Vec<QueuedMessage>> {
        let mut query = format!("SELECT {MESSAGE_COLUMNS} FROM message_queue WHERE status = ?1");
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();
        params_vec.push(Box::new(MessageStatus::Pending.as_str()));

        if let Some(topic) = topic {
            query.push_str(" AND topic = ?2");
            params_vec.push(Box::new(topic.to_string()));
        }
        query.push_str(" ORDER BY priority DESC, id ASC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let messages = stmt
            .query_map(&params_refs[..], Self::build_message_from_row)
            .db_context("Failed to query pending messages")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch pending messages")?;

        Ok(messages)
    }

    /// Marks a message as delivered.
    pub fn mark_processed(&mut self, id: u64) -> Result<()> {
        self.connection
            .execute(
                MARK_PROCESSED_SQL,
                params![
                    MessageStatus::Processed.as_str(),
                    Timestamp::now().to_string(),
                    id as i64
                ],
            )
            .db_context("Failed to mark message processed")?;
        Ok(())
    }

    /// Messages of one topic, newest first.
    pub fn list_messages(&self, topic: &str, limit: u32) -> Result<Vec<QueuedMessage>> {
        let query = format!(
            "SELECT {MESSAGE_COLUMNS} FROM message_queue WHERE topic = ?1 ORDER BY id DESC LIMIT ?2"
        );
        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let messages = stmt
            .query_map(params![topic, i64::from(limit)], Self::build_message_from_row)
            .db_context("Failed to query messages")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch messages")?;

        Ok(messages)
    }
}
