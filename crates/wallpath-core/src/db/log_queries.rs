//! System request log and status statistics.

use jiff::Timestamp;
use rusqlite::params;

use super::utils::{enum_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{LogLevel, SystemLogEntry},
};

const INSERT_LOG_SQL: &str = "INSERT INTO system_logs (timestamp, level, message, request_id, execution_time) VALUES (?1, ?2, ?3, ?4, ?5)";
const RECENT_LOGS_SQL: &str = "SELECT level, message, request_id, execution_time, timestamp FROM system_logs ORDER BY id DESC LIMIT ?1";
const AVERAGE_EXECUTION_SQL: &str =
    "SELECT AVG(execution_time) FROM system_logs WHERE execution_time IS NOT NULL";

impl super::Database {
    /// Records one request in the system log.
    pub fn log_request(
        &mut self,
        level: LogLevel,
        message: &str,
        request_id: Option<&str>,
        execution_time: Option<f64>,
    ) -> Result<()> {
        self.connection
            .execute(
                INSERT_LOG_SQL,
                params![
                    Timestamp::now().to_string(),
                    level.as_str(),
                    message,
                    request_id,
                    execution_time
                ],
            )
            .db_context("Failed to insert system log")?;
        Ok(())
    }

    /// Most recent log records first.
    pub fn recent_logs(&self, limit: u32) -> Result<Vec<SystemLogEntry>> {
        let mut stmt = self
            .connection
            .prepare(RECENT_LOGS_SQL)
            .db_context("Failed to prepare query")?;

        let logs = stmt.query_map(params![i64::from(limit)], |row| {
            Ok(SystemLogEntry {
                level: enum_column(row, 0)?,
                message: row.get(1)?,
                request_id: row.get(2)?,
                execution_time: row.get(3)?,
                timestamp: timestamp_column(row, 4)?,
            })
        })
        .db_context("Failed to query system logs")?
        .collect::<std::result::Result<Vec<_>, _>>()
        .db_context("Failed to fetch system logs")?;

        Ok(logs)
    }

    /// Mean request duration in seconds, `None` when nothing was timed.
    pub fn average_request_time(&self) -> Result<Option<f64>> {
        self.connection
            .query_row(AVERAGE_EXECUTION_SQL, [], |row| row.get(0))
            .db_context("Failed to compute average request time")
    }
}
