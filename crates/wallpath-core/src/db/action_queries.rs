//! Robot action log persistence.

use rusqlite::params;

use super::utils::{enum_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, Result},
    models::RobotAction,
};

const INSERT_ACTION_SQL: &str = "INSERT INTO robot_actions (session_id, action_type, details, timestamp, position_x, position_y) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const SELECT_SESSION_ACTIONS_SQL: &str = "SELECT session_id, action_type, details, timestamp, position_x, position_y FROM robot_actions WHERE session_id = ?1 ORDER BY id ASC";

impl super::Database {
    /// Appends actions to the log in a single transaction.
    pub fn insert_actions(&mut self, actions: &[RobotAction]) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        {
            let mut stmt = tx
                .prepare(INSERT_ACTION_SQL)
                .db_context("Failed to prepare action insert")?;

            for action in actions {
                stmt.execute(params![
                    action.session_id,
                    action.action_type.as_str(),
                    action.details,
                    action.timestamp.to_string(),
                    action.position_x,
                    action.position_y
                ])
                .db_context("Failed to insert robot action")?;
            }
        }

        tx.commit().db_context("Failed to commit transaction")
    }

    /// Returns the actions of one session in the order they were logged.
    pub fn get_actions(&self, session_id: &str) -> Result<Vec<RobotAction>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_SESSION_ACTIONS_SQL)
            .db_context("Failed to prepare query")?;

        let actions = stmt.query_map(params![session_id], |row| {
            Ok(RobotAction {
                session_id: row.get(0)?,
                action_type: enum_column(row, 1)?,
                details: row.get(2)?,
                timestamp: timestamp_column(row, 3)?,
                position_x: row.get(4)?,
                position_y: row.get(5)?,
            })
        })
        .db_context("Failed to query robot actions")?
        .collect::<std::result::Result<Vec<_>, _>>()
        .db_context("Failed to fetch robot actions")?;

        Ok(actions)
    }
}
