//! Database operations and SQLite management.
//!
//! This module owns the SQLite connection and schema, and provides query
//! interfaces for trajectories, robot actions, queued messages and the
//! system request log.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod action_queries;
pub mod log_queries;
pub mod message_queries;
pub mod migrations;
pub mod trajectory_queries;
pub mod utils;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
