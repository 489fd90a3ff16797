//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

/// Columns added after the first schema release, as `(table, column, type)`.
const ADDED_COLUMNS: &[(&str, &str, &str)] = &[
    ("trajectories", "execution_time", "REAL"),
    ("robot_actions", "position_x", "REAL"),
    ("robot_actions", "position_y", "REAL"),
];

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        // Apply migrations for existing databases
        self.apply_migrations()?;

        Ok(())
    }

    /// Adds columns missing from databases created by older releases.
    fn apply_migrations(&self) -> Result<()> {
        for (table, column, column_type) in ADDED_COLUMNS {
            let has_column: bool = self
                .connection
                .query_row(
                    &format!("SELECT COUNT(*) FROM pragma_table_info('{table}') WHERE name = ?1"),
                    [column],
                    |row| row.get(0),
                )
                .map(|count: i64| count > 0)
                .db_context(&format!("Failed to inspect columns of {table} table"))?;

            if !has_column {
                self.connection
                    .execute(
                        &format!("ALTER TABLE {table} ADD COLUMN {column} {column_type}"),
                        [],
                    )
                    .db_context(&format!("Failed to add {column} column to {table} table"))?;
            }
        }

        Ok(())
    }
}
