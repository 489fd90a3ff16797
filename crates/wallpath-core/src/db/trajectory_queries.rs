//! Trajectory persistence and listing.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::utils::{json_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, Result, WallpathError},
    models::{Obstacle, StoredTrajectory, TrajectoryPoint, TrajectorySummary},
};

const INSERT_TRAJECTORY_SQL: &str = "INSERT INTO trajectories (wall_width, wall_height, obstacles, trajectory_data, created_at, execution_time, total_points) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_TRAJECTORY_SQL: &str = "SELECT id, wall_width, wall_height, obstacles, trajectory_data, total_points, created_at, execution_time FROM trajectories WHERE id = ?1";
const LIST_TRAJECTORIES_SQL: &str = "SELECT id, wall_width, wall_height, created_at, total_points, execution_time FROM trajectories ORDER BY id DESC LIMIT ?1";
const CHECK_TRAJECTORY_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM trajectories WHERE id = ?1)";
const DELETE_TRAJECTORY_SQL: &str = "DELETE FROM trajectories WHERE id = ?1";
const COUNT_TRAJECTORIES_SQL: &str = "SELECT COUNT(*) FROM trajectories";

impl super::Database {
    /// Stores a trajectory together with the inputs it was generated from.
    pub fn save_trajectory(
        &mut self,
        wall_width: f64,
        wall_height: f64,
        obstacles: &[Obstacle],
        points: &[TrajectoryPoint],
        execution_time: Option<f64>,
    ) -> Result<StoredTrajectory> {
        let obstacles_json = serde_json::to_string(obstacles)?;
        let points_json = serde_json::to_string(points)?;
        let total_points = points.len() as u64;
        let now = Timestamp::now();

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_TRAJECTORY_SQL,
            params![
                wall_width,
                wall_height,
                obstacles_json,
                points_json,
                now.to_string(),
                execution_time,
                total_points as i64
            ],
        )
        .db_context("Failed to insert trajectory")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(StoredTrajectory {
            id,
            wall_width,
            wall_height,
            obstacles: obstacles.to_vec(),
            points: points.to_vec(),
            total_points,
            created_at: now,
            execution_time,
        })
    }

    /// Retrieves a trajectory with its points by ID.
    pub fn get_trajectory(&self, id: u64) -> Result<Option<StoredTrajectory>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TRAJECTORY_SQL)
            .db_context("Failed to prepare query")?;

        stmt.query_row(params![id as i64], |row| {
            Ok(StoredTrajectory {
                id: row.get::<_, i64>(0)? as u64,
                wall_width: row.get(1)?,
                wall_height: row.get(2)?,
                obstacles: json_column(row, 3)?,
                points: json_column(row, 4)?,
                total_points: row.get::<_, i64>(5)? as u64,
                created_at: timestamp_column(row, 6)?,
                execution_time: row.get(7)?,
            })
        })
        .optional()
        .db_context("Failed to query trajectory")
    }

    /// Lists trajectory metadata, most recently saved first.
    pub fn list_trajectories(&self, limit: u32) -> Result<Vec<TrajectorySummary>> {
        let mut stmt = self
            .connection
            .prepare(LIST_TRAJECTORIES_SQL)
            .db_context("Failed to prepare query")?;

        let trajectories = stmt.query_map(params![i64::from(limit)], |row| {
            Ok(TrajectorySummary {
                id: row.get::<_, i64>(0)? as u64,
                wall_width: row.get(1)?,
                wall_height: row.get(2)?,
                created_at: timestamp_column(row, 3)?,
                total_points: row.get::<_, i64>(4)? as u64,
                execution_time: row.get(5)?,
            })
        })
        .db_context("Failed to query trajectories")?
        .collect::<std::result::Result<Vec<_>, _>>()
        .db_context("Failed to fetch trajectories")?;

        Ok(trajectories)
    }

    /// Permanently deletes a trajectory.
    ///
    /// # Errors
    ///
    /// Returns `WallpathError::TrajectoryNotFound` if no trajectory has `id`.
    pub fn delete_trajectory(&mut self, id: u64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(CHECK_TRAJECTORY_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .db_context("Failed to check trajectory existence")?;

        if !exists {
            return Err(WallpathError::TrajectoryNotFound { id });
        }

        tx.execute(DELETE_TRAJECTORY_SQL, params![id as i64])
            .db_context("Failed to delete trajectory")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Number of stored trajectories.
    pub fn trajectory_count(&self) -> Result<u64> {
        self.connection
            .query_row(COUNT_TRAJECTORIES_SQL, [], |row| row.get::<_, i64>(0))
            .map(|count| count as u64)
            .db_context("Failed to count trajectories")
    }
}
