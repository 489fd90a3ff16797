//! Stored trajectory records.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Obstacle, TrajectoryPoint};

/// A trajectory as persisted, including the inputs it was generated from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoredTrajectory {
    /// Identifier assigned by storage
    pub id: u64,
    pub wall_width: f64,
    pub wall_height: f64,
    pub obstacles: Vec<Obstacle>,
    pub points: Vec<TrajectoryPoint>,
    pub total_points: u64,
    /// Timestamp when the trajectory was saved (UTC)
    pub created_at: Timestamp,
    /// Generation time in seconds, when known
    pub execution_time: Option<f64>,
}

/// Listing metadata for a stored trajectory, without its points.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrajectorySummary {
    pub id: u64,
    pub wall_width: f64,
    pub wall_height: f64,
    pub created_at: Timestamp,
    pub total_points: u64,
    pub execution_time: Option<f64>,
}

impl From<&StoredTrajectory> for TrajectorySummary {
    fn from(trajectory: &StoredTrajectory) -> Self {
        Self {
            id: trajectory.id,
            wall_width: trajectory.wall_width,
            wall_height: trajectory.wall_height,
            created_at: trajectory.created_at,
            total_points: trajectory.total_points,
            execution_time: trajectory.execution_time,
        }
    }
}
