//! Trajectory generation and storage operations for the Controller.

use log::info;
use tokio::task;

use super::Controller;
use crate::{
    coverage::{CoveragePlanner, GenerationReport},
    error::{Result, WallpathError},
    models::{StoredTrajectory, TrajectorySummary},
    params::{GenerateTrajectory, Id, ListTrajectories, SaveTrajectory},
};

impl Controller {
    /// Plans a coverage trajectory without storing it.
    pub async fn generate_trajectory(&self, params: &GenerateTrajectory) -> Result<GenerationReport> {
        let planner = CoveragePlanner::new(params.config());
        let work_area = params.work_area();
        let obstacles = params.obstacles.clone();

        task::spawn_blocking(move || planner.generate(&work_area, &obstacles))
            .await
            .map_err(WallpathError::task_join)?
    }

    /// Stores a generated trajectory along with its generation time.
    pub async fn save_generated(&self, report: &GenerationReport) -> Result<StoredTrajectory> {
        self.save_trajectory(&SaveTrajectory {
            wall_width: report.work_area.wall_width,
            wall_height: report.work_area.wall_height,
            obstacles: report.obstacles.clone(),
            points: report.points.clone(),
            execution_time: Some(report.metadata.generation_time),
        })
        .await
    }

    /// Stores a trajectory document as-is.
    pub async fn save_trajectory(&self, params: &SaveTrajectory) -> Result<StoredTrajectory> {
        let params = params.clone();

        let stored = self
            .with_database(move |db, _| {
                db.save_trajectory(
                    params.wall_width,
                    params.wall_height,
                    &params.obstacles,
                    &params.points,
                    params.execution_time,
                )
            })
            .await?;

        info!(
            "Saved trajectory {} with {} points",
            stored.id, stored.total_points
        );
        Ok(stored)
    }

    /// Retrieves a stored trajectory with its points.
    pub async fn get_trajectory(&self, params: &Id) -> Result<Option<StoredTrajectory>> {
        let id = params.id;
        self.with_database(move |db, _| db.get_trajectory(id)).await
    }

    /// Lists stored trajectories, most recently saved first.
    pub async fn list_trajectories(&self, params: &ListTrajectories) -> Result<Vec<TrajectorySummary>> {
        let limit = params.limit;
        self.with_database(move |db, _| db.list_trajectories(limit))
            .await
    }

    /// Permanently deletes a stored trajectory.
    ///
    /// Action logs of earlier executions are kept.
    pub async fn delete_trajectory(&self, params: &Id) -> Result<()> {
        let id = params.id;
        self.with_database(move |db, _| db.delete_trajectory(id))
            .await?;

        info!("Deleted trajectory {id}");
        Ok(())
    }
}
