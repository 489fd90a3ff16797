//! Trajectory execution operations for the Controller.

use log::info;

use super::Controller;
use crate::{
    broker::ROBOT_STATUS,
    error::{Result, WallpathError},
    execution::{narrate, new_session_id, ExecutionReport},
    models::RobotAction,
    params::{Id, SessionActions},
};

/// Priority of the status messages bracketing an execution.
const EXECUTION_STATUS_PRIORITY: i32 = 8;

impl Controller {
    /// Replays a stored trajectory as a new execution session.
    ///
    /// Start and completion are announced on `robot_status`; every narrated
    /// action is persisted under the new session id.
    ///
    /// # Errors
    ///
    /// Returns `WallpathError::TrajectoryNotFound` if no trajectory has the id.
    pub async fn execute_trajectory(&self, params: &Id) -> Result<ExecutionReport> {
        let id = params.id;

        self.with_database(move |db, broker| {
            let trajectory = db
                .get_trajectory(id)?
                .ok_or(WallpathError::TrajectoryNotFound { id })?;

            let session_id = new_session_id();
            info!("Executing trajectory {id} as {session_id}");
            broker.publish(
                db,
                ROBOT_STATUS,
                &format!("Starting execution of trajectory {id}"),
                EXECUTION_STATUS_PRIORITY,
            )?;

            let actions = narrate(&session_id, id, &trajectory.points);
            for action in &actions {
                info!("Robot Action - {}: {}", action.action_type.as_str(), action.details);
            }
            db.insert_actions(&actions)?;

            broker.publish(
                db,
                ROBOT_STATUS,
                &format!("Completed execution of trajectory {id}"),
                EXECUTION_STATUS_PRIORITY,
            )?;

            Ok(ExecutionReport {
                session_id,
                trajectory_id: id,
                points_executed: trajectory.points.len(),
                actions,
            })
        })
        .await
    }

    /// Action log of one execution session, in narration order.
    pub async fn robot_actions(&self, params: &SessionActions) -> Result<Vec<RobotAction>> {
        let session_id = params.session_id.clone();
        self.with_database(move |db, _| db.get_actions(&session_id))
            .await
    }
}
