//! Request logging and system status for the Controller.

use super::Controller;
use crate::{error::Result, models::SystemStatus, params::RequestLog};

/// Number of log records included in the status report.
const RECENT_LOG_COUNT: u32 = 10;

impl Controller {
    /// Records a handled request in the system log.
    pub async fn log_request(&self, params: &RequestLog) -> Result<()> {
        let params = params.clone();
        self.with_database(move |db, _| {
            db.log_request(
                params.level,
                &params.message,
                params.request_id.as_deref(),
                params.execution_time,
            )
        })
        .await
    }

    /// Trajectory count, mean request time and the latest log records.
    ///
    /// The mean is rounded to milliseconds and is zero when no request was
    /// timed yet.
    pub async fn system_status(&self) -> Result<SystemStatus> {
        self.with_database(|db, _| {
            let average = db.average_request_time()?.unwrap_or(0.0);
            Ok(SystemStatus {
                total_trajectories: db.trajectory_count()?,
                average_request_time: (average * 1000.0).round() / 1000.0,
                recent_logs: db.recent_logs(RECENT_LOG_COUNT)?,
            })
        })
        .await
    }
}
