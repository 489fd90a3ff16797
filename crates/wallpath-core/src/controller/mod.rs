//! High-level async API over planning, storage, execution and messaging.
//!
//! [`Controller`] is the entry point used by interface layers. Planning is
//! pure computation; everything touching SQLite runs on a blocking thread
//! with its own connection, so a controller can be shared freely across
//! tasks.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   Controller    │    │ coverage,       │    │    Database     │
//! │ (trajectory_ops,│───▶│ execution,      │───▶│   (via db/)     │
//! │  message_ops..) │    │ broker          │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use wallpath_core::{ControllerBuilder, params::{GenerateTrajectory, Id}};
//!
//! # async fn example() -> wallpath_core::Result<()> {
//! let controller = ControllerBuilder::new()
//!     .with_database_path(Some("robot.db"))
//!     .with_subscriber("robot_status", |message| {
//!         println!("{message}");
//!         Ok(())
//!     })
//!     .build()
//!     .await?;
//!
//! let report = controller
//!     .generate_trajectory(&GenerateTrajectory {
//!         wall_width: 5.0,
//!         wall_height: 3.0,
//!         ..Default::default()
//!     })
//!     .await?;
//! let stored = controller.save_generated(&report).await?;
//! let execution = controller.execute_trajectory(&Id { id: stored.id }).await?;
//! println!("{} actions", execution.actions.len());
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, sync::Arc};

use tokio::task;

use crate::{
    broker::MessageBroker,
    db::Database,
    error::{Result, WallpathError},
};

pub mod builder;
pub mod execution_ops;
pub mod message_ops;
pub mod status_ops;
pub mod trajectory_ops;


pub use builder::ControllerBuilder;

/// Main interface for planning, storing and executing trajectories.
pub struct Controller {
    pub(crate) db_path: PathBuf,
    pub(crate) broker: Arc<MessageBroker>,
}

impl Controller {
    pub(crate) fn new(db_path: PathBuf, broker: MessageBroker) -> Self {
        Self {
            db_path,
            broker: Arc::new(broker),
        }
    }

    /// Path of the SQLite database backing this controller.
    pub fn database_path(&self) -> &std::path::Path {
        &self.db_path
    }

    /// Runs `operation` against a fresh connection on a blocking thread.
    pub(crate) async fn with_database<T, F>(&self, operation: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database, &MessageBroker) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();
        let broker = Arc::clone(&self.broker);

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            operation(&mut db, &*broker)
        })
        .await
        .map_err(WallpathError::task_join)?
    }
}
