//! Core library for wall-finishing robot trajectories.
//!
//! This crate plans boustrophedon coverage paths over a rectangular wall with
//! rectangular obstacles, stores trajectories in SQLite, replays them into a
//! robot action log and delivers status messages through a priority queue.
//!
//! - [`coverage`]: pure, synchronous path planning
//! - [`db`]: persistence of trajectories, actions, messages and request logs
//! - [`execution`]: narration of a trajectory into robot actions
//! - [`broker`]: topic channels over the persisted message queue
//! - [`controller`]: the async API tying these together
//! - [`display`]: markdown formatting for terminal output
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wallpath_core::{ControllerBuilder, params::GenerateTrajectory};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let controller = ControllerBuilder::new()
//!     .with_database_path(Some("test.db"))
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
//! println!("{} points", report.points.len());
//! # Ok(())
//! # }
//! ```

pub mod broker;
pub mod controller;
pub mod coverage;
pub mod db;
pub mod display;
pub mod error;
pub mod execution;
pub mod models;
pub mod params;

pub use broker::MessageBroker;
pub use controller::{Controller, ControllerBuilder};
pub use coverage::{generate_coverage, CoveragePlanner, GenerationReport, PlanningConfig};
pub use db::Database;
pub use error::{Result, WallpathError};
pub use execution::ExecutionReport;
pub use models::{
    ActionKind, LogLevel, MessageStatus, Obstacle, QueuedMessage, RobotAction, StoredTrajectory,
    SystemLogEntry, SystemStatus, TrajectoryPoint, TrajectorySummary, WorkArea,
};
