//! Data models for coverage planning, stored trajectories and execution logs.
//!
//! Display implementations for these models live in
//! [`crate::display::models`], keeping the data structures free of
//! presentation logic.
//!
//! # Examples
//!
//! ```rust
//! use wallpath_core::models::{Obstacle, TrajectoryPoint};
//!
//! let obstacle = Obstacle::new(1.0, 0.5, 0.5, 0.3);
//! assert_eq!(obstacle.right(), 1.5);
//!
//! let point = TrajectoryPoint::working(0.0, 0.0, 90.0, 0.1);
//! assert!(point.tool_active);
//! ```

pub mod action;
pub mod message;
pub mod obstacle;
pub mod point;
pub mod status;
pub mod system;
pub mod trajectory;

#[cfg(test)]
mod tests;

pub use action::RobotAction;
pub use message::QueuedMessage;
pub use obstacle::{Obstacle, WorkArea};
pub use point::TrajectoryPoint;
pub use status::{ActionKind, LogLevel, MessageStatus};
pub use system::{SystemLogEntry, SystemStatus};
pub use trajectory::{StoredTrajectory, TrajectorySummary};
