//! Markdown formatting for models, collections and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]).
//! Collections and operation outcomes are wrapped in newtypes so that the
//! same data can be rendered differently in a list than on its own.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  Wrappers       │    │    Markdown     │
//! │ (StoredTraject.,│───▶│ (collections,   │───▶│ (terminal via   │
//! │  RobotAction..) │    │  results)       │    │  termimad)      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use wallpath_core::display::DeleteResult;
//!
//! let output = DeleteResult::new(4).to_string();
//! assert!(output.contains("Deleted trajectory 4"));
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

pub use collections::{Messages, RobotActions, TrajectorySummaries};
pub use datetime::{LocalDateTime, Seconds};
pub use results::{DeleteResult, GenerationResult, ProcessResult, PublishResult, SaveResult};
