//! Error types for the wallpath library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for planning, storage and execution operations.
#[derive(Error, Debug)]
pub enum WallpathError {
    /// Work area dimensions are not positive finite numbers
    #[error("Invalid dimension '{field}': {reason}")]
    InvalidDimension { field: String, reason: String },
    /// Tool width, overlap, safety margin or speed is out of range
    #[error("Invalid tool configuration '{field}': {reason}")]
    InvalidToolConfig { field: String, reason: String },
    /// An obstacle has a non-positive size or non-finite coordinates
    #[error("Invalid obstacle at index {index}: {reason}")]
    InvalidObstacle { index: usize, reason: String },
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Trajectory not found for the given ID
    #[error("Trajectory with ID {id} not found")]
    TrajectoryNotFound { id: u64 },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> WallpathError {
        WallpathError::Database {
            message: self.message,
            source,
        }
    }
}

/// Which validation family a [`FieldErrorBuilder`] produces.
#[derive(Debug, Clone, Copy)]
enum FieldErrorKind {
    Dimension,
    ToolConfig,
}

/// Builder for field-level validation errors.
pub struct FieldErrorBuilder {
    kind: FieldErrorKind,
    field: String,
}

impl FieldErrorBuilder {
    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> WallpathError {
        let field = self.field;
        let reason = reason.into();
        match self.kind {
            FieldErrorKind::Dimension => WallpathError::InvalidDimension { field, reason },
            FieldErrorKind::ToolConfig => WallpathError::InvalidToolConfig { field, reason },
        }
    }
}

impl WallpathError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for work area dimension errors.
    pub fn invalid_dimension(field: impl Into<String>) -> FieldErrorBuilder {
        FieldErrorBuilder {
            kind: FieldErrorKind::Dimension,
            field: field.into(),
        }
    }

    /// Creates a builder for tool configuration errors.
    pub fn invalid_tool_config(field: impl Into<String>) -> FieldErrorBuilder {
        FieldErrorBuilder {
            kind: FieldErrorKind::ToolConfig,
            field: field.into(),
        }
    }

    /// Creates an obstacle validation error.
    pub fn invalid_obstacle(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidObstacle {
            index,
            reason: reason.into(),
        }
    }

    /// Wraps a blocking task join failure.
    pub fn task_join(err: tokio::task::JoinError) -> Self {
        Self::Configuration {
            message: format!("Task join error: {err}"),
        }
    }

    /// Whether this error is one of the planning input rejections.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidDimension { .. } | Self::InvalidToolConfig { .. } | Self::InvalidObstacle { .. }
        )
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| WallpathError::database(message).with_source(e))
    }
}

/// Result type alias for wallpath operations
pub type Result<T> = std::result::Result<T, WallpathError>;
