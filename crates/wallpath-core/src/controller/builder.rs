//! Builder for creating and configuring Controller instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Controller;
use crate::{
    broker::MessageBroker,
    db::Database,
    error::{Result, WallpathError},
};

/// Builder for creating and configuring Controller instances.
#[derive(Debug, Default)]
pub struct ControllerBuilder {
    database_path: Option<PathBuf>,
    broker: MessageBroker,
}

impl ControllerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/wallpath/wallpath.db` or
    /// `~/.local/share/wallpath/wallpath.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Registers a message handler for `topic`.
    pub fn with_subscriber<F>(mut self, topic: &str, handler: F) -> Self
    where
        F: Fn(&str) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        self.broker.subscribe(topic, handler);
        self
    }

    /// Builds the configured controller instance.
    ///
    /// # Errors
    ///
    /// Returns `WallpathError::FileSystem` if the database directory cannot be
    /// created, `WallpathError::Database` if schema initialization fails.
    pub async fn build(self) -> Result<Controller> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| WallpathError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), WallpathError>(())
        })
        .await
        .map_err(WallpathError::task_join)??;

        Ok(Controller::new(db_path, self.broker))
    }

    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("wallpath")
            .place_data_file("wallpath.db")
            .map_err(|e| WallpathError::XdgDirectory(e.to_string()))
    }
}
