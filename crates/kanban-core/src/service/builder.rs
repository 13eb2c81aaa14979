//! Builder for creating and configuring Kanban instances.

use std::path::{Path, PathBuf};

use log::info;

use super::Kanban;
use crate::error::{KanbanError, Result};

/// Directory name under the XDG data home.
const XDG_PREFIX: &str = "kanban";

/// File name of the default database.
const DEFAULT_DATABASE_FILE: &str = "kanban.db";

/// Builder for creating and configuring Kanban instances.
#[derive(Debug, Clone, Default)]
pub struct KanbanBuilder {
    database_path: Option<PathBuf>,
}

impl KanbanBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG Base Directory specification:
    /// `$XDG_DATA_HOME/kanban/kanban.db` or `~/.local/share/kanban/kanban.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.database_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Builds the service handle, creating the database file and its parent
    /// directory when missing.
    ///
    /// # Errors
    ///
    /// * `KanbanError::XdgDirectory` - When no default path can be determined
    /// * `KanbanError::FileSystem` - When the parent directory cannot be
    ///   created
    /// * `KanbanError::Database` - When the database cannot be initialized
    pub async fn build(self) -> Result<Kanban> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| KanbanError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let kanban = Kanban::new(db_path);
        kanban.initialize().await?;

        info!("Using database at {}", kanban.db_path.display());
        Ok(kanban)
    }

    /// Returns the default database path following the XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix(XDG_PREFIX)
            .place_data_file(DEFAULT_DATABASE_FILE)
            .map_err(|e| KanbanError::XdgDirectory(e.to_string()))
    }
}
