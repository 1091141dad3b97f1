//! Builder for creating and configuring SQLite-backed stores.

use std::path::{Path, PathBuf};

use log::debug;

use super::ListStore;
use crate::{
    db::Database,
    error::{PackerError, Result},
};

/// Builder for creating and configuring [`ListStore`] instances.
#[derive(Debug, Clone)]
pub struct ListStoreBuilder {
    database_path: Option<PathBuf>,
}

impl ListStoreBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/packer/packer.db` or `~/.local/share/packer/packer.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the store and loads the persisted lists.
    ///
    /// # Errors
    ///
    /// Returns `PackerError::XdgDirectory` if no default path can be resolved
    /// Returns `PackerError::FileSystem` if the database directory cannot be created
    /// Returns `PackerError::Database` if database initialization fails
    pub fn build(self) -> Result<ListStore<Database>> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| PackerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Opening packing list database at {}", db_path.display());
        let db = Database::new(&db_path)?;
        Ok(ListStore::new(db))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    pub fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("packer")
            .place_data_file("packer.db")
            .map_err(|e| PackerError::XdgDirectory(e.to_string()))
    }
}

impl Default for ListStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
