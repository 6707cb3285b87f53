use std::path::PathBuf;

use crate::collections::array_list::{DEFAULT_CAPACITY, checked_capacity};
use crate::error::Result;
use crate::persist::SyncMode;
use crate::store::backend::BackendKind;

/// Directory the inventory file lives in unless configured otherwise.
pub const DEFAULT_DATA_DIR: &str = "inventory_data";

/// File name of the CSV inventory inside the data directory.
pub const DEFAULT_FILE_NAME: &str = "inventory_data.csv";

/// Store configuration.
#[derive(Debug, Clone)]
pub struct Options {
    /// Directory holding the inventory file. Created on first save.
    pub data_dir: PathBuf,
    pub file_name: String,
    /// Container that holds records in memory.
    pub backend: BackendKind,
    /// Starting capacity of the list backend.
    pub initial_capacity: usize,
    /// Rewrite the file after every mutation, undo and redo.
    pub autosave: bool,
    /// Durability of each file write.
    pub sync: SyncMode,
}

impl Options {
    pub fn file_path(&self) -> PathBuf {
        self.data_dir.join(&self.file_name)
    }

    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = backend;
        self
    }

    /// Set the list backend's starting capacity from a signed value, as
    /// read from a flag or environment variable.
    pub fn with_initial_capacity(mut self, capacity: i64) -> Result<Self> {
        self.initial_capacity = checked_capacity(capacity)?;
        Ok(self)
    }
}

impl Default for Options {
    fn default() -> Self {
        Options {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            file_name: DEFAULT_FILE_NAME.to_string(),
            backend: BackendKind::default(),
            initial_capacity: DEFAULT_CAPACITY,
            autosave: true,
            sync: SyncMode::default(),
        }
    }
}
