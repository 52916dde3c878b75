//! Store configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DB_FILE, DEFAULT_READ_POOL_SIZE, MAX_READ_POOL_SIZE};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Store file. Default: `stl_files.db` in the working directory.
    pub db_path: Option<String>,
    /// Read-only connections for file-backed stores. Default: 2.
    pub read_pool_size: Option<usize>,
}

impl StorageConfig {
    pub fn effective_db_path(&self) -> PathBuf {
        PathBuf::from(self.db_path.as_deref().unwrap_or(DEFAULT_DB_FILE))
    }

    /// Clamped to `1..=8`.
    pub fn effective_read_pool_size(&self) -> usize {
        self.read_pool_size
            .unwrap_or(DEFAULT_READ_POOL_SIZE)
            .clamp(1, MAX_READ_POOL_SIZE)
    }
}
