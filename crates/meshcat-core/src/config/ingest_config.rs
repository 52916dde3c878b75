//! Ingestion configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IngestConfig {
    /// Files larger than this many bytes are skipped. Default: unlimited.
    pub max_file_size: Option<u64>,
    /// Store canonical absolute paths when they resolve. Default: true.
    pub canonicalize_paths: Option<bool>,
}

impl IngestConfig {
    pub fn effective_canonicalize_paths(&self) -> bool {
        self.canonicalize_paths.unwrap_or(true)
    }
}
