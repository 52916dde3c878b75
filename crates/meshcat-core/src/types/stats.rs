//! Aggregate catalog statistics.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::record::MeshRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CatalogStats {
    pub total_files: u64,
    pub total_size: u64,
}

impl CatalogStats {
    /// Aggregate over a full scan. `total_size` saturates instead of wrapping.
    pub fn from_records(records: &[MeshRecord]) -> Self {
        records.iter().fold(Self::default(), |acc, r| Self {
            total_files: acc.total_files + 1,
            total_size: acc.total_size.saturating_add(r.file_size),
        })
    }
}

impl fmt::Display for CatalogStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total Files: {} | Total Size: {} bytes",
            self.total_files, self.total_size
        )
    }
}
