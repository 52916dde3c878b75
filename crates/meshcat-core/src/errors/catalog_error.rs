//! Top-level error for catalog operations.

use super::error_code::CatalogErrorCode;
use super::{ConfigError, IngestAborted, StorageError};

/// Aggregates subsystem errors via `From` conversions.
///
/// Extraction errors are not fatal and never reach this type: ingestion
/// collects them in `IngestReport::failures`.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Ingest(#[from] IngestAborted),
}

impl CatalogErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Storage(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Ingest(e) => e.error_code(),
        }
    }
}

/// Convenience alias used across the workspace.
pub type CatalogResult<T> = Result<T, CatalogError>;
