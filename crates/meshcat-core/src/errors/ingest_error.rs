//! Ingestion abort.

use super::error_code::CatalogErrorCode;
use super::StorageError;
use crate::types::IngestReport;

/// A storage failure stopped a batch. Files recorded before the failure stay
/// in the store; `partial` says which ones.
#[derive(Debug, thiserror::Error)]
#[error("ingestion stopped ({partial}): {source}")]
pub struct IngestAborted {
    pub partial: IngestReport,
    #[source]
    pub source: StorageError,
}

impl CatalogErrorCode for IngestAborted {
    fn error_code(&self) -> &'static str {
        self.source.error_code()
    }
}
