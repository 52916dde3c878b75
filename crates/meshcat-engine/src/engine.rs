//! CatalogEngine: composes the extractor and the store.

use std::path::Path;

use meshcat_core::config::CatalogConfig;
use meshcat_core::errors::{CatalogResult, IngestAborted, StorageError};
use meshcat_core::traits::{Cancellable, CancellationToken, CatalogStore};
use meshcat_core::types::{
    CatalogStats, ExportRow, IngestReport, MeshRecord, NewMeshRecord,
};
use meshcat_extract::{ExtractedFile, MeshExtractor, MeshLoader, StlLoader};
use meshcat_storage::CatalogDb;

/// Orchestrates ingestion and derived views over a [`CatalogStore`].
///
/// Holds no copy of store contents: every read goes to the store.
pub struct CatalogEngine<S = CatalogDb, L = StlLoader> {
    store: S,
    extractor: MeshExtractor<L>,
}

impl CatalogEngine<CatalogDb, StlLoader> {
    /// Open the configured store and build an STL extractor from `[ingest]`.
    pub fn open(config: &CatalogConfig) -> CatalogResult<Self> {
        let store = CatalogDb::open_with_config(&config.storage)?;
        let extractor = MeshExtractor::new().configured(&config.ingest);
        Ok(Self::new(store, extractor))
    }

    /// In-memory store with default extraction settings (for testing).
    pub fn open_in_memory() -> CatalogResult<Self> {
        Ok(Self::new(CatalogDb::open_in_memory()?, MeshExtractor::new()))
    }
}

impl<S: CatalogStore, L: MeshLoader> CatalogEngine<S, L> {
    pub fn new(store: S, extractor: MeshExtractor<L>) -> Self {
        Self { store, extractor }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Import every path in order. See [`Self::ingest_with_cancel`].
    pub fn ingest<P: AsRef<Path>>(&self, paths: &[P]) -> Result<IngestReport, IngestAborted> {
        self.ingest_with_cancel(paths, &CancellationToken::new())
    }

    /// Import every path in order, one extract→insert pair at a time.
    ///
    /// A file that cannot be extracted is skipped and recorded in the
    /// report; the rest of the batch proceeds. A storage failure stops the
    /// batch: records inserted before it remain, and the error carries the
    /// partial report. `cancel` is checked before each file.
    pub fn ingest_with_cancel<P: AsRef<Path>>(
        &self,
        paths: &[P],
        cancel: &dyn Cancellable,
    ) -> Result<IngestReport, IngestAborted> {
        let mut report = IngestReport::new(paths.len());

        for path in paths {
            if cancel.is_cancelled() {
                report.cancelled = true;
                tracing::info!(processed = report.processed(), "ingestion cancelled");
                break;
            }

            let path = path.as_ref();
            let extracted = match self.extractor.extract_file(path) {
                Ok(extracted) => extracted,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping file");
                    report.failures.push(e);
                    continue;
                }
            };

            match self.store.insert(&to_record(extracted)) {
                Ok(id) => {
                    tracing::debug!(id, path = %path.display(), "ingested");
                    report.imported_ids.push(id);
                }
                Err(source) => {
                    tracing::error!(path = %path.display(), error = %source, "store rejected record");
                    return Err(IngestAborted {
                        partial: report,
                        source,
                    });
                }
            }
        }

        tracing::info!(
            imported = report.imported_count(),
            failed = report.failure_count(),
            attempted = report.attempted,
            "ingestion finished"
        );
        Ok(report)
    }

    /// Every record, id ascending.
    pub fn scan(&self) -> Result<Vec<MeshRecord>, StorageError> {
        self.store.scan()
    }

    /// Recomputed from a fresh scan on every call.
    pub fn statistics(&self) -> Result<CatalogStats, StorageError> {
        Ok(CatalogStats::from_records(&self.store.scan()?))
    }

    /// One row per record in scan order, columns in record field order.
    pub fn export_rows(&self) -> Result<Vec<ExportRow>, StorageError> {
        Ok(self
            .store
            .scan()?
            .iter()
            .map(MeshRecord::to_export_row)
            .collect())
    }

    /// Replace a record's note. Returns `false` for an unknown id.
    pub fn annotate(&self, id: i64, note: &str) -> Result<bool, StorageError> {
        let updated = self.store.update_note(id, note)?;
        if !updated {
            tracing::debug!(id, "annotate: no such record");
        }
        Ok(updated)
    }

    /// Remove the listed records. Unknown ids are ignored.
    pub fn delete(&self, ids: &[i64]) -> Result<usize, StorageError> {
        self.store.delete(ids)
    }
}

fn to_record(extracted: ExtractedFile) -> NewMeshRecord {
    let ExtractedFile { file, mesh } = extracted;
    NewMeshRecord {
        file_name: file.file_name,
        file_path: file.file_path,
        file_size: file.file_size,
        vertex_count: Some(mesh.vertex_count),
        volume: mesh.volume,
        model_dimension: mesh.extents.map(|e| e.to_string()),
        modification_date: file.modification_date,
        note: String::new(),
    }
}
