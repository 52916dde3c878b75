//! CatalogDb: the SQLite-backed `CatalogStore`.

use std::path::Path;

use meshcat_core::config::StorageConfig;
use meshcat_core::errors::StorageError;
use meshcat_core::traits::CatalogStore;
use meshcat_core::types::{MeshRecord, NewMeshRecord};

use crate::connection::DatabaseManager;
use crate::queries::records;

pub struct CatalogDb {
    db: DatabaseManager,
}

impl CatalogDb {
    /// Open (creating if needed) the store at `path` and bring its schema up to date.
    pub fn open(path: &Path, read_pool_size: usize) -> Result<Self, StorageError> {
        let db = DatabaseManager::open(path, read_pool_size)?;
        tracing::debug!(path = %path.display(), "opened catalog store");
        Ok(Self { db })
    }

    /// Open the store described by `config`.
    pub fn open_with_config(config: &StorageConfig) -> Result<Self, StorageError> {
        Self::open(
            &config.effective_db_path(),
            config.effective_read_pool_size(),
        )
    }

    /// Open an in-memory store (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Ok(Self {
            db: DatabaseManager::open_in_memory()?,
        })
    }

    /// Get a reference to the connection manager.
    pub fn manager(&self) -> &DatabaseManager {
        &self.db
    }

    /// Fetch one record by id.
    pub fn get(&self, id: i64) -> Result<Option<MeshRecord>, StorageError> {
        self.db.with_reader(|conn| records::get_record(conn, id))
    }

    pub fn count(&self) -> Result<i64, StorageError> {
        self.db.with_reader(records::count_records)
    }

    pub fn checkpoint(&self) -> Result<(), StorageError> {
        self.db.checkpoint()
    }
}

impl CatalogStore for CatalogDb {
    fn insert(&self, record: &NewMeshRecord) -> Result<i64, StorageError> {
        self.db
            .with_writer(|conn| records::insert_record(conn, record))
    }

    fn scan(&self) -> Result<Vec<MeshRecord>, StorageError> {
        self.db.with_reader(records::load_all_records)
    }

    fn delete(&self, ids: &[i64]) -> Result<usize, StorageError> {
        let removed = self
            .db
            .with_writer(|conn| records::delete_records(conn, ids))?;
        tracing::debug!(requested = ids.len(), removed, "deleted records");
        Ok(removed)
    }

    fn update_note(&self, id: i64, note: &str) -> Result<bool, StorageError> {
        self.db
            .with_writer(|conn| records::update_note(conn, id, note))
    }
}
