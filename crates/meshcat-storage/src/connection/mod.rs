//! Connection management: write-serialized + read-pooled.

pub mod pool;
pub mod pragmas;

use std::path::Path;
use std::sync::Mutex;

use meshcat_core::errors::StorageError;
use rusqlite::Connection;

use self::pool::ReadPool;
use self::pragmas::apply_pragmas;
use crate::migrations::{self, MigrationReport};
use crate::to_storage_err;

/// Owns the single write connection and, for file-backed stores, the read pool.
///
/// The writer stays open for the life of the manager rather than being
/// reopened per operation. What is scoped to one operation is the lock guard:
/// `with_writer` holds it only while its closure runs and drops it on every
/// exit path, errors included, so no call can leave the store locked.
pub struct DatabaseManager {
    writer: Mutex<Connection>,
    readers: Option<ReadPool>,
    migration_report: MigrationReport,
}

impl DatabaseManager {
    /// Open a database at the given path, apply pragmas, run migrations.
    pub fn open(path: &Path, read_pool_size: usize) -> Result<Self, StorageError> {
        let writer = Connection::open(path).map_err(|e| StorageError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        apply_pragmas(&writer)?;
        let migration_report = migrations::run_migrations(&writer)?;

        let readers = ReadPool::open(path, read_pool_size)?;

        Ok(Self {
            writer: Mutex::new(writer),
            readers: Some(readers),
            migration_report,
        })
    }

    /// Open an in-memory database (for testing).
    /// Reads go through the writer since separate in-memory connections
    /// would each see their own empty database.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let writer = Connection::open_in_memory().map_err(to_storage_err)?;
        apply_pragmas(&writer)?;
        let migration_report = migrations::run_migrations(&writer)?;

        Ok(Self {
            writer: Mutex::new(writer),
            readers: None,
            migration_report,
        })
    }

    /// Execute a write operation with the serialized writer connection.
    pub fn with_writer<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        let guard = self.writer.lock().map_err(|_| StorageError::SqliteError {
            message: "write lock poisoned".to_string(),
        })?;
        f(&guard)
    }

    /// Execute a read operation on a pooled reader, or the writer when in-memory.
    pub fn with_reader<F, T>(&self, f: F) -> Result<T, StorageError>
    where
        F: FnOnce(&Connection) -> Result<T, StorageError>,
    {
        match &self.readers {
            Some(pool) => pool.with_conn(f),
            None => self.with_writer(f),
        }
    }

    /// Run a WAL checkpoint (TRUNCATE mode).
    pub fn checkpoint(&self) -> Result<(), StorageError> {
        self.with_writer(|conn| {
            conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")
                .map_err(to_storage_err)
        })
    }

    /// What the migrations did when this manager was opened.
    pub fn migration_report(&self) -> &MigrationReport {
        &self.migration_report
    }
}
