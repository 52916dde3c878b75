//! meshcat-storage: the durable, schema-versioned record store.
//!
//! One serialized writer connection, a small read pool for file-backed
//! stores, additive migrations applied on every open.

pub mod catalog_db;
pub mod connection;
pub mod migrations;
pub mod queries;

pub use catalog_db::CatalogDb;
pub use connection::DatabaseManager;

use meshcat_core::errors::StorageError;
use rusqlite::ErrorCode;

/// Map a rusqlite error onto the storage taxonomy.
pub(crate) fn to_storage_err(e: rusqlite::Error) -> StorageError {
    match e.sqlite_error_code() {
        Some(ErrorCode::DatabaseBusy) | Some(ErrorCode::DatabaseLocked) => StorageError::DbBusy,
        Some(ErrorCode::DiskFull) => StorageError::DiskFull,
        _ => StorageError::SqliteError {
            message: e.to_string(),
        },
    }
}
