//! Storage errors.

use super::error_code::{self, CatalogErrorCode};

/// Errors raised by the catalog store. Fatal for the call that triggered them.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("Migration step '{step}' failed: {message}")]
    MigrationFailed { step: String, message: String },

    #[error("Database busy")]
    DbBusy,

    #[error("Disk full")]
    DiskFull,

    #[error("IO error on {path}: {message}")]
    Io { path: String, message: String },
}

impl CatalogErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::SqliteError { .. } | Self::Io { .. } => error_code::STORAGE_ERROR,
            Self::MigrationFailed { .. } => error_code::MIGRATION_FAILED,
            Self::DbBusy => error_code::DB_BUSY,
            Self::DiskFull => error_code::DISK_FULL,
        }
    }
}
