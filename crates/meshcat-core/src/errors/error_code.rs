//! Stable error codes for callers that report errors outside Rust.

/// Every error enum implements this to expose a stable code string.
pub trait CatalogErrorCode {
    /// Returns the error code string (e.g., "STORAGE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const DB_BUSY: &str = "DB_BUSY";
pub const DISK_FULL: &str = "DISK_FULL";
pub const MIGRATION_FAILED: &str = "MIGRATION_FAILED";
pub const GEOMETRY_LOAD_ERROR: &str = "GEOMETRY_LOAD_ERROR";
pub const FILE_METADATA_ERROR: &str = "FILE_METADATA_ERROR";
pub const FILE_TOO_LARGE: &str = "FILE_TOO_LARGE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
