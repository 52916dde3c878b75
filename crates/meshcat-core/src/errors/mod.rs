//! Error handling for the mesh catalog.
//! One error enum per subsystem, `thiserror` only.

pub mod catalog_error;
pub mod config_error;
pub mod error_code;
pub mod extract_error;
pub mod ingest_error;
pub mod storage_error;

pub use catalog_error::{CatalogError, CatalogResult};
pub use config_error::ConfigError;
pub use error_code::CatalogErrorCode;
pub use extract_error::ExtractError;
pub use ingest_error::IngestAborted;
pub use storage_error::StorageError;
