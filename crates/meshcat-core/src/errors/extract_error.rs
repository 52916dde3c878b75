//! Extraction errors.

use std::path::PathBuf;

use super::error_code::{self, CatalogErrorCode};

/// Errors that can occur while reading a mesh file.
/// The ingestion loop recovers from all of them by skipping the file.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Failed to load geometry from {path}: {message}")]
    GeometryLoad { path: PathBuf, message: String },

    #[error("Failed to read file metadata for {path}: {source}")]
    FileMetadata {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("File too large: {path} ({size} bytes, max {max})")]
    FileTooLarge { path: PathBuf, size: u64, max: u64 },
}

impl ExtractError {
    /// The file the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::GeometryLoad { path, .. }
            | Self::FileMetadata { path, .. }
            | Self::FileTooLarge { path, .. } => path,
        }
    }
}

impl CatalogErrorCode for ExtractError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::GeometryLoad { .. } => error_code::GEOMETRY_LOAD_ERROR,
            Self::FileMetadata { .. } => error_code::FILE_METADATA_ERROR,
            Self::FileTooLarge { .. } => error_code::FILE_TOO_LARGE,
        }
    }
}
