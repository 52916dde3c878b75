//! File + geometry metadata extraction.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Local};
use meshcat_core::config::IngestConfig;
use meshcat_core::constants::TIMESTAMP_FORMAT;
use meshcat_core::errors::ExtractError;
use meshcat_core::types::Extents;

use crate::loader::{MeshLoader, StlLoader};

/// Geometry-derived attributes.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshMetadata {
    pub vertex_count: u64,
    /// `None` when the mesh does not enclose a volume.
    pub volume: Option<f64>,
    /// `None` when the mesh has no vertices.
    pub extents: Option<Extents>,
}

/// Filesystem attributes captured at ingestion time.
#[derive(Debug, Clone, PartialEq)]
pub struct FileMetadata {
    pub file_name: String,
    pub file_path: String,
    pub file_size: u64,
    /// Local time, `YYYY-MM-DD HH:MM:SS`. `None` if the platform has no mtime.
    pub modification_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedFile {
    pub file: FileMetadata,
    pub mesh: MeshMetadata,
}

/// Stateless: every call reads the file afresh and touches nothing else.
#[derive(Debug, Clone)]
pub struct MeshExtractor<L = StlLoader> {
    loader: L,
    max_file_size: Option<u64>,
    canonicalize_paths: bool,
}

impl MeshExtractor<StlLoader> {
    pub fn new() -> Self {
        Self::with_loader(StlLoader)
    }
}

impl Default for MeshExtractor<StlLoader> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: MeshLoader> MeshExtractor<L> {
    pub fn with_loader(loader: L) -> Self {
        Self {
            loader,
            max_file_size: None,
            canonicalize_paths: true,
        }
    }

    /// Apply the `[ingest]` section of the catalog config.
    pub fn configured(mut self, config: &IngestConfig) -> Self {
        self.max_file_size = config.max_file_size;
        self.canonicalize_paths = config.effective_canonicalize_paths();
        self
    }

    pub fn max_file_size(mut self, max: Option<u64>) -> Self {
        self.max_file_size = max;
        self
    }

    pub fn canonicalize_paths(mut self, enabled: bool) -> Self {
        self.canonicalize_paths = enabled;
        self
    }

    /// Load the geometry at `path` and derive vertex count, volume and extents.
    pub fn extract(&self, path: &Path) -> Result<MeshMetadata, ExtractError> {
        let mesh = self.loader.load(path)?;
        let volume = mesh.volume();
        if volume.is_none() && mesh.face_count() > 0 {
            tracing::debug!(path = %path.display(), "mesh is not closed, volume left empty");
        }
        Ok(MeshMetadata {
            vertex_count: mesh.vertex_count() as u64,
            volume,
            extents: mesh.extents(),
        })
    }

    /// Name, stored path, size and mtime of `path`.
    pub fn file_metadata(&self, path: &Path) -> Result<FileMetadata, ExtractError> {
        let meta = fs::metadata(path).map_err(|source| ExtractError::FileMetadata {
            path: path.to_path_buf(),
            source,
        })?;

        let stored_path = if self.canonicalize_paths {
            fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
        } else {
            path.to_path_buf()
        };

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let modification_date = meta
            .modified()
            .ok()
            .map(|t| DateTime::<Local>::from(t).format(TIMESTAMP_FORMAT).to_string());

        Ok(FileMetadata {
            file_name,
            file_path: path_to_string(&stored_path),
            file_size: meta.len(),
            modification_date,
        })
    }

    /// File metadata, the size limit, then geometry, in that order.
    /// Oversized files are rejected before they are parsed.
    pub fn extract_file(&self, path: &Path) -> Result<ExtractedFile, ExtractError> {
        let file = self.file_metadata(path)?;
        if let Some(max) = self.max_file_size {
            if file.file_size > max {
                return Err(ExtractError::FileTooLarge {
                    path: path.to_path_buf(),
                    size: file.file_size,
                    max,
                });
            }
        }
        let mesh = self.extract(path)?;
        Ok(ExtractedFile { file, mesh })
    }
}

fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
