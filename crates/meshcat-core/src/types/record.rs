//! Mesh records as persisted by the catalog store.

use serde::{Deserialize, Serialize};

use super::export::ExportRow;
use super::extents::Extents;

/// A record ready for insertion. The store assigns `id` and `date_added`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMeshRecord {
    pub file_name: String,
    pub file_path: String,
    pub file_size: u64,
    pub vertex_count: Option<u64>,
    pub volume: Option<f64>,
    pub model_dimension: Option<String>,
    pub modification_date: Option<String>,
    pub note: String,
}

/// One catalog entry describing one ingested mesh file.
///
/// Everything except `note` is fixed at ingestion time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshRecord {
    pub id: i64,
    pub file_name: String,
    pub file_path: String,
    pub file_size: u64,
    pub vertex_count: Option<u64>,
    pub volume: Option<f64>,
    pub model_dimension: Option<String>,
    pub modification_date: Option<String>,
    pub note: String,
    pub date_added: String,
}

impl MeshRecord {
    /// Parsed bounding-box extents, if the stored dimension is well formed.
    pub fn extents(&self) -> Option<Extents> {
        self.model_dimension.as_deref().and_then(Extents::parse)
    }

    /// The insertable part of this record, without store-assigned fields.
    pub fn without_id(&self) -> NewMeshRecord {
        NewMeshRecord {
            file_name: self.file_name.clone(),
            file_path: self.file_path.clone(),
            file_size: self.file_size,
            vertex_count: self.vertex_count,
            volume: self.volume,
            model_dimension: self.model_dimension.clone(),
            modification_date: self.modification_date.clone(),
            note: self.note.clone(),
        }
    }

    /// One-line listing used by interactive front ends.
    /// Absent volume is shown as `0.00`, absent text fields as empty.
    pub fn summary_line(&self) -> String {
        let vertices = self
            .vertex_count
            .map(|v| v.to_string())
            .unwrap_or_default();
        format!(
            "ID: {} | Name: {} | Size: {} bytes | Vertices: {} | Volume: {:.2} | Dimensions: {} | Modified: {} | Note: {}",
            self.id,
            self.file_name,
            self.file_size,
            vertices,
            self.volume.unwrap_or(0.0),
            self.model_dimension.as_deref().unwrap_or(""),
            self.modification_date.as_deref().unwrap_or(""),
            self.note,
        )
    }

    pub fn to_export_row(&self) -> ExportRow {
        ExportRow {
            id: self.id,
            file_name: self.file_name.clone(),
            file_path: self.file_path.clone(),
            file_size: self.file_size,
            vertex_count: self.vertex_count,
            volume: self.volume,
            model_dimension: self.model_dimension.clone(),
            modification_date: self.modification_date.clone(),
            note: self.note.clone(),
            date_added: self.date_added.clone(),
        }
    }
}
