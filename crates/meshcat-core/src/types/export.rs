//! Export-ready rows for tabular writers.

use serde::{Deserialize, Serialize};

/// Column headers, in the same order as [`ExportRow::fields`].
pub const EXPORT_HEADERS: [&str; 10] = [
    "ID",
    "File Name",
    "File Path",
    "File Size",
    "Vertex Count",
    "Volume",
    "Model Dimension",
    "Modification Date",
    "Note",
    "Date Added",
];

/// A flat row in record field order. Writers own the file I/O.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
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

impl ExportRow {
    /// Render every column as text. Absent values become empty strings.
    pub fn fields(&self) -> [String; 10] {
        [
            self.id.to_string(),
            self.file_name.clone(),
            self.file_path.clone(),
            self.file_size.to_string(),
            self.vertex_count.map(|v| v.to_string()).unwrap_or_default(),
            self.volume.map(|v| v.to_string()).unwrap_or_default(),
            self.model_dimension.clone().unwrap_or_default(),
            self.modification_date.clone().unwrap_or_default(),
            self.note.clone(),
            self.date_added.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_follow_header_order() {
        let row = ExportRow {
            id: 3,
            file_name: "a.stl".to_string(),
            file_path: "/a.stl".to_string(),
            file_size: 100,
            vertex_count: None,
            volume: Some(-0.5),
            model_dimension: None,
            modification_date: Some("2024-01-01 00:00:00".to_string()),
            note: "draft".to_string(),
            date_added: "2024-01-02 00:00:00".to_string(),
        };
        let fields = row.fields();
        assert_eq!(fields.len(), EXPORT_HEADERS.len());
        assert_eq!(fields[0], "3");
        assert_eq!(fields[3], "100");
        assert_eq!(fields[4], "");
        assert_eq!(fields[5], "-0.5");
        assert_eq!(fields[6], "");
        assert_eq!(fields[8], "draft");
    }
}
