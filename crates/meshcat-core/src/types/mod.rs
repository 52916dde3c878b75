//! Catalog data model.

pub mod export;
pub mod extents;
pub mod ingest;
pub mod record;
pub mod stats;

pub use export::{ExportRow, EXPORT_HEADERS};
pub use extents::Extents;
pub use ingest::IngestReport;
pub use record::{MeshRecord, NewMeshRecord};
pub use stats::CatalogStats;
