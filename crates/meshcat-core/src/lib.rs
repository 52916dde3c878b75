//! meshcat-core: shared types, traits, errors, config, tracing, and constants
//! for the mesh catalog workspace.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

pub use types::{CatalogStats, ExportRow, Extents, IngestReport, MeshRecord, NewMeshRecord};
