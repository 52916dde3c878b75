//! meshcat-extract: turns a mesh file into catalog metadata.
//!
//! Parsing is delegated to a [`MeshLoader`]; everything derived from the
//! geometry (vertex count, extents, volume) is computed on [`TriangleMesh`]
//! so it does not depend on which loader produced it.

pub mod extractor;
pub mod loader;
pub mod mesh;

pub use extractor::{ExtractedFile, FileMetadata, MeshExtractor, MeshMetadata};
pub use loader::{MeshLoader, StlLoader};
pub use mesh::TriangleMesh;
