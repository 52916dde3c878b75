//! Loader adapters. Each turns file contents into a [`TriangleMesh`].

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use meshcat_core::errors::ExtractError;

use crate::mesh::TriangleMesh;

/// Parses a mesh file. Implementations decide which formats they accept by
/// content, not by extension.
pub trait MeshLoader: Send + Sync {
    fn load(&self, path: &Path) -> Result<TriangleMesh, ExtractError>;
}

/// ASCII and binary STL via `stl_io`. Identical vertex positions are merged.
#[derive(Debug, Clone, Copy, Default)]
pub struct StlLoader;

impl MeshLoader for StlLoader {
    fn load(&self, path: &Path) -> Result<TriangleMesh, ExtractError> {
        let geometry_err = |message: String| ExtractError::GeometryLoad {
            path: path.to_path_buf(),
            message,
        };

        let file = File::open(path).map_err(|e| geometry_err(e.to_string()))?;
        let mut reader = BufReader::new(file);
        let indexed = stl_io::read_stl(&mut reader).map_err(|e| geometry_err(e.to_string()))?;

        let vertices = indexed
            .vertices
            .iter()
            .map(|v| [f64::from(v[0]), f64::from(v[1]), f64::from(v[2])])
            .collect();
        let faces = indexed.faces.iter().map(|f| f.vertices).collect();

        Ok(TriangleMesh::new(vertices, faces))
    }
}
