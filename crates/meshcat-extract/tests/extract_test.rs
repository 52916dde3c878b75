//! Extraction tests against STL files written on the fly.

use std::fs;
use std::path::{Path, PathBuf};

use meshcat_core::config::IngestConfig;
use meshcat_core::errors::ExtractError;
use meshcat_core::types::Extents;
use meshcat_extract::{MeshExtractor, MeshLoader, StlLoader};
use tempfile::TempDir;

type Tri = [[f32; 3]; 3];

/// Tetrahedron with outward winding, scaled by `s`.
fn tetrahedron(s: f32) -> Vec<Tri> {
    let o = [0.0, 0.0, 0.0];
    let x = [s, 0.0, 0.0];
    let y = [0.0, s, 0.0];
    let z = [0.0, 0.0, s];
    vec![[o, y, x], [o, x, z], [o, z, y], [x, y, z]]
}

fn ascii_stl(tris: &[Tri]) -> String {
    let mut out = String::from("solid fixture\n");
    for tri in tris {
        out.push_str("  facet normal 0 0 0\n    outer loop\n");
        for v in tri {
            out.push_str(&format!("      vertex {} {} {}\n", v[0], v[1], v[2]));
        }
        out.push_str("    endloop\n  endfacet\n");
    }
    out.push_str("endsolid fixture\n");
    out
}

fn binary_stl(tris: &[Tri]) -> Vec<u8> {
    let mut out = vec![0u8; 80];
    out.extend_from_slice(&(tris.len() as u32).to_le_bytes());
    for tri in tris {
        for _ in 0..3 {
            out.extend_from_slice(&0f32.to_le_bytes());
        }
        for v in tri {
            for c in v {
                out.extend_from_slice(&c.to_le_bytes());
            }
        }
        out.extend_from_slice(&0u16.to_le_bytes());
    }
    out
}

fn write(dir: &Path, name: &str, contents: impl AsRef<[u8]>) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn ascii_tetrahedron_metadata() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "tet.stl", ascii_stl(&tetrahedron(2.0)));

    let meta = MeshExtractor::new().extract(&path).unwrap();
    assert_eq!(meta.vertex_count, 4, "shared corners are merged");
    assert_eq!(meta.extents, Some(Extents::new(2.0, 2.0, 2.0)));
    let volume = meta.volume.unwrap();
    assert!((volume - 8.0 / 6.0).abs() < 1e-6, "got {volume}");
}

#[test]
fn binary_tetrahedron_matches_ascii() {
    let dir = TempDir::new().unwrap();
    let ascii = write(dir.path(), "a.stl", ascii_stl(&tetrahedron(1.0)));
    let binary = write(dir.path(), "b.stl", binary_stl(&tetrahedron(1.0)));

    let extractor = MeshExtractor::new();
    let a = extractor.extract(&ascii).unwrap();
    let b = extractor.extract(&binary).unwrap();
    assert_eq!(a.vertex_count, b.vertex_count);
    assert_eq!(a.extents, b.extents);
    assert!((a.volume.unwrap() - b.volume.unwrap()).abs() < 1e-9);
}

#[test]
fn open_mesh_keeps_vertex_count_but_no_volume() {
    let dir = TempDir::new().unwrap();
    let mut tris = tetrahedron(1.0);
    tris.pop();
    let path = write(dir.path(), "open.stl", ascii_stl(&tris));

    let meta = MeshExtractor::new().extract(&path).unwrap();
    assert_eq!(meta.vertex_count, 4);
    assert!(meta.volume.is_none());
    assert_eq!(meta.extents, Some(Extents::new(1.0, 1.0, 1.0)));
}

#[test]
fn inverted_mesh_volume_is_passed_through_negative() {
    let dir = TempDir::new().unwrap();
    let tris: Vec<Tri> = tetrahedron(1.0)
        .into_iter()
        .map(|[a, b, c]| [a, c, b])
        .collect();
    let path = write(dir.path(), "inverted.stl", ascii_stl(&tris));

    let volume = MeshExtractor::new().extract(&path).unwrap().volume.unwrap();
    assert!(volume < 0.0, "got {volume}");
}

#[test]
fn corrupt_file_is_geometry_load_error() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "broken.stl", "this is not a mesh");

    let err = MeshExtractor::new().extract(&path).unwrap_err();
    match err {
        ExtractError::GeometryLoad { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected GeometryLoad, got {other:?}"),
    }
}

#[test]
fn missing_file_is_geometry_load_error_for_loader() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.stl");
    let err = StlLoader.load(&path).unwrap_err();
    assert!(matches!(err, ExtractError::GeometryLoad { .. }));
}

#[test]
fn extension_is_not_checked() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "model.bin", binary_stl(&tetrahedron(1.0)));
    assert_eq!(MeshExtractor::new().extract(&path).unwrap().vertex_count, 4);
}

#[test]
fn file_metadata_captures_name_size_and_mtime() {
    let dir = TempDir::new().unwrap();
    let contents = ascii_stl(&tetrahedron(1.0));
    let path = write(dir.path(), "tet.stl", &contents);

    let meta = MeshExtractor::new().file_metadata(&path).unwrap();
    assert_eq!(meta.file_name, "tet.stl");
    assert_eq!(meta.file_size, contents.len() as u64);
    assert!(Path::new(&meta.file_path).is_absolute());

    let mtime = meta.modification_date.unwrap();
    assert_eq!(mtime.len(), "2024-01-01 00:00:00".len());
    assert!(chrono_like(&mtime), "unexpected format {mtime}");
}

fn chrono_like(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes[4] == b'-' && bytes[7] == b'-' && bytes[10] == b' ' && bytes[13] == b':'
}

#[test]
fn path_kept_as_given_when_canonicalization_disabled() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "tet.stl", ascii_stl(&tetrahedron(1.0)));

    let meta = MeshExtractor::new()
        .canonicalize_paths(false)
        .file_metadata(&path)
        .unwrap();
    assert_eq!(meta.file_path, path.to_string_lossy());
}

#[test]
fn missing_file_metadata_error() {
    let dir = TempDir::new().unwrap();
    let err = MeshExtractor::new()
        .extract_file(&dir.path().join("gone.stl"))
        .unwrap_err();
    assert!(matches!(err, ExtractError::FileMetadata { .. }));
}

#[test]
fn oversized_file_rejected_before_parsing() {
    let dir = TempDir::new().unwrap();
    // Unparseable on purpose: the size check must fire first.
    let path = write(dir.path(), "big.stl", vec![b'x'; 2048]);

    let config = IngestConfig {
        max_file_size: Some(1024),
        ..Default::default()
    };
    let err = MeshExtractor::new()
        .configured(&config)
        .extract_file(&path)
        .unwrap_err();
    match err {
        ExtractError::FileTooLarge { size, max, .. } => {
            assert_eq!(size, 2048);
            assert_eq!(max, 1024);
        }
        other => panic!("expected FileTooLarge, got {other:?}"),
    }
}

#[test]
fn extract_file_combines_both_halves() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "tet.stl", binary_stl(&tetrahedron(3.0)));

    let extracted = MeshExtractor::new().extract_file(&path).unwrap();
    assert_eq!(extracted.file.file_name, "tet.stl");
    assert_eq!(extracted.file.file_size, 84 + 50 * 4);
    assert_eq!(extracted.mesh.extents, Some(Extents::new(3.0, 3.0, 3.0)));
}
