//! Indexed triangle mesh and the geometry the catalog derives from it.

use std::collections::HashMap;

use meshcat_core::types::Extents;

/// Triangles indexing into a shared vertex list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriangleMesh {
    pub vertices: Vec<[f64; 3]>,
    pub faces: Vec<[usize; 3]>,
}

impl TriangleMesh {
    pub fn new(vertices: Vec<[f64; 3]>, faces: Vec<[usize; 3]>) -> Self {
        Self { vertices, faces }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Axis-aligned bounding-box size. `None` when there are no vertices.
    pub fn extents(&self) -> Option<Extents> {
        let first = self.vertices.first()?;
        let (min, max) = self
            .vertices
            .iter()
            .fold((*first, *first), |(mut min, mut max), v| {
                for axis in 0..3 {
                    min[axis] = min[axis].min(v[axis]);
                    max[axis] = max[axis].max(v[axis]);
                }
                (min, max)
            });
        Some(Extents::from([
            max[0] - min[0],
            max[1] - min[1],
            max[2] - min[2],
        ]))
    }

    /// True when every edge is shared by exactly two faces, every face
    /// references three distinct in-range vertices, and there is at least
    /// one face. Winding consistency is not checked.
    pub fn is_closed(&self) -> bool {
        if self.faces.is_empty() {
            return false;
        }

        let mut edges: HashMap<(usize, usize), u32> = HashMap::with_capacity(self.faces.len() * 3);
        for face in &self.faces {
            let [a, b, c] = *face;
            if a == b || b == c || a == c {
                return false;
            }
            if face.iter().any(|&i| i >= self.vertices.len()) {
                return false;
            }
            for (u, v) in [(a, b), (b, c), (c, a)] {
                *edges.entry((u.min(v), u.max(v))).or_insert(0) += 1;
            }
        }
        edges.values().all(|&n| n == 2)
    }

    /// Signed enclosed volume by the divergence theorem.
    ///
    /// Positive for outward-facing winding, negative when the winding is
    /// inverted. Only meaningful for closed meshes.
    pub fn signed_volume(&self) -> f64 {
        self.faces
            .iter()
            .filter(|f| f.iter().all(|&i| i < self.vertices.len()))
            .map(|f| {
                let [a, b, c] = [self.vertices[f[0]], self.vertices[f[1]], self.vertices[f[2]]];
                let cross = [
                    b[1] * c[2] - b[2] * c[1],
                    b[2] * c[0] - b[0] * c[2],
                    b[0] * c[1] - b[1] * c[0],
                ];
                a[0] * cross[0] + a[1] * cross[1] + a[2] * cross[2]
            })
            .sum::<f64>()
            / 6.0
    }

    /// Volume as stored in the catalog: the signed volume, unaltered, for
    /// closed meshes; `None` when the surface does not enclose a region.
    pub fn volume(&self) -> Option<f64> {
        self.is_closed().then(|| self.signed_volume())
    }
}
