use nalgebra::Point3;
use serde::Serialize;
use thiserror::Error;

/// Triangle mesh: vertex positions plus zero-indexed face triples.
///
/// Faces are wound consistently with the parent mesh's orientation, so
/// meshes derived from the icosahedron keep outward-facing normals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mesh {
    /// Vertex positions.
    pub vertices: Vec<Point3<f64>>,
    /// Vertex index triples, all indices in `[0, vertices.len())`.
    pub faces: Vec<[usize; 3]>,
}

impl Mesh {
    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Project every vertex radially onto the unit sphere.
    ///
    /// Connectivity is untouched; this is the final pass of icosphere
    /// generation.
    pub fn project_to_unit_sphere(&mut self) {
        for v in &mut self.vertices {
            v.coords.normalize_mut();
        }
    }
}

/// Errors reported at the mesh generation API boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MeshError {
    /// Subdivision frequency was zero.
    #[error("subdivision frequency must be at least 1")]
    InvalidFrequency,

    /// Input mesh has no faces.
    #[error("mesh has no faces")]
    EmptyMesh,
}
