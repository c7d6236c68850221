//! Icosphere generation entry point.

use crate::icosahedron::icosahedron;
use crate::subdivide::subdivide_mesh;
use crate::types::{Mesh, MeshError};

/// Geodesic icosahedron with subdivision frequency `nu`.
///
/// `nu = 1` returns the regular unit icosahedron; `nu > 1` subdivides it
/// and projects every vertex onto the unit sphere. If `nr_verts` is
/// given, `nu` is raised to the smallest frequency whose mesh has at
/// least that many vertices. The result has `12 + 10(nu + 1)(nu - 1)`
/// vertices and `20 nu²` zero-indexed faces.
///
/// # Errors
///
/// [`MeshError::InvalidFrequency`] for `nu = 0`.
pub fn icosphere(nu: u32, nr_verts: Option<usize>) -> Result<Mesh, MeshError> {
    if nu == 0 {
        return Err(MeshError::InvalidFrequency);
    }

    let nu = match nr_verts {
        Some(target) => nu.max(min_frequency(target)),
        None => nu,
    };

    let mesh = icosahedron();
    if nu == 1 {
        // Base solid is already on the unit sphere.
        return Ok(mesh);
    }

    let mut mesh = subdivide_mesh(&mesh, nu)?;
    mesh.project_to_unit_sphere();
    Ok(mesh)
}

/// Smallest frequency whose icosphere has at least `nr_verts` vertices.
///
/// Vertex count grows as `12 + 10(nu + 1)(nu - 1)`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[allow(clippy::cast_precision_loss)]
pub fn min_frequency(nr_verts: usize) -> u32 {
    (1.0 + (nr_verts as f64 - 12.0) / 10.0).max(1.0).sqrt().ceil() as u32
}
