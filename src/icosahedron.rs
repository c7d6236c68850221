//! The regular unit icosahedron used as the subdivision seed.

use nalgebra::Point3;

use crate::types::Mesh;

/// Regular unit icosahedron: 12 vertices on the unit sphere, 20 faces.
///
/// Vertices are derived from the golden ratio and pre-normalized to unit
/// length; faces are wound so that normals point outward.
#[must_use]
pub fn icosahedron() -> Mesh {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let scale = phi.mul_add(phi, 1.0).sqrt();

    // Six vertices of the (0, ±1, ±phi) circulant family; the remaining
    // six are their antipodes.
    let upper = [
        (0.0, 1.0, phi),
        (0.0, -1.0, phi),
        (1.0, phi, 0.0),
        (-1.0, phi, 0.0),
        (phi, 0.0, 1.0),
        (-phi, 0.0, 1.0),
    ];

    let vertices: Vec<Point3<f64>> = upper
        .iter()
        .map(|&(x, y, z)| Point3::new(x / scale, y / scale, z / scale))
        .chain(
            upper
                .iter()
                .map(|&(x, y, z)| Point3::new(-x / scale, -y / scale, -z / scale)),
        )
        .collect();

    let faces = vec![
        [0, 5, 1],
        [0, 3, 5],
        [0, 2, 3],
        [0, 4, 2],
        [0, 1, 4],
        [1, 5, 8],
        [5, 3, 10],
        [3, 2, 7],
        [2, 4, 11],
        [4, 1, 9],
        [7, 11, 6],
        [11, 9, 6],
        [9, 8, 6],
        [8, 10, 6],
        [10, 7, 6],
        [2, 11, 7],
        [4, 9, 11],
        [1, 8, 9],
        [5, 10, 8],
        [3, 7, 10],
    ];

    Mesh { vertices, faces }
}
