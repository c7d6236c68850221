//! Frequency-based triangle mesh subdivision.
//!
//! Splits every edge of the input mesh into `nu` segments, adding
//! `nu - 1` shared vertices per edge and `(nu - 1)(nu - 2)/2` exclusive
//! vertices per face, then stitches `nu²` subfaces per face via the
//! cached [`SubdivisionTemplate`]. The input mesh is only read; the
//! refined mesh is returned in freshly allocated arrays.

use log::debug;
use nalgebra::Point3;
use rayon::prelude::*;

use crate::edges::EdgeIndex;
use crate::template::SubdivisionTemplate;
use crate::types::{Mesh, MeshError};

/// Subdivide a closed, consistently wound triangle mesh with frequency `nu`.
///
/// The refined mesh has `V + E(nu - 1) + F(nu - 1)(nu - 2)/2` vertices and
/// `F nu²` faces and preserves the combinatorial topology of the input.
/// `nu = 1` returns a copy of the input. New vertices are interpolated on
/// the original surface; no projection is applied here.
///
/// # Errors
///
/// [`MeshError::InvalidFrequency`] for `nu = 0`; [`MeshError::EmptyMesh`]
/// when the face list is empty.
pub fn subdivide_mesh(mesh: &Mesh, nu: u32) -> Result<Mesh, MeshError> {
    if nu == 0 {
        return Err(MeshError::InvalidFrequency);
    }
    if mesh.faces.is_empty() {
        return Err(MeshError::EmptyMesh);
    }
    if nu == 1 {
        return Ok(mesh.clone());
    }

    let n = nu as usize;
    let per_edge = n - 1;
    let per_face = (n - 1) * (n - 2) / 2;

    let index = EdgeIndex::new(&mesh.faces);
    let (v, e, f) = (mesh.vertices.len(), index.len(), mesh.faces.len());
    let new_vertex_count = v + e * per_edge + f * per_face;
    let new_face_count = f * n * n;

    debug!("subdividing mesh: V={v} E={e} F={f} nu={nu} -> V'={new_vertex_count} F'={new_face_count}");

    // Edge phase: nu - 1 vertices per edge, walked in the edge's canonical
    // direction so both incident faces share them. Edge e owns the output
    // range V + e(nu - 1)..V + (e + 1)(nu - 1).
    let mut vertices = Vec::with_capacity(new_vertex_count);
    vertices.extend_from_slice(&mesh.vertices);
    vertices.par_extend(index.edges().par_iter().flat_map_iter(|&[a, b]| {
        let (va, vb) = (mesh.vertices[a], mesh.vertices[b]);
        (1..n).map(move |k| va + (vb - va) * (k as f64 / f64::from(nu)))
    }));

    let template = SubdivisionTemplate::get(nu);
    let interior_base = v + e * per_edge;

    // Face phase: reads on-edge vertices written above, so it must not
    // start before the edge phase has completed. Face f owns the subface
    // range f·nu².. and the interior-vertex range following the on-edge
    // block; outputs are collected in face order.
    let per_face_results: Vec<(Vec<[usize; 3]>, Vec<Point3<f64>>)> = mesh
        .faces
        .par_iter()
        .enumerate()
        .map(|(fi, &[a, b, c])| {
            let ab = edge_run(&index, a, b, v, per_edge);
            let ac = edge_run(&index, a, c, v, per_edge);
            let bc = edge_run(&index, b, c, v, per_edge);

            // Local vertex list in canonical layout: corners, on-edge
            // runs in face traversal direction, then this face's
            // interior vertices.
            let base = interior_base + fi * per_face;
            let mut vef = Vec::with_capacity(template.local_vertex_count());
            vef.extend([a, b, c]);
            vef.extend_from_slice(&ab);
            vef.extend_from_slice(&ac);
            vef.extend_from_slice(&bc);
            vef.extend(base..base + per_face);

            let ordering = template.ordering();
            let subfaces = template
                .faces()
                .iter()
                .map(|&[p, q, r]| [vef[ordering[p]], vef[ordering[q]], vef[ordering[r]]])
                .collect();

            (subfaces, interior_points(&vertices, &ab, &ac))
        })
        .collect();

    let mut faces = Vec::with_capacity(new_face_count);
    for (subfaces, interior) in per_face_results {
        faces.extend_from_slice(&subfaces);
        vertices.extend(interior);
    }

    Ok(Mesh { vertices, faces })
}

/// Global indices of the on-edge vertices of edge `(from, to)`, listed in
/// the direction the face traverses it. Storage order follows the edge's
/// canonical direction, so a disagreeing traversal reverses the run.
fn edge_run(index: &EdgeIndex, from: usize, to: usize, v: usize, per_edge: usize) -> Vec<usize> {
    let (id, direction) = index
        .get(from, to)
        .expect("every face edge is present in the edge index");
    let start = v + id * per_edge;
    let mut run: Vec<usize> = (start..start + per_edge).collect();
    if direction.is_reversed() {
        run.reverse();
    }
    run
}

/// Positions of the face-interior vertices, ring by ring between the two
/// on-edge runs leaving corner A: ring `i` interpolates `i` points
/// between `ab[i]` and `ac[i]` with weights `k/(i + 1)`.
fn interior_points(vertices: &[Point3<f64>], ab: &[usize], ac: &[usize]) -> Vec<Point3<f64>> {
    let m = ab.len();
    let mut points = Vec::with_capacity((m * m - m) / 2);
    for i in 1..m {
        let (va, vc) = (vertices[ab[i]], vertices[ac[i]]);
        for k in 1..=i {
            points.push(va + (vc - va) * (k as f64 / (i + 1) as f64));
        }
    }
    points
}
