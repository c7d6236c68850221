//! Canonical subdivision template for a single triangle.
//!
//! For frequency `nu` a triangle subdivides into `nu²` subtriangles over
//! `(nu + 1)(nu + 2) / 2` local vertices. The template is a pure function
//! of `nu`, independent of geometry, and is memoized process-wide.
//!
//! Local vertices have two indexings. *Reading order* counts row by row
//! from the top corner:
//!
//! ```text
//!         0
//!        / \
//!       1---2
//!      / \ / \
//!     3---4---5
//!    / \ / \ / \
//!   6---7---8---9
//! ```
//!
//! The *canonical* layout lists the three corners first, then the on-edge
//! runs (A→B, A→C, B→C), then the interior vertices. [`SubdivisionTemplate::ordering`]
//! maps each reading-order id to its canonical position, which lets the
//! subdivider assemble a local vertex list without knowing how the
//! triangulation indexes vertices internally.

use std::collections::HashMap;
use std::sync::{Arc, LazyLock, Mutex, PoisonError};

/// Memoized templates, keyed by frequency. Pure function of the key, so
/// the cache never needs invalidation.
static CACHE: LazyLock<Mutex<HashMap<u32, Arc<SubdivisionTemplate>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Triangulation template and vertex-ordering permutation for one
/// subdivided triangle.
#[derive(Debug)]
pub struct SubdivisionTemplate {
    faces: Vec<[usize; 3]>,
    ordering: Vec<usize>,
}

impl SubdivisionTemplate {
    /// Template for frequency `nu`, shared from the process-wide cache.
    #[must_use]
    pub fn get(nu: u32) -> Arc<Self> {
        let mut cache = CACHE.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(cache.entry(nu).or_insert_with(|| {
            Arc::new(Self {
                faces: faces_template(nu),
                ordering: vertex_ordering(nu),
            })
        }))
    }

    /// The `nu²` subtriangles in reading-order local vertex ids, wound
    /// like the parent triangle.
    #[must_use]
    pub fn faces(&self) -> &[[usize; 3]] {
        &self.faces
    }

    /// Maps each reading-order local id to its position in the canonical
    /// layout `[A, B, C, A→B run, A→C run, B→C run, interior]`.
    #[must_use]
    pub fn ordering(&self) -> &[usize] {
        &self.ordering
    }

    /// Number of local vertices, `(nu + 1)(nu + 2) / 2`.
    #[must_use]
    pub fn local_vertex_count(&self) -> usize {
        self.ordering.len()
    }
}

/// Subtriangle connectivity in reading-order ids.
///
/// Iterates `nu` horizontal layers; layer `i` starts at triangular offset
/// `i(i + 1)/2` with row stride `i + 1` and contributes `i` paired
/// up/down triangles plus one terminal triangle, `nu²` in total.
fn faces_template(nu: u32) -> Vec<[usize; 3]> {
    let nu = nu as usize;
    let mut faces = Vec::with_capacity(nu * nu);
    for i in 0..nu {
        let row = i * (i + 1) / 2;
        let skip = i + 1;
        for j in 0..i {
            faces.push([j + row, j + row + skip, j + row + skip + 1]);
            faces.push([j + row, j + row + skip + 1, j + row + 1]);
        }
        faces.push([i + row, i + row + skip, i + row + skip + 1]);
    }
    faces
}

/// Permutation taking reading-order ids to canonical positions.
///
/// Canonical positions partition as: corners 0..3, left edge (A→B)
/// `3..nu + 2`, right edge (A→C) `nu + 2..2nu + 1`, bottom edge (B→C)
/// `2nu + 1..3nu`, interior `3nu..`. Reading order walks the top corner,
/// then ring by ring a left-edge vertex, that ring's interior, a
/// right-edge vertex, and finally the bottom row B, B→C run, C.
fn vertex_ordering(nu: u32) -> Vec<usize> {
    let nu = nu as usize;
    let total = (nu + 1) * (nu + 2) / 2;
    let left: Vec<usize> = (3..nu + 2).collect();
    let right: Vec<usize> = (nu + 2..2 * nu + 1).collect();
    let bottom: Vec<usize> = (2 * nu + 1..3 * nu).collect();
    let inside: Vec<usize> = (3 * nu..total).collect();

    let mut ordering = Vec::with_capacity(total);
    ordering.push(0);
    for i in 0..nu.saturating_sub(1) {
        ordering.push(left[i]);
        ordering.extend_from_slice(&inside[(i * i - i) / 2..(i * i + i) / 2]);
        ordering.push(right[i]);
    }
    ordering.push(1);
    ordering.extend_from_slice(&bottom);
    ordering.push(2);
    ordering
}
