//! Geodesic icosphere meshes with integer subdivision frequency.
//!
//! This library approximates the unit sphere by subdividing a regular
//! icosahedron with a subdivision frequency `nu`: every edge is split
//! into `nu` segments and each face into `nu²` subtriangles, after which
//! new vertices are projected radially onto the sphere. Direct frequency
//! control gives near-linear control over resolution — the vertex count
//! is `12 + 10(nu + 1)(nu - 1)`, so the available meshes grow as
//! 12, 42, 92, 162, 252, … instead of the exponential jumps
//! 12, 42, 162, 642, … produced by repeated midpoint subdivision.
//!
//! # Example
//!
//! ```
//! use icosphere::icosphere;
//!
//! let mesh = icosphere(3, None).expect("positive frequency");
//! assert_eq!(mesh.vertex_count(), 92);
//! assert_eq!(mesh.face_count(), 180);
//!
//! // Request a minimum resolution instead of a frequency:
//! let fine = icosphere(1, Some(1000)).expect("positive frequency");
//! assert!(fine.vertex_count() >= 1000);
//! ```

mod edges;
mod icosahedron;
mod icosphere;
mod obj;
mod subdivide;
mod template;
mod types;

pub use crate::icosahedron::icosahedron;
pub use crate::icosphere::{icosphere, min_frequency};
pub use crate::obj::write_obj;
pub use crate::subdivide::subdivide_mesh;
pub use crate::types::{Mesh, MeshError};
