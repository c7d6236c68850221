//! Wavefront OBJ output for generated meshes.

use std::io::{self, Write};

use crate::types::Mesh;

/// Write the mesh as Wavefront OBJ: one `v` record per vertex followed by
/// one `f` record per face. OBJ face indices are 1-based.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn write_obj<W: Write>(mesh: &Mesh, mut writer: W) -> io::Result<()> {
    for v in &mesh.vertices {
        writeln!(writer, "v {} {} {}", v.x, v.y, v.z)?;
    }
    for &[a, b, c] in &mesh.faces {
        writeln!(writer, "f {} {} {}", a + 1, b + 1, c + 1)?;
    }
    Ok(())
}
