//! Wavefront OBJ format support.
//!
//! The writer emits the minimal record set the converter needs:
//!
//! ```text
//! v <x> <y> <z>    one per vertex, in vertex-index order
//! f <i> <j> <k>    one per face, in emission order, 1-based indices
//! ```
//!
//! All vertex lines precede all face lines; consumers resolve face indices
//! against that ordering. In-memory indices are 0-based and are incremented
//! only at serialization time.
//!
//! The reader accepts the full triangulated subset: `v` records (extra
//! components beyond x/y/z are ignored), `f` records with exactly three
//! index tokens (`i`, `i/t`, `i//n`, or `i/t/n` forms), comments, and
//! ignores any other record type. Polygonal `f` records are rejected.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use relief_types::{GridMesh, Vertex};

use crate::atomic::write_atomic;
use crate::error::{ExportError, ExportResult};

/// Save a mesh to an OBJ file.
///
/// Face indices are validated against the vertex count before anything is
/// written; the write itself is atomic (staged and renamed into place).
///
/// # Errors
///
/// Returns [`ExportError::FaceIndexOutOfRange`] for malformed meshes and
/// [`ExportError::Io`] when the destination is not writable.
///
/// # Example
///
/// ```no_run
/// use relief_io::save_obj;
/// use relief_types::{GridMesh, Vertex};
///
/// let mut mesh = GridMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.faces.push([0, 1, 2]);
///
/// save_obj(&mesh, "triangle.obj").unwrap();
/// ```
pub fn save_obj<P: AsRef<Path>>(mesh: &GridMesh, path: P) -> ExportResult<()> {
    if let Some((face, index)) = mesh.first_invalid_face() {
        return Err(ExportError::FaceIndexOutOfRange {
            face,
            index,
            vertex_count: mesh.vertex_count(),
        });
    }

    write_atomic(path.as_ref(), |w| {
        for v in &mesh.vertices {
            writeln!(w, "v {} {} {}", v.x(), v.y(), v.z())?;
        }
        for &[i, j, k] in &mesh.faces {
            // OBJ indices are 1-based.
            writeln!(w, "f {} {} {}", i + 1, j + 1, k + 1)?;
        }
        Ok(())
    })
}

/// Load a mesh from an OBJ file.
///
/// Only `v` and `f` records contribute to the result; `f` records must be
/// triangles. Indices are normalized back to 0-based.
///
/// # Errors
///
/// Returns [`ExportError::FileNotFound`] when the path does not exist,
/// [`ExportError::MalformedRecord`] for short or polygonal records, and
/// parse errors for unparsable numbers.
pub fn load_obj<P: AsRef<Path>>(path: P) -> ExportResult<GridMesh> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ExportError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ExportError::Io(e)
        }
    })?;

    let reader = BufReader::new(file);
    let mut mesh = GridMesh::new();

    for (line_index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let mut parts = trimmed.split_whitespace();
        match parts.next() {
            Some("v") => {
                let coords = parse_vertex(parts, line_index)?;
                mesh.vertices.push(coords);
            }
            Some("f") => {
                let face = parse_face(parts, line_index)?;
                mesh.faces.push(face);
            }
            // vt, vn, o, g, s, usemtl, mtllib: not part of the contract
            _ => {}
        }
    }

    Ok(mesh)
}

/// Parse the remainder of a `v` record.
fn parse_vertex<'a, I>(mut parts: I, line_index: usize) -> ExportResult<Vertex>
where
    I: Iterator<Item = &'a str>,
{
    let mut coords = [0.0f64; 3];
    for c in &mut coords {
        let token = parts
            .next()
            .ok_or_else(|| ExportError::malformed(line_index, "v record needs 3 coordinates"))?;
        *c = token.parse()?;
    }
    // A fourth (w) component is legal OBJ; ignore it.
    Ok(Vertex::from_coords(coords[0], coords[1], coords[2]))
}

/// Parse the remainder of an `f` record into a 0-based triangle.
fn parse_face<'a, I>(parts: I, line_index: usize) -> ExportResult<[u32; 3]>
where
    I: Iterator<Item = &'a str>,
{
    let mut indices = [0u32; 3];
    let mut count = 0;

    for token in parts {
        if count == 3 {
            return Err(ExportError::malformed(
                line_index,
                "f record has more than 3 indices (only triangles are supported)",
            ));
        }

        // Tokens may be i, i/t, i//n, or i/t/n; only the vertex index is used.
        let vertex_part = token.split('/').next().unwrap_or(token);
        let one_based: u32 = vertex_part.parse()?;
        if one_based == 0 {
            return Err(ExportError::malformed(
                line_index,
                "f record index 0 (OBJ indices are 1-based)",
            ));
        }
        indices[count] = one_based - 1;
        count += 1;
    }

    if count < 3 {
        return Err(ExportError::malformed(
            line_index,
            "f record needs 3 indices",
        ));
    }

    Ok(indices)
}
