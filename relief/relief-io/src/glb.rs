//! Binary glTF 2.0 (GLB) container support.
//!
//! Writes a self-contained GLB file:
//!
//! ```text
//! UINT32    magic "glTF" (0x46546C67)
//! UINT32    version (2)
//! UINT32    total file length
//! chunk 0   JSON metadata, length 4-aligned (space padded)
//! chunk 1   binary geometry, length 4-aligned (zero padded)
//! ```
//!
//! The JSON chunk describes one buffer, a position buffer view and (when
//! faces exist) an index buffer view, matching accessors, one mesh with a
//! single primitive, one node, and one scene. The binary chunk holds the
//! vertex positions as little-endian `f32` triples followed by the face
//! indices as little-endian `u32`.
//!
//! A mesh without faces (degenerate single-row/column grids) is written as
//! a POSITION-only primitive in POINTS mode; glTF forbids zero-count
//! accessors, so an empty index accessor cannot be emitted.
//!
//! No normals, texture coordinates, or materials are written.

use std::io::Write;
use std::path::Path;

use relief_types::GridMesh;
use serde::Serialize;

use crate::atomic::write_atomic;
use crate::error::{ExportError, ExportResult};

const GLB_MAGIC: u32 = 0x4654_6C67;
const GLB_VERSION: u32 = 2;
const GLB_HEADER_LEN: usize = 12;
const CHUNK_HEADER_LEN: usize = 8;
const CHUNK_JSON: u32 = 0x4E4F_534A;
const CHUNK_BIN: u32 = 0x004E_4942;

/// `GL_ARRAY_BUFFER`; buffer view target for vertex attributes.
const TARGET_ARRAY_BUFFER: u32 = 34962;
/// `GL_ELEMENT_ARRAY_BUFFER`; buffer view target for indices.
const TARGET_ELEMENT_ARRAY_BUFFER: u32 = 34963;
/// Component type FLOAT (f32).
const COMPONENT_FLOAT: u32 = 5126;
/// Component type `UNSIGNED_INT` (u32).
const COMPONENT_UNSIGNED_INT: u32 = 5125;
/// Primitive mode POINTS.
const MODE_POINTS: u32 = 0;
/// Primitive mode TRIANGLES.
const MODE_TRIANGLES: u32 = 4;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Document {
    asset: Asset,
    scene: u32,
    scenes: Vec<Scene>,
    nodes: Vec<Node>,
    meshes: Vec<Mesh>,
    accessors: Vec<Accessor>,
    buffer_views: Vec<BufferView>,
    buffers: Vec<Buffer>,
}

#[derive(Serialize)]
struct Asset {
    version: &'static str,
    generator: &'static str,
}

#[derive(Serialize)]
struct Scene {
    nodes: Vec<u32>,
}

#[derive(Serialize)]
struct Node {
    mesh: u32,
}

#[derive(Serialize)]
struct Mesh {
    primitives: Vec<Primitive>,
}

#[derive(Serialize)]
struct Primitive {
    attributes: Attributes,
    #[serde(skip_serializing_if = "Option::is_none")]
    indices: Option<u32>,
    mode: u32,
}

#[derive(Serialize)]
struct Attributes {
    #[serde(rename = "POSITION")]
    position: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Accessor {
    buffer_view: u32,
    component_type: u32,
    count: u32,
    #[serde(rename = "type")]
    element_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    min: Option<[f32; 3]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max: Option<[f32; 3]>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BufferView {
    buffer: u32,
    byte_offset: u32,
    byte_length: u32,
    target: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Buffer {
    byte_length: u32,
}

/// Save a mesh as a binary glTF (`.glb`) file.
///
/// Face indices are validated against the vertex count before anything is
/// written; the write itself is atomic (staged and renamed into place).
///
/// # Errors
///
/// Returns [`ExportError::FaceIndexOutOfRange`] for malformed meshes,
/// [`ExportError::EmptyMesh`] for a mesh with no vertices, and
/// [`ExportError::Io`] when the destination is not writable.
///
/// # Example
///
/// ```no_run
/// use relief_io::save_glb;
/// use relief_types::{GridMesh, Vertex};
///
/// let mut mesh = GridMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.faces.push([0, 1, 2]);
///
/// save_glb(&mesh, "triangle.glb").unwrap();
/// ```
#[allow(clippy::cast_possible_truncation)]
// Truncation: counts and byte lengths are bounded by u32 mesh indices;
// positions narrow from f64 to f32 as the format requires
pub fn save_glb<P: AsRef<Path>>(mesh: &GridMesh, path: P) -> ExportResult<()> {
    if mesh.vertices.is_empty() {
        return Err(ExportError::EmptyMesh);
    }
    if let Some((face, index)) = mesh.first_invalid_face() {
        return Err(ExportError::FaceIndexOutOfRange {
            face,
            index,
            vertex_count: mesh.vertex_count(),
        });
    }

    // Binary chunk: positions first, indices (if any) appended. Both
    // sections are naturally 4-byte aligned.
    let position_len = mesh.vertices.len() * 12;
    let index_len = mesh.faces.len() * 12;
    let mut bin = Vec::with_capacity(position_len + index_len);

    for v in &mesh.vertices {
        for c in [v.x(), v.y(), v.z()] {
            bin.extend_from_slice(&(c as f32).to_le_bytes());
        }
    }
    for face in &mesh.faces {
        for &index in face {
            bin.extend_from_slice(&index.to_le_bytes());
        }
    }

    let mut buffer_views = vec![BufferView {
        buffer: 0,
        byte_offset: 0,
        byte_length: position_len as u32,
        target: TARGET_ARRAY_BUFFER,
    }];

    // POSITION accessor min/max are mandatory. Casting the f64 bounds is
    // exact here: rounding is monotone, and the extrema are mesh values.
    let bounds = mesh.bounds();
    let mut accessors = vec![Accessor {
        buffer_view: 0,
        component_type: COMPONENT_FLOAT,
        count: mesh.vertex_count() as u32,
        element_type: "VEC3",
        min: Some([
            bounds.min.x as f32,
            bounds.min.y as f32,
            bounds.min.z as f32,
        ]),
        max: Some([
            bounds.max.x as f32,
            bounds.max.y as f32,
            bounds.max.z as f32,
        ]),
    }];

    let primitive = if mesh.faces.is_empty() {
        Primitive {
            attributes: Attributes { position: 0 },
            indices: None,
            mode: MODE_POINTS,
        }
    } else {
        buffer_views.push(BufferView {
            buffer: 0,
            byte_offset: position_len as u32,
            byte_length: index_len as u32,
            target: TARGET_ELEMENT_ARRAY_BUFFER,
        });
        accessors.push(Accessor {
            buffer_view: 1,
            component_type: COMPONENT_UNSIGNED_INT,
            count: (mesh.face_count() * 3) as u32,
            element_type: "SCALAR",
            min: None,
            max: None,
        });
        Primitive {
            attributes: Attributes { position: 0 },
            indices: Some(1),
            mode: MODE_TRIANGLES,
        }
    };

    let document = Document {
        asset: Asset {
            version: "2.0",
            generator: "relief-io",
        },
        scene: 0,
        scenes: vec![Scene { nodes: vec![0] }],
        nodes: vec![Node { mesh: 0 }],
        meshes: vec![Mesh {
            primitives: vec![primitive],
        }],
        accessors,
        buffer_views,
        buffers: vec![Buffer {
            byte_length: bin.len() as u32,
        }],
    };

    let mut json = serde_json::to_vec(&document)?;
    // Chunk lengths must be 4-byte aligned: JSON pads with spaces, BIN
    // with zeros.
    while json.len() % 4 != 0 {
        json.push(b' ');
    }
    while bin.len() % 4 != 0 {
        bin.push(0);
    }

    let total_len = GLB_HEADER_LEN + 2 * CHUNK_HEADER_LEN + json.len() + bin.len();

    write_atomic(path.as_ref(), |w| {
        w.write_all(&GLB_MAGIC.to_le_bytes())?;
        w.write_all(&GLB_VERSION.to_le_bytes())?;
        w.write_all(&(total_len as u32).to_le_bytes())?;

        w.write_all(&(json.len() as u32).to_le_bytes())?;
        w.write_all(&CHUNK_JSON.to_le_bytes())?;
        w.write_all(&json)?;

        w.write_all(&(bin.len() as u32).to_le_bytes())?;
        w.write_all(&CHUNK_BIN.to_le_bytes())?;
        w.write_all(&bin)?;

        Ok(())
    })
}
