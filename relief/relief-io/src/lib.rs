//! Mesh serialization for heightmap meshes.
//!
//! This crate writes a [`GridMesh`](relief_types::GridMesh) to the two
//! interchange formats the converter targets:
//!
//! - **OBJ** (Wavefront) - ASCII, vertices before faces, 1-based indices
//! - **GLB** (binary glTF 2.0) - JSON metadata chunk plus raw geometry
//!   buffers in a single container
//!
//! OBJ files can also be read back, which keeps exported geometry
//! round-trippable.
//!
//! # Atomicity
//!
//! Both writers stage their output in a temporary file in the destination
//! directory and rename it over the final path, so a failed export never
//! leaves a half-written file behind.
//!
//! # Format Detection
//!
//! ```no_run
//! use relief_io::save_mesh;
//! use relief_types::GridMesh;
//!
//! let mesh = GridMesh::new();
//! // Format chosen by extension: .obj or .glb
//! save_mesh(&mesh, "terrain.glb").unwrap();
//! ```
//!
//! # What is not written
//!
//! No normals, no texture coordinates, no materials. The converter's
//! calling contract tolerates a texture-path parameter, but the exported
//! geometry is position-and-index data only.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod atomic;
mod error;
mod glb;
mod obj;

pub use error::{ExportError, ExportResult};
pub use glb::save_glb;
pub use obj::{load_obj, save_obj};

use std::path::Path;

use relief_types::GridMesh;

/// Supported mesh output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshFormat {
    /// Wavefront OBJ (ASCII).
    Obj,
    /// Binary glTF 2.0 container.
    Glb,
}

impl MeshFormat {
    /// Detect format from a file extension.
    ///
    /// Returns `None` when the extension is missing or not recognized.
    #[must_use]
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "obj" => Some(Self::Obj),
            "glb" => Some(Self::Glb),
            _ => None,
        }
    }
}

/// Save a mesh, picking the format from the destination extension.
///
/// # Errors
///
/// Returns [`ExportError::UnknownFormat`] for unrecognized extensions, and
/// the underlying writer's error otherwise.
pub fn save_mesh<P: AsRef<Path>>(mesh: &GridMesh, path: P) -> ExportResult<()> {
    let path = path.as_ref();
    let format = MeshFormat::from_path(path).ok_or_else(|| ExportError::UnknownFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_string(),
    })?;

    match format {
        MeshFormat::Obj => save_obj(mesh, path),
        MeshFormat::Glb => save_glb(mesh, path),
    }
}
