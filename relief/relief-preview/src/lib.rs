//! Shaded raster previews of heightmap meshes.
//!
//! A separately invocable collaborator: takes a precomputed
//! [`GridMesh`](relief_types::GridMesh) and renders an orthographic,
//! Lambert-shaded top view to an image. The conversion pipeline never
//! depends on this crate; meshes are stored and correct without it.
//!
//! The renderer is a small software rasterizer: the mesh footprint is
//! fitted to the image, triangles are filled with a depth test, and each
//! face is shaded by its geometric normal against a fixed light direction.
//! There is no display dependency.
//!
//! # Example
//!
//! ```no_run
//! use relief_preview::{save_preview, PreviewOptions};
//! use relief_types::GridMesh;
//!
//! # let mesh = GridMesh::new();
//! save_preview(&mesh, &PreviewOptions::default(), "preview.png").unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod render;

pub use error::{PreviewError, PreviewResult};
pub use render::{render_preview, save_preview, PreviewOptions};
