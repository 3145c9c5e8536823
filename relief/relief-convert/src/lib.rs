//! Image-to-mesh conversion pipeline.
//!
//! This crate wires the sampler, builder, and exporters into the single
//! entry point collaborators call: image path in, mesh file out, vertex and
//! face arrays back.
//!
//! The pipeline is strictly sequential and synchronous:
//!
//! ```text
//! sample_image → build_mesh → save_obj / save_glb
//! ```
//!
//! All state is local to one conversion call; concurrent conversions are
//! safe as long as they use distinct output paths.
//!
//! # Example
//!
//! ```no_run
//! use relief_convert::{convert_image_to_glb, ConvertConfig};
//!
//! let config = ConvertConfig::default();
//! let mesh = convert_image_to_glb(&config, "terrain.png", "terrain.glb").unwrap();
//! println!("{} vertices, {} faces", mesh.vertex_count(), mesh.face_count());
//! ```
//!
//! # Errors
//!
//! Each failure keeps its taxonomy through [`ConvertError`]: unreadable
//! input is [`ConvertError::Raster`], invalid parameters are
//! [`ConvertError::Build`], and unwritable output is
//! [`ConvertError::Export`]. Callers map each kind to user-facing behavior
//! explicitly; nothing is retried or stringified here.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod config;
mod convert;
mod error;

pub use config::ConvertConfig;
pub use convert::{convert_image_to_glb, convert_image_to_obj};
pub use error::{ConvertError, ConvertResult};

pub use relief_types::GridMesh;
