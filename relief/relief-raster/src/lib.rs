//! Image sampling for heightmap conversion.
//!
//! This crate turns a raster image into a [`HeightGrid`]: the image is
//! decoded (format sniffed from content, not extension), reduced to 8-bit
//! luminance with the standard grayscale conversion, and exposed as a
//! row-major grid of raw samples with the source's pixel dimensions.
//!
//! No normalization or resampling happens here; sample values are the
//! luminance bytes exactly as decoded.
//!
//! # Example
//!
//! ```no_run
//! use relief_raster::sample_image;
//!
//! let grid = sample_image("terrain.png").unwrap();
//! println!("{}x{} samples", grid.width(), grid.height());
//! ```
//!
//! # Errors
//!
//! Failures are typed: a missing file is [`RasterError::FileNotFound`],
//! undecodable bytes are [`RasterError::Decode`], and other read failures
//! surface as [`RasterError::Io`]. Nothing is retried or recovered locally.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod sample;

pub use error::{RasterError, RasterResult};
pub use sample::{grid_from_dynamic, sample_image};

pub use relief_types::HeightGrid;
