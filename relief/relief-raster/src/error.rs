//! Error types for image sampling.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for image sampling operations.
pub type RasterResult<T> = Result<T, RasterError>;

/// Errors that can occur while sampling an image into a height grid.
#[derive(Debug, Error)]
pub enum RasterError {
    /// Source image file not found.
    #[error("source image not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// File exists but its content is not a decodable image.
    #[error("cannot decode {path} as an image: {source}")]
    Decode {
        /// Path of the undecodable file.
        path: PathBuf,
        /// Decoder error detail.
        #[source]
        source: image::ImageError,
    },

    /// Decoded image has a zero pixel dimension.
    #[error("image {path} has zero pixel dimensions")]
    EmptyImage {
        /// Path of the offending image.
        path: PathBuf,
    },

    /// I/O error while reading the file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
