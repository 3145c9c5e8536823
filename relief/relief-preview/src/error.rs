//! Error types for preview rendering.

use thiserror::Error;

/// Result type for preview operations.
pub type PreviewResult<T> = Result<T, PreviewError>;

/// Errors that can occur while rendering or saving a preview.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// The mesh has no faces to shade (e.g. a single-row grid).
    #[error("mesh has no faces to render")]
    EmptyMesh,

    /// Image encoding failed.
    #[error("image encoding error: {0}")]
    Encode(#[from] image::ImageError),

    /// I/O error while writing the preview file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
