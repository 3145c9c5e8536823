//! Error type for the conversion pipeline.

use thiserror::Error;

/// Result type for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

/// Errors from the conversion pipeline, one variant per stage.
///
/// The wrapped errors keep their own taxonomy so boundary layers (CLI,
/// services) can map each kind explicitly instead of passing opaque
/// strings through.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The source image could not be read or decoded.
    #[error(transparent)]
    Raster(#[from] relief_raster::RasterError),

    /// Mesh construction rejected its parameters.
    #[error(transparent)]
    Build(#[from] relief_mesh::BuildError),

    /// Serialization failed or the mesh was malformed.
    #[error(transparent)]
    Export(#[from] relief_io::ExportError),
}
