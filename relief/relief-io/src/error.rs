//! Error types for mesh serialization.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for mesh serialization operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Errors that can occur while serializing or parsing mesh files.
#[derive(Debug, Error)]
pub enum ExportError {
    /// File not found (when reading).
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Unknown file format (unrecognized extension).
    #[error("unknown mesh format: .{extension}")]
    UnknownFormat {
        /// The unrecognized extension.
        extension: String,
    },

    /// A face references a vertex index outside the vertex array.
    ///
    /// Detected before anything is written; the destination is untouched.
    #[error("face {face} references vertex {index}, but the mesh has {vertex_count} vertices")]
    FaceIndexOutOfRange {
        /// Index of the offending face.
        face: usize,
        /// The out-of-range vertex index.
        index: u32,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// The mesh has no vertices; the binary format cannot express it.
    #[error("mesh has no vertices")]
    EmptyMesh,

    /// Malformed record while parsing a text mesh file.
    #[error("malformed record at line {line}: {message}")]
    MalformedRecord {
        /// 1-based line number.
        line: usize,
        /// Description of what was malformed.
        message: String,
    },

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error (GLB metadata chunk).
    #[error("metadata serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Float parsing error.
    #[error("float parsing error: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    /// Integer parsing error.
    #[error("integer parsing error: {0}")]
    ParseInt(#[from] std::num::ParseIntError),
}

impl ExportError {
    /// Create a `MalformedRecord` error for a 0-based line index.
    pub(crate) fn malformed(line_index: usize, message: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line: line_index + 1,
            message: message.into(),
        }
    }
}
