//! Error types for mesh construction.

use thiserror::Error;

/// Result type for mesh construction.
pub type BuildResult<T> = Result<T, BuildError>;

/// Errors that can occur while building a mesh from a height grid.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BuildError {
    /// A scale parameter is not a positive finite number.
    ///
    /// Raised by parameter validation before any vertex is generated.
    #[error("invalid {name}: {value} (must be positive and finite)")]
    InvalidScale {
        /// Which parameter was rejected (`planar_scale` or `height_scale`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}
