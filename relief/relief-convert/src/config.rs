//! Conversion configuration.

use std::path::PathBuf;

use relief_mesh::MeshParams;

/// Explicit configuration for a conversion call.
///
/// Replaces ambient process-wide settings: every knob a conversion honors
/// travels with the call.
///
/// # Example
///
/// ```
/// use relief_convert::ConvertConfig;
///
/// let config = ConvertConfig {
///     planar_scale: 0.5,
///     height_scale: 0.1,
///     ..ConvertConfig::default()
/// };
/// assert!(config.texture.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertConfig {
    /// Scale for the X/Y footprint (world units per pixel).
    pub planar_scale: f64,

    /// Scale for elevation (world units per luminance step).
    pub height_scale: f64,

    /// Texture path, accepted for contract compatibility with callers that
    /// pass one. No texture data is read, computed, or embedded in the
    /// output; the exported mesh carries positions and indices only.
    pub texture: Option<PathBuf>,
}

impl ConvertConfig {
    /// The mesh builder parameters this configuration implies.
    #[must_use]
    pub const fn mesh_params(&self) -> MeshParams {
        MeshParams::new(self.planar_scale, self.height_scale)
    }
}

impl Default for ConvertConfig {
    /// Unit scales, no texture.
    fn default() -> Self {
        Self {
            planar_scale: 1.0,
            height_scale: 1.0,
            texture: None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unit_scale() {
        let config = ConvertConfig::default();
        assert_eq!(config.planar_scale, 1.0);
        assert_eq!(config.height_scale, 1.0);
        assert!(config.texture.is_none());
    }

    #[test]
    fn mesh_params_carry_the_scales() {
        let config = ConvertConfig {
            planar_scale: 2.0,
            height_scale: 0.25,
            texture: None,
        };
        let params = config.mesh_params();
        assert_eq!(params.planar_scale, 2.0);
        assert_eq!(params.height_scale, 0.25);
    }
}
