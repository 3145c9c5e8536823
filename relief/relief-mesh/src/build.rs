//! Core grid-to-mesh construction.

// Grid coordinates are small; precision loss and index narrowing are benign
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]

use nalgebra::Point3;
use relief_types::{GridMesh, HeightGrid, Vertex};
use tracing::{debug, info};

use crate::error::BuildResult;
use crate::params::MeshParams;

/// Build a triangulated heightmap mesh from a height grid.
///
/// Produces exactly `height * width` vertices (row-major, vertex for cell
/// `(row, col)` at index `row * width + col`) and
/// `2 * (height - 1) * (width - 1)` faces. Grids with fewer than two rows
/// or columns yield vertices but no faces.
///
/// # Arguments
///
/// * `grid` - The sampled height grid
/// * `params` - Scale parameters, validated before any vertex is generated
///
/// # Errors
///
/// Returns [`BuildError::InvalidScale`](crate::BuildError::InvalidScale)
/// for non-positive or non-finite scale factors.
///
/// # Example
///
/// ```
/// use relief_mesh::{build_mesh, MeshParams};
/// use relief_types::HeightGrid;
///
/// let grid = HeightGrid::flat(2, 2, 128);
/// let mesh = build_mesh(&grid, &MeshParams::default()).unwrap();
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.face_count(), 2);
/// ```
pub fn build_mesh(grid: &HeightGrid, params: &MeshParams) -> BuildResult<GridMesh> {
    params.validate()?;

    let width = grid.width();
    let height = grid.height();
    let face_count = 2 * height.saturating_sub(1) * width.saturating_sub(1);

    debug!(
        width = width,
        height = height,
        planar_scale = params.planar_scale,
        height_scale = params.height_scale,
        "building heightmap mesh"
    );

    let mut mesh = GridMesh::with_capacity(width * height, face_count);

    for (row, samples) in grid.rows().enumerate() {
        for (col, &sample) in samples.iter().enumerate() {
            let x = col as f64 * params.planar_scale;
            let y = row as f64 * params.planar_scale;
            let z = f64::from(sample) * params.height_scale;
            mesh.vertices.push(Vertex::new(rotate_y_180(x, y, z)));
        }
    }

    // Two triangles per interior cell, split along the v0-v2 diagonal.
    // Indices are u32; grids beyond 4B vertices are unsupported.
    for row in 0..height.saturating_sub(1) {
        for col in 0..width - 1 {
            let v0 = (row * width + col) as u32;
            let v1 = (row * width + col + 1) as u32;
            let v2 = ((row + 1) * width + col + 1) as u32;
            let v3 = ((row + 1) * width + col) as u32;

            mesh.faces.push([v0, v1, v2]);
            mesh.faces.push([v0, v2, v3]);
        }
    }

    info!(
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        "heightmap mesh built"
    );

    Ok(mesh)
}

/// 180° rotation about the Y axis: `(x, y, z) → (−x, y, −z)`.
///
/// Applied to every vertex during generation, never as a post-process.
#[inline]
fn rotate_y_180(x: f64, y: f64, z: f64) -> Point3<f64> {
    Point3::new(-x, y, -z)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashSet;

    #[test]
    fn counts_match_grid_dimensions() {
        let grid = HeightGrid::flat(5, 4, 7);
        let mesh = build_mesh(&grid, &MeshParams::default()).unwrap();
        assert_eq!(mesh.vertex_count(), 20);
        assert_eq!(mesh.face_count(), 2 * 3 * 4);
    }

    #[test]
    fn uniform_2x2_scenario() {
        let grid = HeightGrid::flat(2, 2, 128);
        let mesh = build_mesh(&grid, &MeshParams::new(1.0, 1.0)).unwrap();

        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 2);

        // All four vertices sit at z = -128 after the rotation.
        for v in &mesh.vertices {
            assert_relative_eq!(v.z(), -128.0);
        }

        // The two triangles reference all four vertices.
        let referenced: HashSet<u32> = mesh.faces.iter().flatten().copied().collect();
        assert_eq!(referenced, HashSet::from([0, 1, 2, 3]));
    }

    #[test]
    fn vertex_index_is_row_major() {
        let grid = HeightGrid::from_fn(3, 2, |row, col| u8::try_from(row * 3 + col).unwrap());
        let mesh = build_mesh(&grid, &MeshParams::default()).unwrap();

        // Vertex for (row=1, col=2) lives at index 1*3+2 and carries its
        // sample as (negated) elevation.
        let v = &mesh.vertices[5];
        assert_relative_eq!(v.z(), -5.0);
        assert_relative_eq!(v.x(), -2.0);
        assert_relative_eq!(v.y(), 1.0);
    }

    #[test]
    fn diagonal_split_is_fixed() {
        let grid = HeightGrid::flat(2, 2, 0);
        let mesh = build_mesh(&grid, &MeshParams::default()).unwrap();
        assert_eq!(mesh.faces[0], [0, 1, 3]);
        assert_eq!(mesh.faces[1], [0, 3, 2]);
    }

    #[test]
    fn face_indices_in_range_and_distinct() {
        let grid = HeightGrid::from_fn(7, 5, |row, col| u8::try_from((row * col) % 256).unwrap());
        let mesh = build_mesh(&grid, &MeshParams::default()).unwrap();

        assert!(mesh.first_invalid_face().is_none());
        for face in &mesh.faces {
            let unique: HashSet<u32> = face.iter().copied().collect();
            assert_eq!(unique.len(), 3, "degenerate face {face:?}");
        }
    }

    #[test]
    fn single_row_and_column_grids_have_no_faces() {
        for (w, h) in [(6, 1), (1, 6), (1, 1)] {
            let grid = HeightGrid::flat(w, h, 50);
            let mesh = build_mesh(&grid, &MeshParams::default()).unwrap();
            assert_eq!(mesh.vertex_count(), w * h);
            assert_eq!(mesh.face_count(), 0);
        }
    }

    #[test]
    fn scales_are_applied_before_rotation() {
        let grid = HeightGrid::flat(2, 1, 10);
        let mesh = build_mesh(&grid, &MeshParams::new(2.5, 0.5)).unwrap();

        let v = &mesh.vertices[1];
        assert_relative_eq!(v.x(), -2.5);
        assert_relative_eq!(v.y(), 0.0);
        assert_relative_eq!(v.z(), -5.0);
    }

    #[test]
    fn invalid_scale_rejected_before_generation() {
        let grid = HeightGrid::flat(2, 2, 1);
        let result = build_mesh(&grid, &MeshParams::new(-1.0, 1.0));
        assert!(result.is_err());
    }

    #[test]
    fn rotation_is_involutive() {
        let p = rotate_y_180(3.0, -4.0, 5.5);
        let q = rotate_y_180(p.x, p.y, p.z);
        assert_relative_eq!(q.x, 3.0);
        assert_relative_eq!(q.y, -4.0);
        assert_relative_eq!(q.z, 5.5);
    }
}
