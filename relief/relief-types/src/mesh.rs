//! Indexed triangle mesh.

use crate::{Aabb, Vertex};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed triangle mesh built over a regular grid.
///
/// Stores vertices and faces separately, with each face referencing three
/// vertices by 0-based index. For a grid of `h` rows by `w` columns the
/// builder produces `h * w` vertices (vertex for cell `(row, col)` at index
/// `row * w + col`) and `2 * (h - 1) * (w - 1)` faces.
///
/// Both sequences are ordered and immutable once built; exporters rely on
/// vertex order for index resolution and must not reorder either array.
///
/// # Example
///
/// ```
/// use relief_types::{GridMesh, Vertex};
///
/// let mut mesh = GridMesh::with_capacity(4, 2);
/// for i in 0..4 {
///     mesh.vertices.push(Vertex::from_coords(f64::from(i), 0.0, 0.0));
/// }
/// mesh.faces.push([0, 1, 2]);
/// mesh.faces.push([0, 2, 3]);
///
/// assert!(mesh.first_invalid_face().is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridMesh {
    /// Vertex positions in grid order.
    pub vertices: Vec<Vertex>,

    /// Triangle faces as 0-based indices into the vertex array.
    pub faces: Vec<[u32; 3]>,
}

impl GridMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    /// Get the number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces.
    #[inline]
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check whether the mesh has no vertices.
    ///
    /// A mesh from a degenerate (single-row or single-column) grid has
    /// vertices but no faces; it is not considered empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Find the first face referencing a vertex index outside the vertex
    /// array.
    ///
    /// Returns `(face_index, vertex_index)` for the first offender, or
    /// `None` when every face index is in range. Exporters call this before
    /// writing anything.
    #[must_use]
    pub fn first_invalid_face(&self) -> Option<(usize, u32)> {
        let count = self.vertices.len();
        for (face_index, face) in self.faces.iter().enumerate() {
            for &index in face {
                if index as usize >= count {
                    return Some((face_index, index));
                }
            }
        }
        None
    }

    /// Compute the axis-aligned bounding box of the vertex positions.
    ///
    /// Returns an empty AABB for a mesh with no vertices.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter().map(|v| &v.position))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn quad() -> GridMesh {
        let mut mesh = GridMesh::new();
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 0.0));
        mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
        mesh.faces.push([0, 1, 2]);
        mesh.faces.push([0, 2, 3]);
        mesh
    }

    #[test]
    fn counts() {
        let mesh = quad();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 2);
        assert!(!mesh.is_empty());
    }

    #[test]
    fn valid_faces_pass() {
        assert!(quad().first_invalid_face().is_none());
    }

    #[test]
    fn out_of_range_face_reported() {
        let mut mesh = quad();
        mesh.faces.push([1, 2, 9]);
        assert_eq!(mesh.first_invalid_face(), Some((2, 9)));
    }

    #[test]
    fn bounds_cover_vertices() {
        let mesh = quad();
        let aabb = mesh.bounds();
        assert_eq!(aabb.min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(aabb.max, Point3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn vertex_only_mesh_is_not_empty() {
        let mut mesh = GridMesh::new();
        mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
        assert!(!mesh.is_empty());
        assert_eq!(mesh.face_count(), 0);
    }
}
