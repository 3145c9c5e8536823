//! Core types for heightmap-to-mesh conversion.
//!
//! This crate provides the data model shared by the sampler, builder, and
//! exporter crates:
//!
//! - [`HeightGrid`] - A 2D grid of per-pixel elevation samples
//! - [`Vertex`] - A point in 3D output space
//! - [`GridMesh`] - A triangle mesh with indexed vertices
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! # Layering
//!
//! This is a foundation crate with no I/O, no logging, and no rendering
//! dependencies. It can be used from CLI tools, services, WASM, or bindings.
//!
//! # Coordinate System
//!
//! Meshes use a right-handed coordinate system. Grid columns map to X, grid
//! rows to Y, and elevation to Z. The mesh builder applies a fixed 180°
//! rotation about the Y axis during vertex generation, so X and Z of the
//! generated vertices are negated relative to the raw grid mapping.
//!
//! # Indexing
//!
//! Grids and meshes are row-major: the vertex for grid cell `(row, col)`
//! has index `row * width + col`. Faces reference vertices by these 0-based
//! indices; any 1-based convention (e.g. OBJ) is a serialization concern.
//!
//! # Example
//!
//! ```
//! use relief_types::{GridMesh, Vertex};
//!
//! let mut mesh = GridMesh::new();
//! mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
//! mesh.faces.push([0, 1, 2]);
//!
//! assert_eq!(mesh.vertex_count(), 3);
//! assert_eq!(mesh.face_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod bounds;
mod grid;
mod mesh;
mod vertex;

pub use bounds::Aabb;
pub use grid::HeightGrid;
pub use mesh::GridMesh;
pub use vertex::Vertex;

// Re-export the math types used in public signatures.
pub use nalgebra::{Point3, Vector3};
