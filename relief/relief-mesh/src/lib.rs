//! Heightmap mesh construction.
//!
//! This crate maps a [`HeightGrid`](relief_types::HeightGrid) to a
//! [`GridMesh`](relief_types::GridMesh): one vertex per sample, two
//! triangles per interior grid cell.
//!
//! # Vertex Mapping
//!
//! For the sample at `(row, col)` with value `v`:
//!
//! ```text
//! x = col * planar_scale
//! y = row * planar_scale
//! z = v * height_scale
//! ```
//!
//! followed by a fixed 180° rotation about the Y axis,
//! `(x, y, z) → (−x, y, −z)`, applied identically to every vertex during
//! generation. Consumers rely on this orientation; it is not configurable.
//!
//! # Triangulation
//!
//! Each interior cell is split along the `v0–v2` diagonal:
//!
//! ```text
//! v0 ──── v1        (row, col) ──── (row, col+1)
//!  │ ╲     │             │                │
//!  │   ╲   │             │                │
//!  │     ╲ │             │                │
//! v3 ──── v2      (row+1, col) ──── (row+1, col+1)
//! ```
//!
//! emitting `(v0, v1, v2)` then `(v0, v2, v3)`. The diagonal choice is part
//! of the output contract.
//!
//! # Example
//!
//! ```
//! use relief_mesh::{build_mesh, MeshParams};
//! use relief_types::HeightGrid;
//!
//! let grid = HeightGrid::flat(3, 3, 100);
//! let mesh = build_mesh(&grid, &MeshParams::default()).unwrap();
//!
//! assert_eq!(mesh.vertex_count(), 9);
//! assert_eq!(mesh.face_count(), 8);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod build;
mod error;
mod params;

pub use build::build_mesh;
pub use error::{BuildError, BuildResult};
pub use params::MeshParams;
