//! # QuickHull3D
//!
//! Convex hulls of 3D point sets, computed with the QuickHull algorithm on an
//! index-based half-edge mesh.
//!
//! ## Architecture
//!
//! ```text
//! points (Vec3 / flat f64)
//!       ↓
//! hull::QuickHull3d  (simplex, horizon, fan, merge, reassign)
//!       ↓
//! mesh::HullMesh     (arena of vertices, half-edges, faces)
//!       ↓
//! vertices + CCW face index loops
//! ```
//!
//! ## Output
//!
//! Faces are convex polygons: neighbouring triangles that are not clearly
//! convex within the distance tolerance are merged. Call
//! [`QuickHull3d::triangulate`] for triangle-only output.
//!
//! ## Usage
//!
//! ```rust
//! use quickhull3d::{QuickHull3d, Vec3};
//!
//! let mut cube = Vec::new();
//! for i in 0..8 {
//!     cube.push(Vec3::new((i & 1) as f64, ((i >> 1) & 1) as f64, (i >> 2) as f64));
//! }
//! let mut hull = QuickHull3d::new();
//! hull.build(&cube)?;
//! assert_eq!(hull.num_vertices(), 8);
//! assert_eq!(hull.num_faces(), 6);
//! hull.check()?;
//! # Ok::<(), quickhull3d::HullError>(())
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod hull;
pub mod mesh;

pub use crate::config::{BuildConfig, ToleranceMode};
pub use crate::core::vec3::Vec3;
pub use error::{Degeneracy, HullError, HullResult};
pub use hull::{build_many, build_many_with_config, FaceIndexing, QuickHull3d};
