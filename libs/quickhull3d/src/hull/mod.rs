//! # QuickHull Builder
//!
//! Incremental 3D convex hull construction on the arena half-edge mesh.
//! Based on the algorithm by Barber, Dobkin, and Huhdanpaa.
//!
//! ## Algorithm Steps
//!
//! 1. Find the extreme points on each axis and derive the distance tolerance
//! 2. Build an initial tetrahedron, rejecting coincident, collinear and
//!    coplanar input
//! 3. Assign every other point to the face it lies farthest outside of
//! 4. While some face has outside points:
//!    a. Take the farthest point of the first such face as the eye point
//!    b. Delete the faces it sees, collecting the horizon
//!    c. Fan new triangles from the horizon to the eye point
//!    d. Merge new faces that are not clearly convex with a neighbour
//!    e. Reassign the orphaned outside points to the new faces
//! 5. Reindex the surviving faces and vertices
//!
//! ## Robustness
//!
//! Every plane test compares against `±tolerance` instead of zero, so faces
//! that are only ambiguously convex are merged into larger polygons. The
//! output faces are therefore convex polygons, not necessarily triangles.

mod batch;
mod insert;
mod merge;
mod output;
mod simplex;


pub use batch::{build_many, build_many_with_config};
pub use output::FaceIndexing;

use crate::config::{BuildConfig, ToleranceMode};
use crate::core::vec3::Vec3;
use crate::error::{HullError, HullResult};
use crate::mesh::{FaceId, FaceList, HalfEdgeId, HullMesh, VertexId, VertexList};
use config::constants::MIN_HULL_POINTS;
use tracing::debug;

/// Convex hull of a 3D point set.
///
/// One instance can be rebuilt any number of times; each build replaces the
/// previous hull. A failed build leaves no hull behind.
///
/// # Example
///
/// ```rust
/// use quickhull3d::{QuickHull3d, Vec3};
///
/// let mut points = vec![
///     Vec3::new(0.0, 0.0, 0.0),
///     Vec3::new(1.0, 0.0, 0.0),
///     Vec3::new(0.0, 1.0, 0.0),
///     Vec3::new(0.0, 0.0, 1.0),
/// ];
/// // an interior point is not part of the hull
/// points.push(Vec3::splat(0.1));
///
/// let mut hull = QuickHull3d::new();
/// hull.build(&points)?;
/// assert_eq!(hull.num_vertices(), 4);
/// assert_eq!(hull.num_faces(), 4);
/// assert_eq!(hull.vertex_point_indices(), &[0, 1, 2, 3]);
/// # Ok::<(), quickhull3d::HullError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct QuickHull3d {
    config: BuildConfig,
    mesh: HullMesh,
    /// Retained faces, in creation order, once a build has finished
    faces: Vec<FaceId>,
    horizon: Vec<HalfEdgeId>,
    discarded: Vec<FaceId>,
    new_faces: FaceList,
    unclaimed: VertexList,
    claimed: VertexList,
    max_vtxs: [VertexId; 3],
    min_vtxs: [VertexId; 3],
    /// Input index of each compacted hull vertex
    vertex_point_indices: Vec<usize>,
    num_points: usize,
    tolerance: f64,
    /// Largest bounding-box extent of the input
    char_length: f64,
}

impl QuickHull3d {
    /// Creates an empty hull with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty hull with the given configuration
    pub fn with_config(config: BuildConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Active configuration
    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    // =========================================================================
    // TOLERANCE
    // =========================================================================

    /// Distance tolerance used by the most recent build
    pub fn distance_tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Uses `tolerance` for subsequent builds instead of deriving it from the
    /// input coordinates.
    ///
    /// # Errors
    /// Returns [`HullError::Config`] for zero, negative or non-finite values.
    pub fn set_explicit_distance_tolerance(&mut self, tolerance: f64) -> HullResult<()> {
        self.config.tolerance = ToleranceMode::explicit(tolerance)?;
        Ok(())
    }

    /// Goes back to deriving the tolerance from the input
    pub fn clear_explicit_distance_tolerance(&mut self) {
        self.config.tolerance = ToleranceMode::Automatic;
    }

    /// Explicit tolerance, if one is configured
    pub fn explicit_distance_tolerance(&self) -> Option<f64> {
        self.config.tolerance.explicit_value()
    }

    // =========================================================================
    // BUILD
    // =========================================================================

    /// Builds the hull of `points`.
    ///
    /// # Errors
    /// - [`HullError::InvalidInput`] for fewer than four or non-finite points
    /// - [`HullError::DegenerateInput`] when the points span no volume
    /// - [`HullError::InternalInconsistency`] if a mesh invariant breaks
    pub fn build(&mut self, points: &[Vec3]) -> HullResult<()> {
        self.build_with_count(points, points.len())
    }

    /// Builds the hull of the first `count` entries of `points`.
    ///
    /// # Errors
    /// As [`build`](Self::build); additionally fails when `points` holds
    /// fewer than `count` entries.
    pub fn build_with_count(&mut self, points: &[Vec3], count: usize) -> HullResult<()> {
        self.reset();
        check_count(count)?;
        if points.len() < count {
            return Err(HullError::invalid_input(format!(
                "point array too small for {count} points: {} given",
                points.len()
            )));
        }
        self.load(points[..count].iter().copied())?;
        self.run()
    }

    /// Builds the hull of `count` points given as flat `x, y, z` triples.
    ///
    /// # Errors
    /// As [`build`](Self::build); additionally fails when `coords` holds
    /// fewer than `3 * count` values.
    pub fn build_from_coords(&mut self, coords: &[f64], count: usize) -> HullResult<()> {
        self.reset();
        check_count(count)?;
        if coords.len() / 3 < count {
            return Err(HullError::invalid_input(format!(
                "coordinate array too small for {count} points: {} values given",
                coords.len()
            )));
        }
        let points = coords
            .chunks_exact(3)
            .take(count)
            .map(|c| Vec3::new(c[0], c[1], c[2]));
        self.load(points)?;
        self.run()
    }

    /// Drops the previous hull and every scratch list
    fn reset(&mut self) {
        self.mesh.clear();
        self.faces.clear();
        self.horizon.clear();
        self.discarded.clear();
        self.new_faces.clear();
        self.unclaimed.clear();
        self.claimed.clear();
        self.vertex_point_indices.clear();
        self.num_points = 0;
    }

    /// Creates one vertex per input point
    fn load(&mut self, points: impl Iterator<Item = Vec3>) -> HullResult<()> {
        for (i, p) in points.enumerate() {
            if !p.is_finite() {
                self.mesh.clear();
                return Err(HullError::invalid_input(format!(
                    "point {i} has a non-finite coordinate: {p}"
                )));
            }
            self.mesh.add_vertex(p, i);
        }
        self.num_points = self.mesh.vertex_count();
        Ok(())
    }

    fn run(&mut self) -> HullResult<()> {
        let result = self.build_hull();
        if result.is_err() {
            self.reset();
        }
        result
    }

    fn build_hull(&mut self) -> HullResult<()> {
        self.compute_max_and_min();
        debug!(
            points = self.num_points,
            tolerance = self.tolerance,
            "building convex hull"
        );
        self.create_initial_simplex()?;

        let mut iterations = 0usize;
        while let Some(eye) = self.next_point_to_add() {
            self.add_point_to_hull(eye)?;
            iterations += 1;
        }
        self.reindex_faces_and_vertices();

        debug!(
            vertices = self.num_vertices(),
            faces = self.num_faces(),
            iterations,
            "convex hull built"
        );
        Ok(())
    }
}

fn check_count(count: usize) -> HullResult<()> {
    if count < MIN_HULL_POINTS {
        return Err(HullError::invalid_input(format!(
            "at least {MIN_HULL_POINTS} input points required, got {count}"
        )));
    }
    Ok(())
}
