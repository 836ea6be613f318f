//! Reindexing, hull queries, triangulation and validation.

use super::QuickHull3d;
use crate::core::vec3::Vec3;
use crate::error::{HullError, HullResult};
use crate::mesh::{FaceId, VertexId};
use config::constants::{DOUBLE_PREC, MIN_AREA_SCALE, POINT_CHECK_SCALE};
use tracing::debug;

/// Index format of [`QuickHull3d::faces_with`] output.
///
/// The default is counter-clockwise, zero-based, hull-vertex-relative.
///
/// # Examples
/// ```
/// use quickhull3d::FaceIndexing;
/// let indexing = FaceIndexing {
///     clockwise: true,
///     ..FaceIndexing::default()
/// };
/// assert!(!indexing.one_based);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FaceIndexing {
    /// Walk each face clockwise (seen from outside)
    pub clockwise: bool,
    /// Number indices from one
    pub one_based: bool,
    /// Index the original input points instead of the hull vertices
    pub point_relative: bool,
}

impl QuickHull3d {
    // =========================================================================
    // REINDEXING
    // =========================================================================

    /// Keeps the visible faces and numbers the vertices they use in input
    /// order.
    pub(super) fn reindex_faces_and_vertices(&mut self) {
        for vtx in self.mesh.vertices_mut() {
            vtx.retained = false;
            vtx.compacted_index = None;
        }

        let mesh = &self.mesh;
        self.faces = (0..mesh.face_count() as u32)
            .map(FaceId)
            .filter(|&f| mesh.face(f).is_visible())
            .collect();

        let used: Vec<VertexId> = self
            .faces
            .iter()
            .flat_map(|&f| self.mesh.face_vertices(f))
            .collect();
        for vtx in used {
            self.mesh.vertex_mut(vtx).retained = true;
        }

        self.vertex_point_indices.clear();
        for vtx in self.mesh.vertices_mut() {
            if vtx.retained {
                vtx.compacted_index = Some(self.vertex_point_indices.len());
                self.vertex_point_indices.push(vtx.original_index);
            }
        }
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Number of hull vertices
    pub fn num_vertices(&self) -> usize {
        self.vertex_point_indices.len()
    }

    /// Hull vertex positions, in input order
    pub fn vertices(&self) -> Vec<Vec3> {
        self.vertex_point_indices
            .iter()
            .map(|&i| self.mesh.point(VertexId(i as u32)))
            .collect()
    }

    /// Hull vertex positions as flat `x, y, z` triples
    pub fn vertex_coords(&self) -> Vec<f64> {
        self.vertices()
            .into_iter()
            .flat_map(|p| p.to_array())
            .collect()
    }

    /// Input index of each hull vertex
    pub fn vertex_point_indices(&self) -> &[usize] {
        &self.vertex_point_indices
    }

    /// Number of hull faces
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Faces as counter-clockwise loops of zero-based hull vertex indices
    pub fn faces(&self) -> Vec<Vec<usize>> {
        self.faces_with(FaceIndexing::default())
    }

    /// Faces as index loops in the requested format.
    ///
    /// Every loop starts at the same vertex whatever the winding.
    pub fn faces_with(&self, indexing: FaceIndexing) -> Vec<Vec<usize>> {
        self.faces
            .iter()
            .map(|&face| self.face_indices(face, indexing))
            .collect()
    }

    fn face_indices(&self, face: FaceId, indexing: FaceIndexing) -> Vec<usize> {
        let he0 = self.mesh.face(face).he0;
        let mut indices = Vec::with_capacity(self.mesh.face(face).num_verts);
        let mut he = he0;
        loop {
            if let Some(mut idx) = self.mesh.vertex(self.mesh.head(he)).compacted_index {
                if indexing.point_relative {
                    idx = self.vertex_point_indices[idx];
                }
                if indexing.one_based {
                    idx += 1;
                }
                indices.push(idx);
            }
            he = if indexing.clockwise {
                self.mesh.prev(he)
            } else {
                self.mesh.next(he)
            };
            if he == he0 {
                break;
            }
        }
        indices
    }

    // =========================================================================
    // TRIANGULATION
    // =========================================================================

    /// Splits every polygonal face into a fan of triangles.
    ///
    /// Thin triangles can make a previously passing [`check`](Self::check)
    /// fail.
    ///
    /// # Errors
    /// Returns [`HullError::InternalInconsistency`] if the mesh is broken;
    /// the hull is then discarded.
    pub fn triangulate(&mut self) -> HullResult<()> {
        let result = self.triangulate_faces();
        if result.is_err() {
            self.reset();
        }
        result
    }

    fn triangulate_faces(&mut self) -> HullResult<()> {
        let min_area = MIN_AREA_SCALE * self.char_length * DOUBLE_PREC;
        self.new_faces.clear();
        for &face in &self.faces {
            if self.mesh.face(face).is_visible() {
                self.mesh
                    .triangulate_face(face, &mut self.new_faces, min_area)?;
            }
        }

        let created: Vec<FaceId> = self.mesh.face_chain(self.new_faces.first()).collect();
        if self.config.check_consistency {
            for &face in self.faces.iter().chain(&created) {
                self.mesh.check_consistency(face)?;
            }
        }
        debug!(
            faces = self.faces.len(),
            created = created.len(),
            "triangulated hull"
        );
        self.faces.extend(created);
        Ok(())
    }

    // =========================================================================
    // VALIDATION
    // =========================================================================

    /// Validates the hull with the build's distance tolerance.
    ///
    /// # Errors
    /// Returns [`HullError::ValidationFailed`] describing the first failure.
    pub fn check(&self) -> HullResult<()> {
        self.check_with_tolerance(self.tolerance)
    }

    /// Validates the hull: every face is consistent and meets its neighbours
    /// at convex edges without redundant vertices, and no input point lies
    /// more than `POINT_CHECK_SCALE * tol` above any face.
    ///
    /// # Errors
    /// Returns [`HullError::ValidationFailed`] describing the first failure.
    pub fn check_with_tolerance(&self, tol: f64) -> HullResult<()> {
        for &face in &self.faces {
            self.check_face_convexity(face, tol)?;
        }

        let point_tol = POINT_CHECK_SCALE * tol;
        for vtx in self.mesh.vertices() {
            for &face in &self.faces {
                let dist = self.mesh.face(face).distance_to_plane(vtx.point);
                if dist > point_tol {
                    return Err(HullError::validation(format!(
                        "point {} {dist} above face {}",
                        vtx.original_index,
                        self.mesh.face_label(face)
                    )));
                }
            }
        }
        Ok(())
    }

    fn check_face_convexity(&self, face: FaceId, tol: f64) -> HullResult<()> {
        self.mesh
            .check_consistency(face)
            .map_err(|err| HullError::validation(err.to_string()))?;

        for he in self.mesh.face_half_edges(face) {
            let dist = self.opp_face_distance(he)?;
            if dist > tol {
                return Err(HullError::validation(format!(
                    "edge {} non-convex by {dist}",
                    self.mesh.edge_label(he)
                )));
            }
            let opp = self.mesh.opposite(he)?;
            let dist = self.opp_face_distance(opp)?;
            if dist > tol {
                return Err(HullError::validation(format!(
                    "opposite edge {} non-convex by {dist}",
                    self.mesh.edge_label(opp)
                )));
            }
            if self.mesh.opposite_face(self.mesh.next(he))? == self.mesh.opposite_face(he)? {
                return Err(HullError::validation(format!(
                    "redundant vertex {} in face {}",
                    self.mesh.vertex(self.mesh.head(he)).original_index,
                    self.mesh.face_label(face)
                )));
            }
        }
        Ok(())
    }
}
