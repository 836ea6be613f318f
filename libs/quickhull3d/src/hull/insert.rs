//! Outside-set bookkeeping and the per-point insertion step.

use super::merge::MergeKind;
use super::QuickHull3d;
use crate::core::vec3::Vec3;
use crate::error::{HullError, HullResult};
use crate::mesh::{FaceId, FaceMark, HalfEdgeId, VertexId};
use config::constants::CLAIM_EARLY_EXIT_SCALE;
use tracing::trace;

impl QuickHull3d {
    // =========================================================================
    // OUTSIDE SETS
    // =========================================================================

    /// Claims `vtx` for `face`; the new point becomes the head of the
    /// face's run in the claimed list.
    pub(super) fn add_point_to_face(&mut self, vtx: VertexId, face: FaceId) {
        self.mesh.vertex_mut(vtx).face = Some(face);
        let outside = self.mesh.face(face).outside;
        match outside {
            None => self.claimed.add(self.mesh.vertices_mut(), vtx),
            Some(head) => self
                .claimed
                .insert_before(self.mesh.vertices_mut(), vtx, head),
        }
        self.mesh.face_mut(face).outside = Some(vtx);
    }

    pub(super) fn remove_point_from_face(&mut self, vtx: VertexId, face: FaceId) {
        if self.mesh.face(face).outside == Some(vtx) {
            let next = self
                .mesh
                .vertex(vtx)
                .next
                .filter(|&n| self.mesh.vertex(n).face == Some(face));
            self.mesh.face_mut(face).outside = next;
        }
        self.claimed.delete(self.mesh.vertices_mut(), vtx);
    }

    /// Unlinks the whole outside run of `face` and returns its first vertex.
    /// The returned chain is terminated.
    pub(super) fn remove_all_points_from_face(&mut self, face: FaceId) -> Option<VertexId> {
        let first = self.mesh.face(face).outside?;
        let mut end = first;
        while let Some(next) = self.mesh.vertex(end).next {
            if self.mesh.vertex(next).face != Some(face) {
                break;
            }
            end = next;
        }
        self.claimed.delete_range(self.mesh.vertices_mut(), first, end);
        self.mesh.vertex_mut(end).next = None;
        self.mesh.face_mut(face).outside = None;
        Some(first)
    }

    /// Releases the outside points of a removed face.
    ///
    /// With an absorbing face, points still outside it move over; everything
    /// else goes to the unclaimed pool.
    pub(super) fn delete_face_points(&mut self, face: FaceId, absorbing: Option<FaceId>) {
        let Some(first) = self.remove_all_points_from_face(face) else {
            return;
        };
        let Some(absorbing) = absorbing else {
            self.unclaimed.add_all(self.mesh.vertices_mut(), first);
            return;
        };

        let mut current = Some(first);
        while let Some(vtx) = current {
            current = self.mesh.vertex(vtx).next;
            let dist = self
                .mesh
                .face(absorbing)
                .distance_to_plane(self.mesh.point(vtx));
            if dist > self.tolerance {
                self.add_point_to_face(vtx, absorbing);
            } else {
                self.unclaimed.add(self.mesh.vertices_mut(), vtx);
            }
        }
    }

    // =========================================================================
    // INSERTION
    // =========================================================================

    /// Farthest outside point of the face owning the head of the claimed
    /// list
    pub(super) fn next_point_to_add(&self) -> Option<VertexId> {
        let eye_face = self.mesh.vertex(self.claimed.first()?).face?;
        let face = self.mesh.face(eye_face);
        let mut eye = None;
        let mut max_dist = 0.0;
        for vtx in self
            .mesh
            .vertex_chain(face.outside)
            .take_while(|&v| self.mesh.vertex(v).face == Some(eye_face))
        {
            let dist = face.distance_to_plane(self.mesh.point(vtx));
            if dist > max_dist {
                max_dist = dist;
                eye = Some(vtx);
            }
        }
        eye
    }

    /// Deletes `face` and every face visible from `eye` reachable from it,
    /// appending the silhouette edges to the horizon in loop order.
    ///
    /// `edge0` is the edge through which `face` was entered, or `None` for
    /// the eye face itself.
    fn calculate_horizon(
        &mut self,
        eye: Vec3,
        edge0: Option<HalfEdgeId>,
        face: FaceId,
    ) -> HullResult<()> {
        self.delete_face_points(face, None);
        self.mesh.face_mut(face).mark = FaceMark::Deleted;

        let edges: Vec<HalfEdgeId> = match edge0 {
            None => self.mesh.face_half_edges(face).collect(),
            Some(entry) => self
                .mesh
                .half_edge_range(self.mesh.next(entry), entry)
                .collect(),
        };

        for edge in edges {
            let opp_face = self.mesh.opposite_face(edge)?;
            if self.mesh.face(opp_face).mark != FaceMark::Visible {
                continue;
            }
            if self.mesh.face(opp_face).distance_to_plane(eye) > self.tolerance {
                let opp = self.mesh.opposite(edge)?;
                self.calculate_horizon(eye, Some(opp), opp_face)?;
            } else {
                self.horizon.push(edge);
            }
        }
        Ok(())
    }

    /// Triangle `eye, tail, head` over one horizon edge, glued to the face
    /// beyond it. Returns the new face's `head -> eye` side.
    fn add_adjoining_face(&mut self, eye: VertexId, he: HalfEdgeId) -> HullResult<HalfEdgeId> {
        let (tail, head) = (self.mesh.tail(he), self.mesh.head(he));
        let face = self.mesh.create_triangle(eye, tail, head, 0.0);
        let base = self.mesh.get_edge(face, -1);
        let beyond = self.mesh.opposite(he)?;
        self.mesh.set_opposite(base, beyond);
        Ok(self.mesh.get_edge(face, 0))
    }

    /// Closes the hole left by the visible faces with a fan around `eye`
    fn add_new_faces(&mut self, eye: VertexId) -> HullResult<()> {
        self.new_faces.clear();
        let horizon = std::mem::take(&mut self.horizon);

        let mut side_begin = None;
        let mut side_prev: Option<HalfEdgeId> = None;
        for &he in &horizon {
            let side = self.add_adjoining_face(eye, he)?;
            match side_prev {
                Some(prev) => {
                    let next = self.mesh.next(side);
                    self.mesh.set_opposite(next, prev);
                }
                None => side_begin = Some(side),
            }
            let face = self.mesh.half_edge(side).face;
            self.new_faces.add(self.mesh.faces_mut(), face);
            side_prev = Some(side);
        }
        self.horizon = horizon;

        let (Some(begin), Some(last)) = (side_begin, side_prev) else {
            return Err(HullError::inconsistency(format!(
                "empty horizon for point {}",
                self.mesh.vertex(eye).original_index
            )));
        };
        let next = self.mesh.next(begin);
        self.mesh.set_opposite(next, last);
        Ok(())
    }

    /// Hands every unclaimed point to the new face it lies farthest outside
    /// of; points outside none of them are interior and dropped.
    fn resolve_unclaimed_points(&mut self) {
        let early_exit = CLAIM_EARLY_EXIT_SCALE * self.tolerance;
        let mut current = self.unclaimed.first();
        while let Some(vtx) = current {
            current = self.mesh.vertex(vtx).next;
            let p = self.mesh.point(vtx);

            let mut max_dist = self.tolerance;
            let mut max_face = None;
            for face in self.mesh.face_chain(self.new_faces.first()) {
                let f = self.mesh.face(face);
                if f.mark != FaceMark::Visible {
                    continue;
                }
                let dist = f.distance_to_plane(p);
                if dist > max_dist {
                    max_dist = dist;
                    max_face = Some(face);
                }
                if max_dist > early_exit {
                    break;
                }
            }

            if let Some(face) = max_face {
                self.add_point_to_face(vtx, face);
            }
        }
    }

    /// Adds the eye point to the hull: horizon, new fan, two merge passes,
    /// then reassignment of the orphaned points.
    pub(super) fn add_point_to_hull(&mut self, eye: VertexId) -> HullResult<()> {
        self.horizon.clear();
        self.unclaimed.clear();

        let eye_face = self.mesh.vertex(eye).face.ok_or_else(|| {
            HullError::inconsistency(format!(
                "eye point {} has no face",
                self.mesh.vertex(eye).original_index
            ))
        })?;
        self.remove_point_from_face(eye, eye_face);
        let eye_point = self.mesh.point(eye);
        self.calculate_horizon(eye_point, None, eye_face)?;
        self.add_new_faces(eye)?;
        trace!(
            eye = self.mesh.vertex(eye).original_index,
            horizon = self.horizon.len(),
            "added eye point"
        );

        // first pass: merges judged by the larger face
        let mut current = self.new_faces.first();
        while let Some(face) = current {
            if self.mesh.face(face).mark == FaceMark::Visible {
                while self.do_adjacent_merge(face, MergeKind::NonConvexWrtLargerFace)? {}
            }
            current = self.mesh.face(face).next;
        }

        // second pass: anything still non-convex either way
        let mut current = self.new_faces.first();
        while let Some(face) = current {
            if self.mesh.face(face).mark == FaceMark::NonConvex {
                self.mesh.face_mut(face).mark = FaceMark::Visible;
                while self.do_adjacent_merge(face, MergeKind::NonConvex)? {}
            }
            current = self.mesh.face(face).next;
        }

        self.resolve_unclaimed_points();
        Ok(())
    }
}
