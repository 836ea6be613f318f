//! Convexity tests between neighbouring faces and the merges they trigger.

use super::QuickHull3d;
use crate::error::HullResult;
use crate::mesh::{FaceId, FaceMark, HalfEdgeId};
use tracing::{trace, warn};

/// How strictly an edge must be convex to survive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MergeKind {
    /// Merge when the larger of the two faces sees the edge as non-convex;
    /// flag the face for the second pass when only the smaller one does
    NonConvexWrtLargerFace,
    /// Merge when either face sees the edge as non-convex
    NonConvex,
}

impl QuickHull3d {
    /// Distance of the centroid across `he` above the plane of `he`'s face
    pub(super) fn opp_face_distance(&self, he: HalfEdgeId) -> HullResult<f64> {
        let face = self.mesh.face(self.mesh.half_edge(he).face);
        let opp = self.mesh.face(self.mesh.opposite_face(he)?);
        Ok(face.distance_to_plane(opp.centroid))
    }

    /// Merges `face` with the first neighbour that fails the `kind` test.
    ///
    /// Returns whether a merge happened; the caller repeats until none does,
    /// since the merged face has new edges to test.
    pub(super) fn do_adjacent_merge(&mut self, face: FaceId, kind: MergeKind) -> HullResult<bool> {
        let tol = self.tolerance;
        let mut convex = true;

        let he0 = self.mesh.face(face).he0;
        let mut he = he0;
        loop {
            let opp = self.mesh.opposite(he)?;
            let opp_face = self.mesh.half_edge(opp).face;

            let merge = match kind {
                MergeKind::NonConvex => {
                    self.opp_face_distance(he)? > -tol || self.opp_face_distance(opp)? > -tol
                }
                MergeKind::NonConvexWrtLargerFace => {
                    let (larger, smaller) = if self.mesh.face(face).area > self.mesh.face(opp_face).area {
                        (he, opp)
                    } else {
                        (opp, he)
                    };
                    if self.opp_face_distance(larger)? > -tol {
                        true
                    } else {
                        if self.opp_face_distance(smaller)? > -tol {
                            convex = false;
                        }
                        false
                    }
                }
            };

            if merge {
                self.merge_across(face, he)?;
                return Ok(true);
            }

            he = self.mesh.next(he);
            if he == he0 {
                break;
            }
        }

        if !convex {
            self.mesh.face_mut(face).mark = FaceMark::NonConvex;
        }
        Ok(false)
    }

    /// Absorbs the neighbour across `he` into `face` and re-homes the outside
    /// points of every face that disappeared.
    fn merge_across(&mut self, face: FaceId, he: HalfEdgeId) -> HullResult<()> {
        let mut discarded = std::mem::take(&mut self.discarded);
        discarded.clear();
        self.mesh.merge_adjacent_face(face, he, &mut discarded)?;
        trace!(
            face = face.0,
            absorbed = discarded.len(),
            verts = self.mesh.face(face).num_verts,
            "merged adjacent faces"
        );

        if self.config.check_consistency {
            let max_dist = self.mesh.check_consistency(face)?;
            if max_dist > self.tolerance {
                warn!(
                    face = %self.mesh.face_label(face),
                    max_dist,
                    tolerance = self.tolerance,
                    "merged face vertex off its plane"
                );
            }
        }

        for &gone in &discarded {
            self.delete_face_points(gone, Some(face));
        }
        self.discarded = discarded;
        Ok(())
    }
}
