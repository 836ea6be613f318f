//! Faces and the face-level mesh mutations.
//!
//! Everything here keeps the half-edge invariants of the module docs intact:
//! a mutation either leaves every visible loop closed and reflected, or it
//! reports an [`HullError::InternalInconsistency`].

use super::{FaceId, FaceList, HalfEdgeId, HullMesh, VertexId};
use crate::core::vec3::{normalize, Vec3};
use crate::error::{HullError, HullResult};

/// Lifecycle state of a face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FaceMark {
    /// On the current hull
    #[default]
    Visible,
    /// On the hull but waiting for the second merge pass
    NonConvex,
    /// Removed from the hull
    Deleted,
}

/// Planar convex polygon bounded by a counter-clockwise half-edge loop
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    /// Entry point into the half-edge loop
    pub he0: HalfEdgeId,
    /// Outward unit normal
    pub normal: Vec3,
    /// Mean of the loop vertices
    pub centroid: Vec3,
    /// Polygon area (length of the unnormalized normal)
    pub area: f64,
    /// `normal · centroid`
    pub plane_offset: f64,
    /// Length of the half-edge loop
    pub num_verts: usize,
    /// Lifecycle state
    pub mark: FaceMark,
    /// First vertex of this face's outside set
    pub outside: Option<VertexId>,
    /// Link used while the face sits in a [`FaceList`]
    pub next: Option<FaceId>,
}

impl Face {
    fn new(he0: HalfEdgeId) -> Self {
        Self {
            he0,
            normal: Vec3::ZERO,
            centroid: Vec3::ZERO,
            area: 0.0,
            plane_offset: 0.0,
            num_verts: 0,
            mark: FaceMark::Visible,
            outside: None,
            next: None,
        }
    }

    /// Signed distance from `p` to the face plane, positive on the outside
    #[inline]
    pub fn distance_to_plane(&self, p: Vec3) -> f64 {
        self.normal.dot(p) - self.plane_offset
    }

    /// Returns true while the face is part of the hull
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.mark == FaceMark::Visible
    }
}

impl HullMesh {
    // =========================================================================
    // CONSTRUCTION
    // =========================================================================

    /// Creates the triangle `v0, v1, v2` (counter-clockwise seen from
    /// outside), with `he0` pointing at `v0`.
    ///
    /// When the triangle's area is below `min_area` its normal is stabilized
    /// against the longest edge.
    pub fn create_triangle(
        &mut self,
        v0: VertexId,
        v1: VertexId,
        v2: VertexId,
        min_area: f64,
    ) -> FaceId {
        let face = self.push_loop(&[v0, v1, v2]);
        self.compute_normal_and_centroid_min_area(face, min_area);
        face
    }

    /// Creates a polygon over `vertices` in the given order.
    ///
    /// # Errors
    /// Returns [`HullError::InvalidInput`] for fewer than three vertices.
    pub fn create_polygon(&mut self, vertices: &[VertexId]) -> HullResult<FaceId> {
        if vertices.len() < 3 {
            return Err(HullError::invalid_input(format!(
                "a face needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }
        let face = self.push_loop(vertices);
        self.compute_normal_and_centroid(face);
        Ok(face)
    }

    /// Allocates a face and a closed loop of half-edges with the given heads.
    fn push_loop(&mut self, vertices: &[VertexId]) -> FaceId {
        let face = FaceId(self.faces.len() as u32);
        let edges: Vec<HalfEdgeId> = vertices
            .iter()
            .map(|&v| self.add_half_edge(v, face))
            .collect();
        let n = edges.len();
        for (i, &he) in edges.iter().enumerate() {
            let edge = self.half_edge_mut(he);
            edge.next = edges[(i + 1) % n];
            edge.prev = edges[(i + n - 1) % n];
        }
        self.faces.push(Face::new(edges[0]));
        face
    }

    // =========================================================================
    // GEOMETRY
    // =========================================================================

    /// Recomputes normal, area and vertex count from the loop.
    ///
    /// The normal is the sum of the fan cross products around the head of
    /// `he0`.
    pub fn compute_normal(&mut self, face: FaceId) {
        let he0 = self.face(face).he0;
        let he1 = self.next(he0);
        let p0 = self.point(self.head(he0));
        let mut d2 = self.point(self.head(he1)) - p0;
        let mut normal = Vec3::ZERO;
        let mut num_verts = 2;

        let mut he2 = self.next(he1);
        while he2 != he0 {
            let d1 = d2;
            d2 = self.point(self.head(he2)) - p0;
            normal += d1.cross(d2);
            num_verts += 1;
            he2 = self.next(he2);
        }

        let area = normal.length();
        let f = self.face_mut(face);
        f.area = area;
        f.normal = normal / area;
        f.num_verts = num_verts;
    }

    /// As [`compute_normal`](Self::compute_normal), then removes the normal
    /// component along the longest edge when the area is below `min_area`.
    pub fn compute_normal_min_area(&mut self, face: FaceId, min_area: f64) {
        self.compute_normal(face);
        if self.face(face).area >= min_area {
            return;
        }

        let mut longest = None;
        let mut len_sqr_max = 0.0;
        for he in self.face_half_edges(face) {
            let len_sqr = self.edge_length_squared(he);
            if len_sqr > len_sqr_max {
                longest = Some(he);
                len_sqr_max = len_sqr;
            }
        }
        let Some(he) = longest else {
            return;
        };

        let u = (self.point(self.head(he)) - self.point(self.tail(he))) / len_sqr_max.sqrt();
        let f = self.face_mut(face);
        let n = f.normal - f.normal.dot(u) * u;
        f.normal = normalize(n);
    }

    /// Recomputes the centroid as the mean of the loop vertices
    pub fn compute_centroid(&mut self, face: FaceId) {
        let sum: Vec3 = self
            .face_vertices(face)
            .map(|v| self.point(v))
            .fold(Vec3::ZERO, |acc, p| acc + p);
        let f = self.face_mut(face);
        f.centroid = sum / f.num_verts as f64;
    }

    /// Recomputes the whole plane equation
    pub fn compute_normal_and_centroid(&mut self, face: FaceId) {
        self.compute_normal(face);
        self.compute_centroid(face);
        let f = self.face_mut(face);
        f.plane_offset = f.normal.dot(f.centroid);
    }

    /// Recomputes the whole plane equation with the small-area safeguard
    pub fn compute_normal_and_centroid_min_area(&mut self, face: FaceId, min_area: f64) {
        self.compute_normal_min_area(face, min_area);
        self.compute_centroid(face);
        let f = self.face_mut(face);
        f.plane_offset = f.normal.dot(f.centroid);
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// The `i`-th half-edge from `he0`; negative values walk backwards
    pub fn get_edge(&self, face: FaceId, i: isize) -> HalfEdgeId {
        let mut he = self.face(face).he0;
        for _ in 0..i.unsigned_abs() {
            he = if i > 0 { self.next(he) } else { self.prev(he) };
        }
        he
    }

    /// Half-edge of `face` running from `tail` to `head`, if any
    pub fn find_edge(&self, face: FaceId, tail: VertexId, head: VertexId) -> Option<HalfEdgeId> {
        self.face_half_edges(face)
            .find(|&he| self.head(he) == head && self.tail(he) == tail)
    }

    /// Input indices of the loop vertices, for diagnostics
    pub fn face_label(&self, face: FaceId) -> String {
        self.face_vertices(face)
            .map(|v| self.vertex(v).original_index.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Checks the half-edge invariants of a live face and reports the
    /// largest distance of a loop vertex from the face plane.
    ///
    /// # Errors
    /// Returns [`HullError::InternalInconsistency`] describing the first
    /// violated invariant.
    pub fn check_consistency(&self, face: FaceId) -> HullResult<f64> {
        let f = self.face(face);
        if f.num_verts < 3 {
            return Err(HullError::inconsistency(format!(
                "degenerate face: {}",
                self.face_label(face)
            )));
        }

        let mut max_dist: f64 = 0.0;
        let mut numv = 0;
        for he in self.face_half_edges(face) {
            if numv > self.half_edge_count() {
                return Err(HullError::inconsistency(format!(
                    "face {}: half edge loop does not close",
                    face.0
                )));
            }
            let opp = self.half_edge(he).opposite.ok_or_else(|| {
                HullError::inconsistency(format!(
                    "face {}: unreflected half edge {}",
                    self.face_label(face),
                    self.edge_label(he)
                ))
            })?;
            if self.half_edge(opp).opposite != Some(he) {
                return Err(HullError::inconsistency(format!(
                    "face {}: opposite half edge {} does not reflect {}",
                    self.face_label(face),
                    self.edge_label(opp),
                    self.edge_label(he)
                )));
            }
            if self.head(opp) != self.tail(he) || self.head(he) != self.tail(opp) {
                return Err(HullError::inconsistency(format!(
                    "face {}: half edge {} reflected by {}",
                    self.face_label(face),
                    self.edge_label(he),
                    self.edge_label(opp)
                )));
            }
            let opp_face = self.half_edge(opp).face;
            if opp_face == face {
                return Err(HullError::inconsistency(format!(
                    "face {}: half edge {} borders the face itself",
                    self.face_label(face),
                    self.edge_label(he)
                )));
            }
            if self.face(opp_face).mark == FaceMark::Deleted {
                return Err(HullError::inconsistency(format!(
                    "face {}: opposite face {} not on hull",
                    self.face_label(face),
                    self.face_label(opp_face)
                )));
            }
            max_dist = max_dist.max(f.distance_to_plane(self.point(self.head(he))).abs());
            numv += 1;
        }

        if numv != f.num_verts {
            return Err(HullError::inconsistency(format!(
                "face {} num_verts={} should be {}",
                self.face_label(face),
                f.num_verts,
                numv
            )));
        }
        Ok(max_dist)
    }

    // =========================================================================
    // MERGING
    // =========================================================================

    /// Joins `he_prev -> he` after the edges between them were removed.
    ///
    /// If both border the same neighbour the vertex between them is
    /// redundant: it is cut out, and a triangular neighbour collapses and is
    /// returned as discarded.
    fn connect_half_edges(
        &mut self,
        face: FaceId,
        he_prev: HalfEdgeId,
        he: HalfEdgeId,
    ) -> HullResult<Option<FaceId>> {
        let opp_face = self.opposite_face(he)?;
        if self.opposite_face(he_prev)? != opp_face {
            self.half_edge_mut(he_prev).next = he;
            self.half_edge_mut(he).prev = he_prev;
            return Ok(None);
        }

        let mut discarded = None;
        if self.face(face).he0 == he_prev {
            self.face_mut(face).he0 = he;
        }

        let he_opp = if self.face(opp_face).num_verts == 3 {
            let opp_prev = self.prev(self.opposite(he)?);
            self.face_mut(opp_face).mark = FaceMark::Deleted;
            discarded = Some(opp_face);
            self.opposite(opp_prev)?
        } else {
            let he_opp = self.next(self.opposite(he)?);
            let stale = self.prev(he_opp);
            if self.face(opp_face).he0 == stale {
                self.face_mut(opp_face).he0 = he_opp;
            }
            let new_prev = self.prev(stale);
            self.half_edge_mut(he_opp).prev = new_prev;
            self.half_edge_mut(new_prev).next = he_opp;
            he_opp
        };

        let new_prev = self.prev(he_prev);
        self.half_edge_mut(he).prev = new_prev;
        self.half_edge_mut(new_prev).next = he;
        self.set_opposite(he, he_opp);

        if discarded.is_none() {
            self.compute_normal_and_centroid(opp_face);
        }
        Ok(discarded)
    }

    /// Absorbs the face across `he_adj` into `face`.
    ///
    /// Every face removed along the way (the absorbed neighbour plus any
    /// triangle collapsed while cleaning up redundant vertices) is marked
    /// deleted and appended to `discarded`.
    ///
    /// # Errors
    /// Returns [`HullError::InternalInconsistency`] on an unreflected edge.
    pub fn merge_adjacent_face(
        &mut self,
        face: FaceId,
        he_adj: HalfEdgeId,
        discarded: &mut Vec<FaceId>,
    ) -> HullResult<()> {
        let he_opp = self.opposite(he_adj)?;
        let opp_face = self.half_edge(he_opp).face;
        discarded.push(opp_face);
        self.face_mut(opp_face).mark = FaceMark::Deleted;

        let mut adj_prev = self.prev(he_adj);
        let mut adj_next = self.next(he_adj);
        let mut opp_prev = self.prev(he_opp);
        let mut opp_next = self.next(he_opp);

        // widen to every consecutive edge shared with the neighbour
        while self.opposite_face(adj_prev)? == opp_face {
            adj_prev = self.prev(adj_prev);
            opp_next = self.next(opp_next);
        }
        while self.opposite_face(adj_next)? == opp_face {
            opp_prev = self.prev(opp_prev);
            adj_next = self.next(adj_next);
        }

        let end = self.next(opp_prev);
        let mut he = opp_next;
        while he != end {
            self.half_edge_mut(he).face = face;
            he = self.next(he);
        }

        if self.face(face).he0 == he_adj {
            self.face_mut(face).he0 = adj_next;
        }

        // head side, then tail side
        if let Some(gone) = self.connect_half_edges(face, opp_prev, adj_next)? {
            discarded.push(gone);
        }
        if let Some(gone) = self.connect_half_edges(face, adj_prev, opp_next)? {
            discarded.push(gone);
        }

        self.compute_normal_and_centroid(face);
        Ok(())
    }

    // =========================================================================
    // TRIANGULATION
    // =========================================================================

    /// Splits a polygon into a fan of triangles around the head of `he0`.
    ///
    /// New triangles are appended to `new_faces`; `face` itself shrinks to
    /// the last triangle of the fan. Triangles are left untouched.
    ///
    /// # Errors
    /// Returns [`HullError::InternalInconsistency`] on an unreflected edge.
    pub fn triangulate_face(
        &mut self,
        face: FaceId,
        new_faces: &mut FaceList,
        min_area: f64,
    ) -> HullResult<()> {
        if self.face(face).num_verts < 4 {
            return Ok(());
        }

        let he0 = self.face(face).he0;
        let v0 = self.head(he0);
        let last = self.prev(he0);
        let first = self.next(he0);
        let mut opp_prev = self.opposite(first)?;

        let mut he = self.next(first);
        while he != last {
            let next = self.next(he);
            let (v1, v2) = (self.tail(he), self.head(he));
            let tri = self.create_triangle(v0, v1, v2, min_area);
            let tri_he0 = self.face(tri).he0;
            let tri_he1 = self.next(tri_he0);
            let tri_he2 = self.prev(tri_he0);
            self.set_opposite(tri_he1, opp_prev);
            let he_opp = self.opposite(he)?;
            self.set_opposite(tri_he2, he_opp);
            opp_prev = tri_he0;
            new_faces.add(&mut self.faces, tri);
            he = next;
        }

        // close the remaining triangle he0, v0 -> head(last.prev), last
        let far = self.tail(last);
        let closing = self.add_half_edge(far, face);
        self.set_opposite(closing, opp_prev);
        self.half_edge_mut(closing).prev = he0;
        self.half_edge_mut(he0).next = closing;
        self.half_edge_mut(closing).next = last;
        self.half_edge_mut(last).prev = closing;

        self.compute_normal_and_centroid_min_area(face, min_area);
        Ok(())
    }
}
