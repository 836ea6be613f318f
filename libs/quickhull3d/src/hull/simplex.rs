//! Tolerance derivation and the initial tetrahedron.

use super::QuickHull3d;
use crate::core::vec3::{coordinate_magnitude, line_distance_squared, normalize, Vec3};
use crate::error::{Degeneracy, HullError, HullResult};
use crate::mesh::{FaceId, VertexId};
use config::constants::DEGENERACY_SCALE;
use tracing::trace;

impl QuickHull3d {
    /// Records the extreme vertex on each axis, then derives the
    /// characteristic length and the distance tolerance from the bounding
    /// box.
    pub(super) fn compute_max_and_min(&mut self) {
        let first = VertexId(0);
        self.max_vtxs = [first; 3];
        self.min_vtxs = [first; 3];
        let mut max = self.mesh.point(first);
        let mut min = max;

        for i in 1..self.num_points {
            let id = VertexId(i as u32);
            let p = self.mesh.point(id);
            for axis in 0..3 {
                if p[axis] > max[axis] {
                    max[axis] = p[axis];
                    self.max_vtxs[axis] = id;
                } else if p[axis] < min[axis] {
                    min[axis] = p[axis];
                    self.min_vtxs[axis] = id;
                }
            }
        }

        self.char_length = (max - min).max_element();
        self.tolerance = self
            .config
            .tolerance
            .resolve(coordinate_magnitude(min, max));
    }

    /// Builds the starting tetrahedron and hands every other point to the
    /// face it lies farthest outside of.
    ///
    /// # Errors
    /// Returns [`HullError::DegenerateInput`] when no tetrahedron with a
    /// volume clearly above the tolerance exists.
    pub(super) fn create_initial_simplex(&mut self) -> HullResult<()> {
        let tol = self.tolerance;

        // widest axis gives the first edge
        let mut max = 0.0;
        let mut imax = 0;
        for axis in 0..3 {
            let diff =
                self.mesh.point(self.max_vtxs[axis])[axis] - self.mesh.point(self.min_vtxs[axis])[axis];
            if diff > max {
                max = diff;
                imax = axis;
            }
        }
        if max <= tol {
            return Err(HullError::DegenerateInput(Degeneracy::Coincident));
        }
        let v0 = self.max_vtxs[imax];
        let v1 = self.min_vtxs[imax];

        // farthest point from the line v0-v1
        let p0 = self.mesh.point(v0);
        let u01 = normalize(self.mesh.point(v1) - p0);
        let mut max_sqr = 0.0;
        let mut third = None;
        let mut nrml = Vec3::ZERO;
        for vtx in self.vertex_ids() {
            let (len_sqr, xprod) = line_distance_squared(self.mesh.point(vtx), p0, u01);
            if len_sqr > max_sqr && vtx != v0 && vtx != v1 {
                max_sqr = len_sqr;
                third = Some(vtx);
                nrml = xprod;
            }
        }
        let v2 = match third {
            Some(v2) if max_sqr.sqrt() > DEGENERACY_SCALE * tol => v2,
            _ => return Err(HullError::DegenerateInput(Degeneracy::Collinear)),
        };

        // farthest point from the plane v0-v1-v2
        let nrml = normalize(nrml);
        let d0 = self.mesh.point(v2).dot(nrml);
        let mut max_dist = 0.0;
        let mut fourth = None;
        for vtx in self.vertex_ids() {
            let dist = (self.mesh.point(vtx).dot(nrml) - d0).abs();
            if dist > max_dist && vtx != v0 && vtx != v1 && vtx != v2 {
                max_dist = dist;
                fourth = Some(vtx);
            }
        }
        let v3 = match fourth {
            Some(v3) if max_dist > DEGENERACY_SCALE * tol => v3,
            _ => return Err(HullError::DegenerateInput(Degeneracy::Coplanar)),
        };

        let tris = self.stitch_tetrahedron([v0, v1, v2, v3], self.mesh.point(v3).dot(nrml) - d0 < 0.0);
        trace!(
            v0 = v0.0,
            v1 = v1.0,
            v2 = v2.0,
            v3 = v3.0,
            "initial simplex"
        );

        for vtx in self.vertex_ids() {
            if vtx == v0 || vtx == v1 || vtx == v2 || vtx == v3 {
                continue;
            }
            let p = self.mesh.point(vtx);
            let mut max_dist = tol;
            let mut max_face = None;
            for &face in &tris {
                let dist = self.mesh.face(face).distance_to_plane(p);
                if dist > max_dist {
                    max_face = Some(face);
                    max_dist = dist;
                }
            }
            if let Some(face) = max_face {
                self.add_point_to_face(vtx, face);
            }
        }
        Ok(())
    }

    /// Creates the four faces of the tetrahedron with outward normals and
    /// pairs all six edges. `v3_below` tells whether `v3` lies on the
    /// negative side of the `v0 v1 v2` plane.
    fn stitch_tetrahedron(&mut self, v: [VertexId; 4], v3_below: bool) -> [FaceId; 4] {
        let [v0, v1, v2, v3] = v;
        let mesh = &mut self.mesh;
        if v3_below {
            let tris = [
                mesh.create_triangle(v0, v1, v2, 0.0),
                mesh.create_triangle(v3, v1, v0, 0.0),
                mesh.create_triangle(v3, v2, v1, 0.0),
                mesh.create_triangle(v3, v0, v2, 0.0),
            ];
            for i in 0..3 {
                let k = (i + 1) % 3;
                let a = mesh.get_edge(tris[i + 1], 1);
                let b = mesh.get_edge(tris[k + 1], 0);
                mesh.set_opposite(a, b);
                let a = mesh.get_edge(tris[i + 1], 2);
                let b = mesh.get_edge(tris[0], k as isize);
                mesh.set_opposite(a, b);
            }
            tris
        } else {
            let tris = [
                mesh.create_triangle(v0, v2, v1, 0.0),
                mesh.create_triangle(v3, v0, v1, 0.0),
                mesh.create_triangle(v3, v1, v2, 0.0),
                mesh.create_triangle(v3, v2, v0, 0.0),
            ];
            for i in 0..3 {
                let k = (i + 1) % 3;
                let a = mesh.get_edge(tris[i + 1], 0);
                let b = mesh.get_edge(tris[k + 1], 1);
                mesh.set_opposite(a, b);
                let a = mesh.get_edge(tris[i + 1], 2);
                let b = mesh.get_edge(tris[0], ((3 - i) % 3) as isize);
                mesh.set_opposite(a, b);
            }
            tris
        }
    }

    /// Handles of every input vertex, in input order
    pub(super) fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.num_points as u32).map(VertexId)
    }
}
