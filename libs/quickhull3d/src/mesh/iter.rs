//! Read-only traversal helpers.

use super::{FaceId, HalfEdgeId, HullMesh, VertexId};

/// Walks half-edges through `next` from `from` up to, but excluding, `to`.
///
/// When `from == to` the whole loop is visited once.
#[derive(Debug, Clone)]
pub struct HalfEdgeRange<'a> {
    mesh: &'a HullMesh,
    current: Option<HalfEdgeId>,
    end: HalfEdgeId,
}

impl Iterator for HalfEdgeRange<'_> {
    type Item = HalfEdgeId;

    fn next(&mut self) -> Option<HalfEdgeId> {
        let current = self.current?;
        let next = self.mesh.next(current);
        self.current = (next != self.end).then_some(next);
        Some(current)
    }
}

/// Walks a vertex chain through `Vertex::next` until it ends.
#[derive(Debug, Clone)]
pub struct VertexChain<'a> {
    mesh: &'a HullMesh,
    current: Option<VertexId>,
}

impl Iterator for VertexChain<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        let current = self.current?;
        self.current = self.mesh.vertex(current).next;
        Some(current)
    }
}

/// Walks a face chain through `Face::next` until it ends.
#[derive(Debug, Clone)]
pub struct FaceChain<'a> {
    mesh: &'a HullMesh,
    current: Option<FaceId>,
}

impl Iterator for FaceChain<'_> {
    type Item = FaceId;

    fn next(&mut self) -> Option<FaceId> {
        let current = self.current?;
        self.current = self.mesh.face(current).next;
        Some(current)
    }
}

impl HullMesh {
    /// Every half-edge of the loop containing `start`, beginning at `start`
    pub fn half_edge_loop(&self, start: HalfEdgeId) -> HalfEdgeRange<'_> {
        self.half_edge_range(start, start)
    }

    /// Half-edges from `from` up to, but excluding, `to`
    pub fn half_edge_range(&self, from: HalfEdgeId, to: HalfEdgeId) -> HalfEdgeRange<'_> {
        HalfEdgeRange {
            mesh: self,
            current: Some(from),
            end: to,
        }
    }

    /// Half-edges of a face, beginning at its `he0`
    pub fn face_half_edges(&self, face: FaceId) -> HalfEdgeRange<'_> {
        self.half_edge_loop(self.face(face).he0)
    }

    /// Head vertices of a face, counter-clockwise from the head of `he0`
    pub fn face_vertices(&self, face: FaceId) -> impl Iterator<Item = VertexId> + '_ {
        self.face_half_edges(face).map(move |he| self.head(he))
    }

    /// Vertices linked from `first`
    pub fn vertex_chain(&self, first: Option<VertexId>) -> VertexChain<'_> {
        VertexChain {
            mesh: self,
            current: first,
        }
    }

    /// Faces linked from `first`
    pub fn face_chain(&self, first: Option<FaceId>) -> FaceChain<'_> {
        FaceChain {
            mesh: self,
            current: first,
        }
    }
}
