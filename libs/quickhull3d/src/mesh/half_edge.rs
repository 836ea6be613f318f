use super::{FaceId, HalfEdgeId, HullMesh, VertexId};
use crate::error::{HullError, HullResult};

/// Half-edge data structure
///
/// Directed edge of a face loop, running counter-clockwise around `face`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfEdge {
    /// Head vertex of this half-edge
    pub vertex: VertexId,
    /// Face to the left of this half-edge
    pub face: FaceId,
    /// Next half-edge counter-clockwise around the face
    pub next: HalfEdgeId,
    /// Previous half-edge around the face
    pub prev: HalfEdgeId,
    /// Reverse half-edge bordering the adjacent face
    pub opposite: Option<HalfEdgeId>,
}

impl HalfEdge {
    /// Creates a half-edge linked to itself
    pub(crate) fn new(vertex: VertexId, face: FaceId, id: HalfEdgeId) -> Self {
        Self {
            vertex,
            face,
            next: id,
            prev: id,
            opposite: None,
        }
    }
}

impl HullMesh {
    /// Head vertex of a half-edge
    #[inline]
    pub fn head(&self, he: HalfEdgeId) -> VertexId {
        self.half_edge(he).vertex
    }

    /// Tail vertex of a half-edge (the head of its predecessor)
    #[inline]
    pub fn tail(&self, he: HalfEdgeId) -> VertexId {
        self.half_edge(self.half_edge(he).prev).vertex
    }

    /// Next half-edge around the face
    #[inline]
    pub fn next(&self, he: HalfEdgeId) -> HalfEdgeId {
        self.half_edge(he).next
    }

    /// Previous half-edge around the face
    #[inline]
    pub fn prev(&self, he: HalfEdgeId) -> HalfEdgeId {
        self.half_edge(he).prev
    }

    /// Opposite half-edge, failing if the edge is unreflected
    pub fn opposite(&self, he: HalfEdgeId) -> HullResult<HalfEdgeId> {
        self.half_edge(he).opposite.ok_or_else(|| {
            HullError::inconsistency(format!("unreflected half edge {}", self.edge_label(he)))
        })
    }

    /// Face on the other side of a half-edge
    pub fn opposite_face(&self, he: HalfEdgeId) -> HullResult<FaceId> {
        Ok(self.half_edge(self.opposite(he)?).face)
    }

    /// Pairs two half-edges as each other's opposite
    pub fn set_opposite(&mut self, he: HalfEdgeId, other: HalfEdgeId) {
        self.half_edge_mut(he).opposite = Some(other);
        self.half_edge_mut(other).opposite = Some(he);
    }

    /// Squared length of a half-edge
    pub fn edge_length_squared(&self, he: HalfEdgeId) -> f64 {
        self.point(self.head(he))
            .distance_squared(self.point(self.tail(he)))
    }

    /// Length of a half-edge
    pub fn edge_length(&self, he: HalfEdgeId) -> f64 {
        self.edge_length_squared(he).sqrt()
    }

    /// `tail-head` label using input point indices
    pub fn edge_label(&self, he: HalfEdgeId) -> String {
        format!(
            "{}-{}",
            self.vertex(self.tail(he)).original_index,
            self.vertex(self.head(he)).original_index
        )
    }
}
