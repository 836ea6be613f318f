use super::{FaceId, VertexId};
use crate::core::vec3::Vec3;

/// A hull vertex, one per input point.
///
/// `prev`/`next` are owned by whichever [`VertexList`](super::VertexList)
/// currently holds the vertex. `face` names the face whose outside set claims
/// it; the list, not this link, owns the membership.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    /// Position in 3D space
    pub point: Vec3,
    /// Index of the point in the caller's input
    pub original_index: usize,
    /// Set during reindexing when a retained face uses this vertex
    pub retained: bool,
    /// Position in the compacted output vertex array
    pub compacted_index: Option<usize>,
    /// Previous vertex in the owning list
    pub prev: Option<VertexId>,
    /// Next vertex in the owning list
    pub next: Option<VertexId>,
    /// Face whose outside set claims this vertex
    pub face: Option<FaceId>,
}

impl Vertex {
    /// Creates an unlinked vertex
    pub fn new(point: Vec3, original_index: usize) -> Self {
        Self {
            point,
            original_index,
            retained: false,
            compacted_index: None,
            prev: None,
            next: None,
            face: None,
        }
    }
}
