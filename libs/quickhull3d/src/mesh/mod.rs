//! # Hull Mesh
//!
//! Mutable half-edge mesh used while the hull is under construction.
//!
//! ## Structure
//!
//! - Vertices, half-edges and faces live in growable arenas and refer to each
//!   other through copyable integer handles (`VertexId`, `HalfEdgeId`,
//!   `FaceId`)
//! - Each face owns a closed counter-clockwise loop of half-edges reached
//!   through `he0`
//! - Each half-edge stores its head vertex; its tail is the head of `prev`
//! - Deleted faces are only marked; their half-edges become unreachable and
//!   are dropped with the arena
//!
//! ## Invariants (VISIBLE faces)
//!
//! - The loop is closed and its length equals `num_verts` (at least 3)
//! - Every half-edge has an opposite whose opposite is itself, and whose
//!   face is not deleted
//! - All loop vertices lie on the face plane within the tolerance

mod face;
mod half_edge;
mod iter;
mod lists;
mod vertex;

#[cfg(test)]
mod tests;

pub use face::{Face, FaceMark};
pub use half_edge::HalfEdge;
pub use iter::{FaceChain, HalfEdgeRange, VertexChain};
pub use lists::{FaceList, VertexList};
pub use vertex::Vertex;

use crate::core::vec3::Vec3;

/// Unique identifier for vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct VertexId(pub u32);

/// Unique identifier for half-edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HalfEdgeId(pub u32);

/// Unique identifier for faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(pub u32);

impl VertexId {
    /// Position of the vertex in the arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl HalfEdgeId {
    /// Position of the half-edge in the arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl FaceId {
    /// Position of the face in the arena.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Arena-backed half-edge mesh.
///
/// Handles are only minted by the arena itself, so lookups index directly.
/// Links that may legitimately be absent (`opposite`) are exposed through
/// fallible accessors instead.
#[derive(Debug, Clone, Default)]
pub struct HullMesh {
    /// Vertex storage, one per input point
    vertices: Vec<Vertex>,
    /// Half-edge storage
    half_edges: Vec<HalfEdge>,
    /// Face storage, including deleted faces
    faces: Vec<Face>,
}

impl HullMesh {
    /// Creates a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new mesh with room for `points` vertices
    pub fn with_capacity(points: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(points),
            // A hull over n points has at most 2n - 4 triangles
            half_edges: Vec::with_capacity(points * 6),
            faces: Vec::with_capacity(points * 2),
        }
    }

    /// Drops every vertex, half-edge and face while keeping the allocations
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.half_edges.clear();
        self.faces.clear();
    }

    /// Adds a vertex for the input point at `original_index`
    pub fn add_vertex(&mut self, point: Vec3, original_index: usize) -> VertexId {
        let id = VertexId(self.vertices.len() as u32);
        self.vertices.push(Vertex::new(point, original_index));
        id
    }

    /// Adds a half-edge with the given head whose `next`/`prev` point at
    /// itself until it is linked into a loop
    pub(crate) fn add_half_edge(&mut self, vertex: VertexId, face: FaceId) -> HalfEdgeId {
        let id = HalfEdgeId(self.half_edges.len() as u32);
        self.half_edges.push(HalfEdge::new(vertex, face, id));
        id
    }

    /// Gets a vertex by ID
    #[inline]
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id.index()]
    }

    /// Gets a mutable vertex by ID
    #[inline]
    pub fn vertex_mut(&mut self, id: VertexId) -> &mut Vertex {
        &mut self.vertices[id.index()]
    }

    /// Gets a half-edge by ID
    #[inline]
    pub fn half_edge(&self, id: HalfEdgeId) -> &HalfEdge {
        &self.half_edges[id.index()]
    }

    /// Gets a mutable half-edge by ID
    #[inline]
    pub fn half_edge_mut(&mut self, id: HalfEdgeId) -> &mut HalfEdge {
        &mut self.half_edges[id.index()]
    }

    /// Gets a face by ID
    #[inline]
    pub fn face(&self, id: FaceId) -> &Face {
        &self.faces[id.index()]
    }

    /// Gets a mutable face by ID
    #[inline]
    pub fn face_mut(&mut self, id: FaceId) -> &mut Face {
        &mut self.faces[id.index()]
    }

    /// All vertices, in input order
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Mutable vertex storage, used by the intrusive vertex lists
    #[inline]
    pub fn vertices_mut(&mut self) -> &mut [Vertex] {
        &mut self.vertices
    }

    /// Mutable face storage, used by the intrusive face list
    #[inline]
    pub fn faces_mut(&mut self) -> &mut [Face] {
        &mut self.faces
    }

    /// Position of a vertex
    #[inline]
    pub fn point(&self, id: VertexId) -> Vec3 {
        self.vertices[id.index()].point
    }

    /// Returns the number of vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of half-edges ever allocated
    pub fn half_edge_count(&self) -> usize {
        self.half_edges.len()
    }

    /// Returns the number of faces ever allocated, deleted ones included
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }
}
