//! Intrusive lists threaded through the vertex and face arenas.
//!
//! The lists only hold head/tail handles; the links themselves live on the
//! elements, so every operation takes the arena slice it threads through.

use super::{Face, FaceId, Vertex, VertexId};

/// Doubly-linked list of vertices.
///
/// Used for the claimed outside sets (each face's outside points form a
/// contiguous run starting at `Face::outside`) and for the unclaimed pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VertexList {
    head: Option<VertexId>,
    tail: Option<VertexId>,
}

impl VertexList {
    /// Creates an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets every element; element links are left as they are
    pub fn clear(&mut self) {
        self.head = None;
        self.tail = None;
    }

    /// Appends a vertex
    pub fn add(&mut self, vertices: &mut [Vertex], vtx: VertexId) {
        match self.tail {
            None => self.head = Some(vtx),
            Some(tail) => vertices[tail.index()].next = Some(vtx),
        }
        let v = &mut vertices[vtx.index()];
        v.prev = self.tail;
        v.next = None;
        self.tail = Some(vtx);
    }

    /// Appends a chain of vertices linked through `next` and ending in `None`
    pub fn add_all(&mut self, vertices: &mut [Vertex], first: VertexId) {
        match self.tail {
            None => self.head = Some(first),
            Some(tail) => vertices[tail.index()].next = Some(first),
        }
        vertices[first.index()].prev = self.tail;
        let mut last = first;
        while let Some(next) = vertices[last.index()].next {
            last = next;
        }
        self.tail = Some(last);
    }

    /// Unlinks one vertex
    pub fn delete(&mut self, vertices: &mut [Vertex], vtx: VertexId) {
        self.delete_range(vertices, vtx, vtx);
    }

    /// Unlinks the run `first..=last`; the run keeps its internal links
    pub fn delete_range(&mut self, vertices: &mut [Vertex], first: VertexId, last: VertexId) {
        let before = vertices[first.index()].prev;
        let after = vertices[last.index()].next;
        match before {
            None => self.head = after,
            Some(prev) => vertices[prev.index()].next = after,
        }
        match after {
            None => self.tail = before,
            Some(next) => vertices[next.index()].prev = before,
        }
    }

    /// Inserts `vtx` immediately before `next`
    pub fn insert_before(&mut self, vertices: &mut [Vertex], vtx: VertexId, next: VertexId) {
        let before = vertices[next.index()].prev;
        match before {
            None => self.head = Some(vtx),
            Some(prev) => vertices[prev.index()].next = Some(vtx),
        }
        let v = &mut vertices[vtx.index()];
        v.prev = before;
        v.next = Some(next);
        vertices[next.index()].prev = Some(vtx);
    }

    /// First element
    pub fn first(&self) -> Option<VertexId> {
        self.head
    }

    /// Returns true if the list is empty
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

/// Singly-linked queue of faces, threaded through `Face::next`.
///
/// Holds the faces created during one insertion round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaceList {
    head: Option<FaceId>,
    tail: Option<FaceId>,
}

impl FaceList {
    /// Creates an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets every element
    pub fn clear(&mut self) {
        self.head = None;
        self.tail = None;
    }

    /// Appends a face
    pub fn add(&mut self, faces: &mut [Face], face: FaceId) {
        match self.tail {
            None => self.head = Some(face),
            Some(tail) => faces[tail.index()].next = Some(face),
        }
        faces[face.index()].next = None;
        self.tail = Some(face);
    }

    /// First element
    pub fn first(&self) -> Option<FaceId> {
        self.head
    }

    /// Returns true if the list is empty
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}
