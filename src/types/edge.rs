//! Edge entity and the endpoint key that identifies it.

use serde::{Deserialize, Serialize};

/// Ordered (origin, destination) pair of vertex IDs.
///
/// This is the identity of an edge: two edges with the same key are equal
/// regardless of weight. Vertices hold keys, never edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeKey {
    /// Vertex the edge leaves from.
    pub origin: u64,
    /// Vertex the edge arrives at.
    pub destination: u64,
}

impl EdgeKey {
    pub fn new(origin: u64, destination: u64) -> Self {
        Self {
            origin,
            destination,
        }
    }

    /// True if `vertex_id` is either endpoint.
    pub fn touches(&self, vertex_id: u64) -> bool {
        self.origin == vertex_id || self.destination == vertex_id
    }

    /// The endpoint seen from `vertex_id`: the destination when asked from
    /// the origin, the origin otherwise.
    pub fn opposite(&self, vertex_id: u64) -> u64 {
        if vertex_id == self.origin {
            self.destination
        } else {
            self.origin
        }
    }
}

/// A weighted edge between two vertices, owned by the graph's edge collection.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Edge {
    /// Origin vertex ID.
    pub origin: u64,
    /// Destination vertex ID.
    pub destination: u64,
    /// Weight; stored and reported, never used by traversal.
    pub weight: i64,
}

impl Edge {
    /// Create a new edge.
    pub fn new(origin: u64, destination: u64, weight: i64) -> Self {
        Self {
            origin,
            destination,
            weight,
        }
    }

    /// The identity key of this edge.
    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.origin, self.destination)
    }

    /// True if origin and destination coincide.
    pub fn is_self_loop(&self) -> bool {
        self.origin == self.destination
    }

    /// See [`EdgeKey::opposite`].
    pub fn opposite(&self, vertex_id: u64) -> u64 {
        self.key().opposite(vertex_id)
    }
}

/// Equality by endpoint pair, ignoring weight.
impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}
