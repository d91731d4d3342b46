//! Vertex entity.

use std::fmt;

use crate::collections::List;

use super::{EdgeKey, NeighborRule};

/// A labelled vertex. The label is its identity; the incident-edge list is a
/// cache of keys into the graph's canonical edge collection.
#[derive(Debug, Clone)]
pub struct Vertex {
    /// Stable ID, never reused within one graph.
    pub id: u64,
    /// Unique label.
    pub label: String,
    incident: List<EdgeKey>,
}

impl Vertex {
    pub(crate) fn new(id: u64, label: String) -> Self {
        Self {
            id,
            label,
            incident: List::new(),
        }
    }

    /// True if an edge with this endpoint pair is attached.
    pub fn has_edge(&self, key: &EdgeKey) -> bool {
        self.incident.contains(key)
    }

    /// Attach an edge key unless already present.
    pub(crate) fn attach(&mut self, key: EdgeKey) {
        if !self.has_edge(&key) {
            self.incident.push_back(key);
        }
    }

    /// Detach an edge key. Returns false if it was not attached.
    pub(crate) fn detach(&mut self, key: &EdgeKey) -> bool {
        self.incident.remove_item(key).is_some()
    }

    /// Incident edges in attachment order.
    pub fn incident_edges(&self) -> &List<EdgeKey> {
        &self.incident
    }

    /// Number of incident edges.
    pub fn degree(&self) -> usize {
        self.incident.len()
    }

    /// Neighbour IDs, one per incident edge, in attachment order.
    pub fn neighbors(&self, rule: NeighborRule) -> List<u64> {
        self.incident
            .iter()
            .map(|key| match rule {
                NeighborRule::Destination => key.destination,
                NeighborRule::Opposite => key.opposite(self.id),
            })
            .collect()
    }
}

/// Vertices are equal iff their labels are equal.
impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl Eq for Vertex {}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex: {}", self.label)
    }
}
