//! Adjacency-list graph: canonical vertex and edge collections with
//! validated insertion and cascading deletion.

use log::debug;

use crate::collections::List;
use crate::types::{Edge, EdgeKey, GraphConfig, GraphError, GraphResult, Vertex};

/// Labelled graph stored as adjacency lists.
///
/// The edge collection owns every edge; each vertex only keeps the
/// [`EdgeKey`]s of the edges incident to it. Insertion order is preserved in
/// both collections.
#[derive(Debug, Clone)]
pub struct AdjacencyGraph {
    /// All vertices, in insertion order, unique by label.
    vertices: List<Vertex>,
    /// All edges, in insertion order, unique by (origin, destination).
    edges: List<Edge>,
    /// Next available vertex ID.
    next_id: u64,
    /// Engine configuration.
    config: GraphConfig,
}

impl AdjacencyGraph {
    /// Create an empty graph with the default configuration.
    pub fn new() -> Self {
        Self::with_config(GraphConfig::default())
    }

    /// Create an empty graph with an explicit configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            vertices: List::new(),
            edges: List::new(),
            next_id: 0,
            config,
        }
    }

    /// Create a graph holding one vertex per label, in order.
    /// Fails on the first repeated label.
    pub fn from_labels<I, S>(labels: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut graph = Self::new();
        for label in labels {
            graph.insert_vertex(label)?;
        }
        Ok(graph)
    }

    /// The engine configuration.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> &List<Vertex> {
        &self.vertices
    }

    /// All edges in insertion order.
    pub fn edges(&self) -> &List<Edge> {
        &self.edges
    }

    /// Vertex at insertion-order position `index`.
    pub fn vertex_at(&self, index: usize) -> GraphResult<&Vertex> {
        self.vertices.get(index)
    }

    /// Edge at insertion-order position `index`.
    pub fn edge_at(&self, index: usize) -> GraphResult<&Edge> {
        self.edges.get(index)
    }

    /// Look up a vertex by label.
    pub fn vertex(&self, label: &str) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.label == label)
    }

    /// Look up a vertex by ID.
    pub fn vertex_by_id(&self, id: u64) -> Option<&Vertex> {
        self.vertices.iter().find(|v| v.id == id)
    }

    fn vertex_by_id_mut(&mut self, id: u64) -> Option<&mut Vertex> {
        self.vertices.iter_mut().find(|v| v.id == id)
    }

    /// Label of the vertex with this ID.
    pub fn label_of(&self, id: u64) -> Option<&str> {
        self.vertex_by_id(id).map(|v| v.label.as_str())
    }

    fn require(&self, label: &str) -> GraphResult<&Vertex> {
        self.vertex(label)
            .ok_or_else(|| GraphError::VertexNotFound(label.to_string()))
    }

    /// Vertex labels in insertion order.
    pub fn vertex_labels(&self) -> List<String> {
        self.vertices.iter().map(|v| v.label.clone()).collect()
    }

    /// True if a vertex with this label exists.
    pub fn contains_vertex(&self, label: &str) -> bool {
        self.vertex(label).is_some()
    }

    /// The canonical edge with this key.
    pub fn edge_by_key(&self, key: &EdgeKey) -> Option<&Edge> {
        self.edges.iter().find(|e| e.key() == *key)
    }

    /// The edge from `origin` to `destination`, if any.
    pub fn find_edge(&self, origin: &str, destination: &str) -> Option<&Edge> {
        let origin = self.vertex(origin)?;
        let destination = self.vertex(destination)?;
        self.edge_by_key(&EdgeKey::new(origin.id, destination.id))
    }

    /// True if an edge from `origin` to `destination` exists.
    pub fn contains_edge(&self, origin: &str, destination: &str) -> bool {
        self.find_edge(origin, destination).is_some()
    }

    /// Add a vertex; fails if the label is taken. Returns the assigned ID.
    pub fn insert_vertex(&mut self, label: impl Into<String>) -> GraphResult<u64> {
        let label = label.into();
        if self.contains_vertex(&label) {
            debug!("rejected vertex {:?}: label taken", label);
            return Err(GraphError::DuplicateVertex(label));
        }

        let id = self.next_id;
        self.next_id += 1;
        debug!("inserted vertex {:?} as #{}", label, id);
        self.vertices.push_back(Vertex::new(id, label));

        Ok(id)
    }

    /// Add an edge with the configured default weight.
    pub fn insert_edge(&mut self, origin: &str, destination: &str) -> GraphResult<EdgeKey> {
        self.insert_weighted_edge(origin, destination, self.config.default_weight)
    }

    /// Add an edge between two existing vertices.
    pub fn insert_weighted_edge(
        &mut self,
        origin: &str,
        destination: &str,
        weight: i64,
    ) -> GraphResult<EdgeKey> {
        // Validate: no self-loops
        if origin == destination {
            debug!("rejected edge {:?} -> {:?}: self-loop", origin, destination);
            return Err(GraphError::SelfLoop(origin.to_string()));
        }

        let origin_vertex = self.require(origin)?;
        let destination_vertex = self.require(destination)?;
        let edge = Edge::new(origin_vertex.id, destination_vertex.id, weight);
        let key = edge.key();

        // Validate: neither endpoint nor the canonical collection knows the pair
        if origin_vertex.has_edge(&key)
            || destination_vertex.has_edge(&key)
            || self.edges.contains(&edge)
        {
            debug!("rejected edge {:?} -> {:?}: duplicate", origin, destination);
            return Err(GraphError::DuplicateEdge {
                origin: origin.to_string(),
                destination: destination.to_string(),
            });
        }

        self.edges.push_back(edge);
        self.attach(key);
        debug!(
            "inserted edge {:?} -> {:?} (weight {})",
            origin, destination, weight
        );

        Ok(key)
    }

    /// Remove a vertex and every edge incident to it.
    pub fn delete_vertex(&mut self, label: &str) -> GraphResult<Vertex> {
        let index = self
            .vertices
            .position(|v| v.label == label)
            .ok_or_else(|| GraphError::VertexNotFound(label.to_string()))?;
        let id = self.vertices.get(index)?.id;

        let doomed: List<EdgeKey> = self
            .edges
            .iter()
            .map(Edge::key)
            .filter(|key| key.touches(id))
            .collect();
        for key in &doomed {
            self.remove_edge_by_key(key);
        }

        let removed = self.vertices.remove(index)?;
        debug!(
            "deleted vertex {:?} and {} incident edge(s)",
            label,
            doomed.len()
        );

        Ok(removed)
    }

    /// Remove the edge from `origin` to `destination`.
    pub fn delete_edge(&mut self, origin: &str, destination: &str) -> GraphResult<Edge> {
        let not_found = || GraphError::EdgeNotFound {
            origin: origin.to_string(),
            destination: destination.to_string(),
        };
        let key = match (self.vertex(origin), self.vertex(destination)) {
            (Some(o), Some(d)) => EdgeKey::new(o.id, d.id),
            _ => return Err(not_found()),
        };

        let removed = self.remove_edge_by_key(&key).ok_or_else(not_found)?;
        debug!("deleted edge {:?} -> {:?}", origin, destination);
        Ok(removed)
    }

    /// Canonical edges incident to the labelled vertex, in attachment order.
    pub fn incident_edges(&self, label: &str) -> GraphResult<List<&Edge>> {
        let vertex = self.require(label)?;
        Ok(vertex
            .incident_edges()
            .iter()
            .filter_map(|key| self.edge_by_key(key))
            .collect())
    }

    /// Neighbours of the labelled vertex under the configured rule, one per
    /// incident edge.
    pub fn neighbors(&self, label: &str) -> GraphResult<List<&Vertex>> {
        let vertex = self.require(label)?;
        Ok(self
            .neighbor_ids(vertex)
            .iter()
            .filter_map(|&id| self.vertex_by_id(id))
            .collect())
    }

    pub(crate) fn neighbor_ids(&self, vertex: &Vertex) -> List<u64> {
        vertex.neighbors(self.config.neighbor_rule)
    }

    fn attach(&mut self, key: EdgeKey) {
        if let Some(origin) = self.vertex_by_id_mut(key.origin) {
            origin.attach(key);
        }
        if let Some(destination) = self.vertex_by_id_mut(key.destination) {
            destination.attach(key);
        }
    }

    fn detach(&mut self, key: &EdgeKey) {
        if let Some(origin) = self.vertex_by_id_mut(key.origin) {
            origin.detach(key);
        }
        if let Some(destination) = self.vertex_by_id_mut(key.destination) {
            destination.detach(key);
        }
    }

    /// Remove from both endpoints and from the canonical collection.
    fn remove_edge_by_key(&mut self, key: &EdgeKey) -> Option<Edge> {
        let index = self.edges.position(|e| e.key() == *key)?;
        self.detach(key);
        self.edges.remove(index).ok()
    }
}

impl Default for AdjacencyGraph {
    fn default() -> Self {
        Self::new()
    }
}
