//! Fluent API for building AdjacencyGraph instances.

use crate::types::{GraphConfig, GraphResult};

use super::AdjacencyGraph;

/// Fluent builder for constructing an AdjacencyGraph.
///
/// Nothing is validated until [`GraphBuilder::build`], which replays the
/// recorded vertices and then the edges, failing on the first rejection.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    config: GraphConfig,
    labels: Vec<String>,
    edges: Vec<(String, String, Option<i64>)>,
}

impl GraphBuilder {
    /// Create a new builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder with a specific configuration.
    pub fn with_config(config: GraphConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Add a vertex.
    pub fn vertex(&mut self, label: impl Into<String>) -> &mut Self {
        self.labels.push(label.into());
        self
    }

    /// Add several vertices, in order.
    pub fn vertices<I, S>(&mut self, labels: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels.extend(labels.into_iter().map(Into::into));
        self
    }

    /// Add an edge with the configured default weight.
    pub fn edge(&mut self, origin: impl Into<String>, destination: impl Into<String>) -> &mut Self {
        self.edges.push((origin.into(), destination.into(), None));
        self
    }

    /// Add an edge with an explicit weight.
    pub fn weighted_edge(
        &mut self,
        origin: impl Into<String>,
        destination: impl Into<String>,
        weight: i64,
    ) -> &mut Self {
        self.edges
            .push((origin.into(), destination.into(), Some(weight)));
        self
    }

    /// Build the final AdjacencyGraph.
    pub fn build(self) -> GraphResult<AdjacencyGraph> {
        let mut graph = AdjacencyGraph::with_config(self.config);
        for label in self.labels {
            graph.insert_vertex(label)?;
        }
        for (origin, destination, weight) in self.edges {
            match weight {
                Some(w) => graph.insert_weighted_edge(&origin, &destination, w)?,
                None => graph.insert_edge(&origin, &destination)?,
            };
        }
        Ok(graph)
    }
}
