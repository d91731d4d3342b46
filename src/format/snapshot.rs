//! JSON description of a graph: ordered labels plus ordered edges.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::{AdjacencyGraph, GraphBuilder};
use crate::types::{GraphConfig, GraphResult};

/// One edge, by endpoint labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub origin: String,
    pub destination: String,
    /// Omitted means the configured default weight.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
}

/// Serializable graph description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Labels in insertion order.
    pub vertices: Vec<String>,
    /// Edges in insertion order.
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl GraphSnapshot {
    /// Describe an existing graph. Edges always carry their weight.
    pub fn capture(graph: &AdjacencyGraph) -> Self {
        let vertices = graph.vertex_labels().into_iter().collect();
        let edges = graph
            .edges()
            .iter()
            .filter_map(|edge| {
                Some(EdgeRecord {
                    origin: graph.label_of(edge.origin)?.to_string(),
                    destination: graph.label_of(edge.destination)?.to_string(),
                    weight: Some(edge.weight),
                })
            })
            .collect();
        Self { vertices, edges }
    }

    /// Replay the description into a new graph, failing on the first
    /// rejected vertex or edge.
    pub fn into_graph(self, config: GraphConfig) -> GraphResult<AdjacencyGraph> {
        let mut builder = GraphBuilder::with_config(config);
        builder.vertices(self.vertices);
        for record in self.edges {
            match record.weight {
                Some(w) => builder.weighted_edge(record.origin, record.destination, w),
                None => builder.edge(record.origin, record.destination),
            };
        }
        builder.build()
    }

    pub fn from_json(json: &str) -> GraphResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self, pretty: bool) -> GraphResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }

    /// Read a snapshot from a JSON file.
    pub fn read_from_file(path: &Path) -> GraphResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Write a snapshot to a JSON file.
    pub fn write_to_file(&self, path: &Path, pretty: bool) -> GraphResult<()> {
        std::fs::write(path, self.to_json(pretty)?)?;
        Ok(())
    }
}
