//! Multi-line text rendering of a graph.

use std::fmt::{self, Write};

use crate::graph::AdjacencyGraph;
use crate::types::{Edge, Vertex};

/// One line for an edge, optionally with its weight:
/// `Edge between vertices {Vertex: A, Vertex: B}`.
pub fn edge_line(graph: &AdjacencyGraph, edge: &Edge, with_weight: bool) -> String {
    let mut line = String::new();
    match write_edge(&mut line, graph, edge, with_weight) {
        Ok(()) => line,
        Err(_) => String::new(),
    }
}

fn write_edge<W: Write>(
    out: &mut W,
    graph: &AdjacencyGraph,
    edge: &Edge,
    with_weight: bool,
) -> fmt::Result {
    write!(
        out,
        "Edge between vertices {{{}, {}}}",
        display_or_id(graph.vertex_by_id(edge.origin), edge.origin),
        display_or_id(graph.vertex_by_id(edge.destination), edge.destination)
    )?;
    if with_weight {
        write!(out, ", with weight {}", edge.weight)?;
    }
    Ok(())
}

fn display_or_id(vertex: Option<&Vertex>, id: u64) -> String {
    match vertex {
        Some(v) => v.to_string(),
        None => format!("#{}", id),
    }
}

/// Per vertex: its display line, one line per incident edge, then the
/// labels on the far side of those edges.
pub struct Summary<'a> {
    graph: &'a AdjacencyGraph,
    with_weights: bool,
}

impl<'a> Summary<'a> {
    pub fn new(graph: &'a AdjacencyGraph, with_weights: bool) -> Self {
        Self {
            graph,
            with_weights,
        }
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let graph = self.graph;
        for vertex in graph.vertices() {
            writeln!(f, "{}", vertex)?;
            for key in vertex.incident_edges() {
                if let Some(edge) = graph.edge_by_key(key) {
                    write_edge(f, graph, edge, self.with_weights)?;
                    writeln!(f)?;
                }
            }
            write!(f, "Neighbors of {} -> ", vertex)?;
            for label in adjacent_labels(graph, vertex) {
                write!(f, "{} ", label)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Labels at the opposite end of each incident edge, in attachment order.
pub fn adjacent_labels<'a>(graph: &'a AdjacencyGraph, vertex: &Vertex) -> Vec<&'a str> {
    vertex
        .incident_edges()
        .iter()
        .filter_map(|key| graph.label_of(key.opposite(vertex.id)))
        .collect()
}

pub fn render(graph: &AdjacencyGraph, with_weights: bool) -> String {
    Summary::new(graph, with_weights).to_string()
}

impl AdjacencyGraph {
    /// Text summary of every vertex, its edges and its adjacent labels.
    pub fn summary(&self) -> String {
        render(self, false)
    }

    /// Like [`AdjacencyGraph::summary`], with edge weights.
    pub fn summary_with_weights(&self) -> String {
        render(self, true)
    }
}
