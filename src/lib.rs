//! adjgraph: labelled graphs stored as adjacency lists.
//!
//! Vertices and weighted edges are kept in singly-linked sequences, with
//! validated insertion, cascading deletion and depth-first / breadth-first
//! traversal from the first inserted vertex.

pub mod cli;
pub mod collections;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use collections::{List, Queue, Stack};
pub use format::{EdgeRecord, GraphSnapshot};
pub use graph::{AdjacencyGraph, GraphBuilder, Traversal, TraversalOrder, VisitMarks};
pub use types::{
    Edge, EdgeKey, GraphConfig, GraphError, GraphResult, NeighborRule, Vertex, DEFAULT_WEIGHT,
};
