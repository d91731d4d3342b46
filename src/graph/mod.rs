//! In-memory graph operations: the core data structure.

pub mod adjacency;
pub mod builder;
pub mod traversal;

pub use adjacency::AdjacencyGraph;
pub use builder::GraphBuilder;
pub use traversal::{breadth_first, depth_first, Traversal, TraversalOrder, VisitMarks};
