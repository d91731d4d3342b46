//! Graph traversal algorithms (DFS, BFS).
//!
//! Both walks start at the first inserted vertex. Among several unvisited
//! neighbours the one inserted earliest into the graph wins, regardless of
//! edge order. Visit state lives in a [`VisitMarks`] owned by the caller, so
//! any number of traversals can run over a shared `&AdjacencyGraph`.

use std::collections::HashSet;
use std::fmt;

use log::{debug, trace};

use crate::collections::{List, Queue, Stack};
use crate::types::{GraphError, GraphResult};

use super::AdjacencyGraph;

/// Which traversal to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Explicit-stack depth-first walk.
    DepthFirst,
    /// Queue-driven breadth-first walk.
    BreadthFirst,
}

impl TraversalOrder {
    pub fn name(&self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
            Self::BreadthFirst => "bfs",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "dfs" | "depth" | "depth_first" => Some(Self::DepthFirst),
            "bfs" | "breadth" | "breadth_first" => Some(Self::BreadthFirst),
            _ => None,
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Per-traversal visited set.
#[derive(Debug, Default, Clone)]
pub struct VisitMarks {
    visited: HashSet<u64>,
}

impl VisitMarks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a vertex; returns false if it was already marked.
    pub fn mark(&mut self, id: u64) -> bool {
        self.visited.insert(id)
    }

    pub fn is_visited(&self, id: u64) -> bool {
        self.visited.contains(&id)
    }

    /// Number of marked vertices.
    pub fn len(&self) -> usize {
        self.visited.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }

    /// Unmark every vertex. Runs at the end of every traversal.
    pub fn reset(&mut self) {
        self.visited.clear();
    }
}

/// Labels in visitation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Traversal {
    /// The walk that produced this result.
    pub order: TraversalOrder,
    /// Visited labels, first visit first.
    pub labels: List<String>,
}

impl Traversal {
    /// Each label followed by `separator`.
    pub fn render(&self, separator: &str) -> String {
        let mut out = String::new();
        for label in &self.labels {
            out.push_str(label);
            out.push_str(separator);
        }
        out
    }
}

/// Space-terminated labels, e.g. `"A B C "`.
impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(" "))
    }
}

/// First vertex in global insertion order that is a neighbour of `current`
/// and not yet marked.
fn first_unvisited_neighbor(
    graph: &AdjacencyGraph,
    current: u64,
    marks: &VisitMarks,
) -> Option<u64> {
    let vertex = graph.vertex_by_id(current)?;
    let neighbors = graph.neighbor_ids(vertex);
    graph
        .vertices()
        .iter()
        .map(|v| v.id)
        .find(|id| neighbors.contains(id) && !marks.is_visited(*id))
}

fn start_vertex(graph: &AdjacencyGraph) -> GraphResult<u64> {
    graph
        .vertices()
        .first()
        .map(|v| v.id)
        .ok_or(GraphError::EmptyGraph)
}

/// DFS from the first inserted vertex. Returns vertex IDs in visitation order.
///
/// `marks` is cleared before the walk and again when it finishes.
pub fn depth_first(graph: &AdjacencyGraph, marks: &mut VisitMarks) -> GraphResult<List<u64>> {
    marks.reset();
    let start = start_vertex(graph)?;
    let mut visited_order = List::new();
    let mut stack = Stack::new();

    marks.mark(start);
    visited_order.push_back(start);
    stack.push(start);

    while let Some(&top) = stack.peek() {
        match first_unvisited_neighbor(graph, top, marks) {
            Some(next) => {
                trace!("dfs: #{} -> #{}", top, next);
                marks.mark(next);
                visited_order.push_back(next);
                stack.push(next);
            }
            None => {
                stack.pop();
            }
        }
    }

    marks.reset();
    Ok(visited_order)
}

/// BFS from the first inserted vertex. Every unvisited neighbour of a
/// dequeued vertex is visited before the next dequeue. `marks` is cleared
/// before and after the walk.
pub fn breadth_first(graph: &AdjacencyGraph, marks: &mut VisitMarks) -> GraphResult<List<u64>> {
    marks.reset();
    let start = start_vertex(graph)?;
    let mut visited_order = List::new();
    let mut queue = Queue::new();

    marks.mark(start);
    visited_order.push_back(start);
    queue.enqueue(start);

    while let Some(current) = queue.pop() {
        while let Some(next) = first_unvisited_neighbor(graph, current, marks) {
            trace!("bfs: #{} -> #{}", current, next);
            marks.mark(next);
            visited_order.push_back(next);
            queue.enqueue(next);
        }
    }

    marks.reset();
    Ok(visited_order)
}

impl AdjacencyGraph {
    /// Run a traversal with fresh visit marks.
    pub fn traverse(&self, order: TraversalOrder) -> GraphResult<Traversal> {
        let mut marks = VisitMarks::new();
        self.traverse_with(order, &mut marks)
    }

    /// Run a traversal using caller-owned marks. Marks left over from earlier
/// use are ignored, and the marks are empty on return, error or not.
    pub fn traverse_with(
        &self,
        order: TraversalOrder,
        marks: &mut VisitMarks,
    ) -> GraphResult<Traversal> {
        let ids = match order {
            TraversalOrder::DepthFirst => depth_first(self, marks)?,
            TraversalOrder::BreadthFirst => breadth_first(self, marks)?,
        };
        let labels: List<String> = ids
            .iter()
            .filter_map(|&id| self.label_of(id))
            .map(str::to_string)
            .collect();
        debug!("{} visited {} of {} vertices", order, labels.len(), self.vertex_count());
        Ok(Traversal { order, labels })
    }

    /// DFS labels, each followed by the configured separator.
    pub fn dfs(&self) -> GraphResult<String> {
        let traversal = self.traverse(TraversalOrder::DepthFirst)?;
        Ok(traversal.render(&self.config().label_separator))
    }

    /// BFS labels, each followed by the configured separator.
    pub fn bfs(&self) -> GraphResult<String> {
        let traversal = self.traverse(TraversalOrder::BreadthFirst)?;
        Ok(traversal.render(&self.config().label_separator))
    }
}
