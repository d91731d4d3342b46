//! Line-oriented command scripts.
//!
//! One command per line, `#` starts a comment:
//!
//! ```text
//! vertices A B C D
//! edge A B
//! edge A C 4
//! delete-edge A C
//! dfs
//! ```

use std::io::{BufRead, Write};

use log::debug;

use crate::format::edge_line;
use crate::graph::{AdjacencyGraph, TraversalOrder};
use crate::types::{GraphError, GraphResult};

/// Commands understood by the script runner, with usage text.
pub const COMMANDS: &[(&str, &str)] = &[
    ("vertex <label>", "Insert one vertex"),
    ("vertices <label>...", "Insert several vertices in order"),
    ("edge <origin> <destination> [weight]", "Insert an edge"),
    ("delete-vertex <label>", "Delete a vertex and its edges"),
    ("delete-edge <origin> <destination>", "Delete an edge"),
    ("dfs", "Print the depth-first order"),
    ("bfs", "Print the breadth-first order"),
    ("summary", "Print every vertex with its edges and neighbours"),
    ("labels", "Print vertex labels in insertion order"),
];

/// A parsed script line.
#[derive(Debug, Clone, PartialEq)]
pub enum ScriptCommand {
    InsertVertices(Vec<String>),
    InsertEdge {
        origin: String,
        destination: String,
        weight: Option<i64>,
    },
    DeleteVertex(String),
    DeleteEdge {
        origin: String,
        destination: String,
    },
    Traverse(TraversalOrder),
    Summary,
    Labels,
}

/// Outcome counts of a script run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScriptReport {
    /// Commands that succeeded.
    pub executed: usize,
    /// Commands the graph rejected.
    pub rejected: usize,
}

/// Parse one line. Blank lines and comments yield `None`.
pub fn parse_line(line_no: usize, line: &str) -> GraphResult<Option<ScriptCommand>> {
    let line = match line.split_once('#') {
        Some((code, _)) => code,
        None => line,
    };
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&cmd, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let err = |message: String| GraphError::Parse {
        line: line_no,
        message,
    };

    let command = match (cmd, args) {
        ("vertex", [label]) => ScriptCommand::InsertVertices(vec![label.to_string()]),
        ("vertices", labels) if !labels.is_empty() => {
            ScriptCommand::InsertVertices(labels.iter().map(|s| s.to_string()).collect())
        }
        ("edge", [origin, destination]) => ScriptCommand::InsertEdge {
            origin: origin.to_string(),
            destination: destination.to_string(),
            weight: None,
        },
        ("edge", [origin, destination, weight]) => ScriptCommand::InsertEdge {
            origin: origin.to_string(),
            destination: destination.to_string(),
            weight: Some(
                weight
                    .parse()
                    .map_err(|_| err(format!("invalid weight {:?}", weight)))?,
            ),
        },
        ("delete-vertex", [label]) => ScriptCommand::DeleteVertex(label.to_string()),
        ("delete-edge", [origin, destination]) => ScriptCommand::DeleteEdge {
            origin: origin.to_string(),
            destination: destination.to_string(),
        },
        ("summary", []) => ScriptCommand::Summary,
        ("labels", []) => ScriptCommand::Labels,
        (name, rest) => {
            if let (Some(order), []) = (TraversalOrder::from_name(name), rest) {
                return Ok(Some(ScriptCommand::Traverse(order)));
            }
            let usage = COMMANDS
                .iter()
                .map(|(usage, _)| *usage)
                .find(|usage| usage.split(' ').next() == Some(name));
            return match usage {
                Some(usage) => Err(err(format!("usage: {}", usage))),
                None => Err(err(format!("unknown command {:?}", name))),
            };
        }
    };
    Ok(Some(command))
}

/// Apply one command, writing its output to `out`.
pub fn execute<W: Write>(
    command: &ScriptCommand,
    graph: &mut AdjacencyGraph,
    out: &mut W,
) -> GraphResult<()> {
    match command {
        ScriptCommand::InsertVertices(labels) => {
            // All or nothing: a repeated label rejects the whole line.
            for (i, label) in labels.iter().enumerate() {
                if graph.contains_vertex(label) || labels[..i].contains(label) {
                    return Err(GraphError::DuplicateVertex(label.clone()));
                }
            }
            for label in labels {
                graph.insert_vertex(label.as_str())?;
                if let Some(vertex) = graph.vertex(label) {
                    writeln!(out, "Inserted {}", vertex)?;
                }
            }
        }
        ScriptCommand::InsertEdge {
            origin,
            destination,
            weight,
        } => {
            let key = match weight {
                Some(w) => graph.insert_weighted_edge(origin, destination, *w)?,
                None => graph.insert_edge(origin, destination)?,
            };
            if let Some(edge) = graph.edge_by_key(&key) {
                writeln!(out, "Inserted {}", edge_line(graph, edge, weight.is_some()))?;
            }
        }
        ScriptCommand::DeleteVertex(label) => {
            let vertex = graph.delete_vertex(label)?;
            writeln!(out, "Deleted {}", vertex)?;
        }
        ScriptCommand::DeleteEdge {
            origin,
            destination,
        } => {
            graph.delete_edge(origin, destination)?;
            writeln!(out, "Deleted edge {} -> {}", origin, destination)?;
        }
        ScriptCommand::Traverse(order) => {
            let traversal = graph.traverse(*order)?;
            writeln!(
                out,
                "{}",
                traversal.render(&graph.config().label_separator)
            )?;
        }
        ScriptCommand::Summary => write!(out, "{}", graph.summary())?,
        ScriptCommand::Labels => {
            let labels: Vec<String> = graph.vertex_labels().into_iter().collect();
            writeln!(out, "{}", labels.join(" "))?;
        }
    }
    Ok(())
}

/// Run every line of `input` against `graph`.
///
/// Rejected mutations and traversals of an empty graph are reported on
/// `out` and the script continues; parse and I/O errors stop it.
pub fn run_script<R: BufRead, W: Write>(
    input: R,
    graph: &mut AdjacencyGraph,
    out: &mut W,
) -> GraphResult<ScriptReport> {
    let mut report = ScriptReport::default();
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        let Some(command) = parse_line(index + 1, &line)? else {
            continue;
        };
        match execute(&command, graph, out) {
            Ok(()) => report.executed += 1,
            Err(e) if e.is_validation() || matches!(e, GraphError::EmptyGraph) => {
                debug!("line {}: {}", index + 1, e);
                writeln!(out, "Rejected: {}", e)?;
                report.rejected += 1;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(report)
}
