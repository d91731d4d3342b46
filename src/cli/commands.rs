//! CLI command implementations.

use std::io::{self, BufReader};
use std::path::Path;

use crate::cli::script::run_script;
use crate::format::{adjacent_labels, GraphSnapshot};
use crate::graph::{AdjacencyGraph, TraversalOrder};
use crate::types::{GraphConfig, GraphResult};

/// Build the working graph: from a JSON snapshot when given, else empty.
pub fn load_graph(path: Option<&Path>, config: &GraphConfig) -> GraphResult<AdjacencyGraph> {
    match path {
        Some(path) => GraphSnapshot::read_from_file(path)?.into_graph(config.clone()),
        None => Ok(AdjacencyGraph::with_config(config.clone())),
    }
}

/// Print a traversal order.
pub fn cmd_traverse(
    graph_path: Option<&Path>,
    config: &GraphConfig,
    order: TraversalOrder,
    json: bool,
) -> GraphResult<()> {
    let graph = load_graph(graph_path, config)?;
    let traversal = graph.traverse(order)?;

    if json {
        let labels: Vec<&String> = traversal.labels.iter().collect();
        println!(
            "{}",
            serde_json::json!({"order": order.name(), "visited": labels})
        );
    } else {
        println!("{}", traversal.render(&config.label_separator));
    }
    Ok(())
}

/// Print the per-vertex summary.
pub fn cmd_summary(
    graph_path: Option<&Path>,
    config: &GraphConfig,
    weights: bool,
    json: bool,
) -> GraphResult<()> {
    let graph = load_graph(graph_path, config)?;

    if json {
        let mut vertices = Vec::with_capacity(graph.vertex_count());
        for vertex in graph.vertices() {
            let traversal_neighbors: Vec<&str> = graph
                .neighbors(&vertex.label)?
                .into_iter()
                .map(|v| v.label.as_str())
                .collect();
            let edges: Vec<_> = graph
                .incident_edges(&vertex.label)?
                .into_iter()
                .map(|e| {
                    serde_json::json!({
                        "origin": graph.label_of(e.origin),
                        "destination": graph.label_of(e.destination),
                        "weight": e.weight,
                    })
                })
                .collect();
            vertices.push(serde_json::json!({
                "label": vertex.label,
                "degree": vertex.degree(),
                "edges": edges,
                "neighbors": adjacent_labels(&graph, vertex),
                "traversal_neighbors": traversal_neighbors,
            }));
        }
        let info = serde_json::json!({
            "vertices": vertices,
            "vertex_count": graph.vertex_count(),
            "edge_count": graph.edge_count(),
            "neighbor_rule": config.neighbor_rule.name(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&info).unwrap_or_default()
        );
    } else if weights {
        print!("{}", graph.summary_with_weights());
    } else {
        print!("{}", graph.summary());
    }
    Ok(())
}

/// Print vertex labels in insertion order.
pub fn cmd_labels(graph_path: Option<&Path>, config: &GraphConfig, json: bool) -> GraphResult<()> {
    let graph = load_graph(graph_path, config)?;
    let labels: Vec<String> = graph.vertex_labels().into_iter().collect();

    if json {
        println!("{}", serde_json::json!({ "labels": labels }));
    } else {
        for label in &labels {
            println!("{}", label);
        }
    }
    Ok(())
}

/// Re-emit the graph as a JSON snapshot, to stdout or a file.
pub fn cmd_export(
    graph_path: Option<&Path>,
    config: &GraphConfig,
    output: Option<&Path>,
    pretty: bool,
) -> GraphResult<()> {
    let graph = load_graph(graph_path, config)?;
    let snapshot = GraphSnapshot::capture(&graph);

    match output {
        Some(path) => {
            snapshot.write_to_file(path, pretty)?;
            eprintln!(
                "Exported {} vertices and {} edges to {}",
                graph.vertex_count(),
                graph.edge_count(),
                path.display()
            );
        }
        None => println!("{}", snapshot.to_json(pretty)?),
    }
    Ok(())
}

/// Run a command script from a file, or stdin when no path is given.
pub fn cmd_run(
    script: Option<&Path>,
    graph_path: Option<&Path>,
    config: &GraphConfig,
    json: bool,
) -> GraphResult<()> {
    let mut graph = load_graph(graph_path, config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let report = match script {
        Some(path) => {
            let file = std::fs::File::open(path)?;
            run_script(BufReader::new(file), &mut graph, &mut out)?
        }
        None => run_script(io::stdin().lock(), &mut graph, &mut out)?,
    };

    if json {
        eprintln!(
            "{}",
            serde_json::json!({"executed": report.executed, "rejected": report.rejected})
        );
    } else {
        eprintln!(
            "{} command(s) executed, {} rejected",
            report.executed, report.rejected
        );
    }
    Ok(())
}
