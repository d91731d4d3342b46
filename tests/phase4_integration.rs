//! Phase 4 tests: summary output, snapshots, configuration and the CLI.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use tempfile::NamedTempFile;

use adjgraph::format::{adjacent_labels, EdgeRecord, GraphSnapshot, Summary};
use adjgraph::graph::{AdjacencyGraph, GraphBuilder};
use adjgraph::types::{GraphConfig, GraphError, NeighborRule};

// ==================== CLI Helpers ====================

/// Run the `adjg` CLI with the given arguments and return the output.
fn run_adjg(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_adjg"))
        .args(args)
        .output()
        .expect("Failed to run adjg")
}

/// Run the `adjg` CLI feeding `input` on stdin.
fn run_adjg_stdin(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_adjg"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn adjg");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

/// Helper: assert that the CLI ran successfully (exit code 0).
fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "adjg failed with status {:?}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

/// Helper: get stdout as a string from an Output.
fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Write the reference graph (A, B, C, D with A-B, A-C, B-D) to a temp file.
fn reference_graph_file() -> NamedTempFile {
    let mut tmp = NamedTempFile::new().unwrap();
    let json = r#"{
        "vertices": ["A", "B", "C", "D"],
        "edges": [
            {"origin": "A", "destination": "B"},
            {"origin": "A", "destination": "C", "weight": 5},
            {"origin": "B", "destination": "D"}
        ]
    }"#;
    tmp.write_all(json.as_bytes()).unwrap();
    tmp
}

// ==================== Summary Tests ====================

#[test]
fn test_summary_format() {
    let mut builder = GraphBuilder::new();
    builder.vertices(["A", "B"]).edge("A", "B");
    let graph = builder.build().unwrap();

    let expected = concat!(
        "Vertex: A\n",
        "Edge between vertices {Vertex: A, Vertex: B}\n",
        "Neighbors of Vertex: A -> B \n",
        "Vertex: B\n",
        "Edge between vertices {Vertex: A, Vertex: B}\n",
        "Neighbors of Vertex: B -> A \n",
    );
    assert_eq!(graph.summary(), expected);
}

#[test]
fn test_summary_with_weights_and_isolated_vertex() {
    let mut builder = GraphBuilder::new();
    builder
        .vertices(["A", "B", "C"])
        .weighted_edge("B", "A", 7);
    let graph = builder.build().unwrap();

    let summary = graph.summary_with_weights();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines[0], "Vertex: A");
    assert_eq!(lines[1], "Edge between vertices {Vertex: B, Vertex: A}, with weight 7");
    assert_eq!(lines[2], "Neighbors of Vertex: A -> B ");
    assert_eq!(lines[6], "Vertex: C");
    assert_eq!(lines[7], "Neighbors of Vertex: C -> ");
    assert_eq!(lines.len(), 8);
}

#[test]
fn test_summary_display_matches_text() {
    let mut builder = GraphBuilder::new();
    builder.vertices(["A", "B", "C"]).edge("A", "B").weighted_edge("C", "A", 2);
    let graph = builder.build().unwrap();

    assert_eq!(Summary::new(&graph, false).to_string(), graph.summary());
    assert_eq!(Summary::new(&graph, true).to_string(), graph.summary_with_weights());

    let a = graph.vertex("A").unwrap();
    assert_eq!(adjacent_labels(&graph, a), vec!["B", "C"]);
    let c = graph.vertex("C").unwrap();
    assert_eq!(adjacent_labels(&graph, c), vec!["A"]);
}

// ==================== Snapshot Tests ====================

#[test]
fn test_snapshot_capture_and_replay() {
    let mut builder = GraphBuilder::new();
    builder
        .vertices(["x", "y", "z"])
        .edge("x", "y")
        .weighted_edge("z", "x", 4);
    let graph = builder.build().unwrap();

    let snapshot = GraphSnapshot::capture(&graph);
    assert_eq!(snapshot.vertices, vec!["x", "y", "z"]);
    assert_eq!(
        snapshot.edges[1],
        EdgeRecord {
            origin: "z".to_string(),
            destination: "x".to_string(),
            weight: Some(4),
        }
    );

    let replayed = GraphSnapshot::from_json(&snapshot.to_json(false).unwrap())
        .unwrap()
        .into_graph(GraphConfig::default())
        .unwrap();
    assert_eq!(replayed.summary_with_weights(), graph.summary_with_weights());
    assert_eq!(replayed.dfs().unwrap(), graph.dfs().unwrap());
}

#[test]
fn test_snapshot_with_invalid_edge_fails() {
    let snapshot = GraphSnapshot::from_json(
        r#"{"vertices": ["A", "B"], "edges": [{"origin": "B", "destination": "B"}]}"#,
    )
    .unwrap();
    match snapshot.into_graph(GraphConfig::default()) {
        Err(GraphError::SelfLoop(label)) => assert_eq!(label, "B"),
        other => panic!("Expected SelfLoop, got {:?}", other.map(|g| g.vertex_count())),
    }
}

#[test]
fn test_snapshot_file_roundtrip() {
    let graph: AdjacencyGraph = AdjacencyGraph::from_labels(["only"]).unwrap();
    let tmp = NamedTempFile::new().unwrap();
    GraphSnapshot::capture(&graph)
        .write_to_file(tmp.path(), true)
        .unwrap();
    let back = GraphSnapshot::read_from_file(tmp.path()).unwrap();
    assert_eq!(back.vertices, vec!["only"]);
    assert!(back.edges.is_empty());
}

// ==================== Config Tests ====================

#[test]
fn test_config_defaults() {
    let config = GraphConfig::default();
    assert_eq!(config.neighbor_rule, NeighborRule::Destination);
    assert_eq!(config.default_weight, 1);
    assert_eq!(config.label_separator, " ");
}

#[test]
fn test_config_from_partial_toml() {
    let config = GraphConfig::from_toml_str("neighbor_rule = \"opposite\"\n").unwrap();
    assert_eq!(config.neighbor_rule, NeighborRule::Opposite);
    assert_eq!(config.default_weight, 1);
}

#[test]
fn test_config_rejects_empty_separator() {
    match GraphConfig::from_toml_str("label_separator = \"\"\n") {
        Err(GraphError::InvalidConfig(_)) => {}
        other => panic!("Expected InvalidConfig, got {:?}", other),
    }
    assert!(matches!(
        GraphConfig::from_toml_str("neighbor_rule = \"sideways\"\n"),
        Err(GraphError::Toml(_))
    ));
}

#[test]
fn test_config_save_load() {
    let tmp = NamedTempFile::new().unwrap();
    let config = GraphConfig {
        neighbor_rule: NeighborRule::Opposite,
        default_weight: 3,
        label_separator: "|".to_string(),
    };
    config.save(tmp.path()).unwrap();
    assert_eq!(GraphConfig::load(tmp.path()).unwrap(), config);
}

#[test]
fn test_neighbor_rule_parsing() {
    assert_eq!("Opposite".parse::<NeighborRule>().unwrap(), NeighborRule::Opposite);
    assert_eq!(NeighborRule::from_name("dest"), Some(NeighborRule::Destination));
    assert!("diagonal".parse::<NeighborRule>().is_err());
}

// ==================== CLI Tests ====================

#[test]
fn test_cli_dfs_and_bfs() {
    let tmp = reference_graph_file();
    let path = tmp.path().to_str().unwrap();

    let output = run_adjg(&["dfs", "--graph", path]);
    assert_success(&output);
    assert_eq!(stdout_str(&output), "A B D C \n");

    let output = run_adjg(&["bfs", "--graph", path]);
    assert_success(&output);
    assert_eq!(stdout_str(&output), "A B C D \n");
}

#[test]
fn test_cli_dfs_json() {
    let tmp = reference_graph_file();
    let path = tmp.path().to_str().unwrap();

    let output = run_adjg(&["--format", "json", "dfs", "--graph", path]);
    assert_success(&output);
    let parsed: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(parsed["order"], "dfs");
    assert_eq!(parsed["visited"], serde_json::json!(["A", "B", "D", "C"]));
}

#[test]
fn test_cli_labels_and_summary() {
    let tmp = reference_graph_file();
    let path = tmp.path().to_str().unwrap();

    let output = run_adjg(&["labels", "--graph", path]);
    assert_success(&output);
    assert_eq!(stdout_str(&output), "A\nB\nC\nD\n");

    let output = run_adjg(&["summary", "--graph", path, "--weights"]);
    assert_success(&output);
    assert!(stdout_str(&output)
        .contains("Edge between vertices {Vertex: A, Vertex: C}, with weight 5"));
}

#[test]
fn test_cli_neighbor_override() {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(br#"{"vertices": ["A", "B"], "edges": [{"origin": "B", "destination": "A"}]}"#)
        .unwrap();
    let path = tmp.path().to_str().unwrap();

    let output = run_adjg(&["dfs", "--graph", path]);
    assert_success(&output);
    assert_eq!(stdout_str(&output), "A \n");

    let output = run_adjg(&["--neighbors", "opposite", "dfs", "--graph", path]);
    assert_success(&output);
    assert_eq!(stdout_str(&output), "A B \n");
}

#[test]
fn test_cli_summary_json_neighbors_agree_with_text() {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(br#"{"vertices": ["A", "B"], "edges": [{"origin": "A", "destination": "B"}]}"#)
        .unwrap();
    let path = tmp.path().to_str().unwrap();

    let output = run_adjg(&["summary", "--graph", path]);
    assert_success(&output);
    assert!(stdout_str(&output).contains("Neighbors of Vertex: B -> A \n"));

    let output = run_adjg(&["--format", "json", "summary", "--graph", path]);
    assert_success(&output);
    let parsed: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    let b = &parsed["vertices"][1];
    assert_eq!(b["label"], "B");
    assert_eq!(b["neighbors"], serde_json::json!(["A"]));
    // The destination rule sends B's only edge back to B itself.
    assert_eq!(b["traversal_neighbors"], serde_json::json!(["B"]));
}

#[test]
fn test_cli_config_file() {
    let tmp = reference_graph_file();
    let mut config = NamedTempFile::new().unwrap();
    config.write_all(b"label_separator = \"-\"\n").unwrap();

    let output = run_adjg(&[
        "--config",
        config.path().to_str().unwrap(),
        "bfs",
        "--graph",
        tmp.path().to_str().unwrap(),
    ]);
    assert_success(&output);
    assert_eq!(stdout_str(&output), "A-B-C-D-\n");
}

#[test]
fn test_cli_export_to_file() {
    let tmp = reference_graph_file();
    let out = NamedTempFile::new().unwrap();

    let output = run_adjg(&[
        "export",
        "--graph",
        tmp.path().to_str().unwrap(),
        "--output",
        out.path().to_str().unwrap(),
    ]);
    assert_success(&output);
    let snapshot = GraphSnapshot::read_from_file(out.path()).unwrap();
    assert_eq!(snapshot.vertices, vec!["A", "B", "C", "D"]);
    assert_eq!(snapshot.edges.len(), 3);
    assert!(snapshot.edges.iter().all(|e| e.weight.is_some()));
}

#[test]
fn test_cli_run_script_file() {
    let mut script = NamedTempFile::new().unwrap();
    writeln!(script, "# reference scenario").unwrap();
    writeln!(script, "vertices A B C D").unwrap();
    writeln!(script, "edge A B").unwrap();
    writeln!(script, "edge A C").unwrap();
    writeln!(script, "edge B D").unwrap();
    writeln!(script, "edge B D").unwrap();
    writeln!(script, "dfs").unwrap();
    writeln!(script, "delete-vertex B").unwrap();
    writeln!(script, "bfs").unwrap();

    let output = run_adjg(&["run", script.path().to_str().unwrap()]);
    assert_success(&output);
    let stdout = stdout_str(&output);
    assert!(stdout.contains("Rejected: Edge \"B\" -> \"D\" already exists"));
    assert!(stdout.contains("A B D C \n"));
    assert!(stdout.contains("Deleted Vertex: B"));
    assert!(stdout.ends_with("A C \n"));
    assert!(String::from_utf8_lossy(&output.stderr).contains("7 command(s) executed, 1 rejected"));
}

#[test]
fn test_cli_run_stdin() {
    let output = run_adjg_stdin(&["run"], "vertex X\nvertex Y\nedge X Y\nlabels\n");
    assert_success(&output);
    assert!(stdout_str(&output).ends_with("X Y\n"));
}

#[test]
fn test_cli_run_parse_error_exit_code() {
    let output = run_adjg_stdin(&["run"], "vertex A\nfly A\n");
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("line 2"));
}

#[test]
fn test_cli_invalid_graph_exit_code() {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(br#"{"vertices": ["A", "A"]}"#).unwrap();
    let output = run_adjg(&["dfs", "--graph", tmp.path().to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_cli_empty_graph_fails() {
    let mut tmp = NamedTempFile::new().unwrap();
    tmp.write_all(br#"{"vertices": []}"#).unwrap();
    let output = run_adjg(&["dfs", "--graph", tmp.path().to_str().unwrap()]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No vertices to traverse"));
}

#[test]
fn test_cli_missing_file_exit_code() {
    let output = run_adjg(&["labels", "--graph", "/nonexistent/graph.json"]);
    assert_eq!(output.status.code(), Some(1));
}
