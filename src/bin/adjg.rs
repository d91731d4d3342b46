//! CLI entry point for the `adjg` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use adjgraph::cli::commands;
use adjgraph::graph::TraversalOrder;
use adjgraph::types::{GraphConfig, GraphError, NeighborRule};

#[derive(Parser)]
#[command(
    name = "adjg",
    about = "adjg: adjacency-list graphs with depth-first and breadth-first traversal"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text", global = true)]
    format: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Neighbour rule: destination or opposite (overrides the config file)
    #[arg(long, global = true)]
    neighbors: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the depth-first visitation order
    Dfs {
        /// JSON graph description
        #[arg(long)]
        graph: PathBuf,
    },
    /// Print the breadth-first visitation order
    Bfs {
        /// JSON graph description
        #[arg(long)]
        graph: PathBuf,
    },
    /// Print every vertex with its edges and neighbours
    Summary {
        /// JSON graph description
        #[arg(long)]
        graph: PathBuf,
        /// Include edge weights
        #[arg(long)]
        weights: bool,
    },
    /// Print vertex labels in insertion order
    Labels {
        /// JSON graph description
        #[arg(long)]
        graph: PathBuf,
    },
    /// Validate a JSON graph description and print it back
    Export {
        /// JSON graph description
        #[arg(long)]
        graph: PathBuf,
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Run a command script (stdin when no file is given)
    Run {
        /// Script file
        script: Option<PathBuf>,
        /// Start from this JSON graph description instead of an empty graph
        #[arg(long)]
        graph: Option<PathBuf>,
    },
}

fn load_config(cli: &Cli) -> Result<GraphConfig, GraphError> {
    let mut config = match &cli.config {
        Some(path) => GraphConfig::load(path)?,
        None => GraphConfig::default(),
    };
    if let Some(rule) = &cli.neighbors {
        config.neighbor_rule = rule.parse::<NeighborRule>()?;
    }
    Ok(config)
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let result = load_config(&cli).and_then(|config| match &cli.command {
        Commands::Dfs { graph } => {
            commands::cmd_traverse(Some(graph.as_path()), &config, TraversalOrder::DepthFirst, json)
        }
        Commands::Bfs { graph } => {
            commands::cmd_traverse(Some(graph.as_path()), &config, TraversalOrder::BreadthFirst, json)
        }
        Commands::Summary { graph, weights } => {
            commands::cmd_summary(Some(graph.as_path()), &config, *weights, json)
        }
        Commands::Labels { graph } => commands::cmd_labels(Some(graph.as_path()), &config, json),
        Commands::Export {
            graph,
            output,
            pretty,
        } => commands::cmd_export(Some(graph.as_path()), &config, output.as_deref(), *pretty),
        Commands::Run { script, graph } => {
            commands::cmd_run(script.as_deref(), graph.as_deref(), &config, json)
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Json(_)
            | GraphError::Toml(_)
            | GraphError::Parse { .. }
            | GraphError::InvalidConfig(_) => 2,
            e if e.is_validation() => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
