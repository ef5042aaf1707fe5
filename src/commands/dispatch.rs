//! Command dispatch logic for hopgraph
use std::path::Path;
use std::time::Instant;

use hopgraph_core::config::HopgraphConfig;
use hopgraph_core::error::Result;
use hopgraph_core::loader;
use hopgraph_core::{trace_time, Graph};

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = HopgraphConfig::load_or_default(cli.config.as_deref())?;
    trace_time!(start, "load_config");

    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Info { file }) => {
            let graph = load(file, &config, start)?;
            commands::info::execute(cli, &graph)
        }

        Some(Commands::Edges { file, unique }) => {
            let graph = load(file, &config, start)?;
            commands::edges::execute(cli, &graph, *unique || config.output.unique_edges)
        }

        Some(Commands::Path { file, from, to }) => {
            let graph = load(file, &config, start)?;
            commands::path::execute(cli, &graph, from, to)
        }

        Some(Commands::Level {
            file,
            start: from,
            length,
        }) => {
            let graph = load(file, &config, start)?;
            commands::level::execute(cli, &graph, from, *length)
        }

        Some(Commands::Reach {
            file,
            start: from,
            target,
        }) => {
            let graph = load(file, &config, start)?;
            commands::reach::execute(cli, &graph, from, target)
        }
    }
}

fn load(file: &Path, config: &HopgraphConfig, start: Instant) -> Result<Graph> {
    let graph = loader::load_graph(file, &config.loader)?;
    tracing::debug!(
        elapsed = ?start.elapsed(),
        vertices = graph.num_vertices(),
        edges = graph.num_edges(),
        "load_graph"
    );
    Ok(graph)
}

fn handle_no_command() -> Result<()> {
    println!("hopgraph {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Shortest paths and reachability over edge-list graphs.");
    println!();
    println!("Run `hopgraph --help` for usage information.");
    Ok(())
}
