//! Reach command (depth-first reachability)
use hopgraph_core::error::Result;
use hopgraph_core::Graph;

use crate::cli::{Cli, OutputFormat};
use crate::commands::{join_keys, print_json};

/// Execute the reach command
pub fn execute(cli: &Cli, graph: &Graph, start: &str, target: &str) -> Result<()> {
    let result = graph.depth_first_search(start, target);

    match cli.format {
        OutputFormat::Json => {
            print_json(&serde_json::json!({
                "start": start,
                "target": target,
                "found": result.found,
                "path": result.path,
                "visited": result.visited,
            }))?;
        }
        OutputFormat::Human => {
            if !graph.contains(start) {
                println!("Vertex not found: {}", start);
                return Ok(());
            }
            let negation = if result.found { "" } else { "not " };
            println!("{} is {}reachable from {}", target, negation, start);
            if !cli.quiet {
                if result.found {
                    println!("Path: {}", join_keys(&result.path, " -> "));
                }
                println!("Visited: {}", join_keys(&result.visited, ", "));
            }
        }
    }
    Ok(())
}
