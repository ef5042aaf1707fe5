//! Edges command
use hopgraph_core::error::Result;
use hopgraph_core::Graph;

use crate::cli::{Cli, OutputFormat};
use crate::commands::print_json;

/// Execute the edges command
pub fn execute(cli: &Cli, graph: &Graph, unique: bool) -> Result<()> {
    let edges = if unique {
        graph.unique_edges()
    } else {
        graph.get_edges()
    };

    match cli.format {
        OutputFormat::Json => {
            print_json(&serde_json::json!({
                "unique": unique,
                "count": edges.len(),
                "edges": edges,
            }))?;
        }
        OutputFormat::Human => {
            for edge in &edges {
                println!("{}", edge);
            }
            if !cli.quiet {
                println!("{} edge(s)", edges.len());
            }
        }
    }
    Ok(())
}
