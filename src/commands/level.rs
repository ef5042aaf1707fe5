//! Level command (vertices at an exact hop-distance)
use hopgraph_core::error::Result;
use hopgraph_core::Graph;

use crate::cli::{Cli, OutputFormat};
use crate::commands::print_json;

/// Execute the level command
pub fn execute(cli: &Cli, graph: &Graph, start: &str, length: i64) -> Result<()> {
    let level = graph.breadth_first_search(start, length);

    match cli.format {
        OutputFormat::Json => {
            print_json(&serde_json::json!({
                "start": start,
                "length": length,
                "vertices": level,
            }))?;
        }
        OutputFormat::Human => match level {
            Some(vertices) if vertices.is_empty() => {
                if !cli.quiet {
                    println!("No vertices at distance {} from {}", length, start);
                }
            }
            Some(vertices) => {
                for vertex in vertices {
                    println!("{}", vertex);
                }
            }
            None if length < 0 => {
                println!("No result: length must not be negative (got {})", length);
            }
            None => {
                println!("Vertex not found: {}", start);
            }
        },
    }
    Ok(())
}
