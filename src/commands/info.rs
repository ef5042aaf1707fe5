//! Info command
use hopgraph_core::error::Result;
use hopgraph_core::Graph;

use crate::cli::{Cli, OutputFormat};
use crate::commands::print_json;

fn mode_name(graph: &Graph) -> &'static str {
    if graph.is_undirected() {
        "undirected"
    } else {
        "directed"
    }
}

/// Execute the info command
pub fn execute(cli: &Cli, graph: &Graph) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let adjacency: Vec<serde_json::Value> = graph
                .iter()
                .map(|vertex| {
                    serde_json::json!({
                        "id": vertex.id(),
                        "neighbors": vertex
                            .weighted_neighbors()
                            .map(|(to, weight)| serde_json::json!({ "to": to, "weight": weight }))
                            .collect::<Vec<_>>(),
                    })
                })
                .collect();

            print_json(&serde_json::json!({
                "mode": mode_name(graph),
                "vertex_count": graph.num_vertices(),
                "edge_count": graph.num_edges(),
                "vertices": adjacency,
            }))?;
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Mode: {}", mode_name(graph));
                println!("Vertices: {}", graph.num_vertices());
                println!("Edges: {}", graph.num_edges());
                println!();
            }
            for vertex in graph {
                println!("{}", vertex);
            }
        }
    }
    Ok(())
}
