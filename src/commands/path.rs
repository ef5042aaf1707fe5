//! Path command
use hopgraph_core::error::Result;
use hopgraph_core::{Graph, PathOutcome};

use crate::cli::{Cli, OutputFormat};
use crate::commands::{join_keys, print_json};

/// The endpoint a MissingVertex outcome refers to
fn missing_endpoint<'a>(graph: &Graph, from: &'a str, to: &'a str) -> &'a str {
    if graph.contains(from) {
        to
    } else {
        from
    }
}

/// Execute the path command
pub fn execute(cli: &Cli, graph: &Graph, from: &str, to: &str) -> Result<()> {
    let outcome = graph.find_path_bfs(from, to);

    match cli.format {
        OutputFormat::Json => {
            let mut json = serde_json::json!({
                "from": from,
                "to": to,
            });
            if let Some(obj) = json.as_object_mut() {
                if let serde_json::Value::Object(fields) = serde_json::to_value(&outcome)? {
                    obj.extend(fields);
                }
                obj.insert("path_length".to_string(), serde_json::json!(outcome.hops()));
            }
            print_json(&json)?;
        }
        OutputFormat::Human => output_path_human(cli, graph, from, to, &outcome),
    }
    Ok(())
}

fn output_path_human(
    cli: &Cli,
    graph: &Graph,
    from: &str,
    to: &str,
    outcome: &PathOutcome<String>,
) {
    match outcome {
        PathOutcome::Found { path } => {
            println!("{}", join_keys(path, " -> "));
            if !cli.quiet {
                let hops = outcome.hops().unwrap_or(0);
                let unit = if hops == 1 { "hop" } else { "hops" };
                println!("Path length: {} {}", hops, unit);
            }
        }
        PathOutcome::Unreachable => {
            println!("No path found from {} to {}", from, to);
        }
        PathOutcome::MissingVertex => {
            println!("Vertex not found: {}", missing_endpoint(graph, from, to));
        }
    }
}
