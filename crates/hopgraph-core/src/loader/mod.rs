//! Edge-list loader
//!
//! Builds a graph from the line-oriented text format:
//!
//! ```text
//! G
//! 1,2,3,4,5
//! (1,2)
//! (1,4,7)
//! ```
//!
//! `G` marks an undirected graph and `D` a directed one. Other lines not
//! starting with `(` declare vertices; parenthesized lines add edges with an
//! optional integer weight.

pub mod parse;

use std::fs;
use std::path::Path;
use std::time::Instant;

use tracing::{debug, warn};

use crate::config::LoaderConfig;
use crate::error::{GraphError, HopgraphError, Result};
use crate::graph::Graph;
use crate::trace_time;
use parse::Line;

/// Tally of what a load kept and dropped
#[derive(Debug, Default)]
struct LoadStats {
    vertices: usize,
    edges: usize,
    skipped: usize,
}

impl LoadStats {
    /// Apply the loader's rejection policy to one store call
    fn record(
        &mut self,
        outcome: std::result::Result<(), GraphError<String>>,
        line: usize,
        config: &LoaderConfig,
    ) -> Result<bool> {
        match outcome {
            Ok(()) => Ok(true),
            Err(source) if config.strict => Err(HopgraphError::Rejected { line, source }),
            Err(source) => {
                warn!(line, key = %source.key(), error = %source, "skipping rejected input");
                self.skipped += 1;
                Ok(false)
            }
        }
    }
}

/// Build a graph from edge-list text
pub fn parse_graph(text: &str, config: &LoaderConfig) -> Result<Graph> {
    let mut graph: Graph = Graph::with_mode(config.undirected);
    let mut stats = LoadStats::default();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        match parse::parse_line(line_no, raw)? {
            Line::Skip => {}
            Line::Mode { undirected } => {
                if stats.edges > 0 && undirected != graph.is_undirected() {
                    warn!(line = line_no, "mode marker after edges only affects later edges");
                }
                graph.set_undirected(undirected);
            }
            Line::Vertices(keys) => {
                for key in keys {
                    let outcome = graph.add_vertex(key).map(|_| ());
                    if stats.record(outcome, line_no, config)? {
                        stats.vertices += 1;
                    }
                }
            }
            Line::Edge { from, to, weight } => {
                let weight = weight.unwrap_or(config.default_weight);
                let outcome = graph.add_edge(from, to, weight);
                if stats.record(outcome, line_no, config)? {
                    stats.edges += 1;
                }
            }
        }
    }

    debug!(
        vertices = stats.vertices,
        edge_lines = stats.edges,
        skipped = stats.skipped,
        undirected = graph.is_undirected(),
        "parsed edge list"
    );
    Ok(graph)
}

/// Read and parse an edge-list file
#[tracing::instrument(skip(path, config), fields(path = %path.display()))]
pub fn load_graph(path: &Path, config: &LoaderConfig) -> Result<Graph> {
    let start = Instant::now();

    if !path.exists() {
        return Err(HopgraphError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = fs::read_to_string(path)?;
    let graph = parse_graph(&text, config)?;

    trace_time!(
        start,
        "load_graph",
        vertices = graph.num_vertices(),
        edges = graph.num_edges()
    );
    Ok(graph)
}
