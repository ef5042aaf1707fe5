use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Undirected five-vertex graph used across the CLI tests
pub const SAMPLE_GRAPH: &str = "\
G
1,2,3,4,5
(1,2)
(1,4)
(2,3)
(2,4)
(2,5)
(3,5)
(5,2)
";

/// Directed graph with two branches from `A`, one of them weighted
#[allow(dead_code)]
pub const DIRECTED_GRAPH: &str = "\
D
# chain
A,B,C,D,E
(A,B,10)
(A,C)
(B,D)
(C,E)
";

/// Get a Command for hopgraph
pub fn hopgraph() -> Command {
    cargo_bin_cmd!("hopgraph")
}

/// Write `content` into a fresh temp dir and return the dir with the file path
pub fn write_graph(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("graph.txt");
    fs::write(&path, content).unwrap();
    (dir, path)
}

/// Parse stdout of a successful command as JSON
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON")
}
