//! Hopgraph Core Library
//!
//! Weighted, optionally-directed graph store with breadth-first and
//! depth-first traversals, plus the edge-list loader used by the CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod loader;
pub mod logging;

pub use error::{GraphError, HopgraphError, Result};
pub use graph::{Edge, Graph, PathOutcome, Reachability, Vertex, VertexKey, Weight};
