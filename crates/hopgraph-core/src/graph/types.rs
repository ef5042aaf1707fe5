use serde::Serialize;
use std::fmt;
use std::hash::Hash;

/// Numeric weight carried by every arc
pub type Weight = i64;

/// Weight used when an edge is added without one
pub const DEFAULT_WEIGHT: Weight = 0;

/// Anything usable as a vertex identity
pub trait VertexKey: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

impl<T> VertexKey for T where T: Clone + Eq + Hash + fmt::Debug + fmt::Display {}

/// A single materialized arc
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge<K> {
    pub from: K,
    pub to: K,
    pub weight: Weight,
}

impl<K> Edge<K> {
    pub fn new(from: K, to: K, weight: Weight) -> Self {
        Edge { from, to, weight }
    }
}

impl<K: fmt::Display> fmt::Display for Edge<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.from, self.to, self.weight)
    }
}

/// Result of a shortest-path query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PathOutcome<K> {
    /// Vertices from source to target, both included
    Found { path: Vec<K> },
    /// Both endpoints exist but the target was never discovered
    Unreachable,
    /// One of the endpoints is not in the graph
    MissingVertex,
}

impl<K> PathOutcome<K> {
    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found { .. })
    }

    pub fn path(&self) -> Option<&[K]> {
        match self {
            PathOutcome::Found { path } => Some(path),
            _ => None,
        }
    }

    /// Number of edges on the path
    pub fn hops(&self) -> Option<usize> {
        self.path().map(|path| path.len().saturating_sub(1))
    }
}

/// Result of a depth-first reachability query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reachability<K> {
    /// Whether the target was reached
    pub found: bool,
    /// Every vertex marked visited, in discovery order
    pub visited: Vec<K>,
    /// The depth-first stack from start to target when found
    pub path: Vec<K>,
}

impl<K> Reachability<K> {
    pub(crate) fn unreachable(visited: Vec<K>) -> Self {
        Reachability {
            found: false,
            visited,
            path: Vec::new(),
        }
    }
}

impl<K> Default for Reachability<K> {
    fn default() -> Self {
        Reachability::unreachable(Vec::new())
    }
}
