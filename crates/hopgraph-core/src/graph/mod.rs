//! Graph store and traversal operations
//!
//! Provides the weighted graph and the algorithms that walk it:
//! - BFS shortest path (fewest hops, weights ignored)
//! - BFS for the vertices at an exact hop-distance
//! - DFS reachability with the explored path
//! - Graph provider trait so traversals can run over other adjacency sources

pub mod algos;
pub mod bfs;
pub mod queue;
pub mod store;
pub mod traversal;
pub mod types;
pub mod vertex;

pub use algos::{bfs_at_distance, dfs_reachability};
pub use bfs::bfs_find_path;
pub use queue::Queue;
pub use store::Graph;
pub use traversal::GraphProvider;
pub use types::{Edge, PathOutcome, Reachability, VertexKey, Weight, DEFAULT_WEIGHT};
pub use vertex::Vertex;

use std::borrow::Borrow;
use std::hash::Hash;

impl<K: VertexKey> Graph<K> {
    fn provider(&self) -> &dyn GraphProvider<K> {
        self
    }

    /// Fewest-hops path from `from` to `to`
    pub fn find_path_bfs<Q>(&self, from: &Q, to: &Q) -> PathOutcome<K>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match (self.stored_key(from), self.stored_key(to)) {
            (Some(from), Some(to)) => bfs_find_path(self.provider(), from, to),
            _ => PathOutcome::MissingVertex,
        }
    }

    /// Vertices exactly `length` hops from `start`
    pub fn breadth_first_search<Q>(&self, start: &Q, length: i64) -> Option<Vec<K>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let start = self.stored_key(start)?;
        bfs_at_distance(self.provider(), start, length)
    }

    /// Whether `target` can be reached from `start`, depth-first.
    ///
    /// A target that is not in the graph is never reached; the walk still
    /// reports everything it explored.
    pub fn depth_first_search<Q>(&self, start: &Q, target: &Q) -> Reachability<K>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.stored_key(start) {
            Some(start) => algos::dfs::dfs_walk(self.provider(), start, &|key: &K| {
                <K as Borrow<Q>>::borrow(key) == target
            }),
            None => Reachability::default(),
        }
    }
}
