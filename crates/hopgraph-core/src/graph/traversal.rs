use super::store::Graph;
use super::types::VertexKey;

/// Trait for providing graph adjacency to the traversal algorithms
pub trait GraphProvider<K> {
    fn contains(&self, key: &K) -> bool;

    /// Neighbors of `key` in adjacency insertion order; empty for unknown keys
    fn neighbors(&self, key: &K) -> Vec<&K>;
}

impl<K: VertexKey> GraphProvider<K> for Graph<K> {
    fn contains(&self, key: &K) -> bool {
        Graph::contains(self, key)
    }

    fn neighbors(&self, key: &K) -> Vec<&K> {
        self.get_vertex(key)
            .map(|vertex| vertex.neighbors().collect())
            .unwrap_or_default()
    }
}
