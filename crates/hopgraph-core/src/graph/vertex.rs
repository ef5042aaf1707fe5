use super::types::{VertexKey, Weight};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

/// A named vertex and its weighted neighbors.
///
/// Neighbors keep the order in which they were first added; re-adding a
/// neighbor only replaces its weight.
#[derive(Debug, Clone)]
pub struct Vertex<K> {
    id: K,
    neighbors: Vec<(K, Weight)>,
    positions: HashMap<K, usize>,
}

impl<K: VertexKey> Vertex<K> {
    pub(crate) fn new(id: K) -> Self {
        Vertex {
            id,
            neighbors: Vec::new(),
            positions: HashMap::new(),
        }
    }

    pub fn id(&self) -> &K {
        &self.id
    }

    /// Insert a neighbor, or overwrite its weight if already present
    pub(crate) fn add_neighbor(&mut self, key: K, weight: Weight) {
        if let Some(&pos) = self.positions.get(&key) {
            if let Some(slot) = self.neighbors.get_mut(pos) {
                slot.1 = weight;
            }
            return;
        }
        self.positions.insert(key.clone(), self.neighbors.len());
        self.neighbors.push((key, weight));
    }

    /// Neighbor keys in insertion order
    pub fn neighbors(&self) -> impl Iterator<Item = &K> + '_ {
        self.neighbors.iter().map(|(key, _)| key)
    }

    /// Neighbor keys with their weights, in insertion order
    pub fn weighted_neighbors(&self) -> impl Iterator<Item = (&K, Weight)> + '_ {
        self.neighbors.iter().map(|(key, weight)| (key, *weight))
    }

    pub fn edge_weight<Q>(&self, key: &Q) -> Option<Weight>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions
            .get(key)
            .and_then(|&pos| self.neighbors.get(pos))
            .map(|(_, weight)| *weight)
    }

    pub fn has_neighbor<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.positions.contains_key(key)
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

impl<K: VertexKey> fmt::Display for Vertex<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} adjacent to [", self.id)?;
        for (i, key) in self.neighbors().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", key)?;
        }
        write!(f, "]")
    }
}
