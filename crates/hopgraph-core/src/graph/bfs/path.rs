//! Path reconstruction for breadth-first search

use crate::graph::types::VertexKey;
use std::collections::HashMap;

/// Walk predecessor links back from `to`, returning the path front to back
pub fn reconstruct_path<K: VertexKey>(from: &K, to: &K, predecessors: &HashMap<&K, &K>) -> Vec<K> {
    let mut path = vec![to.clone()];
    let mut current = to;

    while current != from {
        match predecessors.get(current) {
            Some(&pred) => {
                path.push(pred.clone());
                current = pred;
            }
            None => break,
        }
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconstruct_walks_back_to_source() {
        let keys = ["1", "2", "5", "4"];
        let mut predecessors = HashMap::new();
        predecessors.insert(&keys[1], &keys[0]);
        predecessors.insert(&keys[3], &keys[0]);
        predecessors.insert(&keys[2], &keys[1]);

        let path = reconstruct_path(&keys[0], &keys[2], &predecessors);
        assert_eq!(path, vec!["1", "2", "5"]);
    }
}
