use crate::graph::queue::Queue;
use crate::graph::types::VertexKey;
use crate::graph::GraphProvider;
use std::collections::HashMap;

/// Vertices whose hop-distance from `start` is exactly `length`, in
/// discovery order.
///
/// Returns `None` for a negative length or a start vertex that is not in
/// the graph. Length 0 yields `start` alone.
#[tracing::instrument(level = "debug", skip_all, fields(start = %start, length = length))]
pub fn bfs_at_distance<K: VertexKey>(
    provider: &dyn GraphProvider<K>,
    start: &K,
    length: i64,
) -> Option<Vec<K>> {
    let target = usize::try_from(length).ok()?;
    if !provider.contains(start) {
        tracing::debug!("start vertex missing from graph");
        return None;
    }
    if target == 0 {
        return Some(vec![start.clone()]);
    }

    let mut distances: HashMap<&K, usize> = HashMap::new();
    let mut queue: Queue<(&K, usize)> = Queue::new();
    let mut result = Vec::new();

    distances.insert(start, 0);
    queue.enqueue((start, 0));

    // Only vertices closer than `target` are ever enqueued
    while let Some((current, distance)) = queue.dequeue() {
        let next = distance + 1;
        for neighbor in provider.neighbors(current) {
            if distances.contains_key(neighbor) {
                continue;
            }
            distances.insert(neighbor, next);

            if next == target {
                result.push(neighbor.clone());
            } else {
                queue.enqueue((neighbor, next));
            }
        }
    }

    tracing::debug!(
        discovered = distances.len(),
        matched = result.len(),
        "bounded search complete"
    );
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn directed_fixture() -> Graph {
        let mut graph: Graph = Graph::new();
        for key in ["A", "B", "C", "D", "E", "F", "G"] {
            graph.add_vertex(key).unwrap();
        }
        for (from, to) in [
            ("A", "B"),
            ("A", "C"),
            ("B", "C"),
            ("C", "D"),
            ("C", "E"),
            ("C", "F"),
            ("A", "F"),
        ] {
            graph.add_edge(from, to, 0).unwrap();
        }
        graph
    }

    #[test]
    fn test_unknown_start_is_none() {
        let graph = directed_fixture();
        assert_eq!(bfs_at_distance(&graph, &" R".to_string(), 1), None);
    }

    #[test]
    fn test_negative_length_is_none() {
        let graph = directed_fixture();
        assert_eq!(bfs_at_distance(&graph, &"A".to_string(), -1), None);
    }

    #[test]
    fn test_exact_distance_two() {
        let graph = directed_fixture();
        let found = bfs_at_distance(&graph, &"A".to_string(), 2).unwrap();
        assert_eq!(found, vec!["D".to_string(), "E".to_string()]);
    }

    #[test]
    fn test_distance_one_excludes_start() {
        let graph = directed_fixture();
        let found = bfs_at_distance(&graph, &"A".to_string(), 1).unwrap();
        assert_eq!(found, vec!["B", "C", "F"]);
    }

    #[test]
    fn test_length_beyond_graph_is_empty() {
        let graph = directed_fixture();
        let found = bfs_at_distance(&graph, &"A".to_string(), 3).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_length_zero_is_start() {
        let graph = directed_fixture();
        let found = bfs_at_distance(&graph, &"G".to_string(), 0).unwrap();
        assert_eq!(found, vec!["G"]);
    }

    #[test]
    fn test_undirected_scenario() {
        let mut graph: Graph<u32> = Graph::undirected();
        for key in 1u32..=5 {
            graph.add_vertex(key).unwrap();
        }
        for (from, to) in [(1u32, 2u32), (1, 4), (2, 3), (2, 4), (2, 5), (3, 5)] {
            graph.add_edge(from, to, 0).unwrap();
        }

        assert_eq!(bfs_at_distance(&graph, &1, 1), Some(vec![2, 4]));
        assert_eq!(bfs_at_distance(&graph, &1, 2), Some(vec![3, 5]));
    }
}
