mod path;

use crate::graph::queue::Queue;
use crate::graph::types::{PathOutcome, VertexKey};
use crate::graph::GraphProvider;
use std::collections::{HashMap, HashSet};

/// Level-order search from `from`, stopping as soon as `to` leaves the queue.
///
/// Each vertex records the vertex that discovered it first, so ties between
/// equal-distance routes go to the earlier neighbor in adjacency order.
fn bfs_search<'a, K: VertexKey>(
    provider: &'a dyn GraphProvider<K>,
    from: &'a K,
    to: &K,
) -> (bool, HashMap<&'a K, &'a K>) {
    let mut visited: HashSet<&K> = HashSet::new();
    let mut predecessors: HashMap<&K, &K> = HashMap::new();
    let mut queue: Queue<&K> = Queue::new();

    queue.enqueue(from);
    visited.insert(from);

    while let Some(current) = queue.dequeue() {
        if current == to {
            tracing::trace!(pending = queue.len(), "target dequeued");
            return (true, predecessors);
        }

        for neighbor in provider.neighbors(current) {
            if visited.insert(neighbor) {
                predecessors.insert(neighbor, current);
                queue.enqueue(neighbor);
            }
        }
    }

    (false, predecessors)
}

/// Find a fewest-hops path between two vertices, ignoring weights.
///
/// `from == to` yields the single-vertex path.
#[tracing::instrument(level = "debug", skip_all, fields(from = %from, to = %to))]
pub fn bfs_find_path<K: VertexKey>(
    provider: &dyn GraphProvider<K>,
    from: &K,
    to: &K,
) -> PathOutcome<K> {
    if !provider.contains(from) || !provider.contains(to) {
        tracing::debug!("endpoint missing from graph");
        return PathOutcome::MissingVertex;
    }

    if from == to {
        return PathOutcome::Found {
            path: vec![from.clone()],
        };
    }

    let (found, predecessors) = bfs_search(provider, from, to);
    if !found {
        tracing::debug!(explored = predecessors.len(), "target not reachable");
        return PathOutcome::Unreachable;
    }

    let path = path::reconstruct_path(from, to, &predecessors);
    tracing::debug!(hops = path.len().saturating_sub(1), "path found");
    PathOutcome::Found { path }
}
