use crate::graph::types::{Reachability, VertexKey};
use crate::graph::GraphProvider;
use std::collections::HashSet;

/// A vertex on the depth-first stack and how far through its neighbors we are
struct Frame<'a, K> {
    key: &'a K,
    neighbors: Vec<&'a K>,
    cursor: usize,
}

impl<'a, K: VertexKey> Frame<'a, K> {
    fn new(provider: &'a dyn GraphProvider<K>, key: &'a K) -> Self {
        Frame {
            key,
            neighbors: provider.neighbors(key),
            cursor: 0,
        }
    }

    fn next_neighbor(&mut self) -> Option<&'a K> {
        let next = self.neighbors.get(self.cursor).copied();
        self.cursor += 1;
        next
    }
}

fn owned<K: VertexKey>(keys: &[&K]) -> Vec<K> {
    keys.iter().map(|&key| key.clone()).collect()
}

/// Depth-first search from `start` for `target`, using an explicit stack.
///
/// Each vertex is marked visited once. When the target is found, `path`
/// holds the stack from `start` to `target`; otherwise `visited` covers
/// everything reachable from `start`.
#[tracing::instrument(level = "debug", skip_all, fields(start = %start, target = %target))]
pub fn dfs_reachability<K: VertexKey>(
    provider: &dyn GraphProvider<K>,
    start: &K,
    target: &K,
) -> Reachability<K> {
    dfs_walk(provider, start, &|key: &K| key == target)
}

/// Depth-first walk that stops at the first vertex matching `is_target`
pub(crate) fn dfs_walk<K: VertexKey>(
    provider: &dyn GraphProvider<K>,
    start: &K,
    is_target: &dyn Fn(&K) -> bool,
) -> Reachability<K> {
    if !provider.contains(start) {
        tracing::debug!("start vertex missing from graph");
        return Reachability::default();
    }

    if is_target(start) {
        return Reachability {
            found: true,
            visited: vec![start.clone()],
            path: vec![start.clone()],
        };
    }

    let mut visited: HashSet<&K> = HashSet::new();
    let mut order: Vec<&K> = vec![start];
    visited.insert(start);

    let mut stack: Vec<Frame<'_, K>> = vec![Frame::new(provider, start)];

    while let Some(frame) = stack.last_mut() {
        let Some(neighbor) = frame.next_neighbor() else {
            stack.pop();
            continue;
        };
        if !visited.insert(neighbor) {
            continue;
        }
        order.push(neighbor);

        if is_target(neighbor) {
            let mut path: Vec<&K> = stack.iter().map(|frame| frame.key).collect();
            path.push(neighbor);
            tracing::debug!(visited = order.len(), depth = path.len(), "target reached");
            return Reachability {
                found: true,
                visited: owned(&order),
                path: owned(&path),
            };
        }

        stack.push(Frame::new(provider, neighbor));
    }

    tracing::debug!(visited = order.len(), "target not reachable");
    Reachability::unreachable(owned(&order))
}
