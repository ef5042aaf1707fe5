use super::types::{Edge, VertexKey, Weight};
use super::vertex::Vertex;
use crate::error::GraphError;
use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Weighted graph keyed by `K`.
///
/// Vertices are only created by [`Graph::add_vertex`] and never removed.
/// Every neighbor key stored in any adjacency is itself a vertex of the graph.
#[derive(Debug, Clone)]
pub struct Graph<K = String> {
    vertices: Vec<Vertex<K>>,
    index: HashMap<K, usize>,
    /// Ordered `(from, to)` position pairs already counted by `add_edge`
    counted: HashSet<(usize, usize)>,
    num_edges: usize,
    undirected: bool,
}

impl<K: VertexKey> Default for Graph<K> {
    fn default() -> Self {
        Self::with_mode(false)
    }
}

impl<K: VertexKey> Graph<K> {
    /// Empty directed graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty undirected graph
    pub fn undirected() -> Self {
        Self::with_mode(true)
    }

    pub fn with_mode(undirected: bool) -> Self {
        Graph {
            vertices: Vec::new(),
            index: HashMap::new(),
            counted: HashSet::new(),
            num_edges: 0,
            undirected,
        }
    }

    pub fn is_undirected(&self) -> bool {
        self.undirected
    }

    /// Change the edge mode. Only affects edges added afterwards.
    pub fn set_undirected(&mut self, undirected: bool) {
        self.undirected = undirected;
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    /// Register a new vertex with an empty adjacency.
    ///
    /// Numeric keys need typed literals (`1u32`, not `1`): an untyped integer
    /// defaults to `i32`, which only converts into wider key types.
    pub fn add_vertex(&mut self, key: impl Into<K>) -> Result<&Vertex<K>, GraphError<K>> {
        let key = key.into();
        if self.index.contains_key(&key) {
            return Err(GraphError::DuplicateVertex(key));
        }

        let pos = self.vertices.len();
        self.index.insert(key.clone(), pos);
        self.vertices.push(Vertex::new(key));

        Ok(&self.vertices[pos])
    }

    pub fn get_vertex<Q>(&self, key: &Q) -> Option<&Vertex<K>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .get(key)
            .and_then(|&pos| self.vertices.get(pos))
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// The stored key equal to `key`
    pub(crate) fn stored_key<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get_key_value(key).map(|(stored, _)| stored)
    }

    /// Add an arc `from -> to`, and `to -> from` as well when undirected.
    ///
    /// Every successful call adds one to the edge count, except that
    /// re-adding an ordered pair an earlier call already added only
    /// overwrites its weight, and on an undirected graph a call whose reverse
    /// arc already carries the same weight is not counted either. Writing the
    /// reverse direction of an undirected edge with a new weight therefore
    /// counts again.
    pub fn add_edge(
        &mut self,
        from: impl Into<K>,
        to: impl Into<K>,
        weight: Weight,
    ) -> Result<(), GraphError<K>> {
        let from = from.into();
        let to = to.into();

        if from == to {
            return Err(GraphError::SelfLoop(from));
        }
        let from_pos = match self.index.get(&from) {
            Some(&pos) => pos,
            None => return Err(GraphError::UnknownVertex(from)),
        };
        let to_pos = match self.index.get(&to) {
            Some(&pos) => pos,
            None => return Err(GraphError::UnknownVertex(to)),
        };

        let mirrors_reverse =
            self.undirected && self.vertices[to_pos].edge_weight(&from) == Some(weight);
        if !mirrors_reverse && self.counted.insert((from_pos, to_pos)) {
            self.num_edges += 1;
        }

        self.vertices[from_pos].add_neighbor(to, weight);
        if self.undirected {
            self.vertices[to_pos].add_neighbor(from, weight);
        }
        Ok(())
    }

    /// Weight of the arc `from -> to`, if present
    pub fn edge_weight<Q>(&self, from: &Q, to: &Q) -> Option<Weight>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_vertex(from).and_then(|vertex| vertex.edge_weight(to))
    }

    /// All vertex keys, in insertion order
    pub fn get_vertices(&self) -> Vec<&K> {
        self.vertices.iter().map(Vertex::id).collect()
    }

    /// Every materialized arc.
    ///
    /// Undirected graphs report each edge in both directions.
    pub fn get_edges(&self) -> Vec<Edge<K>> {
        self.vertices
            .iter()
            .flat_map(|vertex| {
                vertex
                    .weighted_neighbors()
                    .map(|(to, weight)| Edge::new(vertex.id().clone(), to.clone(), weight))
            })
            .collect()
    }

    /// Like [`Graph::get_edges`], but each undirected edge appears once, in
    /// the orientation met first.
    pub fn unique_edges(&self) -> Vec<Edge<K>> {
        if !self.undirected {
            return self.get_edges();
        }

        let mut seen: HashSet<(&K, &K)> = HashSet::new();
        let mut edges = Vec::new();
        for vertex in &self.vertices {
            for (to, weight) in vertex.weighted_neighbors() {
                if seen.contains(&(to, vertex.id())) {
                    continue;
                }
                seen.insert((vertex.id(), to));
                edges.push(Edge::new(vertex.id().clone(), to.clone(), weight));
            }
        }
        edges
    }

    /// Vertices in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Vertex<K>> {
        self.vertices.iter()
    }
}

impl<'a, K> IntoIterator for &'a Graph<K> {
    type Item = &'a Vertex<K>;
    type IntoIter = std::slice::Iter<'a, Vertex<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lettered(undirected: bool, keys: &[&str]) -> Graph {
        let mut graph: Graph = Graph::with_mode(undirected);
        for key in keys {
            graph.add_vertex(*key).unwrap();
        }
        graph
    }

    #[test]
    fn test_new_graph_is_empty() {
        let graph: Graph = Graph::new();
        assert_eq!(graph.num_vertices(), 0);
        assert_eq!(graph.num_edges(), 0);
        assert!(!graph.is_undirected());
        assert!(graph.get_vertices().is_empty());
    }

    #[test]
    fn test_add_vertex() {
        let mut graph: Graph = Graph::new();

        let vertex = graph.add_vertex("B").unwrap();
        assert_eq!(vertex.id(), "B");
        assert_eq!(graph.num_vertices(), 1);
        assert!(graph.contains("B"));

        graph.add_vertex("A").unwrap();
        assert_eq!(graph.num_vertices(), 2);

        let err = graph.add_vertex("B").unwrap_err();
        assert_eq!(err, GraphError::DuplicateVertex("B".to_string()));
        assert_eq!(graph.num_vertices(), 2);
    }

    #[test]
    fn test_duplicate_vertex_keeps_adjacency() {
        let mut graph = lettered(false, &["A", "B"]);
        graph.add_edge("A", "B", 3).unwrap();

        assert!(graph.add_vertex("A").is_err());
        assert_eq!(graph.edge_weight("A", "B"), Some(3));
    }

    #[test]
    fn test_get_vertex() {
        let graph = lettered(false, &["B"]);
        assert_eq!(graph.get_vertex("B").map(|v| v.id().as_str()), Some("B"));
        assert!(graph.get_vertex("C").is_none());
    }

    #[test]
    fn test_add_edge_undirected() {
        let mut graph = lettered(true, &["A", "B", "C", "D", "E", "F", "G"]);

        graph.add_edge("A", "B", 10).unwrap();
        assert_eq!(graph.edge_weight("A", "B"), Some(10));
        assert_eq!(graph.edge_weight("B", "A"), Some(10));

        graph.add_edge("A", "C", 5).unwrap();
        graph.add_edge("B", "C", 10).unwrap();
        assert_eq!(graph.edge_weight("C", "A"), Some(5));
        assert_eq!(graph.edge_weight("C", "B"), Some(10));
        assert_eq!(graph.num_edges(), 3);

        let err = graph.add_edge("O", "B", 12).unwrap_err();
        assert_eq!(err, GraphError::UnknownVertex("O".to_string()));
        assert_eq!(graph.num_edges(), 3);
    }

    #[test]
    fn test_add_edge_directed_is_one_way() {
        let mut graph = lettered(false, &["A", "B"]);
        graph.add_edge("A", "B", 7).unwrap();

        assert_eq!(graph.edge_weight("A", "B"), Some(7));
        assert_eq!(graph.edge_weight("B", "A"), None);
        assert_eq!(graph.num_edges(), 1);
    }

    #[test]
    fn test_self_loop_rejected_without_mutation() {
        let mut graph = lettered(true, &["A"]);
        let err = graph.add_edge("A", "A", 1).unwrap_err();
        assert_eq!(err, GraphError::SelfLoop("A".to_string()));
        assert_eq!(graph.num_edges(), 0);
        assert_eq!(graph.get_vertex("A").map(Vertex::degree), Some(0));

        // Self-loop wins even when the vertex is unknown
        let err = graph.add_edge("Z", "Z", 1).unwrap_err();
        assert_eq!(err, GraphError::SelfLoop("Z".to_string()));
    }

    #[test]
    fn test_reinsert_overwrites_weight_without_counting() {
        let mut graph = lettered(false, &["A", "B"]);
        graph.add_edge("A", "B", 1).unwrap();
        graph.add_edge("A", "B", 9).unwrap();

        assert_eq!(graph.num_edges(), 1);
        assert_eq!(graph.edge_weight("A", "B"), Some(9));
        assert_eq!(graph.get_edges().len(), 1);
    }

    #[test]
    fn test_reverse_of_undirected_edge_with_same_weight_not_counted() {
        let mut graph = lettered(true, &["2", "5"]);
        graph.add_edge("2", "5", 0).unwrap();
        graph.add_edge("5", "2", 0).unwrap();

        assert_eq!(graph.num_edges(), 1);
        assert_eq!(graph.unique_edges().len(), 1);
    }

    #[test]
    fn test_reverse_of_undirected_edge_with_new_weight_counts_again() {
        let mut graph = lettered(true, &["u", "v"]);
        graph.add_edge("u", "v", 0).unwrap();
        graph.add_edge("v", "u", 4).unwrap();

        assert_eq!(graph.num_edges(), 2);
        assert_eq!(graph.edge_weight("u", "v"), Some(4));
        assert_eq!(graph.edge_weight("v", "u"), Some(4));

        // Both ordered pairs have now been added; repeats only overwrite
        graph.add_edge("v", "u", 7).unwrap();
        graph.add_edge("u", "v", 1).unwrap();
        assert_eq!(graph.num_edges(), 2);
        assert_eq!(graph.edge_weight("v", "u"), Some(1));
    }

    #[test]
    fn test_directed_opposite_arcs_count_separately() {
        let mut graph = lettered(false, &["A", "B"]);
        graph.add_edge("A", "B", 3).unwrap();
        graph.add_edge("B", "A", 3).unwrap();
        assert_eq!(graph.num_edges(), 2);
    }

    #[test]
    fn test_get_vertices_in_insertion_order() {
        let graph = lettered(false, &["B", "A", "C"]);
        let keys: Vec<&str> = graph.get_vertices().into_iter().map(String::as_str).collect();
        assert_eq!(keys, vec!["B", "A", "C"]);
    }

    #[test]
    fn test_get_edges_directed() {
        let mut graph = lettered(false, &["B", "A", "C"]);
        graph.add_edge("A", "B", 10).unwrap();
        graph.add_edge("A", "C", 5).unwrap();
        graph.add_edge("B", "C", 10).unwrap();

        let edges = graph.get_edges();
        assert_eq!(edges.len(), 3);
        assert!(edges.contains(&Edge::new("A".to_string(), "B".to_string(), 10)));
        assert!(edges.contains(&Edge::new("A".to_string(), "C".to_string(), 5)));
        assert!(edges.contains(&Edge::new("B".to_string(), "C".to_string(), 10)));
        assert_eq!(graph.unique_edges(), edges);
    }

    #[test]
    fn test_get_edges_undirected_reports_both_arcs() {
        let mut graph = lettered(true, &["A", "B", "C"]);
        graph.add_edge("A", "B", 10).unwrap();
        graph.add_edge("B", "C", 2).unwrap();

        let edges = graph.get_edges();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[0], Edge::new("A".to_string(), "B".to_string(), 10));
        assert_eq!(edges[1], Edge::new("B".to_string(), "A".to_string(), 10));

        let unique = graph.unique_edges();
        assert_eq!(
            unique,
            vec![
                Edge::new("A".to_string(), "B".to_string(), 10),
                Edge::new("B".to_string(), "C".to_string(), 2),
            ]
        );
    }

    #[test]
    fn test_iteration_visits_each_vertex_once() {
        let mut graph = lettered(false, &["X", "Y", "Z"]);
        graph.add_edge("X", "Y", 0).unwrap();

        let ids: Vec<&String> = (&graph).into_iter().map(Vertex::id).collect();
        assert_eq!(ids, vec!["X", "Y", "Z"]);
        assert_eq!(graph.iter().count(), 3);
    }

    #[test]
    fn test_integer_keys() {
        let mut graph: Graph<u32> = Graph::undirected();
        for key in 1u32..=3 {
            graph.add_vertex(key).unwrap();
        }
        graph.add_edge(1u32, 2u32, 0).unwrap();
        assert!(graph.get_vertex(&2).is_some_and(|v| v.has_neighbor(&1)));
        assert_eq!(graph.add_edge(1u32, 9u32, 0), Err(GraphError::UnknownVertex(9)));
    }
}
