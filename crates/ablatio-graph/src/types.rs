//! Core graph types for Ablatio.
//!
//! [`Graph`] wraps a petgraph `DiGraph` with an id → index lookup table.
//! Undirected graphs are stored with one arc per edge and the `directed`
//! flag tells algorithms to follow arcs both ways.
//!
//! Graphs are value-like. Nothing in the engine removes nodes in place:
//! [`Graph::without_nodes`] builds a fresh graph, which keeps petgraph node
//! indices dense (`0..node_count`) for every graph in circulation.

use ablatio_core::{Error, Result};
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

/// Weight given to edges that do not carry one.
pub const DEFAULT_WEIGHT: f64 = 1.0;

// ============================================================================
// NodeId
// ============================================================================

/// Identifier of a graph node.
///
/// Ids are opaque: they are compared by equality, hashed, ordered for
/// deterministic output, and displayed in tables and logs. Nothing assumes
/// they are numeric.
pub trait NodeId:
    Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display + Send + Sync + 'static
{
}

impl<T> NodeId for T where
    T: Clone + Eq + Hash + Ord + fmt::Debug + fmt::Display + Send + Sync + 'static
{
}

// ============================================================================
// Edge
// ============================================================================

/// An edge between two nodes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Edge<N> {
    /// Source node (either endpoint for undirected graphs).
    pub from: N,
    /// Target node.
    pub to: N,
    /// Edge weight.
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

impl<N> Edge<N> {
    /// Creates an edge with the default weight.
    pub fn new(from: N, to: N) -> Self {
        Self {
            from,
            to,
            weight: DEFAULT_WEIGHT,
        }
    }

    /// Sets an explicit weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Returns `true` if both endpoints are the same node.
    pub fn is_self_loop(&self) -> bool
    where
        N: PartialEq,
    {
        self.from == self.to
    }
}

// ============================================================================
// Graph
// ============================================================================

/// Weighted graph with generic node ids.
#[derive(Clone, Debug)]
pub struct Graph<N: NodeId> {
    graph: DiGraph<N, f64>,
    node_indices: HashMap<N, NodeIndex>,
    directed: bool,
}

impl<N: NodeId> Graph<N> {
    /// Creates an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(false)
    }

    /// Creates an empty directed graph.
    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Creates an empty graph with the given directedness.
    pub fn new(directed: bool) -> Self {
        Self {
            graph: DiGraph::new(),
            node_indices: HashMap::new(),
            directed,
        }
    }

    /// Builds a graph from an edge list, creating endpoint nodes as needed.
    pub fn from_edges<I>(directed: bool, edges: I) -> Self
    where
        I: IntoIterator<Item = Edge<N>>,
    {
        let mut graph = Self::new(directed);
        for edge in edges {
            graph.add_node(edge.from.clone());
            graph.add_node(edge.to.clone());
            // Both endpoints exist, so this cannot fail.
            let _ = graph.add_edge(edge);
        }
        graph
    }

    /// Whether edges are ordered pairs.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns `true` if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Checks if a node exists.
    pub fn contains_node(&self, id: &N) -> bool {
        self.node_indices.contains_key(id)
    }

    /// Gets the petgraph `NodeIndex` for a node id.
    pub fn get_index(&self, id: &N) -> Option<NodeIndex> {
        self.node_indices.get(id).copied()
    }

    /// Returns the id stored at a node index.
    pub fn node_at(&self, idx: NodeIndex) -> &N {
        &self.graph[idx]
    }

    /// Iterates node ids in insertion order.
    pub fn node_ids(&self) -> impl Iterator<Item = &N> {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// Iterates edges in insertion order as `(from, to, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, f64)> {
        self.graph.edge_references().map(move |e| {
            (
                &self.graph[e.source()],
                &self.graph[e.target()],
                *e.weight(),
            )
        })
    }

    /// Read-only access to the underlying petgraph structure.
    ///
    /// Undirected edges appear as a single arc in insertion orientation.
    pub fn as_petgraph(&self) -> &DiGraph<N, f64> {
        &self.graph
    }

    // ========================================================================
    // Mutation (construction only)
    // ========================================================================

    /// Adds a node, returning its index.
    ///
    /// If the node already exists its existing index is returned.
    pub fn add_node(&mut self, id: N) -> NodeIndex {
        if let Some(&existing) = self.node_indices.get(&id) {
            return existing;
        }
        let idx = self.graph.add_node(id.clone());
        self.node_indices.insert(id, idx);
        idx
    }

    /// Adds an edge between two existing nodes.
    ///
    /// Adding a pair that is already connected (in either orientation for
    /// undirected graphs) updates the stored weight instead of creating a
    /// parallel edge. Returns `true` if a new edge was created.
    pub fn add_edge(&mut self, edge: Edge<N>) -> Result<bool> {
        let from = self.get_index(&edge.from).ok_or_else(|| {
            Error::graph(format!("edge endpoint '{}' is not a node", edge.from))
        })?;
        let to = self.get_index(&edge.to).ok_or_else(|| {
            Error::graph(format!("edge endpoint '{}' is not a node", edge.to))
        })?;

        if let Some(existing) = self.find_edge_index(from, to) {
            self.graph[existing] = edge.weight;
            return Ok(false);
        }
        self.graph.add_edge(from, to, edge.weight);
        Ok(true)
    }

    fn find_edge_index(
        &self,
        from: NodeIndex,
        to: NodeIndex,
    ) -> Option<petgraph::graph::EdgeIndex> {
        self.graph.find_edge(from, to).or_else(|| {
            if self.directed {
                None
            } else {
                self.graph.find_edge(to, from)
            }
        })
    }

    /// Returns the weight of the edge between two nodes, if any.
    pub fn edge_weight(&self, from: &N, to: &N) -> Option<f64> {
        let a = self.get_index(from)?;
        let b = self.get_index(to)?;
        self.find_edge_index(a, b).map(|e| self.graph[e])
    }

    // ========================================================================
    // Structure queries
    // ========================================================================

    /// Degree of a node: incident edge count, self-loops counted twice.
    ///
    /// For directed graphs this is in-degree plus out-degree.
    pub fn degree(&self, idx: NodeIndex) -> usize {
        self.graph.edges_directed(idx, Direction::Outgoing).count()
            + self.graph.edges_directed(idx, Direction::Incoming).count()
    }

    /// Weighted successor lists indexed by `NodeIndex::index()`.
    ///
    /// Undirected edges are listed from both endpoints; a self-loop is
    /// listed once.
    pub fn successor_table(&self) -> Vec<Vec<(usize, f64)>> {
        self.adjacency(false)
    }

    /// Weighted predecessor lists indexed by `NodeIndex::index()`.
    ///
    /// Identical to [`successor_table`](Self::successor_table) for
    /// undirected graphs.
    pub fn predecessor_table(&self) -> Vec<Vec<(usize, f64)>> {
        self.adjacency(true)
    }

    /// Neighbor lists ignoring direction, without weights or duplicates.
    pub fn undirected_neighbor_table(&self) -> Vec<Vec<usize>> {
        let mut table: Vec<Vec<usize>> = vec![Vec::new(); self.node_count()];
        for e in self.graph.edge_references() {
            let (u, v) = (e.source().index(), e.target().index());
            if !table[u].contains(&v) {
                table[u].push(v);
            }
            if u != v && !table[v].contains(&u) {
                table[v].push(u);
            }
        }
        table
    }

    fn adjacency(&self, reversed: bool) -> Vec<Vec<(usize, f64)>> {
        let mut table: Vec<Vec<(usize, f64)>> = vec![Vec::new(); self.node_count()];
        for e in self.graph.edge_references() {
            let (mut u, mut v) = (e.source().index(), e.target().index());
            if reversed {
                std::mem::swap(&mut u, &mut v);
            }
            let w = *e.weight();
            table[u].push((v, w));
            if !self.directed && u != v {
                table[v].push((u, w));
            }
        }
        table
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Checks that every id is a node, reporting all missing ids at once.
    pub fn validate_nodes<'a, I>(&self, ids: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a N>,
    {
        let mut missing: Vec<&N> = ids
            .into_iter()
            .filter(|id| !self.contains_node(id))
            .collect();
        if missing.is_empty() {
            return Ok(());
        }
        missing.sort();
        missing.dedup();
        Err(Error::node_not_found(missing))
    }

    /// Returns a copy of the graph without the given nodes and every edge
    /// touching them. `self` is left untouched.
    pub fn without_nodes<'a, I>(&self, ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a N>,
    {
        let removed: HashSet<&N> = ids.into_iter().collect();
        self.validate_nodes(removed.iter().copied())?;

        let graph = self.graph.filter_map(
            |_, id| (!removed.contains(id)).then(|| id.clone()),
            |_, weight| Some(*weight),
        );
        let node_indices = graph
            .node_indices()
            .map(|idx| (graph[idx].clone(), idx))
            .collect();

        log::debug!(
            "Removed {} node(s): {} -> {} nodes, {} -> {} edges",
            removed.len(),
            self.node_count(),
            graph.node_count(),
            self.edge_count(),
            graph.edge_count()
        );

        Ok(Self {
            graph,
            node_indices,
            directed: self.directed,
        })
    }
}

impl<N: NodeId> Default for Graph<N> {
    fn default() -> Self {
        Self::undirected()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn path_abc() -> Graph<String> {
        Graph::from_edges(
            false,
            vec![
                Edge::new("a".to_string(), "b".to_string()),
                Edge::new("b".to_string(), "c".to_string()),
            ],
        )
    }

    // ------------------------------------------------------------------------
    // Edge tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_edge_default_weight() {
        let edge = Edge::new(1, 2);
        assert_eq!(edge.weight, DEFAULT_WEIGHT);
        assert!(!edge.is_self_loop());
        assert!(Edge::new(3, 3).is_self_loop());
    }

    #[test]
    fn test_edge_missing_weight_deserializes_to_default() {
        let edge: Edge<String> = serde_json::from_str(r#"{"from":"a","to":"b"}"#).unwrap();
        assert_eq!(edge.weight, 1.0);
    }

    // ------------------------------------------------------------------------
    // Graph basic tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_graph_new_is_empty() {
        let graph: Graph<u32> = Graph::undirected();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.is_directed());
        assert!(Graph::<u32>::directed().is_directed());
    }

    #[test]
    fn test_add_node_duplicate_returns_existing() {
        let mut graph = Graph::undirected();
        let a = graph.add_node("a");
        let again = graph.add_node("a");
        assert_eq!(a, again);
        assert_eq!(graph.node_count(), 1);
    }

    #[test]
    fn test_add_edge_missing_endpoint() {
        let mut graph = Graph::undirected();
        graph.add_node("a");
        let result = graph.add_edge(Edge::new("a", "ghost"));
        assert!(matches!(result, Err(Error::Graph { .. })));
    }

    #[test]
    fn test_undirected_duplicate_updates_weight() {
        let mut graph = Graph::undirected();
        graph.add_node("a");
        graph.add_node("b");
        assert!(graph.add_edge(Edge::new("a", "b")).unwrap());
        assert!(!graph.add_edge(Edge::new("b", "a").with_weight(4.0)).unwrap());
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_weight(&"a", &"b"), Some(4.0));
        assert_eq!(graph.edge_weight(&"b", &"a"), Some(4.0));
    }

    #[test]
    fn test_directed_reverse_pair_is_distinct() {
        let mut graph = Graph::directed();
        graph.add_node("a");
        graph.add_node("b");
        assert!(graph.add_edge(Edge::new("a", "b")).unwrap());
        assert!(graph.add_edge(Edge::new("b", "a")).unwrap());
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge_weight(&"a", &"b"), Some(1.0));
    }

    #[test]
    fn test_node_ids_insertion_order() {
        let graph = path_abc();
        let ids: Vec<&String> = graph.node_ids().collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_degree_counts_self_loop_twice() {
        let graph = Graph::from_edges(false, vec![Edge::new(1, 1), Edge::new(1, 2)]);
        let one = graph.get_index(&1).unwrap();
        let two = graph.get_index(&2).unwrap();
        assert_eq!(graph.degree(one), 3);
        assert_eq!(graph.degree(two), 1);
    }

    #[test]
    fn test_successor_table_undirected() {
        let graph = path_abc();
        let table = graph.successor_table();
        assert_eq!(table[0], vec![(1, 1.0)]);
        assert_eq!(table[1].len(), 2);
        assert_eq!(table, graph.predecessor_table());
    }

    #[test]
    fn test_predecessor_table_directed() {
        let graph = Graph::from_edges(true, vec![Edge::new("a", "b").with_weight(2.0)]);
        assert_eq!(graph.successor_table(), vec![vec![(1, 2.0)], vec![]]);
        assert_eq!(graph.predecessor_table(), vec![vec![], vec![(0, 2.0)]]);
    }

    // ------------------------------------------------------------------------
    // Removal tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_without_nodes_leaves_original_untouched() {
        let graph = path_abc();
        let reduced = graph.without_nodes([&"b".to_string()]).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(reduced.node_count(), 2);
        assert_eq!(reduced.edge_count(), 0);
        assert!(!reduced.contains_node(&"b".to_string()));
        assert!(reduced.get_index(&"c".to_string()).is_some());
    }

    #[test]
    fn test_without_nodes_keeps_dense_indices() {
        let graph = path_abc();
        let reduced = graph.without_nodes([&"a".to_string()]).unwrap();
        let indices: Vec<usize> = reduced
            .node_ids()
            .map(|id| reduced.get_index(id).unwrap().index())
            .collect();
        assert_eq!(indices, vec![0, 1]);
        assert_eq!(reduced.edge_weight(&"b".to_string(), &"c".to_string()), Some(1.0));
    }

    #[test]
    fn test_without_nodes_reports_all_missing() {
        let graph = path_abc();
        let x = "x".to_string();
        let y = "y".to_string();
        let a = "a".to_string();
        let err = graph.without_nodes([&y, &a, &x]).unwrap_err();
        let Error::NodeNotFound { ids } = err else {
            unreachable!("Expected NodeNotFound");
        };
        assert_eq!(ids, vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn test_without_all_nodes_is_empty() {
        let graph = Graph::from_edges(false, vec![Edge::new(1, 2)]);
        let reduced = graph.without_nodes([&1, &2]).unwrap();
        assert!(reduced.is_empty());
    }
}
