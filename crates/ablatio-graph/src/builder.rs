//! GraphBuilder for constructing graphs from edge lists.
//!
//! Loaders hand over raw edge records; the builder applies the structural
//! policy and reports what it did:
//!
//! - **Two-phase build**: declared nodes are created first, then edges.
//!   Isolated nodes survive even when no edge mentions them.
//! - **Dangling reference tracking**: when endpoint auto-creation is off,
//!   edges that reference undeclared nodes are recorded in
//!   [`BuildStats::dangling_refs`] instead of silently dropped.
//! - **Edge deduplication**: a repeated pair (either orientation for
//!   undirected graphs) keeps the last weight and is counted in
//!   [`BuildStats::deduped_edges`].
//! - **Optional self-loop removal**, a loader-level policy.
//! - Non-finite weights are rejected.

use crate::{Edge, Graph, NodeId};
use ablatio_core::{Error, Result};
use serde::{Deserialize, Serialize};

// ============================================================================
// GraphDocument
// ============================================================================

/// Serializable form of a graph.
///
/// This is Ablatio's own JSON shape, not an interchange format:
///
/// ```json
/// { "directed": false, "nodes": ["a"], "edges": [{ "from": "a", "to": "b", "weight": 2.0 }] }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument<N> {
    /// Whether edges are ordered pairs.
    #[serde(default)]
    pub directed: bool,
    /// Nodes to create even if no edge mentions them.
    #[serde(default = "Vec::new")]
    pub nodes: Vec<N>,
    /// Edge list; `weight` defaults to 1.0.
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<N>>,
}

impl<N: NodeId> GraphDocument<N> {
    /// Snapshot a graph as a document (nodes and edges in insertion order).
    pub fn from_graph(graph: &Graph<N>) -> Self {
        Self {
            directed: graph.is_directed(),
            nodes: graph.node_ids().cloned().collect(),
            edges: graph
                .edges()
                .map(|(from, to, weight)| Edge::new(from.clone(), to.clone()).with_weight(weight))
                .collect(),
        }
    }

    /// Build the graph described by this document.
    pub fn into_graph(self) -> Result<(Graph<N>, BuildStats)> {
        GraphBuilder::new(self.directed)
            .with_nodes(self.nodes)
            .with_edges(self.edges)
            .build()
    }
}

// ============================================================================
// Builder configuration types
// ============================================================================

/// Statistics from a graph build operation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildStats {
    /// Number of nodes created.
    pub nodes_created: usize,
    /// Number of edges created.
    pub edges_created: usize,
    /// Duplicate edges that were merged into an existing edge.
    pub deduped_edges: usize,
    /// Self-loops dropped by policy.
    pub self_loops_dropped: usize,
    /// Edges that referenced undeclared nodes (auto-creation off).
    pub dangling_refs: Vec<String>,
}

// ============================================================================
// GraphBuilder
// ============================================================================

/// Builder for constructing graphs from node and edge records.
pub struct GraphBuilder<N: NodeId> {
    directed: bool,
    nodes: Vec<N>,
    edges: Vec<Edge<N>>,
    create_missing_nodes: bool,
    drop_self_loops: bool,
}

impl<N: NodeId> GraphBuilder<N> {
    /// Creates a new builder.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            nodes: Vec::new(),
            edges: Vec::new(),
            create_missing_nodes: true,
            drop_self_loops: false,
        }
    }

    /// Declares nodes up front.
    pub fn with_nodes(mut self, nodes: impl IntoIterator<Item = N>) -> Self {
        self.nodes.extend(nodes);
        self
    }

    /// Adds edge records.
    pub fn with_edges(mut self, edges: impl IntoIterator<Item = Edge<N>>) -> Self {
        self.edges.extend(edges);
        self
    }

    /// Whether edge endpoints that were not declared become nodes
    /// (default: `true`).
    pub fn create_missing_nodes(mut self, create: bool) -> Self {
        self.create_missing_nodes = create;
        self
    }

    /// Whether self-loops are dropped (default: `false`).
    pub fn drop_self_loops(mut self, drop: bool) -> Self {
        self.drop_self_loops = drop;
        self
    }

    /// Builds the graph.
    ///
    /// - Phase 1: add all declared nodes
    /// - Phase 2: add all edges (with dedup, self-loop policy, and dangling
    ///   ref tracking)
    pub fn build(self) -> Result<(Graph<N>, BuildStats)> {
        let mut graph = Graph::new(self.directed);
        let mut stats = BuildStats::default();

        // Phase 1: nodes
        for node in self.nodes {
            if !graph.contains_node(&node) {
                graph.add_node(node);
                stats.nodes_created += 1;
            }
        }

        // Phase 2: edges
        for edge in self.edges {
            if !edge.weight.is_finite() {
                return Err(Error::graph(format!(
                    "edge {} -> {} has non-finite weight {}",
                    edge.from, edge.to, edge.weight
                )));
            }

            if self.drop_self_loops && edge.is_self_loop() {
                stats.self_loops_dropped += 1;
                continue;
            }

            for endpoint in [&edge.from, &edge.to] {
                if graph.contains_node(endpoint) {
                    continue;
                }
                if self.create_missing_nodes {
                    graph.add_node(endpoint.clone());
                    stats.nodes_created += 1;
                }
            }

            if !graph.contains_node(&edge.from) || !graph.contains_node(&edge.to) {
                stats
                    .dangling_refs
                    .push(format!("{} -> {}", edge.from, edge.to));
                continue;
            }

            if graph.add_edge(edge)? {
                stats.edges_created += 1;
            } else {
                stats.deduped_edges += 1;
            }
        }

        if !stats.dangling_refs.is_empty() {
            log::warn!(
                "Skipped {} edge(s) with undeclared endpoints",
                stats.dangling_refs.len()
            );
        }
        log::debug!(
            "Built graph: {} nodes, {} edges ({} deduped, {} self-loops dropped)",
            stats.nodes_created,
            stats.edges_created,
            stats.deduped_edges,
            stats.self_loops_dropped
        );

        Ok((graph, stats))
    }
}

// ============================================================================
// Tests
// ============================================================================
