//! Connectivity and diameter analysis.
//!
//! Provides:
//! - Weak connectivity checks (direction ignored)
//! - Unweighted hop distances (BFS)
//! - Diameter with the `0` / `+∞` boundary conventions
//! - [`DiameterSnapshot`] for before/after comparisons
//!
//! Edge weights are never used here: diameter is measured in hops.

use crate::{Graph, NodeId};
use petgraph::algo::connected_components;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

// ============================================================================
// Result types
// ============================================================================

/// Diameter of a graph before and after node removal.
///
/// Each value is a finite hop count, `0` for graphs with fewer than two
/// nodes, or `f64::INFINITY` for disconnected graphs. An infinite diameter
/// is written as `null` and read back as `f64::INFINITY`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiameterSnapshot {
    /// Diameter of the original graph.
    #[serde(with = "hop_count")]
    pub before: f64,
    /// Diameter after removal.
    #[serde(with = "hop_count")]
    pub after: f64,
}

/// `f64` hop counts with `null` standing for "unreachable".
mod hop_count {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_some(value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

impl DiameterSnapshot {
    /// Measures both graphs.
    pub fn measure<N: NodeId>(before: &Graph<N>, after: &Graph<N>) -> Self {
        Self {
            before: diameter(before),
            after: diameter(after),
        }
    }

    /// `after - before`.
    ///
    /// `+∞` when removal disconnected a connected graph, `NaN` when both
    /// snapshots are disconnected.
    pub fn change(&self) -> f64 {
        self.after - self.before
    }

    /// Whether removal turned a connected graph into a disconnected one.
    pub fn disconnected(&self) -> bool {
        self.before.is_finite() && self.after.is_infinite()
    }
}

// ============================================================================
// Algorithms
// ============================================================================

/// Number of weakly connected components.
pub fn weak_component_count<N: NodeId>(graph: &Graph<N>) -> usize {
    connected_components(graph.as_petgraph())
}

/// Whether the graph forms a single (weakly) connected component.
///
/// The empty graph counts as connected.
pub fn is_weakly_connected<N: NodeId>(graph: &Graph<N>) -> bool {
    graph.node_count() <= 1 || weak_component_count(graph) == 1
}

/// Hop distances from `source` to every node, ignoring edge direction.
///
/// Indexed by `NodeIndex::index()`; unreachable nodes are `None`.
pub fn hop_distances(neighbors: &[Vec<usize>], source: usize) -> Vec<Option<usize>> {
    let mut dist: Vec<Option<usize>> = vec![None; neighbors.len()];
    let mut queue: VecDeque<usize> = VecDeque::new();

    dist[source] = Some(0);
    queue.push_back(source);

    while let Some(current) = queue.pop_front() {
        let next = dist[current].map_or(0, |d| d + 1);
        for &neighbor in &neighbors[current] {
            if dist[neighbor].is_none() {
                dist[neighbor] = Some(next);
                queue.push_back(neighbor);
            }
        }
    }

    dist
}

/// Diameter: the longest shortest-path hop count over all node pairs.
///
/// - 0 or 1 node: `0.0`
/// - disconnected (weakly, for directed graphs): `f64::INFINITY`
/// - otherwise: the maximum eccentricity, measured on the underlying
///   undirected graph
pub fn diameter<N: NodeId>(graph: &Graph<N>) -> f64 {
    let n = graph.node_count();
    if n <= 1 {
        return 0.0;
    }
    if !is_weakly_connected(graph) {
        log::debug!("Graph with {n} nodes is disconnected; diameter is infinite");
        return f64::INFINITY;
    }

    let neighbors = graph.undirected_neighbor_table();
    let mut longest = 0usize;
    for source in 0..n {
        let eccentricity = hop_distances(&neighbors, source)
            .into_iter()
            .flatten()
            .max()
            .unwrap_or(0);
        longest = longest.max(eccentricity);
    }
    longest as f64
}

// ============================================================================
// Tests
// ============================================================================
