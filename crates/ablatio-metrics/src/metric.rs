//! The centrality metric seam.
//!
//! The impact engine treats every metric as a pure function from a graph
//! to a score per node. It never looks inside: anything that implements
//! [`CentralityMetric`] can be registered, including closures wrapped in
//! [`FnMetric`].

use crate::MetricError;
use ablatio_graph::{Graph, NodeId};
use std::collections::HashMap;
use std::fmt;

/// Scores for every node of one graph snapshot.
pub type CentralityResult<N> = HashMap<N, f64>;

/// A centrality measure.
///
/// Implementations must be total over every graph reachable by node
/// deletion, including the empty graph (which yields an empty map), and
/// must return a score for every node of the graph they are given.
pub trait CentralityMetric<N: NodeId>: Send + Sync {
    /// Computes scores for every node of `graph`.
    fn compute(&self, graph: &Graph<N>) -> Result<CentralityResult<N>, MetricError>;
}

/// Adapter that turns a closure into a [`CentralityMetric`].
pub struct FnMetric<F> {
    func: F,
}

impl<F> FnMetric<F> {
    /// Wraps a closure.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> fmt::Debug for FnMetric<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnMetric").finish_non_exhaustive()
    }
}

impl<N, F> CentralityMetric<N> for FnMetric<F>
where
    N: NodeId,
    F: Fn(&Graph<N>) -> Result<CentralityResult<N>, MetricError> + Send + Sync,
{
    fn compute(&self, graph: &Graph<N>) -> Result<CentralityResult<N>, MetricError> {
        (self.func)(graph)
    }
}

/// Collects per-index scores into a [`CentralityResult`] keyed by node id.
pub(crate) fn scores_by_id<N: NodeId>(graph: &Graph<N>, scores: &[f64]) -> CentralityResult<N> {
    graph
        .node_ids()
        .zip(scores.iter().copied())
        .map(|(id, score)| (id.clone(), score))
        .collect()
}
