//! Degree centrality.
//!
//! ```text
//! C_D(v) = deg(v) / (n - 1)
//! ```
//!
//! Self-loops add two to the degree. For directed graphs the degree is
//! in-degree plus out-degree, so normalized scores can exceed 1. A graph
//! with a single node scores it 1.0.

use crate::{CentralityMetric, CentralityResult, MetricError};
use ablatio_graph::{Graph, NodeId};

/// Degree centrality, normalized by `n - 1` unless built with
/// [`Degree::unnormalized`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Degree {
    normalized: bool,
}

impl Degree {
    /// `deg / (n - 1)`.
    pub fn normalized() -> Self {
        Self { normalized: true }
    }

    /// Raw incident edge counts.
    pub fn unnormalized() -> Self {
        Self { normalized: false }
    }
}

impl Default for Degree {
    fn default() -> Self {
        Self::normalized()
    }
}

impl<N: NodeId> CentralityMetric<N> for Degree {
    #[allow(clippy::cast_precision_loss)]
    fn compute(&self, graph: &Graph<N>) -> Result<CentralityResult<N>, MetricError> {
        let n = graph.node_count();
        let scale = if !self.normalized {
            1.0
        } else if n > 1 {
            1.0 / (n - 1) as f64
        } else {
            // A lone node is connected to everything there is.
            return Ok(graph.node_ids().map(|id| (id.clone(), 1.0)).collect());
        };

        let pg = graph.as_petgraph();
        Ok(pg
            .node_indices()
            .map(|idx| (pg[idx].clone(), graph.degree(idx) as f64 * scale))
            .collect())
    }
}
