//! Analysis report returned by the aggregator.

use crate::table::ImpactTable;
use ablatio_graph::{DiameterSnapshot, NodeId};
use serde::Serialize;
use std::collections::BTreeMap;
use std::time::Duration;

/// A metric that failed during an analysis run.
///
/// The run continues without it; its table column is "not applicable".
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MetricFailure {
    /// Normalized metric name.
    pub metric: String,
    /// Error message.
    pub message: String,
}

/// Everything one aggregated analysis produced.
#[derive(Clone, Debug, Serialize)]
pub struct AnalysisReport<N: NodeId> {
    /// Nodes that were removed.
    pub removed: Vec<N>,
    /// Per-node, per-metric values with combined sums.
    pub table: ImpactTable<N>,
    /// `Δ Combined` by node.
    pub combined_delta: BTreeMap<N, f64>,
    /// Diameter before and after removal.
    pub diameter: DiameterSnapshot,
    /// Metrics that failed, in selection order.
    pub failures: Vec<MetricFailure>,
    /// Total wall time.
    pub elapsed: Duration,
}

impl<N: NodeId> AnalysisReport<N> {
    /// Whether every selected metric succeeded.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of metrics that produced values.
    pub fn succeeded(&self) -> usize {
        self.table.metrics().len() - self.failures.len()
    }
}
