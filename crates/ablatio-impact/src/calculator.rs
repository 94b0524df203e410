//! Single-metric impact of a node removal.
//!
//! [`ImpactCalculator`] scores the original graph, removes the requested
//! nodes, scores the reduced graph, and reports `new - old` for every
//! surviving node. The input graph is never modified.

use ablatio_core::{Error, Result, Selection};
use ablatio_graph::{Graph, NodeId};
use ablatio_metrics::{CentralityResult, MetricRegistry, SharedMetric};
use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::time::{Duration, Instant};

/// Nodes to remove.
pub type RemovalSet<N> = BTreeSet<N>;

// ============================================================================
// Result types
// ============================================================================

/// Post-removal score and change for one surviving node.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ImpactRecord<N> {
    /// The surviving node.
    pub node: N,
    /// Score on the reduced graph.
    pub new: f64,
    /// `new - old`.
    pub delta: f64,
}

/// Everything one metric run produced.
#[derive(Clone, Debug)]
pub struct MetricImpact<N: NodeId> {
    /// Normalized metric name.
    pub metric: String,
    /// One record per surviving node, largest delta first (ties by node id).
    pub records: Vec<ImpactRecord<N>>,
    /// Scores on the original graph.
    pub before: CentralityResult<N>,
    /// Scores on the reduced graph.
    pub after: CentralityResult<N>,
    /// Surviving nodes the metric left out of `after`, scored as 0.
    pub fallbacks: usize,
    /// Wall time for both metric evaluations and the removal.
    pub elapsed: Duration,
}

impl<N: NodeId> MetricImpact<N> {
    /// Looks up the record of one node.
    pub fn record(&self, node: &N) -> Option<&ImpactRecord<N>> {
        self.records.iter().find(|r| &r.node == node)
    }
}

// ============================================================================
// ImpactCalculator
// ============================================================================

/// Computes the impact of a removal under one named metric.
#[derive(Clone)]
pub struct ImpactCalculator<N: NodeId> {
    name: String,
    metric: SharedMetric<N>,
}

impl<N: NodeId> ImpactCalculator<N> {
    /// Creates a calculator for an already resolved metric.
    pub fn new(name: impl Into<String>, metric: SharedMetric<N>) -> Self {
        Self {
            name: name.into(),
            metric,
        }
    }

    /// Creates a calculator for a registered metric.
    ///
    /// # Errors
    ///
    /// `Error::UnknownMetric` if `name` is not registered.
    pub fn from_registry(registry: &MetricRegistry<N>, name: &str) -> Result<Self> {
        let (name, metric) = registry.resolve(name)?;
        Ok(Self::new(name, metric))
    }

    /// The metric's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Computes per-node deltas for removing `removal` from `graph`.
    ///
    /// # Errors
    ///
    /// - `Error::EmptySelection` if `removal` is empty
    /// - `Error::NodeNotFound` listing every id absent from `graph`
    /// - `Error::Metric` if the metric fails on either snapshot
    pub fn compute(&self, graph: &Graph<N>, removal: &RemovalSet<N>) -> Result<MetricImpact<N>> {
        if removal.is_empty() {
            return Err(Error::EmptySelection(Selection::RemovalSet));
        }
        graph.validate_nodes(removal)?;

        let start = Instant::now();
        let before = self.score(graph)?;
        let reduced = graph.without_nodes(removal)?;
        let mut impact = self.compare(before, &reduced, removal)?;
        impact.elapsed = start.elapsed();
        Ok(impact)
    }

    /// Scores `reduced` and compares it with `before`.
    ///
    /// `reduced` must be the original graph minus `removal`; callers that
    /// evaluate several metrics build it once.
    pub(crate) fn compare(
        &self,
        before: CentralityResult<N>,
        reduced: &Graph<N>,
        removal: &RemovalSet<N>,
    ) -> Result<MetricImpact<N>> {
        let start = Instant::now();
        let after = self.score(reduced)?;

        let mut fallbacks = 0;
        let mut records: Vec<ImpactRecord<N>> = before
            .iter()
            .filter(|(node, _)| !removal.contains(*node))
            .map(|(node, &old)| {
                let new = match after.get(node) {
                    Some(&new) => new,
                    None => {
                        log::warn!(
                            "Metric '{}' returned no score for surviving node {node}; using 0",
                            self.name
                        );
                        fallbacks += 1;
                        0.0
                    }
                };
                ImpactRecord {
                    node: node.clone(),
                    new,
                    delta: new - old,
                }
            })
            .collect();

        records.sort_by(|a, b| {
            b.delta
                .total_cmp(&a.delta)
                .then_with(|| a.node.cmp(&b.node))
        });

        log::debug!(
            "Metric '{}': {} record(s), {} fallback(s)",
            self.name,
            records.len(),
            fallbacks
        );

        Ok(MetricImpact {
            metric: self.name.clone(),
            records,
            before,
            after,
            fallbacks,
            elapsed: start.elapsed(),
        })
    }

    /// Runs the metric, attaching its name to any failure.
    pub(crate) fn score(&self, graph: &Graph<N>) -> Result<CentralityResult<N>> {
        self.metric
            .compute(graph)
            .map_err(|e| Error::metric(&self.name, e.to_string()))
    }
}

impl<N: NodeId> fmt::Debug for ImpactCalculator<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImpactCalculator")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
