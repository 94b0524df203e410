//! Multi-metric aggregation.
//!
//! [`MultiMetricAggregator`] validates a request up front, measures the
//! diameter once, runs an [`ImpactCalculator`] per metric against a shared
//! reduced graph, and merges the results into an [`ImpactTable`].
//!
//! A failing metric does not abort the run: it is recorded in
//! [`AnalysisReport::failures`] and its column is left "not applicable".

use crate::calculator::{ImpactCalculator, MetricImpact, RemovalSet};
use crate::report::{AnalysisReport, MetricFailure};
use crate::table::{AggregatedRow, ImpactTable, MetricCell};
use ablatio_core::{CancellationFlag, Error, Result, Selection};
use ablatio_graph::{DiameterSnapshot, Graph, NodeId};
use ablatio_metrics::MetricRegistry;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::time::Instant;

/// Runs several metrics over one removal and merges the results.
#[derive(Debug)]
pub struct MultiMetricAggregator<N: NodeId> {
    registry: MetricRegistry<N>,
    cancel: Option<CancellationFlag>,
}

impl<N: NodeId> MultiMetricAggregator<N> {
    /// Creates an aggregator over `registry`.
    pub fn new(registry: MetricRegistry<N>) -> Self {
        Self {
            registry,
            cancel: None,
        }
    }

    /// Checks `flag` between metrics and stops with `Error::Cancelled` once
    /// it is set.
    pub fn with_cancellation(mut self, flag: CancellationFlag) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// The registry metrics are resolved from.
    pub fn registry(&self) -> &MetricRegistry<N> {
        &self.registry
    }

    /// Computes the impact of removing `removal` under every metric in
    /// `metrics`.
    ///
    /// Metric names are normalized; a name repeated after normalization is
    /// evaluated once.
    ///
    /// # Errors
    ///
    /// Checked in this order, before any metric runs:
    ///
    /// 1. `Error::EmptySelection(Selection::Metrics)`
    /// 2. `Error::EmptySelection(Selection::RemovalSet)`
    /// 3. `Error::UnknownMetric`
    /// 4. `Error::NodeNotFound`, listing every missing id
    ///
    /// During the run, `Error::Cancelled` if the cancellation flag is set.
    pub fn compute<S: AsRef<str>>(
        &self,
        graph: &Graph<N>,
        removal: &RemovalSet<N>,
        metrics: &[S],
    ) -> Result<AnalysisReport<N>> {
        if metrics.is_empty() {
            return Err(Error::EmptySelection(Selection::Metrics));
        }
        if removal.is_empty() {
            return Err(Error::EmptySelection(Selection::RemovalSet));
        }
        let calculators = self.resolve(metrics)?;
        graph.validate_nodes(removal)?;

        let start = Instant::now();
        log::info!(
            "Analyzing removal of {} node(s) from {} nodes under {} metric(s)",
            removal.len(),
            graph.node_count(),
            calculators.len()
        );

        let reduced = graph.without_nodes(removal)?;
        let diameter = DiameterSnapshot::measure(graph, &reduced);
        if diameter.disconnected() {
            log::info!("Removal disconnects the graph");
        }

        let mut outcomes: Vec<Option<MetricImpact<N>>> = Vec::with_capacity(calculators.len());
        let mut failures = Vec::new();
        for calculator in &calculators {
            if let Some(flag) = &self.cancel {
                flag.check()?;
            }
            let outcome = calculator
                .score(graph)
                .and_then(|before| calculator.compare(before, &reduced, removal));
            match outcome {
                Ok(impact) => {
                    log::debug!(
                        "Metric '{}' finished in {:?}",
                        impact.metric,
                        impact.elapsed
                    );
                    outcomes.push(Some(impact));
                }
                Err(err) => {
                    log::warn!("Metric '{}' failed: {err}", calculator.name());
                    failures.push(MetricFailure {
                        metric: calculator.name().to_string(),
                        message: err.to_string(),
                    });
                    outcomes.push(None);
                }
            }
        }

        let names: Vec<String> = calculators.iter().map(|c| c.name().to_string()).collect();
        let table = merge(names, &outcomes, &reduced);
        let combined_delta = table
            .rows()
            .iter()
            .map(|row| (row.node.clone(), row.combined_delta))
            .collect();

        Ok(AnalysisReport {
            removed: removal.iter().cloned().collect(),
            table,
            combined_delta,
            diameter,
            failures,
            elapsed: start.elapsed(),
        })
    }

    fn resolve<S: AsRef<str>>(&self, metrics: &[S]) -> Result<Vec<ImpactCalculator<N>>> {
        let mut seen = BTreeSet::new();
        let mut calculators = Vec::with_capacity(metrics.len());
        for name in metrics {
            let (key, metric) = self.registry.resolve(name.as_ref())?;
            if seen.insert(key.clone()) {
                calculators.push(ImpactCalculator::new(key, metric));
            }
        }
        Ok(calculators)
    }
}

/// Builds the table from per-metric outcomes (`None` for failures).
///
/// Rows are the union of every successful post-removal map, restricted to
/// nodes of `reduced`, in node order. A cell is filled only from the
/// metric's own post-removal map; the delta additionally needs a
/// pre-removal score.
fn merge<N: NodeId>(
    metrics: Vec<String>,
    outcomes: &[Option<MetricImpact<N>>],
    reduced: &Graph<N>,
) -> ImpactTable<N> {
    let universe: BTreeSet<&N> = outcomes
        .iter()
        .flatten()
        .flat_map(|impact| impact.after.keys())
        .filter(|node| reduced.contains_node(node))
        .collect();

    let by_node: Vec<Option<HashMap<&N, (f64, f64)>>> = outcomes
        .iter()
        .map(|outcome| {
            outcome.as_ref().map(|impact| {
                impact
                    .records
                    .iter()
                    .map(|r| (&r.node, (r.new, r.delta)))
                    .collect()
            })
        })
        .collect();

    let rows = universe
        .into_iter()
        .map(|node| {
            let cells = outcomes
                .iter()
                .zip(&by_node)
                .map(|(outcome, records)| match (outcome, records) {
                    // A node the metric left out after removal is not applicable,
                    // even though the calculator recorded a 0 fallback for it.
                    (Some(impact), Some(records)) => match impact.after.get(node) {
                        Some(&new) => MetricCell {
                            new: Some(new),
                            delta: records.get(node).map(|&(_, delta)| delta),
                        },
                        None => MetricCell::EMPTY,
                    },
                    _ => MetricCell::EMPTY,
                })
                .collect();
            AggregatedRow::new(node.clone(), cells)
        })
        .collect();

    ImpactTable::new(metrics, rows)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use ablatio_graph::Edge;
    use ablatio_metrics::{CentralityResult, MetricError};

    fn star() -> Graph<&'static str> {
        Graph::from_edges(
            false,
            vec![Edge::new("A", "B"), Edge::new("A", "C"), Edge::new("A", "D")],
        )
    }

    fn removal(ids: &[&'static str]) -> RemovalSet<&'static str> {
        ids.iter().copied().collect()
    }

    fn aggregator() -> MultiMetricAggregator<&'static str> {
        MultiMetricAggregator::new(MetricRegistry::default())
    }

    // ------------------------------------------------------------------------
    // Precondition tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_empty_metrics_checked_first() {
        let none: [&str; 0] = [];
        let err = aggregator()
            .compute(&star(), &RemovalSet::new(), &none)
            .unwrap_err();
        assert!(matches!(err, Error::EmptySelection(Selection::Metrics)));
    }

    #[test]
    fn test_empty_removal_before_unknown_metric() {
        let err = aggregator()
            .compute(&star(), &RemovalSet::new(), &["pagerank"])
            .unwrap_err();
        assert!(matches!(err, Error::EmptySelection(Selection::RemovalSet)));
    }

    #[test]
    fn test_unknown_metric_before_missing_node() {
        let err = aggregator()
            .compute(&star(), &removal(&["X"]), &["degree", "pagerank"])
            .unwrap_err();
        assert!(matches!(err, Error::UnknownMetric { ref name } if name == "pagerank"));
    }

    #[test]
    fn test_missing_node() {
        let err = aggregator()
            .compute(&star(), &removal(&["X"]), &["degree"])
            .unwrap_err();
        assert!(matches!(err, Error::NodeNotFound { .. }));
    }

    // ------------------------------------------------------------------------
    // Aggregation tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_duplicate_names_evaluated_once() {
        let report = aggregator()
            .compute(&star(), &removal(&["B"]), &["degree", "Degree", "katz"])
            .unwrap();
        assert_eq!(report.table.metrics(), &["degree".to_string(), "katz".to_string()]);
    }

    #[test]
    fn test_combined_delta_matches_rows() {
        let report = aggregator()
            .compute(&star(), &removal(&["B"]), &["degree", "closeness"])
            .unwrap();
        assert_eq!(report.combined_delta.len(), 3);
        for row in report.table.rows() {
            assert_eq!(report.combined_delta[&row.node], row.combined_delta);
        }
        assert_eq!(report.removed, vec!["B"]);
        assert!(report.is_complete());
        assert_eq!(report.succeeded(), 2);
    }

    #[test]
    fn test_all_metrics_failing_yields_no_rows() {
        let mut registry = MetricRegistry::new();
        registry.register_fn(
            "broken",
            |_: &Graph<&'static str>| -> std::result::Result<CentralityResult<&'static str>, MetricError> {
                Err(MetricError::failed("nope"))
            },
        );
        let report = MultiMetricAggregator::new(registry)
            .compute(&star(), &removal(&["A"]), &["broken"])
            .unwrap();
        assert!(report.table.is_empty());
        assert!(report.combined_delta.is_empty());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.succeeded(), 0);
        assert!(report.diameter.disconnected());
    }

    #[test]
    fn test_node_missing_from_one_metric_is_not_applicable() {
        let mut registry = MetricRegistry::default();
        // Scores every node of the full star but forgets "C" once "A" is gone
        registry.register_fn(
            "forgetful",
            |graph: &Graph<&'static str>| -> std::result::Result<CentralityResult<&'static str>, MetricError> {
                Ok(graph
                    .node_ids()
                    .filter(|id| graph.contains_node(&"A") || **id != "C")
                    .map(|id| (*id, 0.5))
                    .collect())
            },
        );
        let report = MultiMetricAggregator::new(registry)
            .compute(&star(), &removal(&["A"]), &["degree", "forgetful"])
            .unwrap();

        let degree = report.table.cell(&"C", "degree").unwrap();
        assert_eq!(degree.new, Some(0.0));
        assert_eq!(degree.delta, Some(-1.0 / 3.0));

        let forgetful = report.table.cell(&"C", "forgetful").unwrap();
        assert_eq!(forgetful.new, None);
        assert_eq!(forgetful.delta, None);
        assert_eq!(report.table.row(&"C").unwrap().combined_delta, -1.0 / 3.0);

        let b = report.table.cell(&"B", "forgetful").unwrap();
        assert_eq!(b.new, Some(0.5));
        assert_eq!(b.delta, Some(0.0));
    }

    #[test]
    fn test_cancelled_before_first_metric() {
        let flag = CancellationFlag::new();
        flag.cancel();
        let err = aggregator()
            .with_cancellation(flag)
            .compute(&star(), &removal(&["A"]), &["degree"])
            .unwrap_err();
        assert!(matches!(err, Error::Cancelled));
    }
}
