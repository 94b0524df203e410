//! Cooperative cancellation between metrics.

use ablatio_core::{CancellationFlag, Error};
use ablatio_graph::Graph;
use ablatio_impact::MultiMetricAggregator;
use ablatio_metrics::{CentralityResult, MetricError, MetricRegistry};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::common::{removal, star};

#[test]
fn test_cancel_during_first_metric_stops_second() {
    let flag = CancellationFlag::new();
    let calls = Arc::new(AtomicUsize::new(0));

    let mut registry = MetricRegistry::new();
    let trip = flag.clone();
    registry.register_fn(
        "trips_flag",
        move |graph: &Graph<String>| -> Result<CentralityResult<String>, MetricError> {
            trip.cancel();
            Ok(graph.node_ids().map(|id| (id.clone(), 1.0)).collect())
        },
    );
    let counter = Arc::clone(&calls);
    registry.register_fn(
        "counted",
        move |graph: &Graph<String>| -> Result<CentralityResult<String>, MetricError> {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(graph.node_ids().map(|id| (id.clone(), 1.0)).collect())
        },
    );

    let err = MultiMetricAggregator::new(registry)
        .with_cancellation(flag)
        .compute(&star(), &removal(&["A"]), &["trips_flag", "counted"])
        .unwrap_err();

    assert!(matches!(err, Error::Cancelled));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_uncancelled_flag_is_harmless() {
    let report = MultiMetricAggregator::new(MetricRegistry::default())
        .with_cancellation(CancellationFlag::new())
        .compute(&star(), &removal(&["A"]), &["degree", "closeness"])
        .unwrap();
    assert!(report.is_complete());
}
