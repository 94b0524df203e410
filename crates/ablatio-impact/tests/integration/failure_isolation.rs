//! A failing metric must not take the rest of the analysis down with it.

use ablatio_impact::MultiMetricAggregator;

use crate::common::{assert_close, registry_with_broken, removal, star};

#[test]
fn test_failing_metric_keeps_column_empty() {
    let report = MultiMetricAggregator::new(registry_with_broken())
        .compute(&star(), &removal(&["A"]), &["degree", "broken"])
        .expect("one failing metric should not fail the run");

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].metric, "broken");
    assert!(report.failures[0].message.contains("deliberate failure"));

    assert_eq!(
        report.table.columns(),
        vec!["Degree", "Δ Degree", "Broken", "Δ Broken", "Combined", "Δ Combined"]
    );
    for row in report.table.rows() {
        assert!(row.cells[1].is_empty());
        assert_close(row.cells[0].delta.unwrap(), -1.0 / 3.0);
        // The empty column contributes nothing to the sums
        assert_close(row.combined_delta, -1.0 / 3.0);
    }
}

#[test]
fn test_failure_order_follows_selection() {
    let report = MultiMetricAggregator::new(registry_with_broken())
        .compute(&star(), &removal(&["B"]), &["broken", "closeness"])
        .unwrap();

    assert_eq!(report.table.metrics()[0], "broken");
    assert_eq!(report.succeeded(), 1);
    assert!(!report.is_complete());
    assert_eq!(report.table.len(), 3);
}
