//! End-to-end removal scenarios on small graphs.

use ablatio_graph::diameter;
use ablatio_impact::{ImpactCalculator, MultiMetricAggregator};
use ablatio_metrics::MetricRegistry;

use crate::common::{assert_close, graph, removal, star, triangle};

#[test]
fn test_star_hub_removal_degree() {
    let g = star();
    let report = MultiMetricAggregator::new(MetricRegistry::default())
        .compute(&g, &removal(&["A"]), &["degree"])
        .expect("analysis should succeed");

    assert_eq!(report.table.len(), 3);
    assert_eq!(
        report.table.columns(),
        vec!["Degree", "Δ Degree", "Combined", "Δ Combined"]
    );
    for leaf in ["B", "C", "D"] {
        let leaf = leaf.to_string();
        let cell = report.table.cell(&leaf, "degree").unwrap();
        assert_close(cell.new.unwrap(), 0.0);
        assert_close(cell.delta.unwrap(), -1.0 / 3.0);
        assert_close(report.combined_delta[&leaf], -1.0 / 3.0);
    }
    assert!(report.table.row(&"A".to_string()).is_none());
}

#[test]
fn test_star_hub_removal_diameter() {
    let report = MultiMetricAggregator::new(MetricRegistry::default())
        .compute(&star(), &removal(&["A"]), &["degree"])
        .unwrap();

    assert_eq!(report.diameter.before, 2.0);
    assert!(report.diameter.after.is_infinite());
    assert!(report.diameter.disconnected());
}

#[test]
fn test_triangle_vertex_removal_degree_unchanged() {
    let report = MultiMetricAggregator::new(MetricRegistry::default())
        .compute(&triangle(), &removal(&["X"]), &["degree"])
        .unwrap();

    assert_eq!(report.table.len(), 2);
    for node in ["Y", "Z"] {
        let node = node.to_string();
        let cell = report.table.cell(&node, "degree").unwrap();
        assert_close(cell.new.unwrap(), 1.0);
        assert_close(cell.delta.unwrap(), 0.0);
    }
    assert_eq!(report.diameter.before, 1.0);
    assert_eq!(report.diameter.after, 1.0);
}

#[test]
fn test_combined_sums_unscaled_metrics() {
    let g = star();
    let report = MultiMetricAggregator::new(MetricRegistry::default())
        .compute(&g, &removal(&["B"]), &["degree", "unnormalized_degree"])
        .unwrap();

    // Hub after removal: degree 2/2 = 1.0, raw degree 2
    let hub = report.table.row(&"A".to_string()).unwrap();
    assert_close(hub.combined, 3.0);
    // Before: 1.0 and 3 -> delta 0.0 and -1
    assert_close(hub.combined_delta, -1.0);
}

#[test]
fn test_removing_bridge_in_path() {
    let g = graph(&[("a", "b"), ("b", "c"), ("c", "d"), ("d", "e")]);
    let impact = ImpactCalculator::from_registry(&MetricRegistry::default(), "betweenness")
        .unwrap()
        .compute(&g, &removal(&["c"]))
        .unwrap();

    // Every shortest path through b and d also went through c
    for record in &impact.records {
        assert_close(record.new, 0.0);
    }
    assert!(diameter(&g).is_finite());
}

#[test]
fn test_report_serializes_to_json() {
    let report = MultiMetricAggregator::new(MetricRegistry::default())
        .compute(&star(), &removal(&["B"]), &["degree"])
        .unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["removed"][0], "B");
    assert_eq!(json["diameter"]["before"], 2.0);
    assert!(json["combined_delta"]["A"].is_number());
}
