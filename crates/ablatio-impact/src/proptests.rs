//! Property-based tests for impact analysis.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::{ImpactCalculator, MultiMetricAggregator, RemovalSet};
    use ablatio_graph::{Edge, Graph};
    use ablatio_metrics::MetricRegistry;
    use proptest::prelude::*;

    const METRICS: [&str; 4] = ["degree", "betweenness", "closeness", "katz"];

    fn arb_case() -> impl Strategy<Value = (Graph<u32>, RemovalSet<u32>)> {
        (2u32..12, any::<bool>())
            .prop_flat_map(|(n, directed)| {
                (
                    Just(n),
                    Just(directed),
                    prop::collection::vec((0..n, 0..n), 0..30),
                    prop::collection::btree_set(0..n, 1..(n as usize)),
                )
            })
            .prop_map(|(n, directed, pairs, removal)| {
                let mut graph = Graph::new(directed);
                for id in 0..n {
                    graph.add_node(id);
                }
                for (u, v) in pairs {
                    let _ = graph.add_edge(Edge::new(u, v));
                }
                (graph, removal)
            })
    }

    proptest! {
        #[test]
        fn test_removed_nodes_never_reported((graph, removal) in arb_case()) {
            let report = MultiMetricAggregator::new(MetricRegistry::default())
                .compute(&graph, &removal, &METRICS)
                .unwrap();
            for row in report.table.rows() {
                prop_assert!(!removal.contains(&row.node));
            }
            for node in report.combined_delta.keys() {
                prop_assert!(!removal.contains(node));
            }
        }

        #[test]
        fn test_delta_is_new_minus_old((graph, removal) in arb_case()) {
            let registry = MetricRegistry::default();
            for name in METRICS {
                let impact = ImpactCalculator::from_registry(&registry, name)
                    .unwrap()
                    .compute(&graph, &removal)
                    .unwrap();
                for record in &impact.records {
                    let old = impact.before[&record.node];
                    let new = impact.after[&record.node];
                    prop_assert!((record.delta - (new - old)).abs() < 1e-9);
                }
                prop_assert_eq!(impact.records.len(), graph.node_count() - removal.len());
                prop_assert_eq!(impact.fallbacks, 0);
            }
        }

        #[test]
        fn test_combined_is_sum_of_cells((graph, removal) in arb_case()) {
            let report = MultiMetricAggregator::new(MetricRegistry::default())
                .compute(&graph, &removal, &METRICS)
                .unwrap();
            for row in report.table.rows() {
                let new: f64 = row.cells.iter().filter_map(|c| c.new).sum();
                let delta: f64 = row.cells.iter().filter_map(|c| c.delta).sum();
                prop_assert!((row.combined - new).abs() < 1e-9);
                prop_assert!((row.combined_delta - delta).abs() < 1e-9);
            }
        }

        #[test]
        fn test_analysis_is_deterministic((graph, removal) in arb_case()) {
            let aggregator = MultiMetricAggregator::new(MetricRegistry::default());
            let first = aggregator.compute(&graph, &removal, &METRICS).unwrap();
            let second = aggregator.compute(&graph, &removal, &METRICS).unwrap();
            prop_assert_eq!(first.table, second.table);
            prop_assert_eq!(first.diameter, second.diameter);
        }
    }
}
