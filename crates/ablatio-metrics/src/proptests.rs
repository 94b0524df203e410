//! Property-based tests for the standard metrics.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::{MetricRegistry, STANDARD_METRICS};
    use ablatio_graph::{Edge, Graph};
    use proptest::prelude::*;

    fn arb_graph() -> impl Strategy<Value = Graph<u32>> {
        (0u32..12, any::<bool>()).prop_flat_map(|(n, directed)| {
            let pairs = if n == 0 {
                Just(Vec::new()).boxed()
            } else {
                prop::collection::vec((0..n, 0..n), 0..30).boxed()
            };
            pairs.prop_map(move |pairs| {
                let mut graph = Graph::new(directed);
                for id in 0..n {
                    graph.add_node(id);
                }
                for (u, v) in pairs {
                    let _ = graph.add_edge(Edge::new(u, v));
                }
                graph
            })
        })
    }

    proptest! {
        #[test]
        fn test_metrics_cover_every_node(graph in arb_graph()) {
            let registry = MetricRegistry::default();
            for name in STANDARD_METRICS {
                // Power iteration may legitimately fail on some directed graphs.
                let Ok(scores) = registry.get(name).unwrap().compute(&graph) else {
                    continue;
                };
                prop_assert_eq!(scores.len(), graph.node_count(), "{}", name);
                for id in graph.node_ids() {
                    prop_assert!(scores[id].is_finite(), "{} on {}", name, id);
                }
            }
        }

        #[test]
        fn test_metrics_are_deterministic(graph in arb_graph()) {
            let registry = MetricRegistry::default();
            for name in ["degree", "betweenness", "closeness", "katz"] {
                let metric = registry.get(name).unwrap();
                let a = metric.compute(&graph).unwrap();
                let b = metric.compute(&graph).unwrap();
                prop_assert_eq!(a, b);
            }
        }

        #[test]
        fn test_undirected_betweenness_bounded(graph in arb_graph()) {
            prop_assume!(!graph.is_directed());
            let scores = MetricRegistry::default()
                .get("betweenness")
                .unwrap()
                .compute(&graph)
                .unwrap();
            for score in scores.values() {
                prop_assert!((0.0..=1.0 + 1e-9).contains(score));
            }
        }
    }
}
