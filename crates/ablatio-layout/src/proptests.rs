//! Property-based tests for layouts.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::{LayoutAlgorithm, LayoutCache, compute_layout};
    use ablatio_graph::{Edge, Graph};
    use proptest::prelude::*;
    use std::sync::Arc;

    fn arb_graph() -> impl Strategy<Value = Graph<u32>> {
        (1u32..10).prop_flat_map(|n| {
            prop::collection::vec((0..n, 0..n), 0..20).prop_map(move |pairs| {
                let mut graph = Graph::undirected();
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
        fn test_layout_covers_nodes_within_bounds(graph in arb_graph(), seed in any::<u64>()) {
            for algorithm in [LayoutAlgorithm::spring(seed, 30), LayoutAlgorithm::Circular] {
                let layout = compute_layout(&graph, algorithm);
                prop_assert_eq!(layout.len(), graph.node_count());
                for p in layout.values() {
                    prop_assert!(p.x.abs() <= 1.0 + 1e-9 && p.y.abs() <= 1.0 + 1e-9);
                }
            }
        }

        #[test]
        fn test_cache_hit_is_pointer_equal(graph in arb_graph(), seed in any::<u64>()) {
            let cache = LayoutCache::new();
            let algorithm = LayoutAlgorithm::spring(seed, 10);
            let a = cache.get_or_compute(&graph, algorithm);
            let b = cache.get_or_compute(&graph, algorithm);
            prop_assert!(Arc::ptr_eq(&a, &b));
            prop_assert_eq!(&*a, &compute_layout(&graph, algorithm));
        }
    }
}
