//! Property-based tests for graph removal and diameter.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::{DiameterSnapshot, Edge, Fingerprint, Graph, diameter};
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn arb_graph() -> impl Strategy<Value = Graph<u32>> {
        (1u32..16, any::<bool>()).prop_flat_map(|(n, directed)| {
            prop::collection::vec((0..n, 0..n), 0..40).prop_map(move |pairs| {
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

    fn arb_graph_with_removal() -> impl Strategy<Value = (Graph<u32>, BTreeSet<u32>)> {
        arb_graph().prop_flat_map(|graph| {
            let n = graph.node_count() as u32;
            let removal = prop::collection::btree_set(0..n, 1..=(n as usize));
            (Just(graph), removal)
        })
    }

    proptest! {
        #[test]
        fn test_without_nodes_excludes_removed((graph, removal) in arb_graph_with_removal()) {
            let reduced = graph.without_nodes(removal.iter()).unwrap();
            prop_assert_eq!(reduced.node_count(), graph.node_count() - removal.len());
            for id in &removal {
                prop_assert!(!reduced.contains_node(id));
            }
            for (u, v, _) in reduced.edges() {
                prop_assert!(!removal.contains(u) && !removal.contains(v));
            }
        }

        #[test]
        fn test_without_nodes_keeps_surviving_edges((graph, removal) in arb_graph_with_removal()) {
            let reduced = graph.without_nodes(removal.iter()).unwrap();
            let expected = graph
                .edges()
                .filter(|(u, v, _)| !removal.contains(*u) && !removal.contains(*v))
                .count();
            prop_assert_eq!(reduced.edge_count(), expected);
        }

        #[test]
        fn test_diameter_boundaries(graph in arb_graph()) {
            let d = diameter(&graph);
            if graph.node_count() <= 1 {
                prop_assert_eq!(d, 0.0);
            } else if d.is_finite() {
                prop_assert!(d >= 0.0);
                prop_assert_eq!(d.fract(), 0.0);
                prop_assert!(d < graph.node_count() as f64);
            } else {
                prop_assert!(d.is_infinite() && d > 0.0);
            }
        }

        #[test]
        fn test_diameter_is_deterministic((graph, removal) in arb_graph_with_removal()) {
            let reduced = graph.without_nodes(removal.iter()).unwrap();
            let first = DiameterSnapshot::measure(&graph, &reduced);
            let second = DiameterSnapshot::measure(&graph, &reduced);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn test_fingerprint_is_order_independent(graph in arb_graph()) {
            let mut edges: Vec<Edge<u32>> = graph
                .edges()
                .map(|(u, v, w)| Edge::new(*u, *v).with_weight(w))
                .collect();
            edges.reverse();
            let mut rebuilt = Graph::new(graph.is_directed());
            let mut ids: Vec<u32> = graph.node_ids().copied().collect();
            ids.reverse();
            for id in ids {
                rebuilt.add_node(id);
            }
            for edge in edges {
                rebuilt.add_edge(edge).unwrap();
            }
            prop_assert_eq!(Fingerprint::of(&graph), Fingerprint::of(&rebuilt));
        }
    }
}
