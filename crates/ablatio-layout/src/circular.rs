//! Circular layout.

use crate::types::{Point, Positions};
use ablatio_graph::{Graph, NodeId};
use std::f64::consts::TAU;

/// Places node `i` of `n` (insertion order) at angle `2πi / n` on the unit
/// circle. A single node sits at the origin.
pub fn circular_layout<N: NodeId>(graph: &Graph<N>) -> Positions<N> {
    let n = graph.node_count();
    if n == 1 {
        return graph.node_ids().map(|id| (id.clone(), Point::ORIGIN)).collect();
    }
    graph
        .node_ids()
        .enumerate()
        .map(|(i, id)| {
            let theta = TAU * i as f64 / n as f64;
            (id.clone(), Point::new(theta.cos(), theta.sin()))
        })
        .collect()
}
