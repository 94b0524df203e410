//! Closeness centrality with the Wasserman–Faust correction.
//!
//! ```text
//! C(u) = (r - 1) / Σ d(v, u)  ×  (r - 1) / (n - 1)
//! ```
//!
//! `r` counts the nodes that can reach `u` (including `u`) and the sum runs
//! over them, so graphs with several components still give comparable
//! scores. Directed graphs use incoming distances. A node nothing can
//! reach scores 0. Distances are hop counts.

use crate::{CentralityMetric, CentralityResult, MetricError, metric::scores_by_id};
use ablatio_graph::{Graph, NodeId};
use std::collections::VecDeque;

/// Wasserman–Faust closeness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Closeness;

impl<N: NodeId> CentralityMetric<N> for Closeness {
    #[allow(clippy::cast_precision_loss)]
    fn compute(&self, graph: &Graph<N>) -> Result<CentralityResult<N>, MetricError> {
        let n = graph.node_count();
        // Walking predecessors from u measures distances *to* u.
        let incoming = graph.predecessor_table();

        let scores: Vec<f64> = (0..n)
            .map(|u| {
                let (reached, total) = distance_sum(&incoming, u);
                if total == 0 || n <= 1 {
                    return 0.0;
                }
                let others = (reached - 1) as f64;
                (others / total as f64) * (others / (n - 1) as f64)
            })
            .collect();

        Ok(scores_by_id(graph, &scores))
    }
}

/// Number of nodes reached from `source` (itself included) and the sum of
/// their hop distances.
fn distance_sum(adjacency: &[Vec<(usize, f64)>], source: usize) -> (usize, usize) {
    let mut dist: Vec<Option<usize>> = vec![None; adjacency.len()];
    let mut queue = VecDeque::new();
    let (mut reached, mut total) = (0usize, 0usize);

    dist[source] = Some(0);
    queue.push_back(source);
    while let Some(v) = queue.pop_front() {
        let d = dist[v].unwrap_or(0);
        reached += 1;
        total += d;
        for &(w, _) in &adjacency[v] {
            if dist[w].is_none() {
                dist[w] = Some(d + 1);
                queue.push_back(w);
            }
        }
    }

    (reached, total)
}
