//! Betweenness centrality (Brandes, unweighted).
//!
//! ```text
//! C_B(v) = Σ_{s≠v≠t} σ_st(v) / σ_st
//! ```
//!
//! One BFS per source counts shortest paths (σ) on the way out; the
//! backward pass accumulates dependencies:
//!
//! ```text
//! δ_s(v) = Σ_{w: v∈P_s(w)} (σ_sv/σ_sw) × (1 + δ_s(w))
//! ```
//!
//! Sources range over every node, so undirected graphs count each pair
//! from both ends. The sum is then multiplied by `1 / ((n-1)(n-2))` for
//! both directed and undirected graphs when `n > 2`, which gives the
//! usual normalized values (a star's hub scores 1.0).
//!
//! Edge weights are ignored.

use crate::{CentralityMetric, CentralityResult, MetricError, metric::scores_by_id};
use ablatio_graph::{Graph, NodeId};
use std::collections::VecDeque;

/// Normalized shortest-path betweenness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Betweenness;

impl<N: NodeId> CentralityMetric<N> for Betweenness {
    #[allow(clippy::cast_precision_loss)]
    fn compute(&self, graph: &Graph<N>) -> Result<CentralityResult<N>, MetricError> {
        let n = graph.node_count();
        let successors = graph.successor_table();
        let mut betweenness = vec![0.0_f64; n];

        for source in 0..n {
            let (sigma, predecessors, order) = shortest_path_dag(&successors, source);

            let mut delta = vec![0.0_f64; n];
            for &w in order.iter().rev() {
                for &v in &predecessors[w] {
                    delta[v] += sigma[v] / sigma[w] * (1.0 + delta[w]);
                }
                if w != source {
                    betweenness[w] += delta[w];
                }
            }
        }

        if n > 2 {
            let scale = 1.0 / ((n - 1) as f64 * (n - 2) as f64);
            for b in &mut betweenness {
                *b *= scale;
            }
        }

        Ok(scores_by_id(graph, &betweenness))
    }
}

/// BFS from `source`, returning path counts, shortest-path predecessors
/// and the visit order.
fn shortest_path_dag(
    successors: &[Vec<(usize, f64)>],
    source: usize,
) -> (Vec<f64>, Vec<Vec<usize>>, Vec<usize>) {
    let n = successors.len();
    let mut sigma = vec![0.0_f64; n];
    let mut dist: Vec<Option<usize>> = vec![None; n];
    let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut order = Vec::with_capacity(n);
    let mut queue = VecDeque::new();

    sigma[source] = 1.0;
    dist[source] = Some(0);
    queue.push_back(source);

    while let Some(v) = queue.pop_front() {
        order.push(v);
        let next = dist[v].map_or(0, |d| d + 1);
        for &(w, _) in &successors[v] {
            match dist[w] {
                None => {
                    dist[w] = Some(next);
                    queue.push_back(w);
                    sigma[w] += sigma[v];
                    predecessors[w].push(v);
                }
                Some(d) if d == next => {
                    sigma[w] += sigma[v];
                    predecessors[w].push(v);
                }
                Some(_) => {}
            }
        }
    }

    (sigma, predecessors, order)
}
