//! Eigenvector centrality by power iteration.
//!
//! A node is central when its neighbors are central:
//!
//! ```text
//! x_v ∝ Σ_{u→v} x_u
//! ```
//!
//! Iteration runs on `A + I` rather than `A`. The shift leaves the
//! eigenvectors unchanged and keeps bipartite graphs (stars, even cycles)
//! from oscillating. Each step is normalized to unit Euclidean length and
//! iteration stops once `Σ |x - x_prev| < n × tolerance`.
//!
//! Edge weights are ignored. Directed graphs score by in-links.

use crate::centrality::euclidean_norm;
use crate::{CentralityMetric, CentralityResult, MetricError, metric::scores_by_id};
use ablatio_core::config::EigenvectorSettings;
use ablatio_graph::{Graph, NodeId};

/// Eigenvector centrality with an iteration cap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Eigenvector {
    /// Iterations before giving up.
    pub max_iterations: usize,
    /// Per-node tolerance.
    pub tolerance: f64,
}

impl Default for Eigenvector {
    fn default() -> Self {
        Self::from(&EigenvectorSettings::default())
    }
}

impl From<&EigenvectorSettings> for Eigenvector {
    fn from(settings: &EigenvectorSettings) -> Self {
        Self {
            max_iterations: settings.max_iterations,
            tolerance: settings.tolerance,
        }
    }
}

impl<N: NodeId> CentralityMetric<N> for Eigenvector {
    #[allow(clippy::cast_precision_loss)]
    fn compute(&self, graph: &Graph<N>) -> Result<CentralityResult<N>, MetricError> {
        let n = graph.node_count();
        if n == 0 {
            return Ok(CentralityResult::new());
        }

        let successors = graph.successor_table();
        let mut x = vec![1.0 / n as f64; n];

        for _ in 0..self.max_iterations {
            let last = x.clone();
            for (u, targets) in successors.iter().enumerate() {
                for &(v, _) in targets {
                    x[v] += last[u];
                }
            }

            let norm = euclidean_norm(&x);
            for value in &mut x {
                *value /= norm;
            }

            let diff: f64 = x.iter().zip(&last).map(|(a, b)| (a - b).abs()).sum();
            if diff < n as f64 * self.tolerance {
                return Ok(scores_by_id(graph, &x));
            }
        }

        log::debug!(
            "Eigenvector centrality did not converge on {n} nodes after {} iterations",
            self.max_iterations
        );
        Err(MetricError::NotConverged {
            iterations: self.max_iterations,
        })
    }
}
