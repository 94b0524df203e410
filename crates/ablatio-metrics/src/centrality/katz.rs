//! Katz centrality: damped path counts plus a baseline.
//!
//! ```text
//! x_v = α × Σ_{u→v} w_uv × x_u + β
//! ```
//!
//! Solved by fixed-point iteration from `x = 0`, which converges when
//! `α < 1 / λ_max`. The default `α = 0.01` is safe for any graph with
//! maximum weighted degree below 100. The result is normalized to unit
//! Euclidean length. Unlike eigenvector centrality, edge weights count.

use crate::centrality::euclidean_norm;
use crate::{CentralityMetric, CentralityResult, MetricError, metric::scores_by_id};
use ablatio_core::config::KatzSettings;
use ablatio_graph::{Graph, NodeId};

/// Katz centrality parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Katz {
    /// Attenuation per hop.
    pub alpha: f64,
    /// Baseline score.
    pub beta: f64,
    /// Iterations before giving up.
    pub max_iterations: usize,
    /// Per-node tolerance.
    pub tolerance: f64,
}

impl Default for Katz {
    fn default() -> Self {
        Self::from(&KatzSettings::default())
    }
}

impl From<&KatzSettings> for Katz {
    fn from(settings: &KatzSettings) -> Self {
        Self {
            alpha: settings.alpha,
            beta: settings.beta,
            max_iterations: settings.max_iterations,
            tolerance: settings.tolerance,
        }
    }
}

impl<N: NodeId> CentralityMetric<N> for Katz {
    #[allow(clippy::cast_precision_loss)]
    fn compute(&self, graph: &Graph<N>) -> Result<CentralityResult<N>, MetricError> {
        if !self.alpha.is_finite() || !self.beta.is_finite() {
            return Err(MetricError::InvalidParameter(format!(
                "alpha and beta must be finite (alpha = {}, beta = {})",
                self.alpha, self.beta
            )));
        }

        let n = graph.node_count();
        if n == 0 {
            return Ok(CentralityResult::new());
        }

        let predecessors = graph.predecessor_table();
        let mut x = vec![0.0_f64; n];

        for _ in 0..self.max_iterations {
            let next: Vec<f64> = predecessors
                .iter()
                .map(|incoming| {
                    let inflow: f64 = incoming.iter().map(|&(u, w)| w * x[u]).sum();
                    self.alpha * inflow + self.beta
                })
                .collect();

            let diff: f64 = next.iter().zip(&x).map(|(a, b)| (a - b).abs()).sum();
            x = next;
            if diff < n as f64 * self.tolerance {
                let norm = euclidean_norm(&x);
                let normalized: Vec<f64> = x.iter().map(|v| v / norm).collect();
                return Ok(scores_by_id(graph, &normalized));
            }
        }

        log::debug!(
            "Katz centrality did not converge on {n} nodes after {} iterations (alpha = {})",
            self.max_iterations,
            self.alpha
        );
        Err(MetricError::NotConverged {
            iterations: self.max_iterations,
        })
    }
}
