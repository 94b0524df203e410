//! Fruchterman–Reingold spring layout.
//!
//! Every pair of nodes repels with force `k² / d`; every edge attracts
//! with force `w × d² / k`. Each iteration moves a node along its net force
//! by at most the current temperature `t`, which cools linearly from a
//! tenth of the initial extent to zero. Iteration stops early once the
//! mean step length falls below [`THRESHOLD`].
//!
//! Initial positions are drawn uniformly from `[0, 1)²` by a ChaCha8 RNG,
//! so a fixed seed always yields the same layout. The result is centered
//! on the origin and scaled so the largest coordinate magnitude is 1.

use crate::types::{Point, Positions};
use ablatio_graph::{Graph, NodeId};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Mean step length below which iteration stops.
pub const THRESHOLD: f64 = 1e-4;

/// Smallest pairwise distance used in force computation.
const MIN_DISTANCE: f64 = 0.01;

/// Computes a spring layout.
pub fn spring_layout<N: NodeId>(
    graph: &Graph<N>,
    seed: u64,
    iterations: usize,
    k: Option<f64>,
) -> Positions<N> {
    let n = graph.node_count();
    if n == 0 {
        return Positions::new();
    }
    if n == 1 {
        return graph.node_ids().map(|id| (id.clone(), Point::ORIGIN)).collect();
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut pos: Vec<[f64; 2]> = (0..n)
        .map(|_| [rng.random::<f64>(), rng.random::<f64>()])
        .collect();

    let k = k.unwrap_or_else(|| (1.0 / n as f64).sqrt());
    let attraction = weight_matrix(graph);

    let extent = |axis: usize| {
        let (lo, hi) = pos
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p[axis]), hi.max(p[axis]))
            });
        hi - lo
    };
    let mut t = extent(0).max(extent(1)) * 0.1;
    let dt = t / (iterations as f64 + 1.0);

    for iteration in 0..iterations {
        let mut step_sq = 0.0;
        let mut moves = vec![[0.0_f64; 2]; n];

        for i in 0..n {
            let mut displacement = [0.0_f64; 2];
            for j in 0..n {
                if i == j {
                    continue;
                }
                let delta = [pos[i][0] - pos[j][0], pos[i][1] - pos[j][1]];
                let distance = delta[0].hypot(delta[1]).max(MIN_DISTANCE);
                let force = k * k / (distance * distance) - attraction[i][j] * distance / k;
                displacement[0] += delta[0] * force;
                displacement[1] += delta[1] * force;
            }

            let mut length = displacement[0].hypot(displacement[1]);
            if length < MIN_DISTANCE {
                length = 0.1;
            }
            let scale = t / length;
            moves[i] = [displacement[0] * scale, displacement[1] * scale];
            step_sq += moves[i][0] * moves[i][0] + moves[i][1] * moves[i][1];
        }

        for (p, m) in pos.iter_mut().zip(&moves) {
            p[0] += m[0];
            p[1] += m[1];
        }
        t -= dt;

        if step_sq.sqrt() / (n as f64) < THRESHOLD {
            log::debug!("Spring layout settled after {} iteration(s)", iteration + 1);
            break;
        }
    }

    rescale(&mut pos);
    graph
        .node_ids()
        .zip(pos)
        .map(|(id, [x, y])| (id.clone(), Point::new(x, y)))
        .collect()
}

/// Dense attraction weights: `w[i][j]` is the weight of `i → j` (both ways
/// for undirected graphs).
fn weight_matrix<N: NodeId>(graph: &Graph<N>) -> Vec<Vec<f64>> {
    let n = graph.node_count();
    let mut matrix = vec![vec![0.0_f64; n]; n];
    for (i, targets) in graph.successor_table().into_iter().enumerate() {
        for (j, weight) in targets {
            matrix[i][j] = weight;
        }
    }
    matrix
}

/// Centers on the origin and scales the largest magnitude to 1.
pub(crate) fn rescale(pos: &mut [[f64; 2]]) {
    if pos.is_empty() {
        return;
    }
    let n = pos.len() as f64;
    let mean = [
        pos.iter().map(|p| p[0]).sum::<f64>() / n,
        pos.iter().map(|p| p[1]).sum::<f64>() / n,
    ];
    let mut limit = 0.0_f64;
    for p in pos.iter_mut() {
        p[0] -= mean[0];
        p[1] -= mean[1];
        limit = limit.max(p[0].abs()).max(p[1].abs());
    }
    if limit > 0.0 {
        for p in pos.iter_mut() {
            p[0] /= limit;
            p[1] /= limit;
        }
    }
}
