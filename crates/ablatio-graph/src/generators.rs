//! Seeded graph generators.
//!
//! Random families follow the usual constructions and size-derived
//! parameters:
//!
//! | kind | parameters |
//! | --- | --- |
//! | `erdos_renyi` | `p = 5 / size` (mean degree about 5) |
//! | `barabasi_albert` | `m = max(2, size / 50)` |
//! | `watts_strogatz` | `k = max(2, size / 50)`, rewiring `p = 0.3` |
//!
//! Deterministic families (`path`, `cycle`, `star`, `complete`, `wheel`,
//! `grid`) ignore the seed. All generators produce undirected graphs with
//! unit weights over the ids `0..size`, inserted in ascending order.

use crate::{Edge, Graph};
use ablatio_core::{Error, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Rewiring probability used by Watts–Strogatz graphs.
pub const WATTS_STROGATZ_REWIRE: f64 = 0.3;

/// Expected mean degree of Erdős–Rényi graphs.
pub const ERDOS_RENYI_MEAN_DEGREE: f64 = 5.0;

// ============================================================================
// GraphKind
// ============================================================================

/// Family of generated graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphKind {
    /// G(n, p) random graph.
    ErdosRenyi,
    /// Preferential attachment.
    BarabasiAlbert,
    /// Small-world ring with random rewiring.
    WattsStrogatz,
    /// `0 - 1 - ... - (n-1)`.
    Path,
    /// Path closed into a ring.
    Cycle,
    /// Hub `0` joined to every other node.
    Star,
    /// Every pair joined.
    Complete,
    /// Hub `0` joined to a cycle over the remaining nodes.
    Wheel,
    /// Near-square lattice, row-major.
    Grid,
}

impl GraphKind {
    /// Every kind, random families first.
    pub const ALL: [GraphKind; 9] = [
        GraphKind::ErdosRenyi,
        GraphKind::BarabasiAlbert,
        GraphKind::WattsStrogatz,
        GraphKind::Path,
        GraphKind::Cycle,
        GraphKind::Star,
        GraphKind::Complete,
        GraphKind::Wheel,
        GraphKind::Grid,
    ];

    /// Identifier used in config files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            GraphKind::ErdosRenyi => "erdos_renyi",
            GraphKind::BarabasiAlbert => "barabasi_albert",
            GraphKind::WattsStrogatz => "watts_strogatz",
            GraphKind::Path => "path",
            GraphKind::Cycle => "cycle",
            GraphKind::Star => "star",
            GraphKind::Complete => "complete",
            GraphKind::Wheel => "wheel",
            GraphKind::Grid => "grid",
        }
    }

    /// Human-readable name for reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            GraphKind::ErdosRenyi => "Erdős-Rényi",
            GraphKind::BarabasiAlbert => "Barabási-Albert",
            GraphKind::WattsStrogatz => "Watts-Strogatz",
            GraphKind::Path => "Path",
            GraphKind::Cycle => "Cycle",
            GraphKind::Star => "Star",
            GraphKind::Complete => "Complete",
            GraphKind::Wheel => "Wheel",
            GraphKind::Grid => "Grid",
        }
    }

    /// Whether the output depends on the seed.
    pub fn is_random(&self) -> bool {
        matches!(
            self,
            GraphKind::ErdosRenyi | GraphKind::BarabasiAlbert | GraphKind::WattsStrogatz
        )
    }
}

impl fmt::Display for GraphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GraphKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_lowercase().replace('-', "_");
        GraphKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = GraphKind::ALL.iter().map(GraphKind::as_str).collect();
                Error::graph(format!(
                    "unknown graph type '{s}' (expected one of: {})",
                    known.join(", ")
                ))
            })
    }
}

// ============================================================================
// Entry point
// ============================================================================

/// Generates a graph of the given family over `size` nodes.
///
/// Random families are reproducible: the same `(kind, size, seed)` always
/// yields the same graph.
pub fn generate(kind: GraphKind, size: usize, seed: u64) -> Result<Graph<usize>> {
    let graph = match kind {
        GraphKind::ErdosRenyi => {
            let p = if size == 0 {
                0.0
            } else {
                (ERDOS_RENYI_MEAN_DEGREE / size as f64).min(1.0)
            };
            erdos_renyi(size, p, seed)
        }
        GraphKind::BarabasiAlbert => barabasi_albert(size, (size / 50).max(2), seed)?,
        GraphKind::WattsStrogatz => {
            watts_strogatz(size, (size / 50).max(2), WATTS_STROGATZ_REWIRE, seed)?
        }
        GraphKind::Path => path(size),
        GraphKind::Cycle => cycle(size),
        GraphKind::Star => star(size),
        GraphKind::Complete => complete(size),
        GraphKind::Wheel => wheel(size),
        GraphKind::Grid => grid(size),
    };

    log::debug!(
        "Generated {kind} graph: {} nodes, {} edges (seed {seed})",
        graph.node_count(),
        graph.edge_count()
    );
    Ok(graph)
}

// ============================================================================
// Random families
// ============================================================================

/// G(n, p): each unordered pair is joined independently with probability `p`.
pub fn erdos_renyi(n: usize, p: f64, seed: u64) -> Graph<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut edges = Vec::new();
    for u in 0..n {
        for v in (u + 1)..n {
            if rng.random::<f64>() < p {
                edges.push((u, v));
            }
        }
    }
    assemble(n, edges)
}

/// Preferential attachment: each new node links to `m` distinct existing
/// nodes chosen with probability proportional to degree.
///
/// Growth starts from a star over the first `m + 1` nodes. Requires
/// `1 <= m < n`.
pub fn barabasi_albert(n: usize, m: usize, seed: u64) -> Result<Graph<usize>> {
    if m < 1 || m >= n {
        return Err(Error::graph(format!(
            "Barabási-Albert needs 1 <= m < n (m = {m}, n = {n})"
        )));
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut edges: Vec<(usize, usize)> = (1..=m).map(|leaf| (0, leaf)).collect();

    // One entry per edge endpoint, so uniform sampling is degree-weighted.
    let mut repeated: Vec<usize> = Vec::with_capacity(2 * n * m);
    for &(u, v) in &edges {
        repeated.push(u);
        repeated.push(v);
    }

    for source in (m + 1)..n {
        let mut targets = BTreeSet::new();
        while targets.len() < m {
            targets.insert(repeated[rng.random_range(0..repeated.len())]);
        }
        for target in targets {
            edges.push((source, target));
            repeated.push(source);
            repeated.push(target);
        }
    }

    Ok(assemble(n, edges))
}

/// Ring lattice with `k / 2` neighbors per side, each edge rewired with
/// probability `p` to a uniformly chosen node.
///
/// Requires `k <= n`; `k == n` yields the complete graph.
pub fn watts_strogatz(n: usize, k: usize, p: f64, seed: u64) -> Result<Graph<usize>> {
    if k > n {
        return Err(Error::graph(format!(
            "Watts-Strogatz needs k <= n (k = {k}, n = {n})"
        )));
    }
    if k == n {
        return Ok(complete(n));
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut edges: BTreeSet<(usize, usize)> = BTreeSet::new();
    for j in 1..=(k / 2) {
        for u in 0..n {
            edges.insert(ordered(u, (u + j) % n));
        }
    }

    let mut degree = vec![0usize; n];
    for &(u, v) in &edges {
        degree[u] += 1;
        degree[v] += 1;
    }

    for j in 1..=(k / 2) {
        for u in 0..n {
            if rng.random::<f64>() >= p {
                continue;
            }
            let v = (u + j) % n;
            if !edges.contains(&ordered(u, v)) || degree[u] >= n - 1 {
                continue;
            }
            let mut w = rng.random_range(0..n);
            while w == u || edges.contains(&ordered(u, w)) {
                w = rng.random_range(0..n);
            }
            edges.remove(&ordered(u, v));
            edges.insert(ordered(u, w));
            degree[v] -= 1;
            degree[w] += 1;
        }
    }

    Ok(assemble(n, edges))
}

// ============================================================================
// Deterministic families
// ============================================================================

/// Path over `0..n`.
pub fn path(n: usize) -> Graph<usize> {
    assemble(n, (1..n).map(|i| (i - 1, i)))
}

/// Cycle over `0..n`. Fewer than three nodes degrade to a path.
pub fn cycle(n: usize) -> Graph<usize> {
    if n < 3 {
        return path(n);
    }
    assemble(n, (0..n).map(|i| (i, (i + 1) % n)))
}

/// Star with hub `0`.
pub fn star(n: usize) -> Graph<usize> {
    assemble(n, (1..n).map(|leaf| (0, leaf)))
}

/// Complete graph over `0..n`.
pub fn complete(n: usize) -> Graph<usize> {
    assemble(
        n,
        (0..n).flat_map(|u| ((u + 1)..n).map(move |v| (u, v))),
    )
}

/// Wheel with hub `0` and rim `1..n`.
pub fn wheel(n: usize) -> Graph<usize> {
    let mut edges: Vec<(usize, usize)> = (1..n).map(|leaf| (0, leaf)).collect();
    let rim = n.saturating_sub(1);
    if rim >= 3 {
        edges.extend((0..rim).map(|i| (1 + i, 1 + (i + 1) % rim)));
    } else if rim == 2 {
        edges.push((1, 2));
    }
    assemble(n, edges)
}

/// Row-major lattice with `floor(sqrt(n))` rows; the last row may be short.
pub fn grid(n: usize) -> Graph<usize> {
    if n == 0 {
        return Graph::undirected();
    }
    let rows = ((n as f64).sqrt() as usize).max(1);
    let cols = n.div_ceil(rows);
    let mut edges = Vec::new();
    for i in 0..n {
        let col = i % cols;
        if col + 1 < cols && i + 1 < n {
            edges.push((i, i + 1));
        }
        if i + cols < n {
            edges.push((i, i + cols));
        }
    }
    assemble(n, edges)
}

// ============================================================================
// Helpers
// ============================================================================

fn ordered(u: usize, v: usize) -> (usize, usize) {
    if u <= v { (u, v) } else { (v, u) }
}

fn assemble<I>(n: usize, edges: I) -> Graph<usize>
where
    I: IntoIterator<Item = (usize, usize)>,
{
    let mut graph = Graph::undirected();
    for id in 0..n {
        graph.add_node(id);
    }
    for (u, v) in edges {
        // Endpoints are in 0..n and were added above.
        let _ = graph.add_edge(Edge::new(u, v));
    }
    graph
}

// ============================================================================
// Tests
// ============================================================================
