//! Standard centrality metrics.
//!
//! | Metric | Module | Scores |
//! |--------|--------|--------|
//! | Degree | [`degree`] | `deg / (n - 1)` or raw degree |
//! | Betweenness | [`betweenness`] | Share of shortest paths through a node |
//! | Closeness | [`closeness`] | Inverse mean distance (Wasserman–Faust) |
//! | Eigenvector | [`eigenvector`] | Principal eigenvector of `A + I` |
//! | Katz | [`katz`] | Damped path counts plus a baseline |
//!
//! All metrics accept directed and undirected graphs and return an empty
//! map for the empty graph.

pub mod betweenness;
pub mod closeness;
pub mod degree;
pub mod eigenvector;
pub mod katz;

pub use betweenness::Betweenness;
pub use closeness::Closeness;
pub use degree::Degree;
pub use eigenvector::Eigenvector;
pub use katz::Katz;

/// Euclidean norm, or `1.0` for the zero vector.
pub(crate) fn euclidean_norm(values: &[f64]) -> f64 {
    let norm = values.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm == 0.0 { 1.0 } else { norm }
}
