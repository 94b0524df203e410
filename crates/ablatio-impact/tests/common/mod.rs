//! Common graphs and metrics for impact integration tests.

use ablatio_graph::{Edge, Graph};
use ablatio_impact::RemovalSet;
use ablatio_metrics::{CentralityResult, MetricError, MetricRegistry};

/// Hub `A` joined to leaves `B`, `C`, `D`.
pub fn star() -> Graph<String> {
    graph(&[("A", "B"), ("A", "C"), ("A", "D")])
}

/// `X - Y - Z - X`.
pub fn triangle() -> Graph<String> {
    graph(&[("X", "Y"), ("Y", "Z"), ("Z", "X")])
}

/// Undirected graph from string pairs.
pub fn graph(edges: &[(&str, &str)]) -> Graph<String> {
    Graph::from_edges(
        false,
        edges
            .iter()
            .map(|(a, b)| Edge::new(a.to_string(), b.to_string())),
    )
}

/// Removal set from string ids.
pub fn removal(ids: &[&str]) -> RemovalSet<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

/// Standard registry plus a metric named `broken` that always fails.
pub fn registry_with_broken() -> MetricRegistry<String> {
    let mut registry = MetricRegistry::default();
    registry.register_fn(
        "broken",
        |_: &Graph<String>| -> Result<CentralityResult<String>, MetricError> {
            Err(MetricError::failed("deliberate failure"))
        },
    );
    registry
}

/// Asserts two floats agree to 1e-9.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
