//! Metric registry.
//!
//! An explicit, caller-owned map from normalized metric name to metric
//! implementation. Lookups normalize the requested name the same way, so
//! `"Unnormalized Degree"` finds `unnormalized_degree`.

use crate::centrality::{Betweenness, Closeness, Degree, Eigenvector, Katz};
use crate::{CentralityMetric, CentralityResult, FnMetric, MetricError};
use ablatio_core::config::MetricsConfig;
use ablatio_core::{Error, Result, normalize_metric_name};
use ablatio_graph::{Graph, NodeId};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Names of the standard metrics, in registration order.
pub const STANDARD_METRICS: [&str; 6] = [
    "degree",
    "unnormalized_degree",
    "betweenness",
    "closeness",
    "eigenvector",
    "katz",
];

/// Shared handle to a registered metric.
pub type SharedMetric<N> = Arc<dyn CentralityMetric<N>>;

/// Name → metric map.
pub struct MetricRegistry<N: NodeId> {
    metrics: BTreeMap<String, SharedMetric<N>>,
}

impl<N: NodeId> MetricRegistry<N> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            metrics: BTreeMap::new(),
        }
    }

    /// Creates a registry holding the standard metrics, parameterized by
    /// `config`.
    pub fn standard(config: &MetricsConfig) -> Self {
        let mut registry = Self::new();
        registry.register("degree", Degree::normalized());
        registry.register("unnormalized_degree", Degree::unnormalized());
        registry.register("betweenness", Betweenness);
        registry.register("closeness", Closeness);
        registry.register("eigenvector", Eigenvector::from(&config.eigenvector));
        registry.register("katz", Katz::from(&config.katz));
        registry
    }

    /// Registers a metric under `name`, replacing any metric of the same
    /// normalized name. Returns the replaced metric.
    pub fn register<M>(&mut self, name: &str, metric: M) -> Option<SharedMetric<N>>
    where
        M: CentralityMetric<N> + 'static,
    {
        self.register_shared(name, Arc::new(metric))
    }

    /// Registers an already shared metric.
    pub fn register_shared(
        &mut self,
        name: &str,
        metric: SharedMetric<N>,
    ) -> Option<SharedMetric<N>> {
        let key = normalize_metric_name(name);
        log::debug!("Registering metric '{key}'");
        self.metrics.insert(key, metric)
    }

    /// Registers a closure as a metric.
    pub fn register_fn<F>(&mut self, name: &str, func: F) -> Option<SharedMetric<N>>
    where
        F: Fn(&Graph<N>) -> std::result::Result<CentralityResult<N>, MetricError>
            + Send
            + Sync
            + 'static,
    {
        self.register(name, FnMetric::new(func))
    }

    /// Looks up a metric by (unnormalized) name.
    pub fn get(&self, name: &str) -> Option<SharedMetric<N>> {
        self.metrics.get(&normalize_metric_name(name)).cloned()
    }

    /// Looks up a metric, returning its normalized name alongside it.
    ///
    /// # Errors
    ///
    /// `Error::UnknownMetric` if nothing is registered under `name`.
    pub fn resolve(&self, name: &str) -> Result<(String, SharedMetric<N>)> {
        let key = normalize_metric_name(name);
        match self.metrics.get(&key) {
            Some(metric) => Ok((key, Arc::clone(metric))),
            None => Err(Error::unknown_metric(name)),
        }
    }

    /// Whether `name` resolves.
    pub fn contains(&self, name: &str) -> bool {
        self.metrics.contains_key(&normalize_metric_name(name))
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.metrics.keys().map(String::as_str)
    }

    /// Number of registered metrics.
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

impl<N: NodeId> Default for MetricRegistry<N> {
    fn default() -> Self {
        Self::standard(&MetricsConfig::default())
    }
}

impl<N: NodeId> Clone for MetricRegistry<N> {
    fn clone(&self) -> Self {
        Self {
            metrics: self.metrics.clone(),
        }
    }
}

impl<N: NodeId> fmt::Debug for MetricRegistry<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MetricRegistry")
            .field("metrics", &self.metrics.keys().collect::<Vec<_>>())
            .finish()
    }
}
