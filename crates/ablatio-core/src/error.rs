//! Error types for ablatio-core.
//!
//! A single error enum is shared by the engine crates. Usage errors
//! (a bad removal set, an empty selection, an unknown metric name) are
//! raised before any computation starts; computation failures carry the
//! name of the metric that produced them.

use std::fmt;
use std::path::Path;

/// Result type alias for Ablatio operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Which part of an analysis request was empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// No centrality metrics were selected.
    Metrics,
    /// No nodes were selected for removal.
    RemovalSet,
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metrics => write!(f, "no centrality metrics selected"),
            Self::RemovalSet => write!(f, "no nodes selected for removal"),
        }
    }
}

/// Errors that can occur in Ablatio.
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// One or more removal-set ids are absent from the graph.
    #[error("Node(s) not found in graph: {}", .ids.join(", "))]
    NodeNotFound {
        /// Display form of every missing id.
        ids: Vec<String>,
    },

    /// The metric list or the removal set was empty.
    #[error("Empty selection: {0}")]
    EmptySelection(Selection),

    /// A metric name did not resolve in the registry.
    #[error("Unknown metric: {name}")]
    UnknownMetric {
        /// The unresolved name.
        name: String,
    },

    /// A metric function failed on one of the graph snapshots.
    #[error("Metric '{metric}' failed: {message}")]
    Metric {
        /// Registry name of the metric.
        metric: String,
        /// What went wrong.
        message: String,
    },

    /// Graph construction error.
    #[error("Graph error: {message}")]
    Graph {
        /// What went wrong.
        message: String,
    },

    /// The analysis was cancelled between metrics.
    #[error("Analysis cancelled")]
    Cancelled,

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic.
        message: String,
    },

    /// I/O error with the path that caused it.
    #[error("I/O error at {path}: {source}")]
    Io {
        /// The file involved.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Creates a `NodeNotFound` error from any displayable ids.
    pub fn node_not_found<I, D>(ids: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: fmt::Display,
    {
        Error::NodeNotFound {
            ids: ids.into_iter().map(|id| id.to_string()).collect(),
        }
    }

    /// Creates an `UnknownMetric` error.
    pub fn unknown_metric(name: impl Into<String>) -> Self {
        Error::UnknownMetric { name: name.into() }
    }

    /// Creates a `Metric` error.
    pub fn metric(metric: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Metric {
            metric: metric.into(),
            message: message.into(),
        }
    }

    /// Creates a `Graph` error.
    pub fn graph(message: impl Into<String>) -> Self {
        Error::Graph {
            message: message.into(),
        }
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path that produced it.
    pub fn io_with_path(source: std::io::Error, path: &Path) -> Self {
        Error::Io {
            path: path.display().to_string(),
            source,
        }
    }

    /// Returns whether this error is a caller mistake rather than a
    /// computation failure.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Error::NodeNotFound { .. } | Error::EmptySelection(_) | Error::UnknownMetric { .. }
        )
    }
}
