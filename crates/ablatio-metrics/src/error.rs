//! Error type for metric functions.
//!
//! Metric failures are local to one metric on one graph snapshot. The
//! impact engine wraps them into `ablatio_core::Error::Metric` together
//! with the metric's registry name.

/// Why a metric could not produce scores.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MetricError {
    /// Power iteration hit its cap without meeting the tolerance.
    #[error("power iteration failed to converge within {iterations} iterations")]
    NotConverged {
        /// Iterations performed.
        iterations: usize,
    },

    /// A parameter is outside its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Any other failure, typically from a user-registered metric.
    #[error("{0}")]
    Failed(String),
}

impl MetricError {
    /// Creates a `Failed` error.
    pub fn failed(message: impl Into<String>) -> Self {
        MetricError::Failed(message.into())
    }
}
