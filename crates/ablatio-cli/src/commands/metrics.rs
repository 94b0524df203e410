//! `ablatio metrics`: list registered metrics.

use crate::error::Result;
use ablatio_core::{AblatioConfig, column_title, normalize_metric_name};
use ablatio_metrics::MetricRegistry;

/// One line per registered metric; configured defaults are marked.
pub fn list_metrics(config: &AblatioConfig) -> Vec<String> {
    let registry: MetricRegistry<String> = MetricRegistry::standard(&config.metrics);
    let defaults: Vec<String> = config
        .analysis
        .metrics
        .iter()
        .map(|m| normalize_metric_name(m))
        .collect();

    registry
        .names()
        .map(|name| {
            let marker = if defaults.iter().any(|d| d == name) {
                "  (default)"
            } else {
                ""
            };
            format!("{name:<22}{}{marker}", column_title(name))
        })
        .collect()
}

/// Handles `ablatio metrics`.
pub fn run(config: &AblatioConfig) -> Result<()> {
    for line in list_metrics(config) {
        println!("{line}");
    }
    Ok(())
}
