//! Configuration for Ablatio.
//!
//! Configuration is a TOML file deserialized into [`AblatioConfig`]. Every
//! section and field has a default, so a partial file (or no file at all)
//! is valid.
//!
//! The file is resolved in this order:
//!
//! 1. An explicit path (the CLI's `--config` flag)
//! 2. The `ABLATIO_CONFIG` environment variable
//! 3. `<config dir>/ablatio/config.toml`
//!
//! An explicit or environment-supplied path that does not exist is an
//! error; a missing default file falls back to built-in defaults.
//!
//! ```toml
//! [analysis]
//! metrics = ["degree", "betweenness"]
//!
//! [metrics.katz]
//! alpha = 0.01
//! beta = 1.0
//!
//! [layout]
//! algorithm = "spring"
//! seed = 42
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable consulted for the config file location.
pub const CONFIG_ENV_VAR: &str = "ABLATIO_CONFIG";

/// Project name used for the config directory.
pub const PROJECT_NAME: &str = "ablatio";

// ============================================================================
// Sections
// ============================================================================

/// `[analysis]`: defaults for impact analysis runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Metrics selected when the caller does not name any.
    pub metrics: Vec<String>,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            metrics: vec!["degree".to_string()],
        }
    }
}

/// `[metrics.eigenvector]`: power-iteration limits.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EigenvectorSettings {
    /// Iteration cap before reporting non-convergence.
    pub max_iterations: usize,
    /// Per-node convergence tolerance.
    pub tolerance: f64,
}

impl Default for EigenvectorSettings {
    fn default() -> Self {
        Self {
            max_iterations: 5000,
            tolerance: 1e-6,
        }
    }
}

/// `[metrics.katz]`: damping and baseline constants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KatzSettings {
    /// Attenuation per hop.
    pub alpha: f64,
    /// Baseline centrality for every node.
    pub beta: f64,
    /// Iteration cap before reporting non-convergence.
    pub max_iterations: usize,
    /// Per-node convergence tolerance.
    pub tolerance: f64,
}

impl Default for KatzSettings {
    fn default() -> Self {
        Self {
            alpha: 0.01,
            beta: 1.0,
            max_iterations: 1000,
            tolerance: 1e-6,
        }
    }
}

/// `[metrics]`: parameters of the standard metric set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    /// Eigenvector centrality settings.
    pub eigenvector: EigenvectorSettings,
    /// Katz centrality settings.
    pub katz: KatzSettings,
}

/// Layout algorithm family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    /// Force-directed (Fruchterman–Reingold).
    #[default]
    Spring,
    /// Evenly spaced on the unit circle.
    Circular,
}

/// `[layout]`: defaults for position computation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Algorithm used when none is requested.
    pub algorithm: LayoutKind,
    /// RNG seed for the spring layout's initial positions.
    pub seed: u64,
    /// Spring layout iteration count.
    pub iterations: usize,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            algorithm: LayoutKind::Spring,
            seed: 42,
            iterations: 50,
        }
    }
}

/// `[bench]`: benchmark driver workload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchSettings {
    /// Repetitions per (graph, metric) pair.
    pub runs: usize,
    /// Graph sizes to generate.
    pub sizes: Vec<usize>,
    /// Generator names (see `ablatio_graph::generators`).
    pub graph_types: Vec<String>,
    /// Metrics to time, one at a time.
    pub metrics: Vec<String>,
    /// Generator seed.
    pub seed: u64,
}

impl Default for BenchSettings {
    fn default() -> Self {
        Self {
            runs: 10,
            sizes: vec![10, 100],
            graph_types: vec![
                "erdos_renyi".to_string(),
                "watts_strogatz".to_string(),
                "barabasi_albert".to_string(),
            ],
            metrics: vec![
                "degree".to_string(),
                "betweenness".to_string(),
                "closeness".to_string(),
                "eigenvector".to_string(),
                "katz".to_string(),
            ],
            seed: 42,
        }
    }
}

// ============================================================================
// AblatioConfig
// ============================================================================

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AblatioConfig {
    /// Analysis defaults.
    pub analysis: AnalysisSettings,
    /// Standard metric parameters.
    pub metrics: MetricsConfig,
    /// Layout defaults.
    pub layout: LayoutSettings,
    /// Benchmark workload.
    pub bench: BenchSettings,
}

impl AblatioConfig {
    /// Default config file location: `<config dir>/ablatio/config.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
    }

    /// Resolve which config file to use, without checking that it exists.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            if !path.trim().is_empty() {
                return Some(PathBuf::from(path));
            }
        }
        Self::default_config_path()
    }

    /// Load configuration, falling back to defaults when no file is present
    /// at the default location.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let user_supplied = explicit.is_some()
            || std::env::var(CONFIG_ENV_VAR).is_ok_and(|p| !p.trim().is_empty());

        match Self::resolve_config_path(explicit) {
            Some(path) if path.exists() => Self::from_file(&path),
            Some(path) if user_supplied => Err(Error::config(format!(
                "Config file not found: {}",
                path.display()
            ))),
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to load {}: {e}", path.display())))?;
        log::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        let eig = &self.metrics.eigenvector;
        if eig.max_iterations == 0 {
            return Err(Error::config("metrics.eigenvector.max_iterations must be > 0"));
        }
        if !is_positive(eig.tolerance) {
            return Err(Error::config("metrics.eigenvector.tolerance must be > 0"));
        }

        let katz = &self.metrics.katz;
        if !is_positive(katz.alpha) {
            return Err(Error::config("metrics.katz.alpha must be a positive number"));
        }
        if !katz.beta.is_finite() {
            return Err(Error::config("metrics.katz.beta must be finite"));
        }
        if katz.max_iterations == 0 {
            return Err(Error::config("metrics.katz.max_iterations must be > 0"));
        }
        if !is_positive(katz.tolerance) {
            return Err(Error::config("metrics.katz.tolerance must be > 0"));
        }

        if self.layout.iterations == 0 {
            return Err(Error::config("layout.iterations must be > 0"));
        }
        if self.analysis.metrics.is_empty() {
            return Err(Error::config("analysis.metrics must name at least one metric"));
        }
        if self.bench.runs == 0 {
            return Err(Error::config("bench.runs must be > 0"));
        }
        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

// ============================================================================
// Tests
// ============================================================================
