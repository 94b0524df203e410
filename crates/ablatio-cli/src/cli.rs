//! Command-line definitions.

use ablatio_graph::GraphKind;
use ablatio_impact::COMBINED_DELTA;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Ablatio - measure what removing nodes does to a graph
#[derive(Parser, Debug)]
#[command(name = "ablatio", version)]
#[command(about = "Node-removal impact analysis for centrality metrics", long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Measure how removing nodes changes centrality and diameter
    Analyze(AnalyzeArgs),
    /// Time single-metric analyses on generated graphs
    Bench(BenchArgs),
    /// Compute node positions through the layout cache
    Layout(LayoutArgs),
    /// List the available centrality metrics
    Metrics,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Where the input graph comes from.
#[derive(Args, Debug, Clone)]
pub struct GraphSource {
    /// JSON graph document to load
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with = "generate",
        required_unless_present = "generate"
    )]
    pub graph: Option<PathBuf>,

    /// Generate a graph of this kind instead of loading one
    #[arg(long, value_name = "KIND")]
    pub generate: Option<GraphKind>,

    /// Node count for generated graphs
    #[arg(long, default_value_t = 20)]
    pub size: usize,

    /// Seed for random generators
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Arguments for `analyze`.
#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub source: GraphSource,

    /// Node ids to remove (repeat the flag or separate with commas)
    #[arg(short, long, value_delimiter = ',', required = true)]
    pub remove: Vec<String>,

    /// Metrics to evaluate; defaults to `analysis.metrics` from the config
    #[arg(short, long, value_delimiter = ',')]
    pub metrics: Vec<String>,

    /// Column to sort by: a metric, `<metric>_delta`, `combined`, or `combined_delta`
    #[arg(long, default_value = COMBINED_DELTA)]
    pub sort: String,

    /// Sort ascending instead of descending
    #[arg(long)]
    pub ascending: bool,

    /// Show at most this many rows in the text table
    #[arg(long)]
    pub limit: Option<usize>,

    /// Print the full report as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `bench`. Unset values come from the `[bench]` config section.
#[derive(Args, Debug, Clone, Default)]
pub struct BenchArgs {
    /// Repetitions per graph and metric
    #[arg(long)]
    pub runs: Option<usize>,

    /// Graph sizes (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub sizes: Vec<usize>,

    /// Graph kinds (comma-separated)
    #[arg(long = "graph-types", value_delimiter = ',')]
    pub graph_types: Vec<GraphKind>,

    /// Metrics to time (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub metrics: Vec<String>,

    /// Generator seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Layout algorithm choice on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmArg {
    /// Seeded force-directed layout
    Spring,
    /// Nodes evenly spaced on the unit circle
    Circular,
}

/// Arguments for `layout`. Unset values come from the `[layout]` config section.
#[derive(Args, Debug, Clone)]
pub struct LayoutArgs {
    #[command(flatten)]
    pub source: GraphSource,

    /// Layout algorithm
    #[arg(long, value_enum)]
    pub algorithm: Option<AlgorithmArg>,

    /// Spring layout seed
    #[arg(long = "layout-seed")]
    pub layout_seed: Option<u64>,

    /// Spring layout iterations
    #[arg(long)]
    pub iterations: Option<usize>,

    /// Also lay out the graph with these nodes removed
    #[arg(short, long, value_delimiter = ',')]
    pub remove: Vec<String>,

    /// Print positions as JSON
    #[arg(long)]
    pub json: bool,
}

/// Config subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Print a value by dotted key (e.g. `metrics.katz.alpha`)
    Get {
        /// Dotted key
        key: String,
    },
    /// Set a value by dotted key in the config file
    Set {
        /// Dotted key
        key: String,
        /// New value (bool, integer, float, or string)
        value: String,
    },
    /// Write a default config file
    Init {
        /// Where to write it; defaults to the platform config directory
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
    /// Print the effective configuration as TOML
    Show,
}
