//! Shared fixtures for CLI integration tests.

use ablatio_cli::Cli;
use clap::Parser;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A bowtie: two triangles joined through `hub`.
pub const BOWTIE: &str = r#"{
    "directed": false,
    "edges": [
        {"from": "a", "to": "b"},
        {"from": "b", "to": "hub"},
        {"from": "hub", "to": "a"},
        {"from": "hub", "to": "c"},
        {"from": "c", "to": "d"},
        {"from": "d", "to": "hub"}
    ]
}"#;

/// Writes the bowtie document into `dir`.
pub fn write_bowtie(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("bowtie.json");
    std::fs::write(&path, BOWTIE).expect("write graph document");
    path
}

/// Writes a default config file into `dir`.
pub fn write_config(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("config.toml");
    let text = ablatio_core::AblatioConfig::default()
        .to_toml_string()
        .expect("serialize default config");
    std::fs::write(&path, text).expect("write config");
    path
}

/// Parses an argument vector, prefixed with the binary name and the
/// given config file.
pub fn parse(config: &Path, args: &[&str]) -> Cli {
    let config = config.to_str().expect("utf-8 temp path");
    let argv = ["ablatio", "--config", config]
        .into_iter()
        .chain(args.iter().copied());
    Cli::try_parse_from(argv).expect("valid command line")
}
