use crate::common::{parse, write_bowtie, write_config};
use ablatio_cli::commands::analyze::{AnalyzeRequest, analyze};
use ablatio_cli::source::load_document;
use ablatio_cli::{Error, run};
use ablatio_core::{AblatioConfig, CancellationFlag};
use clap::Parser;
use tempfile::TempDir;

// ----------------------------------------------------------------------------
// analyze
// ----------------------------------------------------------------------------

#[tokio::test]
async fn test_analyze_document_text() {
    let dir = TempDir::new().unwrap();
    let graph = write_bowtie(&dir);
    let config = write_config(&dir);

    let cli = parse(
        &config,
        &[
            "analyze",
            "--graph",
            graph.to_str().unwrap(),
            "--remove",
            "hub",
            "-m",
            "degree,betweenness",
        ],
    );
    run(cli).await.unwrap();
}

#[tokio::test]
async fn test_analyze_generated_json() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);
    let cli = parse(
        &config,
        &[
            "analyze", "--generate", "wheel", "--size", "8", "--remove", "0", "--json",
        ],
    );
    run(cli).await.unwrap();
}

#[tokio::test]
async fn test_analyze_unknown_node_fails() {
    let dir = TempDir::new().unwrap();
    let graph = write_bowtie(&dir);
    let config = write_config(&dir);

    let cli = parse(
        &config,
        &["analyze", "--graph", graph.to_str().unwrap(), "--remove", "ghost"],
    );
    let err = run(cli).await.unwrap_err();
    assert!(matches!(
        err,
        Error::Core(ablatio_core::Error::NodeNotFound { .. })
    ));
}

#[test]
fn test_bowtie_hub_removal_splits_graph() {
    let dir = TempDir::new().unwrap();
    let graph = load_document(&write_bowtie(&dir)).unwrap();

    let args = match parse(
        &write_config(&dir),
        &["analyze", "--graph", "unused.json", "--remove", "hub", "-m", "degree"],
    )
    .command
    {
        ablatio_cli::Command::Analyze(args) => args,
        other => unreachable!("expected analyze, got {other:?}"),
    };
    let request = AnalyzeRequest::new(&AblatioConfig::default(), &args);
    let report = analyze(&graph, &request, CancellationFlag::new()).unwrap();

    assert_eq!(report.diameter.before, 2.0);
    assert!(report.diameter.disconnected());
    assert_eq!(report.table.len(), 4);
    // Each survivor keeps one of its two neighbours: 2/4 -> 1/3
    for row in report.table.rows() {
        assert!((row.combined_delta - (1.0 / 3.0 - 0.5)).abs() < 1e-12);
    }
}

// ----------------------------------------------------------------------------
// layout, metrics, bench
// ----------------------------------------------------------------------------

#[tokio::test]
async fn test_layout_with_removal() {
    let dir = TempDir::new().unwrap();
    let graph = write_bowtie(&dir);
    let config = write_config(&dir);

    let cli = parse(
        &config,
        &[
            "layout",
            "--graph",
            graph.to_str().unwrap(),
            "--algorithm",
            "circular",
            "--remove",
            "hub",
            "--json",
        ],
    );
    run(cli).await.unwrap();
}

#[tokio::test]
async fn test_metrics_lists() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);
    run(parse(&config, &["metrics"])).await.unwrap();
}

#[tokio::test]
async fn test_bench_small_plan() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);
    let cli = parse(
        &config,
        &[
            "bench",
            "--runs",
            "2",
            "--sizes",
            "8",
            "--graph-types",
            "cycle,star",
            "-m",
            "degree,closeness",
        ],
    );
    run(cli).await.unwrap();
}

#[tokio::test]
async fn test_missing_explicit_config_fails() {
    let cli = ablatio_cli::Cli::try_parse_from([
        "ablatio",
        "--config",
        "/nonexistent/ablatio.toml",
        "metrics",
    ])
    .unwrap();
    assert!(run(cli).await.is_err());
}
