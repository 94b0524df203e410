use crate::common::{parse, write_config};
use ablatio_cli::run;
use ablatio_core::AblatioConfig;
use tempfile::TempDir;

#[tokio::test]
async fn test_config_init_then_set_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let file = path.to_str().unwrap();

    run(parse(&path, &["config", "init", "--file", file])).await.unwrap();
    assert!(path.exists());

    run(parse(&path, &["config", "set", "metrics.katz.alpha", "0.05"]))
        .await
        .unwrap();
    run(parse(&path, &["config", "get", "metrics.katz.alpha"]))
        .await
        .unwrap();

    let config = AblatioConfig::from_file(&path).unwrap();
    assert_eq!(config.metrics.katz.alpha, 0.05);
}

#[tokio::test]
async fn test_config_init_refuses_overwrite() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir);
    let file = path.to_str().unwrap();

    assert!(
        run(parse(&path, &["config", "init", "--file", file]))
            .await
            .is_err()
    );
    run(parse(&path, &["config", "init", "--file", file, "--force"]))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_config_show_and_path() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir);
    run(parse(&path, &["config", "show"])).await.unwrap();
    run(parse(&path, &["config", "path"])).await.unwrap();
}

#[tokio::test]
async fn test_config_set_rejects_invalid() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir);
    let result = run(parse(&path, &["config", "set", "layout.iterations", "0"])).await;
    assert!(result.is_err());
}
