//! Config command tests.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

/// Test: config path respects BYLINE_HOME.
#[test]
fn test_config_path_uses_byline_home() {
    let temp = tempdir().unwrap();

    Command::cargo_bin("byline")
        .unwrap()
        .env("BYLINE_HOME", temp.path())
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(temp.path().to_str().unwrap()))
        .stdout(predicate::str::contains("config.toml"));
}

/// Test: config init creates the template file.
#[test]
fn test_config_init_creates_file() {
    let temp = tempdir().unwrap();
    let config_path = temp.path().join("config.toml");

    Command::cargo_bin("byline")
        .unwrap()
        .env("BYLINE_HOME", temp.path())
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config at"));

    let contents = std::fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("base_url"));
}

/// Test: config init refuses to overwrite an existing file.
#[test]
fn test_config_init_fails_if_exists() {
    let temp = tempdir().unwrap();
    std::fs::write(temp.path().join("config.toml"), "base_url = \"http://x/\"\n").unwrap();

    Command::cargo_bin("byline")
        .unwrap()
        .env("BYLINE_HOME", temp.path())
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
