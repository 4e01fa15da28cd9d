//! Basic CLI surface tests.

use assert_cmd::Command;
use predicates::prelude::*;

/// Test: --help lists the top-level subcommands.
#[test]
fn test_help_lists_subcommands() {
    Command::cargo_bin("byline")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("articles"))
        .stdout(predicate::str::contains("comments"))
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("logout"))
        .stdout(predicate::str::contains("register"));
}

/// Test: unknown subcommands are rejected.
#[test]
fn test_unknown_subcommand_fails() {
    Command::cargo_bin("byline")
        .unwrap()
        .arg("frobnicate")
        .assert()
        .failure();
}

/// Test: a malformed --api-url is rejected before any request is made.
#[test]
fn test_invalid_api_url_rejected() {
    let temp = tempfile::tempdir().unwrap();

    Command::cargo_bin("byline")
        .unwrap()
        .env("BYLINE_HOME", temp.path())
        .args(["articles", "list", "--api-url", "not a url"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid API base URL"));
}
