//! Integration tests for login/logout commands.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Test: logout when not logged in shows a message.
#[test]
fn test_logout_when_not_logged_in() {
    let temp = tempdir().unwrap();

    Command::cargo_bin("byline")
        .unwrap()
        .env("BYLINE_HOME", temp.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Not logged in."));
}

/// Test: login rejects an empty password before any request.
#[test]
fn test_login_rejects_empty_password() {
    let temp = tempdir().unwrap();

    Command::cargo_bin("byline")
        .unwrap()
        .env("BYLINE_HOME", temp.path())
        .args(["login", "ada"])
        .write_stdin("\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Password must not be empty"));
}

/// Test: login stores the token pair in session.json.
#[tokio::test(flavor = "multi_thread")]
async fn test_login_stores_tokens() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token/"))
        .and(body_json(serde_json::json!({
            "username": "ada",
            "password": "Secret123",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access": "access-abc",
            "refresh": "refresh-def",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let temp = tempdir().unwrap();
    let session_path = temp.path().join("session.json");

    Command::cargo_bin("byline")
        .unwrap()
        .env("BYLINE_HOME", temp.path())
        .env("BYLINE_API_URL", server.uri())
        .args(["login", "ada"])
        .write_stdin("Secret123\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged in as ada"));

    let contents = fs::read_to_string(&session_path).unwrap();
    assert!(contents.contains("access-abc"), "access token persisted");
    assert!(contents.contains("refresh-def"), "refresh token persisted");
    assert!(contents.contains("\"token\""), "stored under the token key");
}

/// Test: failed login surfaces the server detail and stores nothing.
#[tokio::test(flavor = "multi_thread")]
async fn test_login_failure_shows_server_detail() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/token/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "detail": "No active account found with the given credentials",
        })))
        .mount(&server)
        .await;

    let temp = tempdir().unwrap();

    Command::cargo_bin("byline")
        .unwrap()
        .env("BYLINE_HOME", temp.path())
        .env("BYLINE_API_URL", server.uri())
        .args(["login", "ada"])
        .write_stdin("wrong\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No active account found"));

    assert!(!temp.path().join("session.json").exists());
}

/// Test: logout removes the stored session file.
#[test]
fn test_logout_clears_session_file() {
    let temp = tempdir().unwrap();
    let session_path = temp.path().join("session.json");
    fs::write(&session_path, r#"{"token": "a", "refresh": "r"}"#).unwrap();

    Command::cargo_bin("byline")
        .unwrap()
        .env("BYLINE_HOME", temp.path())
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Logged out."));

    assert!(!session_path.exists(), "session.json should be removed");
}

/// Test: session.json has restricted permissions on Unix.
#[cfg(unix)]
#[tokio::test(flavor = "multi_thread")]
async fn test_session_file_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access": "a",
            "refresh": "r",
        })))
        .mount(&server)
        .await;

    let temp = tempdir().unwrap();

    Command::cargo_bin("byline")
        .unwrap()
        .env("BYLINE_HOME", temp.path())
        .env("BYLINE_API_URL", server.uri())
        .args(["login", "ada"])
        .write_stdin("pw\n")
        .assert()
        .success();

    let mode = fs::metadata(temp.path().join("session.json"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600, "session.json should be 0600");
}
