//! Article and comment commands against a mock API.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn article_json(id: u64, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "text": "Some body text.",
        "author": { "id": 1, "user": { "id": 1, "username": "ada" } },
        "created_at": "2024-03-01T10:00:00Z",
        "tags": [ { "id": 1, "name": "rust" }, { "id": 2, "name": "tui" } ],
    })
}

/// Test: articles list prints one row per article.
#[tokio::test(flavor = "multi_thread")]
async fn test_articles_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/articles/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            article_json(1, "First post"),
            article_json(2, "Second post"),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let temp = tempdir().unwrap();

    Command::cargo_bin("byline")
        .unwrap()
        .env("BYLINE_HOME", temp.path())
        .env("BYLINE_API_URL", server.uri())
        .args(["articles", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("First post"))
        .stdout(predicate::str::contains("Second post"))
        .stdout(predicate::str::contains("ada"));
}

/// Test: the --search flag is forwarded as the search query parameter.
#[tokio::test(flavor = "multi_thread")]
async fn test_articles_list_search() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/articles/"))
        .and(query_param("search", "rust tui"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!([article_json(3, "Matching post")])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let temp = tempdir().unwrap();

    Command::cargo_bin("byline")
        .unwrap()
        .env("BYLINE_HOME", temp.path())
        .env("BYLINE_API_URL", server.uri())
        .args(["articles", "list", "--search", "rust tui"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Matching post"));
}

/// Test: articles show prints the article and its comments.
#[tokio::test(flavor = "multi_thread")]
async fn test_articles_show_with_comments() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/articles/7/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(article_json(7, "Deep dive")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/articles/7/comments/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": 11,
                "text": "Great read!",
                "author": { "id": 2, "user": { "id": 2, "username": "bob" } },
                "created_at": "2024-03-02T08:00:00Z",
            },
        ])))
        .mount(&server)
        .await;

    let temp = tempdir().unwrap();

    Command::cargo_bin("byline")
        .unwrap()
        .env("BYLINE_HOME", temp.path())
        .env("BYLINE_API_URL", server.uri())
        .args(["articles", "show", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deep dive"))
        .stdout(predicate::str::contains("[rust, tui]"))
        .stdout(predicate::str::contains("Comments (1):"))
        .stdout(predicate::str::contains("Great read!"));
}

/// Test: publishing sends the body from stdin and the parsed tags.
#[tokio::test(flavor = "multi_thread")]
async fn test_articles_new_from_stdin() {
    let server = MockServer::start().await;

    // Stored token is verified on restore, then the create goes out with it.
    Mock::given(method("GET"))
        .and(path("/auth/"))
        .and(header("authorization", "Bearer stored-token"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/articles/"))
        .and(header("authorization", "Bearer stored-token"))
        .and(wiremock::matchers::body_json(serde_json::json!({
            "title": "Hello",
            "text": "Body from stdin.\n",
            "tags": ["a", "b", "a"],
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(article_json(9, "Hello")))
        .expect(1)
        .mount(&server)
        .await;

    let temp = tempdir().unwrap();
    std::fs::write(
        temp.path().join("session.json"),
        r#"{"token": "stored-token", "refresh": "r"}"#,
    )
    .unwrap();

    Command::cargo_bin("byline")
        .unwrap()
        .env("BYLINE_HOME", temp.path())
        .env("BYLINE_API_URL", server.uri())
        .args(["articles", "new", "--title", "Hello", "--tags", "a, b , a"])
        .write_stdin("Body from stdin.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created article 9"));
}

/// Test: mutating commands refuse to run without a session.
#[tokio::test(flavor = "multi_thread")]
async fn test_comment_add_requires_login() {
    let server = MockServer::start().await;

    let temp = tempdir().unwrap();

    Command::cargo_bin("byline")
        .unwrap()
        .env("BYLINE_HOME", temp.path())
        .env("BYLINE_API_URL", server.uri())
        .args(["comments", "add", "7", "--text", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not logged in"));
}

/// Test: an invalid stored token is cleared by the startup restore.
#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_stored_token_cleared_on_restore() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "detail": "Token is invalid or expired",
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/articles/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let temp = tempdir().unwrap();
    let session_path = temp.path().join("session.json");
    std::fs::write(&session_path, r#"{"token": "expired", "refresh": "r"}"#).unwrap();

    Command::cargo_bin("byline")
        .unwrap()
        .env("BYLINE_HOME", temp.path())
        .env("BYLINE_API_URL", server.uri())
        .args(["articles", "list"])
        .assert()
        .success();

    assert!(
        !session_path.exists(),
        "invalid token should be cleared from disk"
    );
}
