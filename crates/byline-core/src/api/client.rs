//! HTTP client for the blog API.
//!
//! `ApiClient` is an explicit instance: it owns the base URL and the current
//! bearer token instead of mutating process-global defaults. Callers share
//! one instance (typically behind an `Arc`) so a token set after login is
//! carried by every subsequent call. Token writes are last-writer-wins; an
//! in-flight request keeps whatever token it started with.

use std::sync::RwLock;

use anyhow::{Context, Result};
use reqwest::{RequestBuilder, Response, StatusCode};
use tracing::debug;

use super::types::{Article, Comment, Listing, NewArticle, TokenPair};

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    /// Creates a client for the given API base URL (no trailing slash).
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/');
        url::Url::parse(base_url).with_context(|| format!("Invalid API base URL: {base_url}"))?;

        Ok(Self {
            http: reqwest::Client::new(),
            base_url: base_url.to_string(),
            token: RwLock::new(None),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sets the bearer token attached to subsequent requests.
    pub fn set_token(&self, token: &str) {
        *self.token.write().expect("token lock poisoned") = Some(token.to_string());
    }

    /// Removes the bearer token; subsequent requests go out unauthenticated.
    pub fn clear_token(&self) {
        *self.token.write().expect("token lock poisoned") = None;
    }

    /// Whether a bearer token is currently attached.
    pub fn has_token(&self) -> bool {
        self.token.read().expect("token lock poisoned").is_some()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Attaches the current bearer token, if any.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.token.read().expect("token lock poisoned").as_deref() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    // ========================================================================
    // Auth endpoints
    // ========================================================================

    /// Exchanges credentials for an access/refresh token pair.
    pub async fn login(&self, username: &str, password: &str) -> Result<TokenPair> {
        let response = self
            .http
            .post(self.endpoint("/token/"))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await
            .context("Failed to send login request")?;

        if !response.status().is_success() {
            return Err(failure(response, "Login failed").await);
        }

        response.json().await.context("Failed to parse token response")
    }

    /// Registers a new account; the response carries a token pair like login.
    pub async fn register(&self, username: &str, email: &str, password: &str) -> Result<TokenPair> {
        let response = self
            .http
            .post(self.endpoint("/register/"))
            .json(&serde_json::json!({
                "username": username,
                "email": email,
                "password": password,
            }))
            .send()
            .await
            .context("Failed to send registration request")?;

        if !response.status().is_success() {
            return Err(failure(response, "Registration failed").await);
        }

        response
            .json()
            .await
            .context("Failed to parse registration response")
    }

    /// Checks that the attached token is still accepted by the server.
    pub async fn verify(&self) -> Result<()> {
        let response = self
            .authorize(self.http.get(self.endpoint("/auth/")))
            .send()
            .await
            .context("Failed to send verification request")?;

        let status = response.status();
        debug!(%status, "token verification");
        if !status.is_success() {
            return Err(failure(response, "Session is no longer valid").await);
        }
        Ok(())
    }

    // ========================================================================
    // Articles
    // ========================================================================

    /// Lists articles, optionally filtered by a search query.
    ///
    /// An empty or absent query requests the unfiltered list; a non-empty one
    /// is sent URL-encoded as `?search=<q>`.
    pub async fn list_articles(&self, search: Option<&str>) -> Result<Vec<Article>> {
        let mut request = self.authorize(self.http.get(self.endpoint("/articles/")));
        if let Some(query) = search.map(str::trim).filter(|q| !q.is_empty()) {
            request = request.query(&[("search", query)]);
        }

        let response = request.send().await.context("Failed to fetch articles")?;
        if !response.status().is_success() {
            return Err(failure(response, "Could not load articles").await);
        }

        let listing: Listing<Article> = response
            .json()
            .await
            .context("Failed to parse article list")?;
        Ok(listing.into_vec())
    }

    /// Fetches a single article by id.
    pub async fn article(&self, id: u64) -> Result<Article> {
        let response = self
            .authorize(self.http.get(self.endpoint(&format!("/articles/{id}/"))))
            .send()
            .await
            .context("Failed to fetch article")?;

        if response.status() == StatusCode::NOT_FOUND {
            anyhow::bail!("Article not found");
        }
        if !response.status().is_success() {
            return Err(failure(response, "Could not load article").await);
        }

        response.json().await.context("Failed to parse article")
    }

    /// Creates an article. Requires an attached token.
    pub async fn create_article(&self, article: &NewArticle) -> Result<Article> {
        let response = self
            .authorize(self.http.post(self.endpoint("/articles/")))
            .json(article)
            .send()
            .await
            .context("Failed to send article")?;

        if !response.status().is_success() {
            return Err(failure(response, "Error creating article").await);
        }

        response
            .json()
            .await
            .context("Failed to parse created article")
    }

    // ========================================================================
    // Comments
    // ========================================================================

    /// Lists the comments of an article.
    pub async fn comments(&self, article_id: u64) -> Result<Vec<Comment>> {
        let response = self
            .authorize(
                self.http
                    .get(self.endpoint(&format!("/articles/{article_id}/comments/"))),
            )
            .send()
            .await
            .context("Failed to fetch comments")?;

        if !response.status().is_success() {
            return Err(failure(response, "Could not load comments").await);
        }

        let listing: Listing<Comment> = response
            .json()
            .await
            .context("Failed to parse comment list")?;
        Ok(listing.into_vec())
    }

    /// Posts a comment on an article. Requires an attached token.
    pub async fn create_comment(&self, article_id: u64, text: &str) -> Result<Comment> {
        let response = self
            .authorize(
                self.http
                    .post(self.endpoint(&format!("/articles/{article_id}/comments/"))),
            )
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await
            .context("Failed to send comment")?;

        if !response.status().is_success() {
            return Err(failure(response, "Error adding comment").await);
        }

        response
            .json()
            .await
            .context("Failed to parse created comment")
    }

    /// Deletes a comment by id. Requires an attached token.
    pub async fn delete_comment(&self, id: u64) -> Result<()> {
        let response = self
            .authorize(self.http.delete(self.endpoint(&format!("/comments/{id}/"))))
            .send()
            .await
            .context("Failed to send comment deletion")?;

        if !response.status().is_success() {
            return Err(failure(response, "Error deleting comment").await);
        }
        Ok(())
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .field("has_token", &self.has_token())
            .finish_non_exhaustive()
    }
}

/// Converts a non-success response into a user-displayable error.
///
/// Looks for a string under `detail`, `message`, or `error` in a JSON body
/// (the server uses all three depending on the endpoint), then falls back to
/// the raw body, then to the caller's generic message.
async fn failure(response: Response, fallback: &str) -> anyhow::Error {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    debug!(%status, "request failed");

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(&body) {
        for key in ["detail", "message", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return anyhow::anyhow!("{text}");
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() || trimmed.len() > 200 {
        anyhow::anyhow!("{fallback} (HTTP {status})")
    } else {
        anyhow::anyhow!("{trimmed}")
    }
}
