//! Wire types for the blog API.
//!
//! The server is lenient about optional relations (an article may arrive
//! without its author profile), so nested fields default to `None` instead of
//! failing the whole payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Access/refresh token pair issued by the token and registration endpoints.
///
/// The registration response carries extra fields (`message`, `user`); only
/// the tokens are consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// The user half of an author profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUser {
    #[serde(default)]
    pub id: Option<u64>,
    pub username: String,
}

/// Author profile nested in articles and comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub user: Option<ProfileUser>,
}

impl Profile {
    /// Username of the profile's user, if the relation is populated.
    pub fn username(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.username.as_str())
    }
}

/// Article tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
}

/// Article as served by `GET /articles/`.
#[derive(Debug, Clone, Deserialize)]
pub struct Article {
    pub id: u64,
    pub title: String,
    pub text: String,
    #[serde(default)]
    pub author: Option<Profile>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Article {
    /// Author username, if known.
    pub fn author_username(&self) -> Option<&str> {
        self.author.as_ref().and_then(Profile::username)
    }
}

/// Comment as served by `GET /articles/:id/comments/`.
#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub text: String,
    #[serde(default)]
    pub author: Option<Profile>,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Author username, if known.
    pub fn author_username(&self) -> Option<&str> {
        self.author.as_ref().and_then(Profile::username)
    }
}

/// Payload for `POST /articles/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewArticle {
    pub title: String,
    pub text: String,
    pub tags: Vec<String>,
}

/// List responses arrive either as a bare array or paginated as
/// `{"results": [...]}` depending on server settings; both decode here.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Paginated { results: Vec<T> },
    Plain(Vec<T>),
}

impl<T> Listing<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Listing::Paginated { results } => results,
            Listing::Plain(items) => items,
        }
    }
}

/// Splits a comma-separated tag string into individual tags.
///
/// Entries are trimmed and empty entries dropped. Duplicates are kept; the
/// server owns deduplication.
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tags are trimmed but not deduplicated.
    #[test]
    fn test_parse_tags_trims_without_dedup() {
        assert_eq!(parse_tags("a, b , a"), vec!["a", "b", "a"]);
    }

    /// Empty entries are dropped.
    #[test]
    fn test_parse_tags_drops_empty_entries() {
        assert_eq!(parse_tags("rust,, ,tui,"), vec!["rust", "tui"]);
        assert!(parse_tags("").is_empty());
        assert!(parse_tags("  , ,").is_empty());
    }

    /// Listing decodes both the bare-array and paginated shapes.
    #[test]
    fn test_listing_accepts_both_shapes() {
        let plain: Listing<u32> = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(plain.into_vec(), vec![1, 2, 3]);

        let paginated: Listing<u32> =
            serde_json::from_str(r#"{"count": 3, "results": [1, 2, 3]}"#).unwrap();
        assert_eq!(paginated.into_vec(), vec![1, 2, 3]);
    }

    /// Articles tolerate a missing author profile and missing tags.
    #[test]
    fn test_article_tolerates_missing_relations() {
        let article: Article = serde_json::from_str(
            r#"{"id": 7, "title": "t", "text": "body", "created_at": "2024-03-01T10:00:00Z"}"#,
        )
        .unwrap();
        assert_eq!(article.author_username(), None);
        assert!(article.tags.is_empty());
    }

    /// The nested author username is reachable when populated.
    #[test]
    fn test_comment_author_username() {
        let comment: Comment = serde_json::from_str(
            r#"{
                "id": 1,
                "text": "hi",
                "author": {"id": 2, "user": {"id": 3, "username": "ada"}},
                "created_at": "2024-03-01T10:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(comment.author_username(), Some("ada"));
    }
}
