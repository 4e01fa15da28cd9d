//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! They represent I/O only; the reducer never performs network or filesystem
//! work itself. Every network effect eventually produces a matching
//! `UiEvent` on the inbox.

use byline_core::api::NewArticle;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Restore the persisted session (startup).
    RestoreSession,
    /// Exchange credentials for tokens and persist them.
    SubmitLogin { username: String, password: String },
    /// Register an account and persist the issued tokens.
    SubmitRegister {
        username: String,
        email: String,
        password: String,
    },
    /// Clear persisted tokens and the client token. Executed synchronously;
    /// cannot fail.
    Logout,

    /// Fetch the article list, optionally filtered.
    FetchArticles { query: Option<String> },
    /// Fetch one article.
    FetchArticle { article_id: u64 },
    /// Fetch the comments of an article.
    FetchComments { article_id: u64 },
    /// Post a comment.
    PostComment { article_id: u64, text: String },
    /// Delete a comment.
    DeleteComment { comment_id: u64, article_id: u64 },
    /// Create an article.
    PublishArticle(NewArticle),
}
