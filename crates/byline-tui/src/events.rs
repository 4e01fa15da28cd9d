//! UI event types.
//!
//! All external inputs (terminal, async request results) are converted to
//! `UiEvent` before being processed by the reducer. Async work follows the
//! inbox pattern: the runtime spawns a request and the result arrives later
//! as one of the `*Result`/`*Loaded` events on the inbox channel.
//!
//! Errors inside results are already user-displayable strings; the reducer
//! only routes them into the status line.

use byline_core::api::{Article, Comment};
use byline_core::session::Session;
use crossterm::event::Event as CrosstermEvent;

/// Unified event enum for the TUI.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick; drives the spinner and render cadence.
    Tick,
    /// Raw terminal input.
    Terminal(CrosstermEvent),

    /// Startup session restore finished (never fails; degrades to anonymous).
    SessionRestored(Session),
    /// Login attempt finished.
    LoginResult(Result<Session, String>),
    /// Registration attempt finished.
    RegisterResult(Result<Session, String>),
    /// Logout was executed (synchronous, cannot fail).
    SessionCleared(Session),

    /// Article list fetch finished; `query` is what the list was filtered by.
    ArticlesLoaded {
        query: Option<String>,
        result: Result<Vec<Article>, String>,
    },
    /// Single article fetch finished.
    ArticleLoaded {
        article_id: u64,
        result: Result<Article, String>,
    },
    /// Comment list fetch finished.
    CommentsLoaded {
        article_id: u64,
        result: Result<Vec<Comment>, String>,
    },
    /// Comment creation finished; success triggers a comment re-fetch.
    CommentPosted {
        article_id: u64,
        result: Result<(), String>,
    },
    /// Comment deletion finished; success triggers a comment re-fetch.
    CommentDeleted {
        article_id: u64,
        result: Result<(), String>,
    },
    /// Article creation finished.
    ArticlePublished(Result<Article, String>),
}
