//! Article reader feature: one article with its comments.

mod render;

pub use render::render_reader;

use byline_core::api::{Article, Comment};

use crate::common::TextField;

/// State for the reader view.
#[derive(Debug, Default)]
pub struct ReaderState {
    pub article_id: Option<u64>,
    pub article: Option<Article>,
    pub comments: Vec<Comment>,
    pub selected_comment: usize,
    /// Vertical scroll offset of the article body.
    pub scroll: u16,
    /// Inline comment input; focused while `commenting` is set.
    pub comment_input: TextField,
    pub commenting: bool,
}

impl ReaderState {
    /// Resets the reader for a freshly opened article.
    pub fn open(&mut self, article_id: u64) {
        *self = Self {
            article_id: Some(article_id),
            ..Self::default()
        };
    }

    /// Shows an already-fetched article (e.g. one just created).
    pub fn open_with(&mut self, article: Article) {
        self.open(article.id);
        self.article = Some(article);
    }

    pub fn set_comments(&mut self, comments: Vec<Comment>) {
        self.comments = comments;
        if self.selected_comment >= self.comments.len() {
            self.selected_comment = self.comments.len().saturating_sub(1);
        }
    }

    pub fn select_next_comment(&mut self) {
        if !self.comments.is_empty() && self.selected_comment + 1 < self.comments.len() {
            self.selected_comment += 1;
        }
    }

    pub fn select_prev_comment(&mut self) {
        self.selected_comment = self.selected_comment.saturating_sub(1);
    }

    pub fn selected_comment(&self) -> Option<&Comment> {
        self.comments.get(self.selected_comment)
    }

    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}
