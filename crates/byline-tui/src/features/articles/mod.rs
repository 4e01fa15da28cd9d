//! Article list feature: state for the home and all-articles views.

mod render;

pub use render::render_articles;

use byline_core::api::Article;

use crate::common::TextField;

/// Number of articles shown on the home view.
pub const HOME_PREVIEW: usize = 3;

/// State backing both list views (home shows a capped slice of it).
#[derive(Debug, Default)]
pub struct ArticleListState {
    pub articles: Vec<Article>,
    /// Selected row within the visible slice.
    pub selected: usize,
    /// The query the current list was fetched with, if any.
    pub query: Option<String>,
    /// Search input; focused while `searching` is set.
    pub search: TextField,
    pub searching: bool,
    /// Whether a list response has arrived at least once.
    pub loaded: bool,
}

impl ArticleListState {
    /// Replaces the list contents after a fetch.
    pub fn set_articles(&mut self, articles: Vec<Article>, query: Option<String>) {
        self.articles = articles;
        self.query = query;
        self.loaded = true;
        self.selected = 0;
    }

    /// Number of rows visible given the home-view cap.
    pub fn visible_len(&self, capped: bool) -> usize {
        if capped {
            self.articles.len().min(HOME_PREVIEW)
        } else {
            self.articles.len()
        }
    }

    pub fn select_next(&mut self, capped: bool) {
        let len = self.visible_len(capped);
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Clamps the selection after the list changed size.
    pub fn clamp_selection(&mut self, capped: bool) {
        let len = self.visible_len(capped);
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    pub fn selected_article(&self, capped: bool) -> Option<&Article> {
        if self.selected < self.visible_len(capped) {
            self.articles.get(self.selected)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn article(id: u64) -> Article {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("article {id}"),
            "text": "text",
            "created_at": chrono::Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap().to_rfc3339(),
        }))
        .unwrap()
    }

    /// Home view selection is capped to the preview slice.
    #[test]
    fn test_selection_capped_on_home() {
        let mut state = ArticleListState::default();
        state.set_articles((1..=5).map(article).collect(), None);

        for _ in 0..10 {
            state.select_next(true);
        }
        assert_eq!(state.selected, HOME_PREVIEW - 1);

        for _ in 0..10 {
            state.select_next(false);
        }
        assert_eq!(state.selected, 4);
    }

    /// Selection clamps when a shorter list arrives.
    #[test]
    fn test_clamp_after_refetch() {
        let mut state = ArticleListState::default();
        state.set_articles((1..=5).map(article).collect(), None);
        for _ in 0..4 {
            state.select_next(false);
        }
        assert_eq!(state.selected, 4);

        state.articles.truncate(2);
        state.clamp_selection(false);
        assert_eq!(state.selected, 1);

        state.articles.clear();
        state.clamp_selection(false);
        assert_eq!(state.selected, 0);
        assert!(state.selected_article(false).is_none());
    }
}
