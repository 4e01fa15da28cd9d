//! Application state composition.
//!
//! Top-level state hierarchy for the TUI:
//! - `AppState` - combined state (`TuiState` + overlay)
//! - `TuiState` - non-overlay UI state (view, session, lists, tasks)
//!
//! State is split between `TuiState` and `Option<Overlay>` so overlay key
//! handlers can borrow the overlay mutably and the rest of the state
//! immutably at the same time.

use byline_core::session::Session;

use crate::common::Tasks;
use crate::features::articles::ArticleListState;
use crate::features::reader::ReaderState;
use crate::overlays::Overlay;

/// Which main view is on screen. The session-gated navigation and the modal
/// overlays sit on top of this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Latest articles plus search.
    Home,
    /// Full article list plus search.
    Articles,
    /// One article with its comments.
    Reader { article_id: u64 },
}

/// Kind of a transient status-line message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// Transient message shown in the status line until the next keypress.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            tui: TuiState::new(),
            overlay: None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// TUI application state (non-overlay).
pub struct TuiState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Current main view.
    pub view: View,
    /// Current session identity. Starts anonymous until restore completes.
    pub session: Session,
    /// Whether the startup session restore is still in flight.
    pub restoring: bool,
    /// Article list state (backs the home and articles views).
    pub articles: ArticleListState,
    /// Reader state (article + comments).
    pub reader: ReaderState,
    /// In-flight request flags.
    pub tasks: Tasks,
    /// Transient status message, cleared on the next keypress.
    pub notice: Option<Notice>,
    /// Spinner animation frame counter.
    pub spinner_frame: usize,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            view: View::Home,
            session: Session::anonymous(),
            restoring: false,
            articles: ArticleListState::default(),
            reader: ReaderState::default(),
            tasks: Tasks::default(),
            notice: None,
            spinner_frame: 0,
        }
    }

    /// Whether the current view caps the list to the home preview.
    pub fn home_capped(&self) -> bool {
        matches!(self.view, View::Home)
    }
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}
