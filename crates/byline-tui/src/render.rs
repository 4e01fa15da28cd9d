//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a ratatui
//! frame, and never mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::common::TaskKind;
use crate::features::articles::render_articles;
use crate::features::navbar::render_navbar;
use crate::features::reader::render_reader;
use crate::state::{AppState, NoticeKind, TuiState, View};

/// Height of the navigation bar.
const NAVBAR_HEIGHT: u16 = 1;

/// Height of the status line below the content.
const STATUS_HEIGHT: u16 = 1;

/// Spinner frames for the status line animation.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let state = &app.tui;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAVBAR_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);

    render_navbar(frame, chunks[0], &state.view, &state.session);
    render_content(state, frame, chunks[1]);
    render_status_line(state, frame, chunks[2]);

    // Overlay last, so it appears on top.
    if let Some(overlay) = &app.overlay {
        overlay.render(frame, area);
    }
}

fn render_content(state: &TuiState, frame: &mut Frame, area: Rect) {
    match state.view {
        View::Home => render_articles(
            frame,
            area,
            &state.articles,
            true,
            state.tasks.is_running(TaskKind::ArticleList),
        ),
        View::Articles => render_articles(
            frame,
            area,
            &state.articles,
            false,
            state.tasks.is_running(TaskKind::ArticleList),
        ),
        View::Reader { .. } => render_reader(
            frame,
            area,
            &state.reader,
            &state.session,
            state.tasks.is_running(TaskKind::ArticleFetch),
        ),
    }
}

/// Renders the status line: notices win, then in-flight request activity,
/// then per-view key hints.
fn render_status_line(state: &TuiState, frame: &mut Frame, area: Rect) {
    let spinner = SPINNER_FRAMES[state.spinner_frame % SPINNER_FRAMES.len()];

    let spans: Vec<Span> = if let Some(notice) = &state.notice {
        let color = match notice.kind {
            NoticeKind::Info => Color::Green,
            NoticeKind::Error => Color::Red,
        };
        vec![Span::styled(
            notice.text.clone(),
            Style::default().fg(color),
        )]
    } else if let Some(activity) = activity_label(state) {
        vec![
            Span::styled(spinner, Style::default().fg(Color::Yellow)),
            Span::raw(" "),
            Span::styled(activity, Style::default().fg(Color::Yellow)),
        ]
    } else {
        hint_spans(state)
    };

    let status = Paragraph::new(Line::from(spans)).alignment(Alignment::Left);
    frame.render_widget(status, area);
}

fn activity_label(state: &TuiState) -> Option<&'static str> {
    if state.restoring {
        return Some("Restoring session...");
    }
    let labels = [
        (TaskKind::Login, "Signing in..."),
        (TaskKind::Register, "Creating account..."),
        (TaskKind::Publish, "Publishing article..."),
        (TaskKind::CommentPost, "Sending comment..."),
        (TaskKind::CommentDelete, "Deleting comment..."),
        (TaskKind::ArticleList, "Loading articles..."),
        (TaskKind::ArticleFetch, "Loading article..."),
        (TaskKind::CommentList, "Loading comments..."),
    ];
    labels
        .into_iter()
        .find(|(kind, _)| state.tasks.is_running(*kind))
        .map(|(_, label)| label)
}

fn hint_spans(state: &TuiState) -> Vec<Span<'static>> {
    let hint = match state.view {
        View::Home | View::Articles => {
            if state.articles.searching {
                "Enter searches  Esc cancels"
            } else {
                "j/k select  Enter open  / search  q quit"
            }
        }
        View::Reader { .. } => {
            if state.reader.commenting {
                "Enter sends  Esc cancels"
            } else {
                "j/k comments  ↑/↓ scroll  c comment  d delete  Esc back"
            }
        }
    };
    vec![Span::styled(hint, Style::default().fg(Color::DarkGray))]
}
