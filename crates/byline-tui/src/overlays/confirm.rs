//! Confirmation overlay for comment deletion.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::OverlayUpdate;
use super::render_utils::{calculate_overlay_area, render_overlay_container};
use crate::effects::UiEffect;
use crate::state::TuiState;

#[derive(Debug)]
pub struct ConfirmState {
    comment_id: u64,
    article_id: u64,
}

impl ConfirmState {
    pub fn delete_comment(comment_id: u64, article_id: u64) -> Self {
        Self {
            comment_id,
            article_id,
        }
    }

    pub fn handle_key(&mut self, _tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                OverlayUpdate::close().with_effects(vec![UiEffect::DeleteComment {
                    comment_id: self.comment_id,
                    article_id: self.article_id,
                }])
            }
            KeyCode::Char('n') | KeyCode::Esc => OverlayUpdate::close(),
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup = calculate_overlay_area(area, 48, 6);
        let inner = render_overlay_container(frame, popup, "Delete Comment", Color::Red);

        let lines = vec![
            Line::from("Are you sure you want to delete this comment?"),
            Line::from(""),
            Line::from(vec![
                Span::styled("y", Style::default().fg(Color::Red)),
                Span::raw(" delete    "),
                Span::styled("n", Style::default().fg(Color::DarkGray)),
                Span::raw(" keep"),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}
