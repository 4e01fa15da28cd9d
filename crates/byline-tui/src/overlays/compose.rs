//! Compose overlay: the new-article form.
//!
//! Only reachable while authenticated (the reducer gates the opening key).

use byline_core::api::{NewArticle, parse_tags};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::OverlayUpdate;
use super::render_utils::{calculate_overlay_area, render_overlay_container};
use crate::common::TextField;
use crate::effects::UiEffect;
use crate::state::TuiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeField {
    Title,
    Body,
    Tags,
}

#[derive(Debug)]
pub struct ComposeForm {
    pub title: TextField,
    pub body: TextField,
    pub tags: TextField,
    focus: ComposeField,
}

impl Default for ComposeForm {
    fn default() -> Self {
        Self {
            title: TextField::new(),
            body: TextField::new(),
            tags: TextField::new(),
            focus: ComposeField::Title,
        }
    }
}

impl ComposeForm {
    fn focused_field(&mut self) -> &mut TextField {
        match self.focus {
            ComposeField::Title => &mut self.title,
            ComposeField::Body => &mut self.body,
            ComposeField::Tags => &mut self.tags,
        }
    }

    fn focus_next(&mut self) {
        self.focus = match self.focus {
            ComposeField::Title => ComposeField::Body,
            ComposeField::Body => ComposeField::Tags,
            ComposeField::Tags => ComposeField::Title,
        };
    }
}

#[derive(Debug)]
pub enum ComposeState {
    Editing {
        form: ComposeForm,
        error: Option<String>,
    },
    Submitting {
        form: ComposeForm,
    },
}

impl ComposeState {
    pub fn open() -> Self {
        ComposeState::Editing {
            form: ComposeForm::default(),
            error: None,
        }
    }

    /// Reopens the form after a failed submit with the server error shown;
    /// the draft is kept.
    pub fn reopen(form: ComposeForm, error: String) -> Self {
        ComposeState::Editing {
            form,
            error: Some(error),
        }
    }

    pub fn take_form(self) -> Option<ComposeForm> {
        match self {
            ComposeState::Submitting { form } => Some(form),
            ComposeState::Editing { form, .. } => Some(form),
        }
    }

    pub fn handle_key(&mut self, _tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        match self {
            ComposeState::Editing { form, error } => match key.code {
                KeyCode::Esc => OverlayUpdate::close(),
                KeyCode::Tab => {
                    form.focus_next();
                    OverlayUpdate::stay()
                }
                // Ctrl+S publishes; Enter inside the body inserts a newline.
                KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    if form.title.is_empty() || form.body.is_empty() {
                        *error = Some("Title and content are required".to_string());
                        return OverlayUpdate::stay();
                    }
                    let article = NewArticle {
                        title: form.title.value().to_string(),
                        text: form.body.value().to_string(),
                        tags: parse_tags(form.tags.value()),
                    };
                    *self = ComposeState::Submitting {
                        form: std::mem::take(form),
                    };
                    OverlayUpdate::stay().with_effects(vec![UiEffect::PublishArticle(article)])
                }
                KeyCode::Enter => {
                    match form.focus {
                        ComposeField::Body => form.body.insert('\n'),
                        _ => form.focus_next(),
                    }
                    OverlayUpdate::stay()
                }
                KeyCode::Backspace => {
                    form.focused_field().backspace();
                    OverlayUpdate::stay()
                }
                KeyCode::Left => {
                    form.focused_field().move_left();
                    OverlayUpdate::stay()
                }
                KeyCode::Right => {
                    form.focused_field().move_right();
                    OverlayUpdate::stay()
                }
                KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    form.focused_field().insert(ch);
                    OverlayUpdate::stay()
                }
                _ => OverlayUpdate::stay(),
            },
            ComposeState::Submitting { .. } => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup = calculate_overlay_area(area, area.width.saturating_sub(8).min(90), 18);
        let inner = render_overlay_container(frame, popup, "New Article", Color::Cyan);

        let lines = match self {
            ComposeState::Editing { form, error } => {
                let focus_marker = |field: ComposeField| {
                    if form.focus == field {
                        Style::default().fg(Color::Cyan)
                    } else {
                        Style::default().fg(Color::DarkGray)
                    }
                };

                let mut lines = vec![
                    Line::from(vec![
                        Span::styled("Title: ", focus_marker(ComposeField::Title)),
                        Span::raw(format!(
                            "{}{}",
                            form.title.value(),
                            if form.focus == ComposeField::Title { "▏" } else { "" }
                        )),
                    ]),
                    Line::from(Span::styled(
                        "Content:",
                        focus_marker(ComposeField::Body),
                    )),
                ];

                let body = form.body.value();
                if body.is_empty() && form.focus != ComposeField::Body {
                    lines.push(Line::from(Span::styled(
                        "  (write your article here)",
                        Style::default().fg(Color::DarkGray),
                    )));
                } else {
                    for (idx, text_line) in body.lines().enumerate() {
                        let cursor = if form.focus == ComposeField::Body
                            && idx + 1 == body.lines().count()
                        {
                            "▏"
                        } else {
                            ""
                        };
                        lines.push(Line::from(format!("  {text_line}{cursor}")));
                    }
                    if body.is_empty() {
                        lines.push(Line::from("  ▏"));
                    }
                }

                lines.push(Line::from(vec![
                    Span::styled("Tags:  ", focus_marker(ComposeField::Tags)),
                    Span::raw(format!(
                        "{}{}",
                        form.tags.value(),
                        if form.focus == ComposeField::Tags { "▏" } else { "" }
                    )),
                    Span::styled("  (comma-separated)", Style::default().fg(Color::DarkGray)),
                ]));
                lines.push(Line::from(""));
                if let Some(error) = error {
                    lines.push(Line::from(Span::styled(
                        error.clone(),
                        Style::default().fg(Color::Red),
                    )));
                }
                lines.push(Line::from(Span::styled(
                    "Ctrl+S publishes, Tab switches field, Esc cancels",
                    Style::default().fg(Color::DarkGray),
                )));
                lines
            }
            ComposeState::Submitting { .. } => vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Publishing...",
                    Style::default().fg(Color::Yellow),
                )),
            ],
        };

        let para = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(para, inner);
    }
}
