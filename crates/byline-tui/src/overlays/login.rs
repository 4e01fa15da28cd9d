//! Login overlay: username/password form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::OverlayUpdate;
use super::render_utils::{calculate_overlay_area, render_overlay_container};
use crate::common::TextField;
use crate::effects::UiEffect;
use crate::state::TuiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

#[derive(Debug)]
pub struct LoginForm {
    pub username: TextField,
    pub password: TextField,
    focus: LoginField,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            username: TextField::new(),
            password: TextField::new(),
            focus: LoginField::Username,
        }
    }
}

impl LoginForm {
    fn focused_field(&mut self) -> &mut TextField {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    fn focus_next(&mut self) {
        self.focus = match self.focus {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }
}

#[derive(Debug)]
pub enum LoginState {
    Editing {
        form: LoginForm,
        error: Option<String>,
    },
    Submitting {
        form: LoginForm,
    },
}

impl LoginState {
    pub fn open() -> Self {
        LoginState::Editing {
            form: LoginForm::default(),
            error: None,
        }
    }

    /// Reopens the form after a failed submit, keeping the username and
    /// showing the server error. The password is cleared.
    pub fn reopen(mut form: LoginForm, error: String) -> Self {
        form.password.clear();
        form.focus = LoginField::Password;
        LoginState::Editing {
            form,
            error: Some(error),
        }
    }

    /// Takes the form out of a submitting state (used by the reducer when the
    /// result arrives).
    pub fn take_form(self) -> Option<LoginForm> {
        match self {
            LoginState::Submitting { form } => Some(form),
            LoginState::Editing { form, .. } => Some(form),
        }
    }

    pub fn handle_key(&mut self, _tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        match self {
            LoginState::Editing { form, error } => match key.code {
                KeyCode::Esc => OverlayUpdate::close(),
                KeyCode::Tab | KeyCode::Down | KeyCode::Up => {
                    form.focus_next();
                    OverlayUpdate::stay()
                }
                KeyCode::Enter => {
                    if form.username.is_empty() || form.password.is_empty() {
                        *error = Some("Username and password are required".to_string());
                        return OverlayUpdate::stay();
                    }
                    let username = form.username.value().to_string();
                    let password = form.password.value().to_string();
                    *self = LoginState::Submitting {
                        form: std::mem::take(form),
                    };
                    OverlayUpdate::stay()
                        .with_effects(vec![UiEffect::SubmitLogin { username, password }])
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
            // No cancellation: the submit either succeeds or reopens the form.
            LoginState::Submitting { .. } => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup = calculate_overlay_area(area, 52, 11);
        let inner = render_overlay_container(frame, popup, "Login", Color::Cyan);

        let lines = match self {
            LoginState::Editing { form, error } => {
                let mut lines = vec![
                    field_line("Username", form.username.value(), form.focus == LoginField::Username, false),
                    Line::from(""),
                    field_line("Password", form.password.value(), form.focus == LoginField::Password, true),
                    Line::from(""),
                ];
                if let Some(error) = error {
                    lines.push(Line::from(Span::styled(
                        error.clone(),
                        Style::default().fg(Color::Red),
                    )));
                } else {
                    lines.push(Line::from(Span::styled(
                        "Welcome back! Sign in to your account.",
                        Style::default().fg(Color::DarkGray),
                    )));
                }
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Enter submits, Tab switches field, Esc cancels",
                    Style::default().fg(Color::DarkGray),
                )));
                lines
            }
            LoginState::Submitting { .. } => vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Signing in...",
                    Style::default().fg(Color::Yellow),
                )),
            ],
        };

        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// One labeled form row; the focused row gets a cursor and accent color.
pub(crate) fn field_line(
    label: &str,
    value: &str,
    focused: bool,
    masked: bool,
) -> Line<'static> {
    let shown = if masked {
        "•".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    let cursor = if focused { "▏" } else { "" };
    let value_style = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    Line::from(vec![
        Span::styled(
            format!("{label:>9}: "),
            Style::default().fg(if focused { Color::Cyan } else { Color::DarkGray }),
        ),
        Span::styled(format!("{shown}{cursor}"), value_style),
    ])
}
