//! Registration overlay: username/email/password form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::OverlayUpdate;
use super::login::field_line;
use super::render_utils::{calculate_overlay_area, render_overlay_container};
use crate::common::TextField;
use crate::effects::UiEffect;
use crate::state::TuiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterField {
    Username,
    Email,
    Password,
}

#[derive(Debug)]
pub struct RegisterForm {
    pub username: TextField,
    pub email: TextField,
    pub password: TextField,
    focus: RegisterField,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            username: TextField::new(),
            email: TextField::new(),
            password: TextField::new(),
            focus: RegisterField::Username,
        }
    }
}

impl RegisterForm {
    fn focused_field(&mut self) -> &mut TextField {
        match self.focus {
            RegisterField::Username => &mut self.username,
            RegisterField::Email => &mut self.email,
            RegisterField::Password => &mut self.password,
        }
    }

    fn focus_next(&mut self) {
        self.focus = match self.focus {
            RegisterField::Username => RegisterField::Email,
            RegisterField::Email => RegisterField::Password,
            RegisterField::Password => RegisterField::Username,
        };
    }

    fn focus_prev(&mut self) {
        self.focus = match self.focus {
            RegisterField::Username => RegisterField::Password,
            RegisterField::Email => RegisterField::Username,
            RegisterField::Password => RegisterField::Email,
        };
    }
}

#[derive(Debug)]
pub enum RegisterState {
    Editing {
        form: RegisterForm,
        error: Option<String>,
    },
    Submitting {
        form: RegisterForm,
    },
}

impl RegisterState {
    pub fn open() -> Self {
        RegisterState::Editing {
            form: RegisterForm::default(),
            error: None,
        }
    }

    /// Reopens the form after a failed submit with the server error shown.
    /// The password is cleared.
    pub fn reopen(mut form: RegisterForm, error: String) -> Self {
        form.password.clear();
        form.focus = RegisterField::Password;
        RegisterState::Editing {
            form,
            error: Some(error),
        }
    }

    pub fn take_form(self) -> Option<RegisterForm> {
        match self {
            RegisterState::Submitting { form } => Some(form),
            RegisterState::Editing { form, .. } => Some(form),
        }
    }

    pub fn handle_key(&mut self, _tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        match self {
            RegisterState::Editing { form, error } => match key.code {
                KeyCode::Esc => OverlayUpdate::close(),
                KeyCode::Tab | KeyCode::Down => {
                    form.focus_next();
                    OverlayUpdate::stay()
                }
                KeyCode::BackTab | KeyCode::Up => {
                    form.focus_prev();
                    OverlayUpdate::stay()
                }
                KeyCode::Enter => {
                    if form.username.is_empty() || form.email.is_empty() || form.password.is_empty()
                    {
                        *error = Some("All fields are required".to_string());
                        return OverlayUpdate::stay();
                    }
                    let username = form.username.value().to_string();
                    let email = form.email.value().to_string();
                    let password = form.password.value().to_string();
                    *self = RegisterState::Submitting {
                        form: std::mem::take(form),
                    };
                    OverlayUpdate::stay().with_effects(vec![UiEffect::SubmitRegister {
                        username,
                        email,
                        password,
                    }])
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
            RegisterState::Submitting { .. } => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup = calculate_overlay_area(area, 56, 13);
        let inner = render_overlay_container(frame, popup, "Register", Color::Cyan);

        let lines = match self {
            RegisterState::Editing { form, error } => {
                let mut lines = vec![
                    field_line(
                        "Username",
                        form.username.value(),
                        form.focus == RegisterField::Username,
                        false,
                    ),
                    Line::from(""),
                    field_line(
                        "Email",
                        form.email.value(),
                        form.focus == RegisterField::Email,
                        false,
                    ),
                    Line::from(""),
                    field_line(
                        "Password",
                        form.password.value(),
                        form.focus == RegisterField::Password,
                        true,
                    ),
                    Line::from(""),
                ];
                match error {
                    Some(error) => lines.push(Line::from(Span::styled(
                        error.clone(),
                        Style::default().fg(Color::Red),
                    ))),
                    None => lines.push(Line::from(Span::styled(
                        "8+ characters with upper, lower and a digit.",
                        Style::default().fg(Color::DarkGray),
                    ))),
                }
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    "Enter submits, Tab switches field, Esc cancels",
                    Style::default().fg(Color::DarkGray),
                )));
                lines
            }
            RegisterState::Submitting { .. } => vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Creating account...",
                    Style::default().fg(Color::Yellow),
                )),
            ],
        };

        frame.render_widget(Paragraph::new(lines), inner);
    }
}
