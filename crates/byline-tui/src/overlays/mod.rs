//! Overlay modules for the TUI.
//!
//! Overlays are modal UI components that temporarily take over keyboard
//! input. Each overlay is self-contained: it owns its state, key handler,
//! and render function.
//!
//! - `login.rs`: username/password login form
//! - `register.rs`: registration form
//! - `compose.rs`: new-article form
//! - `confirm.rs`: comment deletion confirmation
//! - `render_utils.rs`: shared popup container helpers

pub mod compose;
pub mod confirm;
pub mod login;
pub mod register;
pub mod render_utils;

pub use compose::ComposeState;
pub use confirm::ConfirmState;
use crossterm::event::KeyEvent;
pub use login::LoginState;
use ratatui::Frame;
use ratatui::layout::Rect;
pub use register::RegisterState;

use crate::effects::UiEffect;
use crate::state::TuiState;

// ============================================================================
// OverlayTransition / OverlayUpdate
// ============================================================================

/// Transition returned by overlay key handlers.
#[derive(Debug)]
pub enum OverlayTransition {
    Stay,
    Close,
}

/// Update returned by overlay key handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
    pub effects: Vec<UiEffect>,
}

impl OverlayUpdate {
    fn new(transition: OverlayTransition) -> Self {
        Self {
            transition,
            effects: Vec::new(),
        }
    }

    pub fn stay() -> Self {
        Self::new(OverlayTransition::Stay)
    }

    pub fn close() -> Self {
        Self::new(OverlayTransition::Close)
    }

    #[must_use]
    pub fn with_effects(mut self, effects: Vec<UiEffect>) -> Self {
        self.effects = effects;
        self
    }
}

// ============================================================================
// Overlay
// ============================================================================

#[derive(Debug)]
pub enum Overlay {
    Login(LoginState),
    Register(RegisterState),
    Compose(ComposeState),
    Confirm(ConfirmState),
}

impl Overlay {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match self {
            Overlay::Login(o) => o.render(frame, area),
            Overlay::Register(o) => o.render(frame, area),
            Overlay::Compose(o) => o.render(frame, area),
            Overlay::Confirm(o) => o.render(frame, area),
        }
    }

    pub fn handle_key(&mut self, tui: &TuiState, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::Login(o) => o.handle_key(tui, key),
            Overlay::Register(o) => o.handle_key(tui, key),
            Overlay::Compose(o) => o.handle_key(tui, key),
            Overlay::Confirm(o) => o.handle_key(tui, key),
        }
    }
}
