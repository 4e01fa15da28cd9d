//! TUI runtime - owns the terminal, runs the event loop, executes effects.
//!
//! The reducer stays pure and produces effects; this module executes them.
//!
//! ## Inbox Pattern
//!
//! Async work follows an "inbox" pattern: each network effect is spawned as a
//! tokio task holding a clone of the inbox sender, and its result arrives as
//! a `UiEvent` that the loop drains each frame. There is no cancellation or
//! timeout; overlapping results resolve in arrival order.

use std::io::Stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use byline_core::api::ApiClient;
use byline_core::session::{self, SessionStore};
use crossterm::event;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Tick interval while requests are in flight (drives the spinner).
const FRAME_DURATION: Duration = Duration::from_millis(100);

/// Tick interval when nothing is happening. Longer timeout reduces CPU usage.
const IDLE_POLL_DURATION: Duration = Duration::from_millis(250);

/// Full-screen TUI runtime.
///
/// Owns the terminal, the state, and the shared API client. Terminal state is
/// restored when `run` returns and on panic.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    client: Arc<ApiClient>,
    store: SessionStore,
    inbox_tx: mpsc::UnboundedSender<UiEvent>,
    inbox_rx: mpsc::UnboundedReceiver<UiEvent>,
    last_tick: Instant,
}

impl TuiRuntime {
    /// Creates a new TUI runtime and takes over the terminal.
    pub fn new(client: Arc<ApiClient>, store: SessionStore) -> Result<Self> {
        // Set up the panic hook BEFORE entering the alternate screen.
        terminal::install_panic_hook();
        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state: AppState::new(),
            client,
            store,
            inbox_tx,
            inbox_rx,
            last_tick: Instant::now(),
        })
    }

    /// Runs the main event loop until quit. Restores the terminal afterwards.
    pub fn run(&mut self) -> Result<()> {
        let effects = update::startup(&mut self.state);
        self.execute_effects(effects);

        let result = self.event_loop();
        let _ = terminal::restore_terminal();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true; // Start dirty to ensure initial render

        while !self.state.tui.should_quit {
            let events = self.collect_events()?;

            for event in events {
                let effects = update::update(&mut self.state, event);
                dirty = true;
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    // ========================================================================
    // Event Collection
    // ========================================================================

    /// Collects events from the inbox and the terminal, plus the cadence tick.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        // Drain inbox - all async results arrive here.
        while let Ok(event) = self.inbox_rx.try_recv() {
            events.push(event);
        }

        // Fast ticks while work is in flight keep the spinner moving; slow
        // polling otherwise saves CPU.
        let tick_interval = if self.state.tui.tasks.is_any_running() || self.state.tui.restoring {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        let timeout = tick_interval.saturating_sub(self.last_tick.elapsed());
        if event::poll(timeout)? {
            events.push(UiEvent::Terminal(event::read()?));
            // Drain any burst of pending input without blocking.
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    // ========================================================================
    // Effect Execution
    // ========================================================================

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        tracing::debug!(?effect, "executing effect");
        let client = Arc::clone(&self.client);
        let store = self.store.clone();
        let tx = self.inbox_tx.clone();

        match effect {
            UiEffect::RestoreSession => {
                tokio::spawn(async move {
                    let restored = session::restore(&client, &store).await;
                    let _ = tx.send(UiEvent::SessionRestored(restored));
                });
            }
            UiEffect::SubmitLogin { username, password } => {
                tokio::spawn(async move {
                    let result = session::login(&client, &store, &username, &password)
                        .await
                        .map_err(user_message);
                    let _ = tx.send(UiEvent::LoginResult(result));
                });
            }
            UiEffect::SubmitRegister {
                username,
                email,
                password,
            } => {
                tokio::spawn(async move {
                    let result = session::register(&client, &store, &username, &email, &password)
                        .await
                        .map_err(user_message);
                    let _ = tx.send(UiEvent::RegisterResult(result));
                });
            }
            // Synchronous by contract: no network call, cannot fail.
            UiEffect::Logout => {
                let cleared = session::logout(&self.client, &self.store);
                let _ = tx.send(UiEvent::SessionCleared(cleared));
            }
            UiEffect::FetchArticles { query } => {
                tokio::spawn(async move {
                    let result = client
                        .list_articles(query.as_deref())
                        .await
                        .map_err(user_message);
                    let _ = tx.send(UiEvent::ArticlesLoaded { query, result });
                });
            }
            UiEffect::FetchArticle { article_id } => {
                tokio::spawn(async move {
                    let result = client.article(article_id).await.map_err(user_message);
                    let _ = tx.send(UiEvent::ArticleLoaded { article_id, result });
                });
            }
            UiEffect::FetchComments { article_id } => {
                tokio::spawn(async move {
                    let result = client.comments(article_id).await.map_err(user_message);
                    let _ = tx.send(UiEvent::CommentsLoaded { article_id, result });
                });
            }
            UiEffect::PostComment { article_id, text } => {
                tokio::spawn(async move {
                    let result = client
                        .create_comment(article_id, &text)
                        .await
                        .map(|_| ())
                        .map_err(user_message);
                    let _ = tx.send(UiEvent::CommentPosted { article_id, result });
                });
            }
            UiEffect::DeleteComment {
                comment_id,
                article_id,
            } => {
                tokio::spawn(async move {
                    let result = client.delete_comment(comment_id).await.map_err(user_message);
                    let _ = tx.send(UiEvent::CommentDeleted { article_id, result });
                });
            }
            UiEffect::PublishArticle(article) => {
                tokio::spawn(async move {
                    let result = client.create_article(&article).await.map_err(user_message);
                    let _ = tx.send(UiEvent::ArticlePublished(result));
                });
            }
        }
    }
}

/// Flattens an error chain into the string shown in the status line.
fn user_message(e: anyhow::Error) -> String {
    format!("{e:#}")
}
