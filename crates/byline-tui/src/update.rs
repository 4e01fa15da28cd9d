//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects; results come back as further events.
//! This is the single source of truth for how events modify state.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::common::TaskKind;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::overlays::{ComposeState, ConfirmState, LoginState, Overlay, OverlayTransition, RegisterState};
use crate::state::{AppState, Notice, TuiState, View};

/// Produces the effects that kick off a fresh session: restore the persisted
/// session and load the article list. Called once by the runtime.
pub fn startup(app: &mut AppState) -> Vec<UiEffect> {
    app.tui.restoring = true;
    let effects = vec![
        UiEffect::RestoreSession,
        UiEffect::FetchArticles { query: None },
    ];
    register_tasks(&mut app.tui, &effects);
    effects
}

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    let effects = match event {
        UiEvent::Tick => {
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(Event::Key(key)) => {
            if key.kind == KeyEventKind::Release {
                vec![]
            } else {
                // Any keypress dismisses the current status message.
                app.tui.notice = None;
                if app.overlay.is_some() {
                    handle_overlay_key(app, key)
                } else {
                    handle_view_key(app, key)
                }
            }
        }
        UiEvent::Terminal(_) => vec![],

        UiEvent::SessionRestored(session) => {
            app.tui.tasks.finish(TaskKind::Restore);
            app.tui.restoring = false;
            app.tui.session = session;
            vec![]
        }
        UiEvent::LoginResult(result) => handle_login_result(app, result),
        UiEvent::RegisterResult(result) => handle_register_result(app, result),
        UiEvent::SessionCleared(session) => {
            app.tui.session = session;
            app.tui.notice = Some(Notice::info("Logged out"));
            go_to_list(&mut app.tui, View::Home)
        }

        UiEvent::ArticlesLoaded { query, result } => {
            app.tui.tasks.finish(TaskKind::ArticleList);
            match result {
                Ok(articles) => app.tui.articles.set_articles(articles, query),
                // Failures leave the list in its prior state.
                Err(msg) => app.tui.notice = Some(Notice::error(msg)),
            }
            vec![]
        }
        UiEvent::ArticleLoaded { article_id, result } => {
            app.tui.tasks.finish(TaskKind::ArticleFetch);
            if app.tui.reader.article_id == Some(article_id) {
                match result {
                    Ok(article) => app.tui.reader.article = Some(article),
                    Err(msg) => app.tui.notice = Some(Notice::error(msg)),
                }
            }
            vec![]
        }
        UiEvent::CommentsLoaded { article_id, result } => {
            app.tui.tasks.finish(TaskKind::CommentList);
            if app.tui.reader.article_id == Some(article_id) {
                match result {
                    Ok(comments) => app.tui.reader.set_comments(comments),
                    Err(msg) => app.tui.notice = Some(Notice::error(msg)),
                }
            }
            vec![]
        }
        UiEvent::CommentPosted { article_id, result } => {
            app.tui.tasks.finish(TaskKind::CommentPost);
            match result {
                Ok(()) => {
                    app.tui.reader.comment_input.clear();
                    app.tui.reader.commenting = false;
                    app.tui.notice = Some(Notice::info("Comment added"));
                    vec![UiEffect::FetchComments { article_id }]
                }
                Err(msg) => {
                    app.tui.notice = Some(Notice::error(format!("Error adding comment: {msg}")));
                    vec![]
                }
            }
        }
        UiEvent::CommentDeleted { article_id, result } => {
            app.tui.tasks.finish(TaskKind::CommentDelete);
            match result {
                Ok(()) => {
                    app.tui.notice = Some(Notice::info("Comment deleted"));
                    vec![UiEffect::FetchComments { article_id }]
                }
                Err(msg) => {
                    app.tui.notice = Some(Notice::error(format!("Error deleting comment: {msg}")));
                    vec![]
                }
            }
        }
        UiEvent::ArticlePublished(result) => handle_publish_result(app, result),
    };

    register_tasks(&mut app.tui, &effects);
    effects
}

// ============================================================================
// Key handling
// ============================================================================

fn handle_overlay_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let Some(overlay) = app.overlay.as_mut() else {
        return vec![];
    };

    let update = overlay.handle_key(&app.tui, key);
    if let OverlayTransition::Close = update.transition {
        app.overlay = None;
    }
    update.effects
}

fn handle_view_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.tui.should_quit = true;
        return vec![];
    }

    match app.tui.view {
        View::Home | View::Articles => handle_list_key(app, key),
        View::Reader { article_id } => handle_reader_key(app, key, article_id),
    }
}

fn handle_list_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let tui = &mut app.tui;
    let capped = tui.home_capped();

    if tui.articles.searching {
        match key.code {
            KeyCode::Esc => {
                tui.articles.searching = false;
                tui.articles.search.clear();
                if tui.articles.query.is_some() {
                    return vec![UiEffect::FetchArticles { query: None }];
                }
            }
            KeyCode::Enter => {
                tui.articles.searching = false;
                let raw = tui.articles.search.value().trim().to_string();
                let query = (!raw.is_empty()).then_some(raw);
                return vec![UiEffect::FetchArticles { query }];
            }
            KeyCode::Backspace => tui.articles.search.backspace(),
            KeyCode::Left => tui.articles.search.move_left(),
            KeyCode::Right => tui.articles.search.move_right(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                tui.articles.search.insert(ch);
            }
            _ => {}
        }
        return vec![];
    }

    match key.code {
        KeyCode::Char('q') => {
            tui.should_quit = true;
            vec![]
        }
        KeyCode::Char('/') => {
            tui.articles.searching = true;
            vec![]
        }
        KeyCode::Char('h') => go_to_list(tui, View::Home),
        KeyCode::Char('a') => go_to_list(tui, View::Articles),
        KeyCode::Char('j') | KeyCode::Down => {
            tui.articles.select_next(capped);
            vec![]
        }
        KeyCode::Char('k') | KeyCode::Up => {
            tui.articles.select_prev();
            vec![]
        }
        KeyCode::Enter | KeyCode::Char('o') => {
            match tui.articles.selected_article(capped).map(|article| article.id) {
                Some(article_id) => open_reader(tui, article_id),
                None => vec![],
            }
        }
        KeyCode::Char('n') => {
            open_compose(app);
            vec![]
        }
        KeyCode::Char('l') => {
            open_login(app);
            vec![]
        }
        KeyCode::Char('r') => {
            open_register(app);
            vec![]
        }
        KeyCode::Char('x') => logout_effects(&app.tui),
        _ => vec![],
    }
}

fn handle_reader_key(app: &mut AppState, key: KeyEvent, article_id: u64) -> Vec<UiEffect> {
    let tui = &mut app.tui;

    if tui.reader.commenting {
        match key.code {
            KeyCode::Esc => {
                tui.reader.commenting = false;
            }
            KeyCode::Enter => {
                if tui.tasks.is_running(TaskKind::CommentPost) {
                    return vec![];
                }
                let text = tui.reader.comment_input.value().trim().to_string();
                if text.is_empty() {
                    tui.notice = Some(Notice::error("Comment text is required"));
                    return vec![];
                }
                return vec![UiEffect::PostComment { article_id, text }];
            }
            KeyCode::Backspace => tui.reader.comment_input.backspace(),
            KeyCode::Left => tui.reader.comment_input.move_left(),
            KeyCode::Right => tui.reader.comment_input.move_right(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                tui.reader.comment_input.insert(ch);
            }
            _ => {}
        }
        return vec![];
    }

    match key.code {
        KeyCode::Char('q') => {
            tui.should_quit = true;
            vec![]
        }
        KeyCode::Esc | KeyCode::Char('a') => go_to_list(tui, View::Articles),
        KeyCode::Char('h') => go_to_list(tui, View::Home),
        KeyCode::Down => {
            tui.reader.scroll_down();
            vec![]
        }
        KeyCode::Up => {
            tui.reader.scroll_up();
            vec![]
        }
        KeyCode::Char('j') => {
            tui.reader.select_next_comment();
            vec![]
        }
        KeyCode::Char('k') => {
            tui.reader.select_prev_comment();
            vec![]
        }
        KeyCode::Char('c') => {
            if tui.session.is_authenticated() {
                if tui.reader.article.is_some() {
                    tui.reader.commenting = true;
                }
            } else {
                tui.notice = Some(Notice::error("Please login to add comments"));
            }
            vec![]
        }
        KeyCode::Char('d') => {
            request_comment_deletion(app, article_id);
            vec![]
        }
        KeyCode::Char('n') => {
            open_compose(app);
            vec![]
        }
        KeyCode::Char('l') => {
            open_login(app);
            vec![]
        }
        KeyCode::Char('x') => logout_effects(&app.tui),
        _ => vec![],
    }
}

// ============================================================================
// Navigation and gating
// ============================================================================

/// Switches to a list view and re-fetches the unfiltered list, mirroring the
/// fetch-on-mount behavior of each page.
fn go_to_list(tui: &mut TuiState, view: View) -> Vec<UiEffect> {
    tui.view = view;
    tui.articles.searching = false;
    tui.articles.search.clear();
    tui.articles.clamp_selection(tui.home_capped());
    vec![UiEffect::FetchArticles { query: None }]
}

fn open_reader(tui: &mut TuiState, article_id: u64) -> Vec<UiEffect> {
    tui.view = View::Reader { article_id };
    tui.reader.open(article_id);
    vec![
        UiEffect::FetchArticle { article_id },
        UiEffect::FetchComments { article_id },
    ]
}

/// The compose view is gated on an authenticated session.
fn open_compose(app: &mut AppState) {
    if app.tui.session.is_authenticated() {
        app.overlay = Some(Overlay::Compose(ComposeState::open()));
    } else {
        app.tui.notice = Some(Notice::error("Log in to publish articles"));
    }
}

fn open_login(app: &mut AppState) {
    if app.tui.session.is_authenticated() {
        let username = app.tui.session.username().unwrap_or_default().to_string();
        app.tui.notice = Some(Notice::info(format!("Already logged in as {username}")));
    } else {
        app.overlay = Some(Overlay::Login(LoginState::open()));
    }
}

fn open_register(app: &mut AppState) {
    if !app.tui.session.is_authenticated() {
        app.overlay = Some(Overlay::Register(RegisterState::open()));
    }
}

fn logout_effects(tui: &TuiState) -> Vec<UiEffect> {
    if tui.session.is_authenticated() {
        vec![UiEffect::Logout]
    } else {
        vec![]
    }
}

/// Deletion is only offered on the session user's own comments, behind a
/// confirmation prompt.
fn request_comment_deletion(app: &mut AppState, article_id: u64) {
    let Some(comment) = app.tui.reader.selected_comment() else {
        return;
    };

    if !app.tui.session.is_authenticated() {
        app.tui.notice = Some(Notice::error("Please login to manage comments"));
        return;
    }

    let own = comment
        .author_username()
        .is_some_and(|name| app.tui.session.is_user(name));
    if own {
        app.overlay = Some(Overlay::Confirm(ConfirmState::delete_comment(
            comment.id, article_id,
        )));
    } else {
        app.tui.notice = Some(Notice::error("You can only delete your own comments"));
    }
}

// ============================================================================
// Async results
// ============================================================================

fn handle_login_result(
    app: &mut AppState,
    result: Result<byline_core::session::Session, String>,
) -> Vec<UiEffect> {
    app.tui.tasks.finish(TaskKind::Login);

    let form = match app.overlay.take() {
        Some(Overlay::Login(state)) => state.take_form(),
        other => {
            app.overlay = other;
            None
        }
    };

    match result {
        Ok(session) => {
            let username = session.username().unwrap_or_default().to_string();
            app.tui.session = session;
            app.overlay = None;
            app.tui.notice = Some(Notice::info(format!("Logged in as {username}")));
            // Back to home, as after a successful login.
            go_to_list(&mut app.tui, View::Home)
        }
        Err(msg) => {
            match form {
                Some(form) => app.overlay = Some(Overlay::Login(LoginState::reopen(form, msg))),
                None => app.tui.notice = Some(Notice::error(msg)),
            }
            vec![]
        }
    }
}

fn handle_register_result(
    app: &mut AppState,
    result: Result<byline_core::session::Session, String>,
) -> Vec<UiEffect> {
    app.tui.tasks.finish(TaskKind::Register);

    let form = match app.overlay.take() {
        Some(Overlay::Register(state)) => state.take_form(),
        other => {
            app.overlay = other;
            None
        }
    };

    match result {
        Ok(session) => {
            let username = session.username().unwrap_or_default().to_string();
            app.tui.session = session;
            app.overlay = None;
            app.tui.notice = Some(Notice::info(format!("Welcome, {username}!")));
            go_to_list(&mut app.tui, View::Home)
        }
        Err(msg) => {
            match form {
                Some(form) => {
                    app.overlay = Some(Overlay::Register(RegisterState::reopen(form, msg)));
                }
                None => app.tui.notice = Some(Notice::error(msg)),
            }
            vec![]
        }
    }
}

fn handle_publish_result(
    app: &mut AppState,
    result: Result<byline_core::api::Article, String>,
) -> Vec<UiEffect> {
    app.tui.tasks.finish(TaskKind::Publish);

    let form = match app.overlay.take() {
        Some(Overlay::Compose(state)) => state.take_form(),
        other => {
            app.overlay = other;
            None
        }
    };

    match result {
        Ok(article) => {
            app.overlay = None;
            app.tui.notice = Some(Notice::info("Article created successfully!"));
            let article_id = article.id;
            app.tui.view = View::Reader { article_id };
            app.tui.reader.open_with(article);
            vec![UiEffect::FetchComments { article_id }]
        }
        Err(msg) => {
            match form {
                Some(form) => app.overlay = Some(Overlay::Compose(ComposeState::reopen(form, msg))),
                None => app.tui.notice = Some(Notice::error(msg)),
            }
            vec![]
        }
    }
}

// ============================================================================
// Task bookkeeping
// ============================================================================

fn task_kind(effect: &UiEffect) -> Option<TaskKind> {
    match effect {
        UiEffect::RestoreSession => Some(TaskKind::Restore),
        UiEffect::SubmitLogin { .. } => Some(TaskKind::Login),
        UiEffect::SubmitRegister { .. } => Some(TaskKind::Register),
        UiEffect::FetchArticles { .. } => Some(TaskKind::ArticleList),
        UiEffect::FetchArticle { .. } => Some(TaskKind::ArticleFetch),
        UiEffect::FetchComments { .. } => Some(TaskKind::CommentList),
        UiEffect::PostComment { .. } => Some(TaskKind::CommentPost),
        UiEffect::DeleteComment { .. } => Some(TaskKind::CommentDelete),
        UiEffect::PublishArticle(_) => Some(TaskKind::Publish),
        // Logout is synchronous.
        UiEffect::Logout => None,
    }
}

fn register_tasks(tui: &mut TuiState, effects: &[UiEffect]) {
    for effect in effects {
        if let Some(kind) = task_kind(effect) {
            tui.tasks.begin(kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use byline_core::api::{Article, Comment};
    use byline_core::session::Session;

    use super::*;

    fn key(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
    }

    fn article(id: u64, author: &str) -> Article {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("article {id}"),
            "text": "text",
            "author": { "id": 1, "user": { "id": 1, "username": author } },
            "created_at": "2024-03-01T00:00:00Z",
        }))
        .unwrap()
    }

    fn comment(id: u64, author: &str) -> Comment {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "text": "a comment",
            "author": { "id": 1, "user": { "id": 1, "username": author } },
            "created_at": "2024-03-01T00:00:00Z",
        }))
        .unwrap()
    }

    fn authed(app: &mut AppState, username: &str) {
        app.tui.session = Session::authenticated(username, "access", "refresh");
    }

    /// Startup restores the session and fetches the list.
    #[test]
    fn test_startup_effects() {
        let mut app = AppState::new();
        let effects = startup(&mut app);
        assert!(effects.contains(&UiEffect::RestoreSession));
        assert!(effects.contains(&UiEffect::FetchArticles { query: None }));
        assert!(app.tui.restoring);
        assert!(app.tui.tasks.is_running(TaskKind::Restore));
    }

    /// The compose view is gated: anonymous users get a notice, not a form.
    #[test]
    fn test_compose_gated_on_session() {
        let mut app = AppState::new();
        update(&mut app, key(KeyCode::Char('n')));
        assert!(app.overlay.is_none());
        assert!(app.tui.notice.is_some());

        authed(&mut app, "ada");
        update(&mut app, key(KeyCode::Char('n')));
        assert!(matches!(app.overlay, Some(Overlay::Compose(_))));
    }

    /// Submitting the login form produces the effect and a pending state;
    /// a successful result closes the overlay and returns home.
    #[test]
    fn test_login_flow_success() {
        let mut app = AppState::new();
        app.tui.view = View::Articles;

        update(&mut app, key(KeyCode::Char('l')));
        assert!(matches!(app.overlay, Some(Overlay::Login(_))));

        for ch in "ada".chars() {
            update(&mut app, key(KeyCode::Char(ch)));
        }
        update(&mut app, key(KeyCode::Tab));
        for ch in "pw".chars() {
            update(&mut app, key(KeyCode::Char(ch)));
        }
        let effects = update(&mut app, key(KeyCode::Enter));
        assert_eq!(
            effects,
            vec![UiEffect::SubmitLogin {
                username: "ada".to_string(),
                password: "pw".to_string(),
            }]
        );
        assert!(app.tui.tasks.is_running(TaskKind::Login));

        let session = Session::authenticated("ada", "a", "r");
        let effects = update(&mut app, UiEvent::LoginResult(Ok(session)));
        assert!(app.overlay.is_none());
        assert_eq!(app.tui.view, View::Home);
        assert!(app.tui.session.is_authenticated());
        assert_eq!(effects, vec![UiEffect::FetchArticles { query: None }]);
    }

    /// A failed login reopens the form with the server error shown.
    #[test]
    fn test_login_failure_reopens_with_error() {
        let mut app = AppState::new();
        update(&mut app, key(KeyCode::Char('l')));
        for ch in "ada".chars() {
            update(&mut app, key(KeyCode::Char(ch)));
        }
        update(&mut app, key(KeyCode::Tab));
        update(&mut app, key(KeyCode::Char('p')));
        update(&mut app, key(KeyCode::Enter));

        update(
            &mut app,
            UiEvent::LoginResult(Err("Bad credentials".to_string())),
        );
        match &app.overlay {
            Some(Overlay::Login(LoginState::Editing { form, error })) => {
                assert_eq!(form.username.value(), "ada");
                assert!(form.password.is_empty());
                assert_eq!(error.as_deref(), Some("Bad credentials"));
            }
            other => panic!("expected reopened login overlay, got {other:?}"),
        }
        assert!(!app.tui.session.is_authenticated());
    }

    /// Logout flows through the synchronous effect and lands on home.
    #[test]
    fn test_logout_clears_session() {
        let mut app = AppState::new();
        authed(&mut app, "ada");
        app.tui.view = View::Articles;

        let effects = update(&mut app, key(KeyCode::Char('x')));
        assert_eq!(effects, vec![UiEffect::Logout]);

        let effects = update(&mut app, UiEvent::SessionCleared(Session::anonymous()));
        assert!(!app.tui.session.is_authenticated());
        assert_eq!(app.tui.view, View::Home);
        assert_eq!(effects, vec![UiEffect::FetchArticles { query: None }]);
    }

    /// Search submit sends the query; an emptied search fetches unfiltered.
    #[test]
    fn test_search_submit() {
        let mut app = AppState::new();
        update(&mut app, key(KeyCode::Char('/')));
        assert!(app.tui.articles.searching);

        for ch in "rust tui".chars() {
            update(&mut app, key(KeyCode::Char(ch)));
        }
        let effects = update(&mut app, key(KeyCode::Enter));
        assert_eq!(
            effects,
            vec![UiEffect::FetchArticles {
                query: Some("rust tui".to_string()),
            }]
        );

        // Once the filtered list is on screen, Esc in the search bar clears
        // the filter and requests the unfiltered list.
        update(
            &mut app,
            UiEvent::ArticlesLoaded {
                query: Some("rust tui".to_string()),
                result: Ok(vec![]),
            },
        );
        update(&mut app, key(KeyCode::Char('/')));
        let effects = update(&mut app, key(KeyCode::Esc));
        assert_eq!(effects, vec![UiEffect::FetchArticles { query: None }]);
    }

    /// Opening an article fetches it together with its comments.
    #[test]
    fn test_open_reader_fetches_article_and_comments() {
        let mut app = AppState::new();
        update(
            &mut app,
            UiEvent::ArticlesLoaded {
                query: None,
                result: Ok(vec![article(5, "ada")]),
            },
        );

        let effects = update(&mut app, key(KeyCode::Enter));
        assert_eq!(app.tui.view, View::Reader { article_id: 5 });
        assert_eq!(
            effects,
            vec![
                UiEffect::FetchArticle { article_id: 5 },
                UiEffect::FetchComments { article_id: 5 },
            ]
        );
    }

    /// Deletion is offered only for the session user's own comments.
    #[test]
    fn test_delete_own_comment_only() {
        let mut app = AppState::new();
        authed(&mut app, "ada");
        app.tui.view = View::Reader { article_id: 5 };
        app.tui.reader.open(5);
        app.tui.reader.article = Some(article(5, "ada"));
        app.tui
            .reader
            .set_comments(vec![comment(1, "bob"), comment(2, "ada")]);

        // Selected comment belongs to bob: refused.
        update(&mut app, key(KeyCode::Char('d')));
        assert!(app.overlay.is_none());
        assert!(app.tui.notice.is_some());

        // Select ada's own comment: confirmation appears.
        update(&mut app, key(KeyCode::Char('j')));
        update(&mut app, key(KeyCode::Char('d')));
        assert!(matches!(app.overlay, Some(Overlay::Confirm(_))));

        // Confirming emits the delete effect.
        let effects = update(&mut app, key(KeyCode::Char('y')));
        assert!(app.overlay.is_none());
        assert_eq!(
            effects,
            vec![UiEffect::DeleteComment {
                comment_id: 2,
                article_id: 5,
            }]
        );
    }

    /// A successful deletion re-fetches the comment list.
    #[test]
    fn test_comment_deletion_refetches() {
        let mut app = AppState::new();
        let effects = update(
            &mut app,
            UiEvent::CommentDeleted {
                article_id: 5,
                result: Ok(()),
            },
        );
        assert_eq!(effects, vec![UiEffect::FetchComments { article_id: 5 }]);
        assert!(app.tui.tasks.is_running(TaskKind::CommentList));
    }

    /// Commenting is gated on an authenticated session.
    #[test]
    fn test_commenting_requires_login() {
        let mut app = AppState::new();
        app.tui.view = View::Reader { article_id: 5 };
        app.tui.reader.open(5);
        app.tui.reader.article = Some(article(5, "ada"));

        update(&mut app, key(KeyCode::Char('c')));
        assert!(!app.tui.reader.commenting);
        assert!(app.tui.notice.is_some());

        authed(&mut app, "ada");
        update(&mut app, key(KeyCode::Char('c')));
        assert!(app.tui.reader.commenting);
    }

    /// A posted comment clears the input and re-fetches.
    #[test]
    fn test_comment_post_roundtrip() {
        let mut app = AppState::new();
        authed(&mut app, "ada");
        app.tui.view = View::Reader { article_id: 5 };
        app.tui.reader.open(5);
        app.tui.reader.article = Some(article(5, "ada"));
        update(&mut app, key(KeyCode::Char('c')));

        for ch in "nice".chars() {
            update(&mut app, key(KeyCode::Char(ch)));
        }
        let effects = update(&mut app, key(KeyCode::Enter));
        assert_eq!(
            effects,
            vec![UiEffect::PostComment {
                article_id: 5,
                text: "nice".to_string(),
            }]
        );

        let effects = update(
            &mut app,
            UiEvent::CommentPosted {
                article_id: 5,
                result: Ok(()),
            },
        );
        assert!(app.tui.reader.comment_input.is_empty());
        assert!(!app.tui.reader.commenting);
        assert_eq!(effects, vec![UiEffect::FetchComments { article_id: 5 }]);
    }

    /// Stale article results for a different article are ignored.
    #[test]
    fn test_stale_article_result_ignored() {
        let mut app = AppState::new();
        app.tui.view = View::Reader { article_id: 9 };
        app.tui.reader.open(9);

        update(
            &mut app,
            UiEvent::ArticleLoaded {
                article_id: 5,
                result: Ok(article(5, "ada")),
            },
        );
        assert!(app.tui.reader.article.is_none());
    }

    /// List failures keep the previous list contents.
    #[test]
    fn test_list_failure_keeps_prior_state() {
        let mut app = AppState::new();
        update(
            &mut app,
            UiEvent::ArticlesLoaded {
                query: None,
                result: Ok(vec![article(1, "ada")]),
            },
        );
        update(
            &mut app,
            UiEvent::ArticlesLoaded {
                query: Some("x".to_string()),
                result: Err("server down".to_string()),
            },
        );
        assert_eq!(app.tui.articles.articles.len(), 1);
        assert!(app.tui.notice.is_some());
    }

    /// A published article opens in the reader.
    #[test]
    fn test_publish_opens_reader() {
        let mut app = AppState::new();
        authed(&mut app, "ada");
        update(&mut app, key(KeyCode::Char('n')));

        let effects = update(&mut app, UiEvent::ArticlePublished(Ok(article(77, "ada"))));
        assert!(app.overlay.is_none());
        assert_eq!(app.tui.view, View::Reader { article_id: 77 });
        assert!(app.tui.reader.article.is_some());
        assert_eq!(effects, vec![UiEffect::FetchComments { article_id: 77 }]);
    }
}
