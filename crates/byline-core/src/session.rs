//! Session state and persistence.
//!
//! Tokens are persisted in `<base>/session.json` with restricted permissions
//! (0600). Only the token pair is persisted. The username is in-memory
//! state, so a restored session carries a placeholder name.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::api::ApiClient;
use crate::config::paths;

/// Session file name under the byline home directory.
const SESSION_FILE: &str = "session.json";

/// Username shown for a session restored from disk.
///
/// The token file does not record who it belongs to and the verification
/// endpoint returns no identity, so restored sessions display this constant.
pub const RESTORED_USERNAME: &str = "user";

// ============================================================================
// Session (in-memory identity)
// ============================================================================

/// The authenticated identity and token material held by the client.
///
/// Invariant: `username` is present iff `token` is present. Fields are
/// private and the constructors keep them in lockstep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    refresh: Option<String>,
    username: Option<String>,
}

impl Session {
    /// An unauthenticated session.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// An authenticated session for `username` holding the given tokens.
    pub fn authenticated(username: &str, access: &str, refresh: &str) -> Self {
        Self {
            token: Some(access.to_string()),
            refresh: Some(refresh.to_string()),
            username: Some(username.to_string()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Whether `username` names the user this session belongs to.
    pub fn is_user(&self, username: &str) -> bool {
        self.username.as_deref() == Some(username)
    }
}

// ============================================================================
// SessionStore (persisted tokens)
// ============================================================================

/// Persisted token pair, keyed `token` and `refresh` on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredTokens {
    token: String,
    refresh: String,
}

/// Reads and writes the persisted half of the session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Store at the default location, `<base>/session.json`.
    pub fn open_default() -> Self {
        Self {
            path: paths::byline_home().join(SESSION_FILE),
        }
    }

    /// Store at an explicit path (tests).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads persisted tokens. Returns `None` when the file doesn't exist.
    fn load(&self) -> Result<Option<StoredTokens>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read session from {}", self.path.display()))?;

        let tokens = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse session from {}", self.path.display()))?;
        Ok(Some(tokens))
    }

    /// Saves a token pair with restricted permissions (0600).
    fn save(&self, access: &str, refresh: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tokens = StoredTokens {
            token: access.to_string(),
            refresh: refresh.to_string(),
        };
        let contents =
            serde_json::to_string_pretty(&tokens).context("Failed to serialize session")?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(&self.path)
                .with_context(|| format!("Failed to open {} for writing", self.path.display()))?;
            file.write_all(contents.as_bytes())
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        #[cfg(not(unix))]
        {
            fs::write(&self.path, contents)
                .with_context(|| format!("Failed to write to {}", self.path.display()))?;
        }

        Ok(())
    }

    /// Removes the persisted tokens. Best-effort: a missing file is fine and
    /// filesystem errors are logged, not surfaced.
    ///
    /// Returns whether tokens were present.
    pub fn clear(&self) -> bool {
        if !self.path.exists() {
            return false;
        }
        if let Err(e) = fs::remove_file(&self.path) {
            warn!(path = %self.path.display(), error = %e, "failed to remove session file");
        }
        true
    }
}

// ============================================================================
// Session operations
// ============================================================================

/// Restores the session persisted on disk, if any.
///
/// Attaches the stored token to the client and verifies it against the
/// server. An invalid or unreadable token clears the persisted state and the
/// client token; this never fails, it only degrades to an anonymous session.
pub async fn restore(client: &ApiClient, store: &SessionStore) -> Session {
    let tokens = match store.load() {
        Ok(Some(tokens)) => tokens,
        Ok(None) => return Session::anonymous(),
        Err(e) => {
            warn!(error = format!("{e:#}"), "discarding unreadable session file");
            store.clear();
            return Session::anonymous();
        }
    };

    client.set_token(&tokens.token);
    match client.verify().await {
        Ok(()) => {
            info!("restored session from disk");
            Session::authenticated(RESTORED_USERNAME, &tokens.token, &tokens.refresh)
        }
        Err(e) => {
            info!(error = format!("{e:#}"), "stored token rejected, clearing session");
            store.clear();
            client.clear_token();
            Session::anonymous()
        }
    }
}

/// Logs in with username/password.
///
/// On success the tokens are persisted, attached to the client, and an
/// authenticated session is returned. On failure nothing is mutated and the
/// error is the user-displayable message from the server.
pub async fn login(
    client: &ApiClient,
    store: &SessionStore,
    username: &str,
    password: &str,
) -> Result<Session> {
    let pair = client.login(username, password).await?;

    store.save(&pair.access, &pair.refresh)?;
    client.set_token(&pair.access);
    info!(username, "logged in");
    Ok(Session::authenticated(username, &pair.access, &pair.refresh))
}

/// Registers a new account; same persistence and error contract as login.
pub async fn register(
    client: &ApiClient,
    store: &SessionStore,
    username: &str,
    email: &str,
    password: &str,
) -> Result<Session> {
    let pair = client.register(username, email, password).await?;

    store.save(&pair.access, &pair.refresh)?;
    client.set_token(&pair.access);
    info!(username, "registered");
    Ok(Session::authenticated(username, &pair.access, &pair.refresh))
}

/// Logs out: clears persisted tokens, the client token, and the in-memory
/// session. Synchronous, no network call, cannot fail.
pub fn logout(client: &ApiClient, store: &SessionStore) -> Session {
    store.clear();
    client.clear_token();
    info!("logged out");
    Session::anonymous()
}
