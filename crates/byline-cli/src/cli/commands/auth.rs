//! Auth command handlers.

use std::io::{IsTerminal, Write};

use anyhow::{Context, Result};
use byline_core::api::ApiClient;
use byline_core::session::{self, SessionStore};

pub async fn login(client: &ApiClient, store: &SessionStore, username: &str) -> Result<()> {
    let password = read_password()?;

    let session = session::login(client, store, username, &password).await?;
    let name = session.username().unwrap_or(username);
    println!("Logged in as {name}");
    Ok(())
}

pub async fn register(
    client: &ApiClient,
    store: &SessionStore,
    username: &str,
    email: &str,
) -> Result<()> {
    let password = read_password()?;

    let session = session::register(client, store, username, email, &password).await?;
    let name = session.username().unwrap_or(username);
    println!("Registered and logged in as {name}");
    Ok(())
}

pub fn logout(client: &ApiClient, store: &SessionStore) -> Result<()> {
    let had_session = store.path().exists();
    session::logout(client, store);

    if had_session {
        println!("Logged out.");
    } else {
        println!("Not logged in.");
    }
    Ok(())
}

/// Reads the password from stdin (piped input works; interactive input is
/// prompted on stderr).
fn read_password() -> Result<String> {
    if std::io::stdin().is_terminal() {
        eprint!("Password: ");
        std::io::stderr().flush().ok();
    }

    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("read password from stdin")?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();

    if password.is_empty() {
        anyhow::bail!("Password must not be empty");
    }
    Ok(password)
}
