//! Full-screen terminal UI for byline.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};
use std::sync::Arc;

use anyhow::Result;
use byline_core::api::ApiClient;
use byline_core::session::SessionStore;
pub use runtime::TuiRuntime;

/// Runs the interactive blog browser.
pub fn run_browser(client: Arc<ApiClient>, store: SessionStore) -> Result<()> {
    // The browser requires a terminal to render the TUI.
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The interactive browser requires a terminal.\n\
             Use `byline articles list` for non-interactive output."
        );
    }

    let mut runtime = TuiRuntime::new(client, store)?;
    runtime.run()?;

    // Printed after the alternate screen is gone.
    writeln!(stderr(), "Goodbye!")?;
    Ok(())
}
