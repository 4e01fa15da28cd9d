//! Interactive browser command handler (the default mode).

use std::sync::Arc;

use anyhow::{Context, Result};
use byline_core::api::ApiClient;
use byline_core::session::SessionStore;

pub fn run(client: Arc<ApiClient>, store: SessionStore) -> Result<()> {
    byline_tui::run_browser(client, store).context("browser failed")
}
