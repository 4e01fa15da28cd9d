//! Comment command handlers.

use anyhow::Result;
use byline_core::api::ApiClient;
use byline_core::session::{self, SessionStore};

pub async fn add(
    client: &ApiClient,
    store: &SessionStore,
    article_id: u64,
    text: &str,
) -> Result<()> {
    let session = session::restore(client, store).await;
    if !session.is_authenticated() {
        anyhow::bail!("Not logged in. Run `byline login <username>` first.");
    }

    let comment = client.create_comment(article_id, text).await?;
    println!("Added comment {} on article {article_id}", comment.id);
    Ok(())
}

pub async fn delete(client: &ApiClient, store: &SessionStore, comment_id: u64) -> Result<()> {
    let session = session::restore(client, store).await;
    if !session.is_authenticated() {
        anyhow::bail!("Not logged in. Run `byline login <username>` first.");
    }

    client.delete_comment(comment_id).await?;
    println!("Deleted comment {comment_id}");
    Ok(())
}
