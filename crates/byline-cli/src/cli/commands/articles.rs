//! Article command handlers.

use std::io::{IsTerminal, Read};

use anyhow::{Context, Result};
use byline_core::api::{ApiClient, NewArticle, parse_tags};
use byline_core::session::{self, SessionStore};

pub async fn list(client: &ApiClient, store: &SessionStore, search: Option<&str>) -> Result<()> {
    session::restore(client, store).await;

    let articles = client.list_articles(search).await?;
    if articles.is_empty() {
        match search {
            Some(query) => println!("No articles matching \"{query}\"."),
            None => println!("No articles found."),
        }
        return Ok(());
    }

    for article in articles {
        let author = article.author_username().unwrap_or("Unknown");
        let date = article.created_at.format("%Y-%m-%d");
        println!("{:>5}  {}  {}  {}", article.id, date, author, article.title);
    }
    Ok(())
}

pub async fn show(client: &ApiClient, store: &SessionStore, id: u64) -> Result<()> {
    session::restore(client, store).await;

    let article = client.article(id).await?;
    let comments = client.comments(id).await?;

    let author = article.author_username().unwrap_or("Unknown");
    let date = article.created_at.format("%Y-%m-%d");

    println!("{}", article.title);
    println!("by {author} • {date}");
    if !article.tags.is_empty() {
        let tags: Vec<&str> = article.tags.iter().map(|t| t.name.as_str()).collect();
        println!("[{}]", tags.join(", "));
    }
    println!();
    println!("{}", article.text);
    println!();
    println!("Comments ({}):", comments.len());
    for comment in comments {
        let author = comment.author_username().unwrap_or("Unknown");
        let date = comment.created_at.format("%Y-%m-%d");
        println!("  #{}  {author} • {date}: {}", comment.id, comment.text);
    }
    Ok(())
}

pub async fn new(
    client: &ApiClient,
    store: &SessionStore,
    title: &str,
    text: Option<String>,
    tags: Option<&str>,
) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => read_body_from_stdin()?,
    };
    if text.trim().is_empty() {
        anyhow::bail!("Article body is empty");
    }

    let session = session::restore(client, store).await;
    if !session.is_authenticated() {
        anyhow::bail!("Not logged in. Run `byline login <username>` first.");
    }

    let article = client
        .create_article(&NewArticle {
            title: title.to_string(),
            text,
            tags: tags.map(parse_tags).unwrap_or_default(),
        })
        .await?;

    println!("Created article {}: {}", article.id, article.title);
    Ok(())
}

fn read_body_from_stdin() -> Result<String> {
    if std::io::stdin().is_terminal() {
        eprintln!("Reading article body from stdin; finish with Ctrl+D.");
    }
    let mut text = String::new();
    std::io::stdin()
        .lock()
        .read_to_string(&mut text)
        .context("read article body from stdin")?;
    Ok(text)
}
