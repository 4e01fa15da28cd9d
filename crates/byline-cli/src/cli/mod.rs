//! CLI entry and dispatch.

use std::sync::Arc;

use anyhow::{Context, Result};
use byline_core::api::ApiClient;
use byline_core::session::SessionStore;
use byline_core::{config, logging};
use clap::Parser;

mod commands;

#[derive(Parser)]
#[command(name = "byline")]
#[command(version)]
#[command(about = "Terminal client for the blog API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// API base URL (overrides BYLINE_API_URL and the config file)
    #[arg(long, value_name = "URL", global = true)]
    api_url: Option<String>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Browse, search and create articles
    Articles {
        #[command(subcommand)]
        command: ArticleCommands,
    },

    /// Add or delete comments
    Comments {
        #[command(subcommand)]
        command: CommentCommands,
    },

    /// Log in with username/password (password read from stdin)
    Login {
        /// Account username
        #[arg(value_name = "USERNAME")]
        username: String,
    },

    /// Register a new account (password read from stdin)
    Register {
        /// Account username
        #[arg(value_name = "USERNAME")]
        username: String,
        /// Account email address
        #[arg(long)]
        email: String,
    },

    /// Log out (clear the stored session)
    Logout,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ArticleCommands {
    /// List articles
    List {
        /// Filter by a search query
        #[arg(long, value_name = "QUERY")]
        search: Option<String>,
    },
    /// Show one article with its comments
    Show {
        /// The ID of the article to show
        #[arg(value_name = "ARTICLE_ID")]
        id: u64,
    },
    /// Publish a new article (body from --text or stdin)
    New {
        /// Article title
        #[arg(long)]
        title: String,
        /// Article body; read from stdin when omitted
        #[arg(long)]
        text: Option<String>,
        /// Comma-separated tags
        #[arg(long, value_name = "TAGS")]
        tags: Option<String>,
    },
}

#[derive(clap::Subcommand)]
enum CommentCommands {
    /// Comment on an article
    Add {
        /// The ID of the article to comment on
        #[arg(value_name = "ARTICLE_ID")]
        article_id: u64,
        /// Comment text
        #[arg(long)]
        text: String,
    },
    /// Delete one of your comments
    Delete {
        /// The ID of the comment to delete
        #[arg(value_name = "COMMENT_ID")]
        comment_id: u64,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = logging::init();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = config::Config::load().context("load config")?;
    let base_url = config.resolve_base_url(cli.api_url.as_deref())?;
    tracing::debug!(%base_url, "resolved API base URL");

    let client = Arc::new(ApiClient::new(&base_url)?);
    let store = SessionStore::open_default();

    // default to the interactive browser
    let Some(command) = cli.command else {
        return commands::browse::run(client, store);
    };

    match command {
        Commands::Articles { command } => match command {
            ArticleCommands::List { search } => {
                commands::articles::list(&client, &store, search.as_deref()).await
            }
            ArticleCommands::Show { id } => commands::articles::show(&client, &store, id).await,
            ArticleCommands::New { title, text, tags } => {
                commands::articles::new(&client, &store, &title, text, tags.as_deref()).await
            }
        },

        Commands::Comments { command } => match command {
            CommentCommands::Add { article_id, text } => {
                commands::comments::add(&client, &store, article_id, &text).await
            }
            CommentCommands::Delete { comment_id } => {
                commands::comments::delete(&client, &store, comment_id).await
            }
        },

        Commands::Login { username } => commands::auth::login(&client, &store, &username).await,
        Commands::Register { username, email } => {
            commands::auth::register(&client, &store, &username, &email).await
        }
        Commands::Logout => commands::auth::logout(&client, &store),

        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
