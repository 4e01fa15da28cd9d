//! Blog REST API client and wire types.

mod client;
mod types;

pub use client::ApiClient;
pub use types::{
    Article, Comment, Listing, NewArticle, Profile, ProfileUser, Tag, TokenPair, parse_tags,
};
