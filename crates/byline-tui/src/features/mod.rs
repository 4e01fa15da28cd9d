//! Feature modules: per-view state and rendering.

pub mod articles;
pub mod navbar;
pub mod reader;
