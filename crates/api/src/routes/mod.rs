//! HTTP route handlers.

pub mod bookmarks;
