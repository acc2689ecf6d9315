//! Shared types for the bookmarks service.

pub mod types;

pub use types::BookmarkId;
