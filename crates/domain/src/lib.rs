//! Domain layer for the bookmarks service.
//!
//! This crate provides:
//! - Field rules for bookmarks (title, url scheme, rating range)
//! - The `CreateBookmark` command and its validation
//! - `BookmarkService`, the operations exposed over HTTP

pub mod bookmark;
pub mod error;

pub use bookmark::{
    BookmarkError, BookmarkService, BookmarkUrl, CreateBookmark, Rating, Title,
};
pub use bookmark_store::{Bookmark, BookmarkId};
pub use error::DomainError;
