//! Bookmark validation rules, commands, and service.

mod commands;
mod service;
mod value_objects;

pub use commands::CreateBookmark;
pub use service::BookmarkService;
pub use value_objects::{BookmarkUrl, Rating, Title};

use thiserror::Error;

/// Errors raised when a bookmark breaks a field rule.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BookmarkError {
    /// Title is missing or blank.
    #[error("Title is required")]
    TitleRequired,

    /// URL is missing or blank.
    #[error("URL is required")]
    UrlRequired,

    /// URL does not start with an http or https scheme.
    #[error("URL must include protocol (http/https): {url}")]
    UrlMissingScheme { url: String },

    /// Rating is outside 1 to 5.
    #[error("Rating must be between 1 and 5, got {rating}")]
    RatingOutOfRange { rating: f64 },
}
