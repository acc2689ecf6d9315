//! Domain error types.

use bookmark_store::{BookmarkId, StoreError};
use thiserror::Error;

use crate::bookmark::BookmarkError;

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// An error occurred in the bookmark store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The bookmark failed validation.
    #[error("Bookmark error: {0}")]
    Bookmark(#[from] BookmarkError),

    /// No bookmark with the given id exists.
    #[error("Bookmark not found: {id}")]
    NotFound { id: BookmarkId },
}
