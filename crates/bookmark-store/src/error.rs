//! Store error types.

use thiserror::Error;

use crate::BookmarkId;

/// Errors that can occur when interacting with the bookmark store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A bookmark with the same identifier is already stored.
    #[error("Duplicate bookmark id: {0}")]
    DuplicateId(BookmarkId),
}

/// Result type for bookmark store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
