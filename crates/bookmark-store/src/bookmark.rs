//! The stored bookmark record.

use serde::{Deserialize, Serialize};

use crate::BookmarkId;

/// A stored bookmark record.
///
/// Records are written once on creation and never edited. Field rules
/// (non-empty title, http/https url, rating within 1 to 5) are enforced before a
/// record reaches the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: BookmarkId,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl Bookmark {
    /// Creates a bookmark record with a freshly generated id.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        desc: Option<String>,
        rating: Option<f64>,
    ) -> Self {
        Self {
            id: BookmarkId::generate(),
            title: title.into(),
            url: url.into(),
            desc,
            rating,
        }
    }
}
