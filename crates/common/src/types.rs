use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a bookmark.
///
/// Freshly created bookmarks get a random UUID, but any string taken from a
/// request path is a valid id to look up. An id that was never issued simply
/// matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmarkId(String);

impl BookmarkId {
    /// Generates a new random bookmark ID.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps an existing identifier string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BookmarkId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for BookmarkId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for BookmarkId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for BookmarkId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
