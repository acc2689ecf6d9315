//! Bookmark commands.

use bookmark_store::Bookmark;

use super::{BookmarkError, BookmarkUrl, Rating, Title};

/// Command to create a new bookmark.
///
/// Fields arrive unvalidated; `into_bookmark` applies the field rules.
#[derive(Debug, Clone, Default)]
pub struct CreateBookmark {
    pub title: Option<String>,
    pub url: Option<String>,
    pub desc: Option<String>,
    pub rating: Option<f64>,
}

impl CreateBookmark {
    /// Creates a command with the required fields set.
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Sets the description.
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = Some(desc.into());
        self
    }

    /// Sets the rating.
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Validates the fields and builds a bookmark with a fresh id.
    ///
    /// Rules are checked in order (title, url, url scheme, rating) and the
    /// first violation is returned.
    pub fn into_bookmark(self) -> Result<Bookmark, BookmarkError> {
        let title = Title::parse(self.title.unwrap_or_default())?;
        let url = BookmarkUrl::parse(self.url.unwrap_or_default())?;
        let rating = self.rating.map(Rating::new).transpose()?;

        Ok(Bookmark::new(
            title.into_inner(),
            url.into_inner(),
            self.desc,
            rating.map(|r| r.value()),
        ))
    }
}
