//! Value objects for the bookmark domain.

use super::BookmarkError;

/// A bookmark title. Never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title(String);

impl Title {
    /// Validates a title. Whitespace-only titles count as missing.
    pub fn parse(title: impl Into<String>) -> Result<Self, BookmarkError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(BookmarkError::TitleRequired);
        }
        Ok(Self(title))
    }

    /// Consumes the title, returning the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// A bookmark URL carrying an http or https scheme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkUrl(String);

impl BookmarkUrl {
    /// Accepted scheme prefixes. Only the first five characters are checked.
    const SCHEME_PREFIXES: [&'static str; 2] = ["http:", "https"];

    /// Validates a URL.
    pub fn parse(url: impl Into<String>) -> Result<Self, BookmarkError> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(BookmarkError::UrlRequired);
        }
        if !Self::SCHEME_PREFIXES
            .iter()
            .any(|prefix| url.starts_with(prefix))
        {
            return Err(BookmarkError::UrlMissingScheme { url });
        }
        Ok(Self(url))
    }

    /// Consumes the URL, returning the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// A rating between 1 and 5 inclusive. Fractional values such as 2.5 are
/// allowed.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Rating(f64);

impl Rating {
    pub const MIN: f64 = 1.0;
    pub const MAX: f64 = 5.0;

    /// Validates a rating. NaN and infinities are out of range.
    pub fn new(rating: f64) -> Result<Self, BookmarkError> {
        if !(Self::MIN..=Self::MAX).contains(&rating) {
            return Err(BookmarkError::RatingOutOfRange { rating });
        }
        Ok(Self(rating))
    }

    /// Returns the rating value.
    pub fn value(&self) -> f64 {
        self.0
    }
}
