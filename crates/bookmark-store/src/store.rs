//! The storage trait.

use async_trait::async_trait;

use crate::{Bookmark, BookmarkId, Result};

/// Core trait for bookmark store implementations.
///
/// A store keeps bookmarks as an ordered list. All implementations must be
/// thread-safe (Send + Sync).
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// Returns every bookmark in insertion order.
    async fn list(&self) -> Result<Vec<Bookmark>>;

    /// Returns all bookmarks whose id equals `id`.
    ///
    /// Since ids are unique the result holds zero or one element.
    async fn find(&self, id: &BookmarkId) -> Result<Vec<Bookmark>>;

    /// Appends a bookmark to the end of the list.
    ///
    /// Fails with `DuplicateId` if a bookmark with the same id is stored.
    async fn insert(&self, bookmark: Bookmark) -> Result<()>;

    /// Removes the bookmark with the given id.
    ///
    /// Returns the removed bookmark, or None if nothing matched. Other
    /// records are never touched.
    async fn remove(&self, id: &BookmarkId) -> Result<Option<Bookmark>>;

    /// Returns the number of stored bookmarks.
    async fn count(&self) -> Result<usize>;
}

/// Extension trait providing convenience methods for bookmark stores.
#[async_trait]
pub trait BookmarkStoreExt: BookmarkStore {
    /// Returns the single bookmark with the given id, if any.
    async fn get(&self, id: &BookmarkId) -> Result<Option<Bookmark>> {
        Ok(self.find(id).await?.into_iter().next())
    }
}

// Blanket implementation for all BookmarkStore implementations
impl<T: BookmarkStore + ?Sized> BookmarkStoreExt for T {}
