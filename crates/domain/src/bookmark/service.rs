//! Bookmark service providing the operations exposed over HTTP.

use bookmark_store::{Bookmark, BookmarkId, BookmarkStore, BookmarkStoreExt};

use crate::error::DomainError;

use super::CreateBookmark;

/// Service for managing bookmarks.
///
/// Owns its store, so each service instance (and each test) works on its
/// own list.
pub struct BookmarkService<S: BookmarkStore> {
    store: S,
}

impl<S: BookmarkStore> BookmarkService<S> {
    /// Creates a new bookmark service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Lists every bookmark in insertion order.
    #[tracing::instrument(skip(self))]
    pub async fn list_bookmarks(&self) -> Result<Vec<Bookmark>, DomainError> {
        Ok(self.store.list().await?)
    }

    /// Returns all bookmarks matching `id` (zero or one).
    #[tracing::instrument(skip(self))]
    pub async fn find_bookmark(&self, id: &BookmarkId) -> Result<Vec<Bookmark>, DomainError> {
        Ok(self.store.find(id).await?)
    }

    /// Returns the bookmark with the given id, if any.
    #[tracing::instrument(skip(self))]
    pub async fn get_bookmark(&self, id: &BookmarkId) -> Result<Option<Bookmark>, DomainError> {
        Ok(self.store.get(id).await?)
    }

    /// Validates and stores a new bookmark.
    #[tracing::instrument(skip(self, cmd))]
    pub async fn create_bookmark(&self, cmd: CreateBookmark) -> Result<Bookmark, DomainError> {
        let bookmark = cmd.into_bookmark().inspect_err(|e| {
            tracing::error!(reason = %e, "rejected bookmark");
        })?;

        self.store.insert(bookmark.clone()).await?;
        tracing::info!(id = %bookmark.id, "bookmark created");

        Ok(bookmark)
    }

    /// Deletes the bookmark with the given id.
    #[tracing::instrument(skip(self))]
    pub async fn delete_bookmark(&self, id: &BookmarkId) -> Result<Bookmark, DomainError> {
        let removed = self
            .store
            .remove(id)
            .await?
            .ok_or_else(|| DomainError::NotFound { id: id.clone() })?;

        tracing::info!(%id, "bookmark deleted");
        Ok(removed)
    }
}
