//! In-memory bookmark store.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{Bookmark, BookmarkId, Result, StoreError, store::BookmarkStore};

/// In-memory bookmark store.
///
/// Holds the list behind a single lock. Clones share the same list, and
/// everything is lost when the process exits.
#[derive(Clone, Default)]
pub struct InMemoryBookmarkStore {
    bookmarks: Arc<RwLock<Vec<Bookmark>>>,
}

impl InMemoryBookmarkStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookmarkStore for InMemoryBookmarkStore {
    async fn list(&self) -> Result<Vec<Bookmark>> {
        Ok(self.bookmarks.read().await.clone())
    }

    async fn find(&self, id: &BookmarkId) -> Result<Vec<Bookmark>> {
        let store = self.bookmarks.read().await;
        Ok(store.iter().filter(|b| &b.id == id).cloned().collect())
    }

    async fn insert(&self, bookmark: Bookmark) -> Result<()> {
        let mut store = self.bookmarks.write().await;

        if store.iter().any(|b| b.id == bookmark.id) {
            return Err(StoreError::DuplicateId(bookmark.id));
        }

        tracing::debug!(id = %bookmark.id, "storing bookmark");
        store.push(bookmark);
        Ok(())
    }

    async fn remove(&self, id: &BookmarkId) -> Result<Option<Bookmark>> {
        let mut store = self.bookmarks.write().await;
        let removed = store
            .iter()
            .position(|b| &b.id == id)
            .map(|index| store.remove(index));
        Ok(removed)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.bookmarks.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BookmarkStoreExt;

    fn create_test_bookmark(title: &str) -> Bookmark {
        Bookmark::new(title, format!("https://example.com/{title}"), None, Some(3.0))
    }

    #[tokio::test]
    async fn insert_and_list_preserves_order() {
        let store = InMemoryBookmarkStore::new();
        let first = create_test_bookmark("first");
        let second = create_test_bookmark("second");

        store.insert(first.clone()).await.unwrap();
        store.insert(second.clone()).await.unwrap();

        let all = store.list().await.unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_id() {
        let store = InMemoryBookmarkStore::new();
        let bookmark = create_test_bookmark("dup");

        store.insert(bookmark.clone()).await.unwrap();
        let result = store.insert(bookmark).await;

        assert!(matches!(result, Err(StoreError::DuplicateId(_))));
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn find_returns_single_match() {
        let store = InMemoryBookmarkStore::new();
        let target = create_test_bookmark("target");
        store.insert(create_test_bookmark("other")).await.unwrap();
        store.insert(target.clone()).await.unwrap();

        let found = store.find(&target.id).await.unwrap();
        assert_eq!(found, vec![target]);
    }

    #[tokio::test]
    async fn find_unknown_id_is_empty() {
        let store = InMemoryBookmarkStore::new();
        store.insert(create_test_bookmark("only")).await.unwrap();

        let found = store.find(&BookmarkId::new("missing")).await.unwrap();
        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn remove_deletes_exactly_one() {
        let store = InMemoryBookmarkStore::new();
        let keep_a = create_test_bookmark("a");
        let gone = create_test_bookmark("b");
        let keep_c = create_test_bookmark("c");
        for b in [&keep_a, &gone, &keep_c] {
            store.insert(b.clone()).await.unwrap();
        }

        let removed = store.remove(&gone.id).await.unwrap();
        assert_eq!(removed, Some(gone.clone()));
        assert_eq!(store.list().await.unwrap(), vec![keep_a, keep_c]);
        assert!(store.get(&gone.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn remove_unknown_id_leaves_list_untouched() {
        let store = InMemoryBookmarkStore::new();
        store.insert(create_test_bookmark("a")).await.unwrap();
        store.insert(create_test_bookmark("b")).await.unwrap();

        let removed = store.remove(&BookmarkId::new("missing")).await.unwrap();
        assert!(removed.is_none());
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn clones_share_the_same_list() {
        let store = InMemoryBookmarkStore::new();
        let clone = store.clone();
        let bookmark = create_test_bookmark("shared");

        clone.insert(bookmark.clone()).await.unwrap();

        assert_eq!(store.get(&bookmark.id).await.unwrap(), Some(bookmark));
    }
}
