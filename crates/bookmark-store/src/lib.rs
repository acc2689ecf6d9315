//! Bookmark storage: the stored record, the `BookmarkStore` trait and an
//! in-memory implementation.

pub mod bookmark;
pub mod error;
pub mod memory;
pub mod store;

pub use bookmark::Bookmark;
pub use common::BookmarkId;
pub use error::{Result, StoreError};
pub use memory::InMemoryBookmarkStore;
pub use store::{BookmarkStore, BookmarkStoreExt};
