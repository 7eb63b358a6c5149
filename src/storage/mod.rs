//! Page store backend.
//!
//! Persistence for the assessment app is a page-scoped key/value store:
//! one serialized [`PagePayload`] per page id, saved only on an explicit
//! user action and reset wholesale. This module provides the `SQLite`
//! implementation and the [`PageStore`] trait the rest of the crate
//! programs against.
//!
//! The implementation is split across submodules:
//! - `core`: Pool management, migrations, and helper functions
//! - `page`: Page payload CRUD operations
//! - `trait_impl`: [`PageStore`] implementation
//!
//! # Example
//!
//! ```ignore
//! use cog_assess::storage::{PageStore, SqliteStorage};
//!
//! let storage = SqliteStorage::new("./data/assessments.db").await?;
//! let saved = storage.load("ne_dom").await?;
//! ```

mod core;
mod page;
mod trait_impl;

pub use self::core::SqliteStorage;

use async_trait::async_trait;

use crate::error::StorageError;
use crate::session::PagePayload;

/// Page-scoped key/value store contract.
///
/// Annotated with `mockall::automock` under test so callers can be exercised
/// without a database.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageStore: Send + Sync {
    /// Load the saved payload for a page.
    ///
    /// Returns `None` when the page has never been saved.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database operation fails.
    async fn load(&self, page_id: &str) -> Result<Option<PagePayload>, StorageError>;

    /// Save a page's payload, replacing any previous save.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database operation fails.
    async fn save(&self, page_id: &str, payload: &PagePayload) -> Result<(), StorageError>;

    /// Discard a page's saved payload. A no-op when nothing was saved.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the database operation fails.
    async fn reset(&self, page_id: &str) -> Result<(), StorageError>;
}
