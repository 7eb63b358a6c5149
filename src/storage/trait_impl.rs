//! `PageStore` implementation for the SQLite backend.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::session::PagePayload;

use super::core::SqliteStorage;
use super::PageStore;

#[async_trait]
impl PageStore for SqliteStorage {
    async fn load(&self, page_id: &str) -> Result<Option<PagePayload>, StorageError> {
        self.load_page(page_id).await
    }

    async fn save(&self, page_id: &str, payload: &PagePayload) -> Result<(), StorageError> {
        self.save_page(page_id, payload).await
    }

    async fn reset(&self, page_id: &str) -> Result<(), StorageError> {
        self.reset_page(page_id).await
    }
}
