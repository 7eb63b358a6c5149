//! Page payload storage operations.

#![allow(clippy::missing_errors_doc)]

use sqlx::Row;

use crate::error::StorageError;
use crate::session::PagePayload;

use super::core::SqliteStorage;

impl SqliteStorage {
    /// Load a page's saved payload, if any.
    pub async fn load_page(&self, page_id: &str) -> Result<Option<PagePayload>, StorageError> {
        let row = sqlx::query("SELECT payload FROM pages WHERE page_id = ?")
            .bind(page_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Self::query_error("SELECT pages", format!("{e}")))?;

        match row {
            Some(row) => {
                let payload_json: String = row.get("payload");
                let payload: PagePayload =
                    serde_json::from_str(&payload_json).map_err(|e| StorageError::Internal {
                        message: format!("Failed to deserialize payload for page {page_id}: {e}"),
                    })?;
                Ok(Some(payload))
            }
            None => Ok(None),
        }
    }

    /// Save a page's payload, replacing any previous save.
    pub async fn save_page(
        &self,
        page_id: &str,
        payload: &PagePayload,
    ) -> Result<(), StorageError> {
        let payload_json = serde_json::to_string(payload).map_err(|e| StorageError::Internal {
            message: format!("Failed to serialize payload for page {page_id}: {e}"),
        })?;
        let updated_at = payload.updated_at.to_rfc3339();

        sqlx::query(
            "INSERT INTO pages (page_id, payload, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(page_id) DO UPDATE SET payload = excluded.payload,
                                               updated_at = excluded.updated_at",
        )
        .bind(page_id)
        .bind(&payload_json)
        .bind(&updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::query_error("INSERT pages", format!("{e}")))?;

        Ok(())
    }

    /// Delete a page's saved payload. A no-op when nothing was saved.
    pub async fn reset_page(&self, page_id: &str) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM pages WHERE page_id = ?")
            .bind(page_id)
            .execute(&self.pool)
            .await
            .map_err(|e| Self::query_error("DELETE pages", format!("{e}")))?;

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::storage::core::tests::test_storage;
    use chrono::{TimeZone, Utc};
    use std::collections::{BTreeMap, BTreeSet};

    fn payload() -> PagePayload {
        let mut answers = BTreeMap::new();
        answers.insert("ne_1".to_string(), 5);
        answers.insert("ne_2".to_string(), 2);

        PagePayload {
            answers,
            evidence: BTreeSet::new(),
            cannot_corroborate: BTreeSet::new(),
            scores: None,
            updated_at: Utc.with_ymd_and_hms(2025, 11, 2, 10, 0, 0).single().unwrap(),
        }
    }

    #[tokio::test]
    async fn test_load_missing_page_is_none() {
        let storage = test_storage().await;
        let loaded = storage.load_page("ne_dom").await.expect("load works");
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let storage = test_storage().await;
        let payload = payload();

        storage.save_page("ne_dom", &payload).await.expect("saves");
        let loaded = storage.load_page("ne_dom").await.expect("loads");
        assert_eq!(loaded, Some(payload));
    }

    #[tokio::test]
    async fn test_save_replaces_previous_payload() {
        let storage = test_storage().await;
        let first = payload();
        let mut second = payload();
        second.answers.insert("ne_1".to_string(), 1);

        storage.save_page("ne_dom", &first).await.expect("saves");
        storage.save_page("ne_dom", &second).await.expect("replaces");

        let loaded = storage.load_page("ne_dom").await.expect("loads");
        assert_eq!(loaded, Some(second));
    }

    #[tokio::test]
    async fn test_pages_are_isolated_by_id() {
        let storage = test_storage().await;
        storage.save_page("ne_dom", &payload()).await.expect("saves");

        let other = storage.load_page("fi_dom").await.expect("loads");
        assert!(other.is_none());
    }

    #[tokio::test]
    async fn test_reset_discards_payload() {
        let storage = test_storage().await;
        storage.save_page("ne_dom", &payload()).await.expect("saves");
        storage.reset_page("ne_dom").await.expect("resets");

        let loaded = storage.load_page("ne_dom").await.expect("loads");
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn test_reset_missing_page_is_noop() {
        let storage = test_storage().await;
        storage.reset_page("never_saved").await.expect("no-op reset");
    }
}
