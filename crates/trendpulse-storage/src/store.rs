// SPDX-FileCopyrightText: 2026 Trendpulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the core repository traits.

use async_trait::async_trait;
use tracing::debug;

use trendpulse_config::model::StorageConfig;
use trendpulse_core::types::{ChatTranscriptEntry, StreakRecord, UserAccount, UserId};
use trendpulse_core::{ProgressStore, TranscriptStore, TrendpulseError, UserStore};

use crate::database::Database;
use crate::queries;

/// SQLite-backed durable store.
///
/// Wraps a [`Database`] handle and delegates all query operations to the
/// typed query modules. One instance serves all three repository seams;
/// the gateway hands out `Arc` clones coerced to the individual traits.
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    /// Open the database at the configured path and run migrations.
    pub async fn open(config: &StorageConfig) -> Result<Self, TrendpulseError> {
        let db = Database::open(&config.database_path, config.wal_mode).await?;
        debug!(path = %config.database_path, "SQLite store initialized");
        Ok(Self { db })
    }

    /// Checkpoint the WAL and flush pending writes.
    pub async fn close(&self) -> Result<(), TrendpulseError> {
        self.db.close().await
    }
}

#[async_trait]
impl ProgressStore for SqliteStore {
    async fn get(&self, user_id: &UserId) -> Result<Option<StreakRecord>, TrendpulseError> {
        queries::progress::get_progress(&self.db, user_id).await
    }

    async fn upsert(&self, record: &StreakRecord) -> Result<(), TrendpulseError> {
        queries::progress::upsert_progress(&self.db, record).await
    }
}

#[async_trait]
impl TranscriptStore for SqliteStore {
    async fn append(&self, entry: &ChatTranscriptEntry) -> Result<(), TrendpulseError> {
        queries::transcripts::append_entry(&self.db, entry).await
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ChatTranscriptEntry>, TrendpulseError> {
        queries::transcripts::list_for_user(&self.db, user_id).await
    }
}

#[async_trait]
impl UserStore for SqliteStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>, TrendpulseError> {
        queries::users::find_by_email(&self.db, email).await
    }

    async fn insert(&self, account: &UserAccount) -> Result<(), TrendpulseError> {
        queries::users::insert_user(&self.db, account).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::tempdir;

    fn make_config(path: &str) -> StorageConfig {
        StorageConfig {
            database_path: path.to_string(),
            wal_mode: true,
        }
    }

    async fn open_store() -> (SqliteStore, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("store.db");
        let store = SqliteStore::open(&make_config(db_path.to_str().unwrap()))
            .await
            .unwrap();
        (store, dir)
    }

    #[tokio::test]
    async fn open_creates_database_at_configured_path() {
        let dir = tempdir().unwrap();
        let db_path = dir.path().join("open.db");
        let _store = SqliteStore::open(&make_config(db_path.to_str().unwrap()))
            .await
            .unwrap();
        assert!(db_path.exists(), "database file should be created");
    }

    #[tokio::test]
    async fn full_lifecycle_through_all_three_seams() {
        let (store, _dir) = open_store().await;
        let user_id = UserId("u-lifecycle".to_string());

        // Account.
        let account = UserAccount {
            user_id: user_id.clone(),
            email: "carol@example.com".to_string(),
            password_hash: "$argon2id$stub".to_string(),
            created_at: Utc::now(),
        };
        UserStore::insert(&store, &account).await.unwrap();
        assert!(
            UserStore::find_by_email(&store, "carol@example.com")
                .await
                .unwrap()
                .is_some()
        );

        // Streak record.
        assert!(ProgressStore::get(&store, &user_id).await.unwrap().is_none());
        let record = StreakRecord::new(user_id.clone(), Utc::now());
        ProgressStore::upsert(&store, &record).await.unwrap();
        let fetched = ProgressStore::get(&store, &user_id).await.unwrap().unwrap();
        assert_eq!(fetched.current_streak, 0);

        // Transcript.
        let entry = ChatTranscriptEntry {
            user_id: user_id.clone(),
            query: "hello".to_string(),
            response: "hi".to_string(),
            timestamp: Utc::now(),
        };
        TranscriptStore::append(&store, &entry).await.unwrap();
        let history = TranscriptStore::list_for_user(&store, &user_id).await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].query, "hello");

        store.close().await.unwrap();
    }
}
