// SPDX-FileCopyrightText: 2026 Trendpulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed repository seams over the durable store.
//!
//! Two methods per entity, keyed by user id. The entity shapes in
//! `crate::types` are the contract; any document or relational store can
//! sit behind these traits.

use async_trait::async_trait;

use crate::error::TrendpulseError;
use crate::types::{ChatTranscriptEntry, StreakRecord, UserAccount, UserId};

/// Streak record persistence.
///
/// `upsert` is last-write-wins at the store layer: the read-modify-write in
/// the Progress Tracker is not transactional (accepted limitation).
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Look up the streak record for a user, if one exists.
    async fn get(&self, user_id: &UserId) -> Result<Option<StreakRecord>, TrendpulseError>;

    /// Insert or replace the streak record for `record.user_id`.
    async fn upsert(&self, record: &StreakRecord) -> Result<(), TrendpulseError>;
}

/// Append-only chat transcript persistence.
#[async_trait]
pub trait TranscriptStore: Send + Sync {
    /// Append one transcript entry.
    async fn append(&self, entry: &ChatTranscriptEntry) -> Result<(), TrendpulseError>;

    /// All entries for a user, ascending by timestamp.
    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ChatTranscriptEntry>, TrendpulseError>;
}

/// Registered account persistence.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up an account by email.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserAccount>, TrendpulseError>;

    /// Insert a new account. Fails on duplicate email.
    async fn insert(&self, account: &UserAccount) -> Result<(), TrendpulseError>;
}
