// SPDX-FileCopyrightText: 2026 Trendpulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the Trendpulse workspace.
//!
//! JSON field names are camelCase to match the wire format the dashboard
//! frontend already consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque stable identifier for a user, owned by the identity verifier's domain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One streak record per user.
///
/// Invariant: `highest_streak >= current_streak` at all times. Created lazily
/// with zero counters, mutated only by the update operation, never deleted by
/// this core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakRecord {
    pub user_id: UserId,
    /// Count of consecutive qualifying days.
    pub current_streak: u32,
    /// Running maximum of `current_streak` ever observed.
    pub highest_streak: u32,
    /// Timestamp of the last accepted update.
    pub last_updated: DateTime<Utc>,
}

impl StreakRecord {
    /// A fresh record with zero counters, as created on first contact.
    pub fn new(user_id: UserId, now: DateTime<Utc>) -> Self {
        Self {
            user_id,
            current_streak: 0,
            highest_streak: 0,
            last_updated: now,
        }
    }
}

/// One recorded query/response pair. Append-only, immutable after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatTranscriptEntry {
    pub user_id: UserId,
    /// Non-empty text submitted by the user.
    pub query: String,
    /// Text returned to the user. Never empty: a fallback placeholder is
    /// substituted when the upstream service returns nothing.
    pub response: String,
    /// Creation time, used for chronological ordering on retrieval.
    pub timestamp: DateTime<Utc>,
}

/// A registered account. The password hash is an argon2id PHC string and is
/// never serialized onto the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct UserAccount {
    pub user_id: UserId,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Reply shape of the generation endpoint: `{content?, error?}`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GenerationReply {
    /// Generated text, if the service produced one.
    #[serde(default)]
    pub content: Option<String>,
    /// Error description from the service, reported in place of content.
    #[serde(default)]
    pub error: Option<String>,
}

impl GenerationReply {
    /// Extract the reply text: content first, then the error field.
    pub fn into_text(self) -> Option<String> {
        self.content.or(self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streak_record_serializes_camel_case() {
        let record = StreakRecord {
            user_id: UserId("u-1".into()),
            current_streak: 3,
            highest_streak: 5,
            last_updated: "2026-02-01T12:00:00Z".parse().unwrap(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"userId\":\"u-1\""));
        assert!(json.contains("\"currentStreak\":3"));
        assert!(json.contains("\"highestStreak\":5"));
        assert!(json.contains("\"lastUpdated\""));
    }

    #[test]
    fn new_record_starts_at_zero() {
        let now = Utc::now();
        let record = StreakRecord::new(UserId("u-2".into()), now);
        assert_eq!(record.current_streak, 0);
        assert_eq!(record.highest_streak, 0);
        assert_eq!(record.last_updated, now);
    }

    #[test]
    fn generation_reply_prefers_content_over_error() {
        let reply = GenerationReply {
            content: Some("answer".into()),
            error: Some("ignored".into()),
        };
        assert_eq!(reply.into_text().as_deref(), Some("answer"));

        let error_only = GenerationReply {
            content: None,
            error: Some("quota exceeded".into()),
        };
        assert_eq!(error_only.into_text().as_deref(), Some("quota exceeded"));

        assert_eq!(GenerationReply::default().into_text(), None);
    }

    #[test]
    fn generation_reply_deserializes_partial_bodies() {
        let reply: GenerationReply = serde_json::from_str(r#"{"content":"hi"}"#).unwrap();
        assert_eq!(reply.content.as_deref(), Some("hi"));
        assert!(reply.error.is_none());

        let empty: GenerationReply = serde_json::from_str("{}").unwrap();
        assert!(empty.content.is_none() && empty.error.is_none());
    }

    #[test]
    fn transcript_entry_round_trips() {
        let entry = ChatTranscriptEntry {
            user_id: UserId("u-3".into()),
            query: "what is trending?".into(),
            response: "cats".into(),
            timestamp: "2026-02-01T12:00:00Z".parse().unwrap(),
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: ChatTranscriptEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }
}
