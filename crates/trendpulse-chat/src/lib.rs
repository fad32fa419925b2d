// SPDX-FileCopyrightText: 2026 Trendpulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chat proxy.
//!
//! Forwards a user's query to the generation provider, substitutes a fixed
//! fallback when the provider returns nothing usable, and records the
//! query/response pair on a best-effort basis. A transcript write failure
//! never costs the user their answer.

use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use trendpulse_core::{
    ChatTranscriptEntry, GenerationProvider, TranscriptStore, TrendpulseError, UserId,
};

/// Text returned when the provider produces neither content nor an error
/// message.
pub const FALLBACK_RESPONSE: &str =
    "I'm sorry, I couldn't generate a response. Please try again.";

/// Result of one proxied query.
///
/// The response text reaches the caller either way; the variant records
/// whether the transcript write succeeded.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// The exchange was persisted.
    Recorded(ChatTranscriptEntry),
    /// The response was produced but the transcript write failed.
    Unrecorded { response: String },
}

impl QueryOutcome {
    /// The response text, regardless of persistence.
    pub fn response(&self) -> &str {
        match self {
            Self::Recorded(entry) => &entry.response,
            Self::Unrecorded { response } => response,
        }
    }
}

/// Proxies queries to a [`GenerationProvider`] and keeps per-user history.
pub struct ChatProxy {
    provider: Arc<dyn GenerationProvider>,
    transcripts: Arc<dyn TranscriptStore>,
}

impl ChatProxy {
    pub fn new(provider: Arc<dyn GenerationProvider>, transcripts: Arc<dyn TranscriptStore>) -> Self {
        Self {
            provider,
            transcripts,
        }
    }

    /// Forward one query and record the exchange.
    ///
    /// Blank queries are rejected before the provider is contacted. Provider
    /// failures propagate to the caller unrecorded; a blank reply body is
    /// replaced with [`FALLBACK_RESPONSE`].
    pub async fn process_query(
        &self,
        user_id: &UserId,
        query: &str,
    ) -> Result<QueryOutcome, TrendpulseError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(TrendpulseError::Validation("query is required".into()));
        }

        let reply = self.provider.generate(query).await?;
        let response = match reply.into_text().filter(|text| !text.trim().is_empty()) {
            Some(text) => text,
            None => FALLBACK_RESPONSE.to_string(),
        };

        let entry = ChatTranscriptEntry {
            user_id: user_id.clone(),
            query: query.to_string(),
            response,
            timestamp: Utc::now(),
        };
        match self.transcripts.append(&entry).await {
            Ok(()) => Ok(QueryOutcome::Recorded(entry)),
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "failed to record chat transcript");
                Ok(QueryOutcome::Unrecorded {
                    response: entry.response,
                })
            }
        }
    }

    /// The user's transcript, ascending by timestamp.
    pub async fn history(&self, user_id: &UserId) -> Result<Vec<ChatTranscriptEntry>, TrendpulseError> {
        self.transcripts.list_for_user(user_id).await
    }
}
