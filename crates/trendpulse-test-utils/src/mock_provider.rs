// SPDX-FileCopyrightText: 2026 Trendpulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock generation provider for deterministic testing.
//!
//! `MockProvider` implements `GenerationProvider` with pre-scripted results,
//! enabling fast, CI-runnable tests without external API calls.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use trendpulse_core::{GenerationProvider, GenerationReply, TrendpulseError};

/// A scripted outcome for one `generate` call.
pub enum ScriptedResult {
    Reply(GenerationReply),
    Unavailable(String),
    Upstream { status: u16, message: String },
}

/// A mock generation provider that pops scripted results from a FIFO queue.
///
/// When the queue is empty, a default `{content: "mock reply"}` is returned.
pub struct MockProvider {
    script: Arc<Mutex<VecDeque<ScriptedResult>>>,
}

impl MockProvider {
    /// Create a mock provider with an empty script.
    pub fn new() -> Self {
        Self {
            script: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Queue a successful reply with the given content.
    pub async fn push_content(&self, content: &str) {
        self.script
            .lock()
            .await
            .push_back(ScriptedResult::Reply(GenerationReply {
                content: Some(content.to_string()),
                error: None,
            }));
    }

    /// Queue an arbitrary reply body.
    pub async fn push_reply(&self, reply: GenerationReply) {
        self.script.lock().await.push_back(ScriptedResult::Reply(reply));
    }

    /// Queue an `Unavailable` failure (connection refused / timeout).
    pub async fn push_unavailable(&self, message: &str) {
        self.script
            .lock()
            .await
            .push_back(ScriptedResult::Unavailable(message.to_string()));
    }

    /// Queue an `Upstream` failure with the given status.
    pub async fn push_upstream_error(&self, status: u16, message: &str) {
        self.script.lock().await.push_back(ScriptedResult::Upstream {
            status,
            message: message.to_string(),
        });
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenerationProvider for MockProvider {
    async fn generate(&self, _prompt: &str) -> Result<GenerationReply, TrendpulseError> {
        match self.script.lock().await.pop_front() {
            Some(ScriptedResult::Reply(reply)) => Ok(reply),
            Some(ScriptedResult::Unavailable(message)) => Err(TrendpulseError::Unavailable {
                message,
                source: None,
            }),
            Some(ScriptedResult::Upstream { status, message }) => {
                Err(TrendpulseError::Upstream { status, message })
            }
            None => Ok(GenerationReply {
                content: Some("mock reply".to_string()),
                error: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pops_scripted_results_in_order() {
        let provider = MockProvider::new();
        provider.push_content("first").await;
        provider.push_unavailable("down").await;

        let reply = provider.generate("q").await.unwrap();
        assert_eq!(reply.content.as_deref(), Some("first"));

        let err = provider.generate("q").await.unwrap_err();
        assert!(matches!(err, TrendpulseError::Unavailable { .. }));

        // Exhausted script falls back to the default reply.
        let fallback = provider.generate("q").await.unwrap();
        assert_eq!(fallback.content.as_deref(), Some("mock reply"));
    }
}
