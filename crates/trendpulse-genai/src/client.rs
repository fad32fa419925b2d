// SPDX-FileCopyrightText: 2026 Trendpulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the generation endpoint.
//!
//! Speaks the collaborator's minimal contract: `POST {endpoint}` with
//! `{"prompt": ...}`, reply `{content?, error?}`. One bounded attempt per
//! call; the timeout budget comes from configuration.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use serde::Serialize;
use tracing::debug;

use trendpulse_config::model::UpstreamConfig;
use trendpulse_core::{GenerationReply, TrendpulseError};

/// Request body for the generation endpoint.
#[derive(Debug, Serialize)]
struct PromptRequest<'a> {
    prompt: &'a str,
}

/// HTTP client for the external text-generation service.
///
/// Failure taxonomy: connection refused or timeout maps to `Unavailable`,
/// an error status maps to `Upstream` with the upstream's status and
/// message, everything else is `Internal`. No retries: a single attempt is
/// made per incoming request.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    client: reqwest::Client,
    endpoint: String,
}

impl GenerationClient {
    /// Build a client with the configured endpoint and timeout budget.
    pub fn new(config: &UpstreamConfig) -> Result<Self, TrendpulseError> {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TrendpulseError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Send the prompt and return the parsed reply.
    pub async fn ask(&self, prompt: &str) -> Result<GenerationReply, TrendpulseError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&PromptRequest { prompt })
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        debug!(status = %status, "generation response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<GenerationReply>(&body)
                .ok()
                .and_then(|reply| reply.error)
                .unwrap_or(body);
            return Err(TrendpulseError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<GenerationReply>()
            .await
            .map_err(|e| TrendpulseError::Internal(format!("failed to parse reply: {e}")))
    }
}

/// Map a reqwest send failure onto the workspace error taxonomy.
fn classify_send_error(e: reqwest::Error) -> TrendpulseError {
    if e.is_timeout() || e.is_connect() {
        TrendpulseError::Unavailable {
            message: format!("generation service unreachable: {e}"),
            source: Some(Box::new(e)),
        }
    } else {
        TrendpulseError::Internal(format!("generation request failed: {e}"))
    }
}
