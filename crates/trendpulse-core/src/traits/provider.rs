// SPDX-FileCopyrightText: 2026 Trendpulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generation provider seam: prompt in, text out.

use async_trait::async_trait;

use crate::error::TrendpulseError;
use crate::types::GenerationReply;

/// External text-generation collaborator.
///
/// A single bounded attempt per call: implementations must surface timeout
/// expiry as `TrendpulseError::Unavailable` rather than hanging the caller.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Forwards the prompt to the generation endpoint and returns its reply.
    async fn generate(&self, prompt: &str) -> Result<GenerationReply, TrendpulseError>;
}
