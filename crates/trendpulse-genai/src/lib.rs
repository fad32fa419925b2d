// SPDX-FileCopyrightText: 2026 Trendpulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client for the external generation endpoint, implementing the
//! [`GenerationProvider`] seam consumed by the Chat Proxy.

pub mod client;

use async_trait::async_trait;

use trendpulse_core::{GenerationProvider, GenerationReply, TrendpulseError};

pub use client::GenerationClient;

#[async_trait]
impl GenerationProvider for GenerationClient {
    async fn generate(&self, prompt: &str) -> Result<GenerationReply, TrendpulseError> {
        self.ask(prompt).await
    }
}
