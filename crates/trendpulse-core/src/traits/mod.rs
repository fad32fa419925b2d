// SPDX-FileCopyrightText: 2026 Trendpulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Seam traits between components and their external collaborators.

pub mod auth;
pub mod provider;
pub mod store;

pub use auth::IdentityVerifier;
pub use provider::GenerationProvider;
pub use store::{ProgressStore, TranscriptStore, UserStore};
