// SPDX-FileCopyrightText: 2026 Trendpulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Trendpulse dashboard backend.
//!
//! This crate provides the error taxonomy, domain types, and seam traits
//! used throughout the Trendpulse workspace. Components depend on the traits
//! defined here, never on each other.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::TrendpulseError;
pub use types::{ChatTranscriptEntry, GenerationReply, StreakRecord, UserAccount, UserId};

pub use traits::{GenerationProvider, IdentityVerifier, ProgressStore, TranscriptStore, UserStore};
