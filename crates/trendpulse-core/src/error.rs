// SPDX-FileCopyrightText: 2026 Trendpulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Trendpulse backend.

use thiserror::Error;

/// The primary error type used across all Trendpulse components.
///
/// The gateway maps each variant to an HTTP status: `Validation` is 400,
/// `Auth` is 401, `Unavailable` is 503, and everything else is 500.
#[derive(Debug, Error)]
pub enum TrendpulseError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// Bad input from the caller (empty query, malformed request, duplicate email).
    #[error("validation error: {0}")]
    Validation(String),

    /// Missing or invalid bearer credential on a protected route.
    #[error("authentication error: {0}")]
    Auth(String),

    /// Storage backend errors (database connection, query failure, serialization).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The generation endpoint was unreachable (connection refused or timeout).
    #[error("generation service unavailable: {message}")]
    Unavailable {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The generation endpoint answered with an error status.
    #[error("generation service error ({status}): {message}")]
    Upstream { status: u16, message: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl TrendpulseError {
    /// Convenience constructor for storage failures.
    pub fn storage<E>(source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Storage {
            source: Box::new(source),
        }
    }
}
