// SPDX-FileCopyrightText: 2026 Trendpulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Identity verification seam.

use crate::error::TrendpulseError;
use crate::types::UserId;

/// Verifies a bearer credential and yields the stable user identifier.
///
/// The Progress Tracker and Chat Proxy only ever consume
/// "verify(token) -> user id or failure"; issuance lives with the
/// implementing collaborator.
pub trait IdentityVerifier: Send + Sync {
    /// Validates the given token and returns the verified user id.
    fn verify(&self, token: &str) -> Result<UserId, TrendpulseError>;
}
