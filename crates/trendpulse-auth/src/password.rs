// SPDX-FileCopyrightText: 2026 Trendpulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Password hashing with argon2id.
//!
//! Hashes are stored as PHC strings, so parameters and salt travel with the
//! hash and can be upgraded without a schema change.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;

use trendpulse_core::TrendpulseError;

/// Hash a password with a fresh random salt.
pub fn hash_password(password: &str) -> Result<String, TrendpulseError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| TrendpulseError::Internal(format!("password hashing failed: {e}")))
}

/// Verify a password against a stored PHC hash string.
///
/// A malformed stored hash is an internal error; a mismatching password is
/// `Ok(false)`.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool, TrendpulseError> {
    let parsed = PasswordHash::new(stored_hash)
        .map_err(|e| TrendpulseError::Internal(format!("stored password hash is invalid: {e}")))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
