// SPDX-FileCopyrightText: 2026 Trendpulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Compact HMAC-SHA256 bearer tokens.
//!
//! Format: `base64url(payload).hex(mac)` where the payload is
//! `{"sub": user_id, "exp": unix_secs}` and the MAC is computed over the
//! encoded payload bytes. Verification is constant-time and checks expiry.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Duration, Utc};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;

use trendpulse_core::{IdentityVerifier, TrendpulseError, UserId};

type HmacSha256 = Hmac<Sha256>;

/// Signed token payload.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// The user id the token was issued to.
    sub: String,
    /// Expiry as unix seconds.
    exp: i64,
}

/// Issues and verifies bearer tokens with a shared HMAC key.
#[derive(Clone)]
pub struct TokenService {
    key: Vec<u8>,
    ttl: Duration,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("key", &"[redacted]")
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl TokenService {
    /// Create a token service with the given signing key and token lifetime.
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        Self {
            key: secret.as_bytes().to_vec(),
            ttl: Duration::seconds(ttl_secs as i64),
        }
    }

    /// Issue a token for the given user, expiring `ttl` from now.
    pub fn issue(&self, user_id: &UserId) -> String {
        self.issue_at(user_id, Utc::now())
    }

    /// Issue a token as of an explicit instant. Exposed for expiry tests.
    pub fn issue_at(&self, user_id: &UserId, now: DateTime<Utc>) -> String {
        let claims = Claims {
            sub: user_id.0.clone(),
            exp: (now + self.ttl).timestamp(),
        };
        // Claims serialization cannot fail: two plain fields.
        let payload = serde_json::to_vec(&claims).expect("claims serialize");
        let encoded = URL_SAFE_NO_PAD.encode(payload);

        let mut mac = HmacSha256::new_from_slice(&self.key).expect("hmac accepts any key length");
        mac.update(encoded.as_bytes());
        let tag = hex::encode(mac.finalize().into_bytes());

        format!("{encoded}.{tag}")
    }

    /// Verify a token as of an explicit instant.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<UserId, TrendpulseError> {
        let (encoded, tag_hex) = token
            .split_once('.')
            .ok_or_else(|| TrendpulseError::Auth("malformed token".into()))?;

        let tag = hex::decode(tag_hex)
            .map_err(|_| TrendpulseError::Auth("malformed token signature".into()))?;

        let mut mac = HmacSha256::new_from_slice(&self.key).expect("hmac accepts any key length");
        mac.update(encoded.as_bytes());
        // Constant-time comparison.
        mac.verify_slice(&tag)
            .map_err(|_| TrendpulseError::Auth("invalid token signature".into()))?;

        let payload = URL_SAFE_NO_PAD
            .decode(encoded)
            .map_err(|_| TrendpulseError::Auth("malformed token payload".into()))?;
        let claims: Claims = serde_json::from_slice(&payload)
            .map_err(|_| TrendpulseError::Auth("malformed token payload".into()))?;

        if claims.exp < now.timestamp() {
            return Err(TrendpulseError::Auth("token expired".into()));
        }

        Ok(UserId(claims.sub))
    }
}

impl IdentityVerifier for TokenService {
    fn verify(&self, token: &str) -> Result<UserId, TrendpulseError> {
        self.verify_at(token, Utc::now())
    }
}
