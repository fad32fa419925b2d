// SPDX-FileCopyrightText: 2026 Trendpulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bearer authentication middleware.
//!
//! Protected routes require `Authorization: Bearer <token>`. The token is
//! checked by the configured [`IdentityVerifier`]; on success the verified
//! [`UserId`] is attached as a request extension for handlers to extract.
//! All failures are 401 with the standard error envelope (fail-closed).

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use trendpulse_core::{IdentityVerifier, TrendpulseError};

use crate::error::ApiError;

/// Shared verifier handle for the middleware layer.
#[derive(Clone)]
pub struct AuthState {
    pub verifier: Arc<dyn IdentityVerifier>,
}

/// Middleware that validates the bearer token and stamps the request with
/// the verified user id.
pub async fn auth_middleware(
    State(auth): State<AuthState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = request
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| TrendpulseError::Auth("missing bearer token".into()))?;

    let user_id = auth.verifier.verify(token)?;
    request.extensions_mut().insert(user_id);
    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use trendpulse_core::UserId;

    struct FixedVerifier;

    impl IdentityVerifier for FixedVerifier {
        fn verify(&self, token: &str) -> Result<UserId, TrendpulseError> {
            if token == "good" {
                Ok(UserId("u-1".into()))
            } else {
                Err(TrendpulseError::Auth("invalid token".into()))
            }
        }
    }

    #[test]
    fn auth_state_is_clone() {
        let state = AuthState {
            verifier: Arc::new(FixedVerifier),
        };
        let cloned = state.clone();
        assert!(cloned.verifier.verify("good").is_ok());
        assert!(cloned.verifier.verify("bad").is_err());
    }
}
