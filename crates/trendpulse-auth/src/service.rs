// SPDX-FileCopyrightText: 2026 Trendpulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registration and login on top of the user store.

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use trendpulse_core::{TrendpulseError, UserAccount, UserId, UserStore};

use crate::password;
use crate::token::TokenService;

/// Account registration and credential exchange.
///
/// Login failures (unknown email, wrong password) report as validation
/// errors, matching the dashboard's existing API contract; `Auth` is
/// reserved for bearer verification on protected routes.
pub struct AuthService {
    users: Arc<dyn UserStore>,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, tokens: TokenService) -> Self {
        Self { users, tokens }
    }

    /// Register a new account. Duplicate emails are rejected.
    pub async fn register(&self, email: &str, password: &str) -> Result<(), TrendpulseError> {
        let email = email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(TrendpulseError::Validation(
                "a valid email is required".into(),
            ));
        }
        if password.is_empty() {
            return Err(TrendpulseError::Validation("a password is required".into()));
        }

        if self.users.find_by_email(email).await?.is_some() {
            return Err(TrendpulseError::Validation("user already exists".into()));
        }

        let account = UserAccount {
            user_id: UserId(uuid::Uuid::new_v4().to_string()),
            email: email.to_string(),
            password_hash: password::hash_password(password)?,
            created_at: Utc::now(),
        };
        self.users.insert(&account).await?;

        info!(user_id = %account.user_id, "user registered");
        Ok(())
    }

    /// Exchange credentials for a bearer token.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, TrendpulseError> {
        let account = self
            .users
            .find_by_email(email.trim())
            .await?
            .ok_or_else(|| TrendpulseError::Validation("user not found".into()))?;

        if !password::verify_password(password, &account.password_hash)? {
            return Err(TrendpulseError::Validation("invalid credentials".into()));
        }

        info!(user_id = %account.user_id, "user logged in");
        Ok(self.tokens.issue(&account.user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use tokio::sync::Mutex;
    use trendpulse_core::IdentityVerifier;

    /// In-memory user store keyed by email.
    #[derive(Default)]
    struct MemoryUsers {
        by_email: Mutex<HashMap<String, UserAccount>>,
    }

    #[async_trait]
    impl UserStore for MemoryUsers {
        async fn find_by_email(
            &self,
            email: &str,
        ) -> Result<Option<UserAccount>, TrendpulseError> {
            Ok(self.by_email.lock().await.get(email).cloned())
        }

        async fn insert(&self, account: &UserAccount) -> Result<(), TrendpulseError> {
            self.by_email
                .lock()
                .await
                .insert(account.email.clone(), account.clone());
            Ok(())
        }
    }

    fn make_service() -> (AuthService, TokenService) {
        let tokens = TokenService::new("0123456789abcdef0123456789abcdef", 3600);
        let service = AuthService::new(Arc::new(MemoryUsers::default()), tokens.clone());
        (service, tokens)
    }

    #[tokio::test]
    async fn register_then_login_yields_verifiable_token() {
        let (service, tokens) = make_service();

        service
            .register("dana@example.com", "s3cret-enough")
            .await
            .unwrap();
        let token = service
            .login("dana@example.com", "s3cret-enough")
            .await
            .unwrap();

        let user_id = tokens.verify(&token).unwrap();
        assert!(!user_id.0.is_empty());
    }

    #[tokio::test]
    async fn duplicate_registration_is_rejected() {
        let (service, _) = make_service();

        service.register("e@example.com", "password1").await.unwrap();
        let err = service.register("e@example.com", "password2").await.unwrap_err();
        assert!(matches!(err, TrendpulseError::Validation(_)));
    }

    #[tokio::test]
    async fn login_with_unknown_email_fails() {
        let (service, _) = make_service();
        let err = service.login("ghost@example.com", "pw").await.unwrap_err();
        assert!(matches!(err, TrendpulseError::Validation(_)));
    }

    #[tokio::test]
    async fn login_with_wrong_password_fails() {
        let (service, _) = make_service();
        service.register("f@example.com", "right-password").await.unwrap();
        let err = service.login("f@example.com", "wrong-password").await.unwrap_err();
        assert!(matches!(err, TrendpulseError::Validation(_)));
    }

    #[tokio::test]
    async fn register_rejects_blank_inputs() {
        let (service, _) = make_service();
        assert!(service.register("", "pw").await.is_err());
        assert!(service.register("not-an-email", "pw").await.is_err());
        assert!(service.register("g@example.com", "").await.is_err());
    }
}
