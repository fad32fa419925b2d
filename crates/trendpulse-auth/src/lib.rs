// SPDX-FileCopyrightText: 2026 Trendpulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Authentication for the Trendpulse backend.
//!
//! Three pieces: argon2id password hashing, compact HMAC-signed bearer
//! tokens, and the register/login service tying them to the user store.
//! [`TokenService`] implements the core [`IdentityVerifier`] seam consumed
//! by the gateway middleware.
//!
//! [`IdentityVerifier`]: trendpulse_core::IdentityVerifier

pub mod password;
pub mod service;
pub mod token;

pub use service::AuthService;
pub use token::TokenService;
