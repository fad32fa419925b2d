// SPDX-FileCopyrightText: 2026 Trendpulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./trendpulse.toml` >
//! `~/.config/trendpulse/trendpulse.toml` > `/etc/trendpulse/trendpulse.toml`
//! with environment variable overrides via the `TRENDPULSE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::TrendpulseConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/trendpulse/trendpulse.toml` (system-wide)
/// 3. `~/.config/trendpulse/trendpulse.toml` (user XDG config)
/// 4. `./trendpulse.toml` (local directory)
/// 5. `TRENDPULSE_*` environment variables
pub fn load_config() -> Result<TrendpulseConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TrendpulseConfig::default()))
        .merge(Toml::file("/etc/trendpulse/trendpulse.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("trendpulse/trendpulse.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("trendpulse.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<TrendpulseConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TrendpulseConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<TrendpulseConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TrendpulseConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `TRENDPULSE_AUTH_TOKEN_SECRET` must map
/// to `auth.token_secret`, not `auth.token.secret`.
fn env_provider() -> Env {
    Env::prefixed("TRENDPULSE_").map(|key| {
        // `key` arrives in the variable's original case with the prefix
        // stripped, e.g. TRENDPULSE_AUTH_TOKEN_SECRET -> "AUTH_TOKEN_SECRET".
        // Lowercase first so the section prefixes match.
        let mapped = key
            .as_str()
            .to_lowercase()
            .replacen("server_", "server.", 1)
            .replacen("auth_", "auth.", 1)
            .replacen("upstream_", "upstream.", 1)
            .replacen("storage_", "storage.", 1);
        mapped.into()
    })
}
