// SPDX-FileCopyrightText: 2026 Trendpulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as valid bind addresses, plausible URLs, and minimum
//! secret lengths. Collects all errors instead of failing fast.

use crate::diagnostic::ConfigError;
use crate::model::TrendpulseConfig;

/// Minimum length for the token signing secret, in bytes.
const MIN_SECRET_LEN: usize = 32;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors.
pub fn validate_config(config: &TrendpulseConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let host = config.server.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.host must not be empty".to_string(),
        });
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("server.host `{host}` is not a valid IP address or hostname"),
            });
        }
    }

    if let Some(secret) = &config.auth.token_secret
        && secret.len() < MIN_SECRET_LEN
    {
        errors.push(ConfigError::Validation {
            message: format!(
                "auth.token_secret must be at least {MIN_SECRET_LEN} bytes, got {}",
                secret.len()
            ),
        });
    }

    if config.auth.token_ttl_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "auth.token_ttl_secs must be positive".to_string(),
        });
    }

    let endpoint = config.upstream.endpoint.trim();
    if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        errors.push(ConfigError::Validation {
            message: format!("upstream.endpoint `{endpoint}` must be an http(s) URL"),
        });
    }

    if config.upstream.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "upstream.timeout_secs must be positive".to_string(),
        });
    }

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
