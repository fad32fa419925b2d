// SPDX-FileCopyrightText: 2026 Trendpulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `trendpulse serve`: wire the components together and run the gateway.

use std::sync::Arc;
use std::time::Instant;

use tracing_subscriber::EnvFilter;

use trendpulse_auth::{AuthService, TokenService};
use trendpulse_chat::ChatProxy;
use trendpulse_config::TrendpulseConfig;
use trendpulse_core::TrendpulseError;
use trendpulse_gateway::{AppState, start_server};
use trendpulse_genai::GenerationClient;
use trendpulse_storage::SqliteStore;
use trendpulse_tracker::ProgressTracker;

/// Initialize tracing from the configured log level. `RUST_LOG` still wins
/// when set.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("trendpulse={log_level}")));
    // try_init so a second call (tests) is a no-op instead of a panic.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Run the server until the process is terminated.
pub async fn run(config: TrendpulseConfig) -> Result<(), TrendpulseError> {
    init_tracing(&config.server.log_level);

    let token_secret = config.auth.token_secret.as_deref().ok_or_else(|| {
        TrendpulseError::Config(
            "auth.token_secret is required to serve (set TRENDPULSE_AUTH_TOKEN_SECRET)".into(),
        )
    })?;

    let store = Arc::new(SqliteStore::open(&config.storage).await?);
    let tokens = TokenService::new(token_secret, config.auth.token_ttl_secs);
    let provider = Arc::new(GenerationClient::new(&config.upstream)?);

    let state = AppState {
        auth: Arc::new(AuthService::new(store.clone(), tokens.clone())),
        verifier: Arc::new(tokens),
        tracker: Arc::new(ProgressTracker::new(store.clone())),
        chat: Arc::new(ChatProxy::new(provider, store.clone())),
        start_time: Instant::now(),
    };

    tracing::info!(
        endpoint = %config.upstream.endpoint,
        database = %config.storage.database_path,
        "starting trendpulse"
    );

    let result = start_server(&config.server, state).await;

    // Flush the WAL on the way out; serve only returns on bind/serve errors.
    if let Err(e) = store.close().await {
        tracing::warn!(error = %e, "failed to close store cleanly");
    }

    result
}
