// SPDX-FileCopyrightText: 2026 Trendpulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the dashboard API.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, patch, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use trendpulse_auth::AuthService;
use trendpulse_chat::ChatProxy;
use trendpulse_config::model::ServerConfig;
use trendpulse_core::{IdentityVerifier, TrendpulseError};
use trendpulse_tracker::ProgressTracker;

use crate::auth::{AuthState, auth_middleware};
use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Registration and login.
    pub auth: Arc<AuthService>,
    /// Bearer token verification for the middleware layer.
    pub verifier: Arc<dyn IdentityVerifier>,
    /// Streak read/update operations.
    pub tracker: Arc<ProgressTracker>,
    /// Query proxying and transcript history.
    pub chat: Arc<ChatProxy>,
    /// Process start time for the health endpoint.
    pub start_time: Instant,
}

/// Build the full application router.
///
/// Public for integration tests, which drive it with `tower::ServiceExt`
/// instead of binding a socket.
pub fn build_router(state: AppState) -> Router {
    let auth_state = AuthState {
        verifier: state.verifier.clone(),
    };

    // Unauthenticated routes: account creation, login, liveness.
    let public_routes = Router::new()
        .route("/auth/register", post(handlers::post_register))
        .route("/auth/login", post(handlers::post_login))
        .route("/health", get(handlers::get_health))
        .with_state(state.clone());

    // Routes requiring a bearer token.
    let api_routes = Router::new()
        .route("/query", post(handlers::post_query))
        .route("/chat-history", get(handlers::get_chat_history))
        .route("/progress", get(handlers::get_progress))
        .route("/progress/update", patch(handlers::patch_progress_update))
        .route_layer(axum_middleware::from_fn_with_state(
            auth_state,
            auth_middleware,
        ))
        .with_state(state);

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Start the gateway HTTP server and serve until the process exits.
pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<(), TrendpulseError> {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| TrendpulseError::Internal(format!("failed to bind gateway to {addr}: {e}")))?;

    tracing::info!("Gateway server listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| TrendpulseError::Internal(format!("gateway server error: {e}")))?;

    Ok(())
}
