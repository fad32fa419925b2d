// SPDX-FileCopyrightText: 2026 Trendpulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the dashboard REST API.
//!
//! Auth routes are public; query, history, and progress routes run behind
//! the bearer middleware and read the verified user id from the request
//! extensions.

use axum::extract::{Extension, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use trendpulse_core::{ChatTranscriptEntry, StreakRecord, UserId};

use crate::error::ApiError;
use crate::server::AppState;

/// Request body for POST /auth/register and POST /auth/login.
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

/// Response body for POST /auth/register.
#[derive(Debug, Serialize)]
pub struct RegisterReply {
    pub message: String,
}

/// Response body for POST /auth/login.
#[derive(Debug, Serialize)]
pub struct LoginReply {
    pub token: String,
    pub message: String,
}

/// Request body for POST /query.
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub query: String,
}

/// Response body for POST /query.
#[derive(Debug, Serialize)]
pub struct QueryReply {
    pub response: String,
}

/// Request body for PATCH /progress/update.
#[derive(Debug, Deserialize)]
pub struct UpdateProgressRequest {
    pub success: bool,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthReply {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

/// POST /auth/register
pub async fn post_register(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<RegisterReply>), ApiError> {
    state.auth.register(&body.email, &body.password).await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterReply {
            message: "User registered successfully".to_string(),
        }),
    ))
}

/// POST /auth/login
pub async fn post_login(
    State(state): State<AppState>,
    Json(body): Json<CredentialsRequest>,
) -> Result<Json<LoginReply>, ApiError> {
    let token = state.auth.login(&body.email, &body.password).await?;
    Ok(Json(LoginReply {
        token,
        message: "Login successful".to_string(),
    }))
}

/// POST /query
///
/// Forwards the query to the generation service. The response reaches the
/// caller even when the transcript write fails.
pub async fn post_query(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserId>,
    Json(body): Json<QueryRequest>,
) -> Result<Json<QueryReply>, ApiError> {
    let outcome = state.chat.process_query(&user_id, &body.query).await?;
    Ok(Json(QueryReply {
        response: outcome.response().to_string(),
    }))
}

/// GET /chat-history
pub async fn get_chat_history(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserId>,
) -> Result<Json<Vec<ChatTranscriptEntry>>, ApiError> {
    Ok(Json(state.chat.history(&user_id).await?))
}

/// GET /progress
///
/// Returns the user's streak record, creating a zeroed one on first contact.
pub async fn get_progress(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserId>,
) -> Result<Json<StreakRecord>, ApiError> {
    Ok(Json(state.tracker.get_or_create(&user_id).await?))
}

/// PATCH /progress/update
pub async fn patch_progress_update(
    State(state): State<AppState>,
    Extension(user_id): Extension<UserId>,
    Json(body): Json<UpdateProgressRequest>,
) -> Result<Json<StreakRecord>, ApiError> {
    Ok(Json(state.tracker.update(&user_id, body.success).await?))
}

/// GET /health
pub async fn get_health(State(state): State<AppState>) -> Json<HealthReply> {
    Json(HealthReply {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}
