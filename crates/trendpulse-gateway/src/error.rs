// SPDX-FileCopyrightText: 2026 Trendpulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP error mapping.
//!
//! Wraps [`TrendpulseError`] so every handler can return `Result<_, ApiError>`
//! and the wire envelope stays uniform: `{"message": ..., "error": ...?}`.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use trendpulse_core::TrendpulseError;

/// Error envelope returned on every non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Short user-facing description.
    pub message: String,
    /// Underlying detail, when one exists beyond the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Handler error: a [`TrendpulseError`] plus its HTTP mapping.
#[derive(Debug)]
pub struct ApiError(pub TrendpulseError);

impl From<TrendpulseError> for ApiError {
    fn from(err: TrendpulseError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// The status this error maps to. Validation is the caller's fault,
    /// Auth is a credential problem, Unavailable means the generation
    /// service could not be reached; everything else is a server error.
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            TrendpulseError::Validation(_) => StatusCode::BAD_REQUEST,
            TrendpulseError::Auth(_) => StatusCode::UNAUTHORIZED,
            TrendpulseError::Unavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self.0 {
            // `message` carries the bare description, `error` the classified
            // form, mirroring the two-field envelope the dashboard expects.
            TrendpulseError::Validation(message) | TrendpulseError::Auth(message) => ErrorBody {
                message: message.clone(),
                error: Some(self.0.to_string()),
            },
            TrendpulseError::Unavailable { message, .. } => ErrorBody {
                message: "AI service unavailable".to_string(),
                error: Some(message.clone()),
            },
            other => {
                tracing::error!(error = %other, "request failed");
                ErrorBody {
                    message: "Server error".to_string(),
                    error: Some(other.to_string()),
                }
            }
        };
        (status, Json(body)).into_response()
    }
}
