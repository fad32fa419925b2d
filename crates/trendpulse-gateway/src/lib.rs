// SPDX-FileCopyrightText: 2026 Trendpulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Trendpulse dashboard backend.
//!
//! Exposes the REST API consumed by the dashboard frontend: auth, chat
//! proxying, transcript history, and streak progress. Business logic lives
//! in the component crates; this crate only maps HTTP on and off.

pub mod auth;
pub mod error;
pub mod handlers;
pub mod server;

pub use error::{ApiError, ErrorBody};
pub use server::{AppState, build_router, start_server};
