// SPDX-FileCopyrightText: 2026 Trendpulse Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end API tests driving the full router with a temp SQLite store
//! and a scripted generation provider. No sockets are bound; requests go
//! through `tower::ServiceExt::oneshot`.

use std::sync::Arc;
use std::time::Instant;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use trendpulse_auth::{AuthService, TokenService};
use trendpulse_chat::{ChatProxy, FALLBACK_RESPONSE};
use trendpulse_config::model::StorageConfig;
use trendpulse_gateway::{AppState, build_router};
use trendpulse_storage::SqliteStore;
use trendpulse_test_utils::MockProvider;
use trendpulse_tracker::ProgressTracker;

struct TestApp {
    router: Router,
    provider: Arc<MockProvider>,
    _dir: tempfile::TempDir,
}

async fn test_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("gateway.db");
    let store = Arc::new(
        SqliteStore::open(&StorageConfig {
            database_path: db_path.to_str().unwrap().to_string(),
            wal_mode: false,
        })
        .await
        .unwrap(),
    );

    let tokens = TokenService::new("0123456789abcdef0123456789abcdef", 3600);
    let provider = Arc::new(MockProvider::new());

    let state = AppState {
        auth: Arc::new(AuthService::new(store.clone(), tokens.clone())),
        verifier: Arc::new(tokens),
        tracker: Arc::new(ProgressTracker::new(store.clone())),
        chat: Arc::new(ChatProxy::new(provider.clone(), store)),
        start_time: Instant::now(),
    };

    TestApp {
        router: build_router(state),
        provider,
        _dir: dir,
    }
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn authed_request(
    method: &str,
    uri: &str,
    token: &str,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"));
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Register an account and return a bearer token for it.
async fn register_and_login(app: &TestApp, email: &str) -> String {
    let creds = serde_json::json!({"email": email, "password": "hunter2hunter2"});
    let response = app
        .router
        .clone()
        .oneshot(json_request("POST", "/auth/register", creds.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .router
        .clone()
        .oneshot(json_request("POST", "/auth/login", creds))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    body["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn health_is_public() {
    let app = test_app().await;
    let response = app
        .router
        .clone()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn register_login_and_query_round_trip() {
    let app = test_app().await;
    app.provider.push_content("memes, mostly").await;

    let token = register_and_login(&app, "alice@example.com").await;

    let response = app
        .router
        .clone()
        .oneshot(authed_request(
            "POST",
            "/query",
            &token,
            Some(serde_json::json!({"query": "what is trending?"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["response"], "memes, mostly");

    // The exchange landed in history.
    let response = app
        .router
        .clone()
        .oneshot(authed_request("GET", "/chat-history", &token, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let history = body_json(response).await;
    let entries = history.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["query"], "what is trending?");
    assert_eq!(entries[0]["response"], "memes, mostly");
}

#[tokio::test]
async fn duplicate_registration_is_400() {
    let app = test_app().await;
    let creds = serde_json::json!({"email": "dup@example.com", "password": "pw-long-enough"});

    let response = app
        .router
        .clone()
        .oneshot(json_request("POST", "/auth/register", creds.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .router
        .clone()
        .oneshot(json_request("POST", "/auth/register", creds))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "user already exists");
}

#[tokio::test]
async fn login_with_wrong_password_is_400() {
    let app = test_app().await;
    register_and_login(&app, "bob@example.com").await;

    let response = app
        .router
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/login",
            serde_json::json!({"email": "bob@example.com", "password": "wrong"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn protected_routes_require_a_token() {
    let app = test_app().await;
    for (method, uri) in [
        ("POST", "/query"),
        ("GET", "/chat-history"),
        ("GET", "/progress"),
        ("PATCH", "/progress/update"),
    ] {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();
        let response = app.router.clone().oneshot(request).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::UNAUTHORIZED,
            "{method} {uri}"
        );
    }
}

#[tokio::test]
async fn garbage_token_is_401() {
    let app = test_app().await;
    let response = app
        .router
        .clone()
        .oneshot(authed_request("GET", "/progress", "not-a-token", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    // Auth failures carry the two-field envelope too.
    let body = body_json(response).await;
    assert!(body["message"].is_string());
    assert!(body["error"].as_str().unwrap().starts_with("authentication error"));
}

#[tokio::test]
async fn empty_query_is_400() {
    let app = test_app().await;
    let token = register_and_login(&app, "carol@example.com").await;

    let response = app
        .router
        .clone()
        .oneshot(authed_request(
            "POST",
            "/query",
            &token,
            Some(serde_json::json!({"query": "   "})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["message"], "query is required");
    assert_eq!(body["error"], "validation error: query is required");
}

#[tokio::test]
async fn unreachable_generation_service_is_503() {
    let app = test_app().await;
    let token = register_and_login(&app, "dave@example.com").await;
    app.provider.push_unavailable("connection refused").await;

    let response = app
        .router
        .clone()
        .oneshot(authed_request(
            "POST",
            "/query",
            &token,
            Some(serde_json::json!({"query": "hello"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = body_json(response).await;
    assert_eq!(body["message"], "AI service unavailable");
}

#[tokio::test]
async fn blank_reply_returns_the_fallback() {
    let app = test_app().await;
    let token = register_and_login(&app, "erin@example.com").await;
    app.provider
        .push_reply(trendpulse_core::GenerationReply::default())
        .await;

    let response = app
        .router
        .clone()
        .oneshot(authed_request(
            "POST",
            "/query",
            &token,
            Some(serde_json::json!({"query": "hello"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["response"], FALLBACK_RESPONSE);
}

#[tokio::test]
async fn progress_is_created_lazily_and_updates_persist() {
    let app = test_app().await;
    let token = register_and_login(&app, "frank@example.com").await;

    // First read creates a zeroed record.
    let response = app
        .router
        .clone()
        .oneshot(authed_request("GET", "/progress", &token, None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["currentStreak"], 0);
    assert_eq!(body["highestStreak"], 0);

    // A failure report resets (still zero) and persists.
    let response = app
        .router
        .clone()
        .oneshot(authed_request(
            "PATCH",
            "/progress/update",
            &token,
            Some(serde_json::json!({"success": false})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["currentStreak"], 0);

    // The record survives a fresh read.
    let response = app
        .router
        .clone()
        .oneshot(authed_request("GET", "/progress", &token, None))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert_eq!(body["currentStreak"], 0);
    assert_eq!(body["highestStreak"], 0);
}

#[tokio::test]
async fn history_is_isolated_between_users() {
    let app = test_app().await;
    let alice = register_and_login(&app, "alice2@example.com").await;
    let bob = register_and_login(&app, "bob2@example.com").await;

    app.provider.push_content("for alice").await;
    let response = app
        .router
        .clone()
        .oneshot(authed_request(
            "POST",
            "/query",
            &alice,
            Some(serde_json::json!({"query": "hi"})),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .router
        .clone()
        .oneshot(authed_request("GET", "/chat-history", &bob, None))
        .await
        .unwrap();
    let history = body_json(response).await;
    assert_eq!(history.as_array().unwrap().len(), 0);
}
