//! Shared helpers for HTTP integration tests.
//!
//! Apps are built with [`build_app_router`] over an in-memory store, so the
//! tests run the production middleware stack without a database.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use cardvault_api::auth::jwt::{generate_access_token, JwtConfig};
use cardvault_api::config::ServerConfig;
use cardvault_api::router::build_app_router;
use cardvault_api::state::AppState;
use cardvault_db::models::image::{CreateImage, Image, ImageExtension};
use cardvault_db::models::subtype::CreateSubtype;
use cardvault_db::models::user::{CreateUser, User};
use cardvault_db::repositories::Repositories;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Subtype names in the order the seed migration inserts them (ids 1..=5).
pub const SEED_SUBTYPES: [&str; 5] = [
    "Regular Monster",
    "Effect Monster",
    "Ritual Monster",
    "Quick Play Magic Card",
    "Counter Trap Cards",
];

/// A tiny valid base64 payload.
pub const PNG_BASE64: &str = "iVBORw0KGgoAAAANSUhEUg==";

pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router over `repos`.
pub fn build_test_app(repos: Repositories) -> Router {
    let config = test_config();
    let state = AppState {
        repos,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Empty store, ready-built app.
pub fn empty_app() -> (Router, Repositories) {
    let repos = Repositories::in_memory();
    (build_test_app(repos.clone()), repos)
}

/// Store holding the seed subtypes, one image (id 1), and one user (id 1),
/// plus a valid bearer token for that user.
pub async fn seeded_app() -> (Router, Repositories, String) {
    let (app, repos) = empty_app();
    for name in SEED_SUBTYPES {
        repos
            .subtypes
            .create(&CreateSubtype {
                name: name.to_string(),
            })
            .await
            .unwrap();
    }
    seed_image(&repos, "dark magician").await;
    let user = seed_user(&repos, "yugi@example.com").await;
    let token = token_for(user.id);
    (app, repos, token)
}

pub async fn seed_user(repos: &Repositories, email: &str) -> User {
    repos
        .users
        .create(&CreateUser {
            name: "Yugi Muto".to_string(),
            email: email.to_string(),
            password_hash: "$argon2id$not-a-real-hash".to_string(),
            remember_token: "heart of the cards".to_string(),
        })
        .await
        .unwrap()
}

pub async fn seed_image(repos: &Repositories, name: &str) -> Image {
    repos
        .images
        .create(&CreateImage {
            name: name.to_string(),
            extension: ImageExtension::Png,
            file: PNG_BASE64.to_string(),
        })
        .await
        .unwrap()
}

/// A signed token for `user_id` using the test secret.
pub fn token_for(user_id: i64) -> String {
    generate_access_token(user_id, "integration tests", &test_config().jwt).unwrap()
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Read the response body as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, Method::POST, uri, None, Some(body)).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn patch_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    send(app, Method::PATCH, uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, Some(token), None).await
}
