//! HTTP tests for token issuance and the bearer-token guard.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{body_json, empty_app, get_auth, post_json, seed_user, seeded_app, token_for};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn issued_token_unlocks_protected_routes() {
    let (app, repos) = empty_app();
    let user = seed_user(&repos, "yugi@example.com").await;

    let response = post_json(
        app.clone(),
        "/api/v1/auth/tokens",
        json!({"user_id": user.id, "token_name": "deck builder"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let token = json["access_token"].as_str().unwrap().to_string();
    assert_eq!(json.as_object().unwrap().len(), 1);

    let response = get_auth(app, "/api/v1/cards", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn token_for_unknown_user_is_rejected() {
    let (app, _repos) = empty_app();
    let response = post_json(
        app,
        "/api/v1/auth/tokens",
        json!({"user_id": 5, "token_name": "cli"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"]["user_id"], json!(["The selected user id is invalid."]));
}

#[tokio::test]
async fn token_name_is_required() {
    let (app, repos) = empty_app();
    let user = seed_user(&repos, "yugi@example.com").await;

    let response = post_json(app, "/api/v1/auth/tokens", json!({"user_id": user.id})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["message"]["token_name"], json!(["The token name field is required."]));
}

#[tokio::test]
async fn garbage_token_is_unauthorized() {
    let (app, _repos, _token) = seeded_app().await;
    let response = get_auth(app, "/api/v1/images", "not-a-jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(response).await,
        json!({"message": "Invalid or expired token", "code": 401})
    );
}

#[tokio::test]
async fn non_bearer_scheme_is_unauthorized() {
    let (app, _repos, token) = seeded_app().await;
    let request = Request::builder()
        .uri("/api/v1/subtypes")
        .header("Authorization", format!("Token {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_for_missing_user_is_unauthorized() {
    let (app, _repos) = empty_app();
    let response = get_auth(app, "/api/v1/cards", &token_for(12)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["message"], "Token owner no longer exists");
}
