//! `AppError` to HTTP response mapping, without a server.

mod common;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use cardvault_api::error::AppError;
use cardvault_core::error::CoreError;
use cardvault_core::validation::FieldErrors;
use cardvault_db::RepoError;
use common::{body_json, empty_app, post_json};
use serde_json::{json, Value};

async fn error_to_response(err: AppError) -> (StatusCode, Value) {
    let response = err.into_response();
    let status = response.status();
    (status, body_json(response).await)
}

#[tokio::test]
async fn not_found_returns_404_with_entity_message() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Card",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({"message": "Card not found", "code": 404}));
}

#[tokio::test]
async fn repository_not_found_returns_404() {
    let err = AppError::from(RepoError::NotFound {
        entity: "Image",
        id: 3,
    });
    assert_matches!(err, AppError::Repo(_));

    let (status, json) = error_to_response(err).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Image not found");
}

#[tokio::test]
async fn validation_returns_field_map() {
    let mut errors = FieldErrors::default();
    errors.add("name", "The name field is required.".to_string());
    errors.add("amount", "The amount must be decimal.".to_string());

    let (status, json) = error_to_response(AppError::Core(CoreError::Validation(errors))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        json!({
            "message": {
                "amount": ["The amount must be decimal."],
                "name": ["The name field is required."]
            },
            "code": 400
        })
    );
}

#[tokio::test]
async fn unauthorized_returns_401() {
    let err = AppError::Core(CoreError::Unauthorized("Missing Authorization header".into()));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Missing Authorization header");
}

#[tokio::test]
async fn constraint_violation_is_sanitized_500() {
    let err = AppError::Repo(RepoError::Constraint(
        "duplicate key value violates unique constraint (uq_users_email)".into(),
    ));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, json!({"message": "An internal error occurred", "code": 500}));
}

#[tokio::test]
async fn internal_errors_never_leak_detail() {
    for err in [
        AppError::InternalError("secret database credentials leaked".into()),
        AppError::Core(CoreError::Internal("connection refused".into())),
        AppError::Repo(RepoError::Database(sqlx::Error::PoolTimedOut)),
    ] {
        let (status, json) = error_to_response(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["message"], "An internal error occurred");
    }
}

#[tokio::test]
async fn malformed_json_body_is_400_json() {
    let (app, _repos) = empty_app();
    let request = axum::http::Request::builder()
        .method("POST")
        .uri("/api/v1/users")
        .header("Content-Type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let response = tower::ServiceExt::oneshot(app, request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], 400);
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn non_object_body_is_400() {
    let (app, _repos) = empty_app();
    let response = post_json(app, "/api/v1/users", json!(["not", "an", "object"])).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], 400);
}
