use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cardvault_core::error::CoreError;
use cardvault_db::RepoError;
use serde_json::{json, Value};

/// Message returned in place of any 500 detail.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Every variant renders as `{"message": ..., "code": <status>}`. For
/// validation failures `message` is the map of field name to messages.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cardvault_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A repository failure from `cardvault_db`.
    #[error(transparent)]
    Repo(#[from] RepoError),

    /// A malformed request that never reached validation.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, json!(core.to_string())),
                CoreError::Validation(errors) => (StatusCode::BAD_REQUEST, json!(errors)),
                CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, json!(msg)),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal()
                }
            },

            AppError::Repo(repo) => match repo {
                RepoError::NotFound { .. } => (StatusCode::NOT_FOUND, json!(repo.to_string())),
                RepoError::Constraint(msg) => {
                    tracing::error!(error = %msg, "Constraint violation");
                    internal()
                }
                RepoError::Database(err) => classify_sqlx_error(err),
            },

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!(msg)),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let body = json!({
            "message": message,
            "code": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, Value) {
    (StatusCode::INTERNAL_SERVER_ERROR, json!(INTERNAL_MESSAGE))
}

/// Classify a sqlx error that escaped the repository's own mapping.
///
/// `RowNotFound` maps to 404; everything else is logged and sanitized to 500.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, Value) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, json!("Resource not found")),
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
