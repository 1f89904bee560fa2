//! Handlers for the `/users` resource (public).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cardvault_core::validation::schemas::USER_CREATE;
use cardvault_db::models::user::CreateUser;
use serde::Deserialize;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::extract::{Id, Payload};
use crate::resources::UserResource;
use crate::state::AppState;

/// Registration body. The password is hashed before it reaches storage.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub remember_token: String,
}

/// GET /api/v1/users
pub async fn index(State(state): State<AppState>) -> AppResult<Json<Vec<UserResource>>> {
    let users = state.repos.users.all().await?;
    Ok(Json(users.iter().map(UserResource::from).collect()))
}

/// POST /api/v1/users
pub async fn store(
    State(state): State<AppState>,
    payload: Payload,
) -> AppResult<(StatusCode, Json<UserResource>)> {
    let input: RegisterRequest = payload
        .validated(&USER_CREATE, state.repos.lookup.as_ref())
        .await?;

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;

    let user = state
        .repos
        .users
        .create(&CreateUser {
            name: input.name,
            email: input.email,
            password_hash,
            remember_token: input.remember_token,
        })
        .await?;

    tracing::info!(user_id = user.id, "User registered");
    Ok((StatusCode::CREATED, Json(UserResource::from(&user))))
}

/// GET /api/v1/users/{id}
pub async fn show(
    State(state): State<AppState>,
    Id(id): Id,
) -> AppResult<Json<UserResource>> {
    let user = state.repos.users.find_or_fail(id).await?;
    Ok(Json(UserResource::from(&user)))
}
