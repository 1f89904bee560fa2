//! Handlers for the `/subtypes` resource. Subtypes are never deleted over HTTP.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cardvault_core::validation::schemas::{SUBTYPE_CREATE, SUBTYPE_UPDATE};
use cardvault_db::models::subtype::{CreateSubtype, UpdateSubtype};

use crate::error::AppResult;
use crate::extract::{Id, Payload};
use crate::middleware::auth::AuthUser;
use crate::resources::SubtypeResource;
use crate::state::AppState;

/// GET /api/v1/subtypes
pub async fn index(
    _user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<SubtypeResource>>> {
    let subtypes = state.repos.subtypes.all().await?;
    Ok(Json(subtypes.iter().map(SubtypeResource::from).collect()))
}

/// POST /api/v1/subtypes
pub async fn store(
    user: AuthUser,
    State(state): State<AppState>,
    payload: Payload,
) -> AppResult<(StatusCode, Json<SubtypeResource>)> {
    let input: CreateSubtype = payload
        .validated(&SUBTYPE_CREATE, state.repos.lookup.as_ref())
        .await?;
    let subtype = state.repos.subtypes.create(&input).await?;

    tracing::info!(subtype_id = subtype.id, user_id = user.user_id, "Subtype created");
    Ok((StatusCode::CREATED, Json(SubtypeResource::from(&subtype))))
}

/// GET /api/v1/subtypes/{id}
pub async fn show(
    _user: AuthUser,
    State(state): State<AppState>,
    Id(id): Id,
) -> AppResult<Json<SubtypeResource>> {
    let subtype = state.repos.subtypes.find_or_fail(id).await?;
    Ok(Json(SubtypeResource::from(&subtype)))
}

/// PUT|PATCH /api/v1/subtypes/{id}
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Id(id): Id,
    payload: Payload,
) -> AppResult<Json<SubtypeResource>> {
    let input: UpdateSubtype = payload
        .validated(&SUBTYPE_UPDATE, state.repos.lookup.as_ref())
        .await?;
    let subtype = state.repos.subtypes.update(&input, id).await?;

    tracing::info!(subtype_id = id, user_id = user.user_id, "Subtype updated");
    Ok(Json(SubtypeResource::from(&subtype)))
}
