//! Handlers for the `/images` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cardvault_core::validation::schemas::{IMAGE_CREATE, IMAGE_UPDATE};
use cardvault_db::models::image::{CreateImage, UpdateImage};

use crate::error::AppResult;
use crate::extract::{Id, Payload};
use crate::middleware::auth::AuthUser;
use crate::resources::{DeleteResource, ImageResource};
use crate::state::AppState;

/// GET /api/v1/images
pub async fn index(
    _user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ImageResource>>> {
    let images = state.repos.images.all().await?;
    Ok(Json(images.iter().map(ImageResource::from).collect()))
}

/// POST /api/v1/images
pub async fn store(
    user: AuthUser,
    State(state): State<AppState>,
    payload: Payload,
) -> AppResult<(StatusCode, Json<ImageResource>)> {
    let input: CreateImage = payload
        .validated(&IMAGE_CREATE, state.repos.lookup.as_ref())
        .await?;
    let image = state.repos.images.create(&input).await?;

    tracing::info!(image_id = image.id, user_id = user.user_id, "Image created");
    Ok((StatusCode::CREATED, Json(ImageResource::from(&image))))
}

/// GET /api/v1/images/{id}
pub async fn show(
    _user: AuthUser,
    State(state): State<AppState>,
    Id(id): Id,
) -> AppResult<Json<ImageResource>> {
    let image = state.repos.images.find_or_fail(id).await?;
    Ok(Json(ImageResource::from(&image)))
}

/// PATCH /api/v1/images/{id}
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Id(id): Id,
    payload: Payload,
) -> AppResult<Json<ImageResource>> {
    let input: UpdateImage = payload
        .validated(&IMAGE_UPDATE, state.repos.lookup.as_ref())
        .await?;
    let image = state.repos.images.update(&input, id).await?;

    tracing::info!(image_id = id, user_id = user.user_id, "Image updated");
    Ok(Json(ImageResource::from(&image)))
}

/// DELETE /api/v1/images/{id}
pub async fn destroy(
    user: AuthUser,
    State(state): State<AppState>,
    Id(id): Id,
) -> AppResult<Json<DeleteResource>> {
    let count = state.repos.images.delete(id).await?;

    tracing::info!(image_id = id, user_id = user.user_id, count, "Image deleted");
    Ok(Json(DeleteResource::from(count)))
}
