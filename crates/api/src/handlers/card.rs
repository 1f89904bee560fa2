//! Handlers for the `/cards` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cardvault_core::validation::schemas::{CARD_CREATE, CARD_UPDATE};
use cardvault_db::models::card::{CreateCard, UpdateCard};

use crate::error::AppResult;
use crate::extract::{Id, Payload};
use crate::middleware::auth::AuthUser;
use crate::resources::{CardResource, DeleteResource};
use crate::state::AppState;

/// GET /api/v1/cards
pub async fn index(
    _user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CardResource>>> {
    let cards = state.repos.cards.all().await?;
    Ok(Json(cards.iter().map(CardResource::from).collect()))
}

/// POST /api/v1/cards
pub async fn store(
    user: AuthUser,
    State(state): State<AppState>,
    payload: Payload,
) -> AppResult<(StatusCode, Json<CardResource>)> {
    let input: CreateCard = payload
        .validated(&CARD_CREATE, state.repos.lookup.as_ref())
        .await?;
    let card = state.repos.cards.create(&input).await?;

    tracing::info!(card_id = card.id, user_id = user.user_id, "Card created");
    Ok((StatusCode::CREATED, Json(CardResource::from(&card))))
}

/// GET /api/v1/cards/{id}
pub async fn show(
    _user: AuthUser,
    State(state): State<AppState>,
    Id(id): Id,
) -> AppResult<Json<CardResource>> {
    let card = state.repos.cards.find_or_fail(id).await?;
    Ok(Json(CardResource::from(&card)))
}

/// PATCH /api/v1/cards/{id}
pub async fn update(
    user: AuthUser,
    State(state): State<AppState>,
    Id(id): Id,
    payload: Payload,
) -> AppResult<Json<CardResource>> {
    let input: UpdateCard = payload
        .validated(&CARD_UPDATE, state.repos.lookup.as_ref())
        .await?;
    let card = state.repos.cards.update(&input, id).await?;

    tracing::info!(card_id = id, user_id = user.user_id, "Card updated");
    Ok(Json(CardResource::from(&card)))
}

/// DELETE /api/v1/cards/{id}
pub async fn destroy(
    user: AuthUser,
    State(state): State<AppState>,
    Id(id): Id,
) -> AppResult<Json<DeleteResource>> {
    let count = state.repos.cards.delete(id).await?;

    tracing::info!(card_id = id, user_id = user.user_id, count, "Card deleted");
    Ok(Json(DeleteResource::from(count)))
}
