//! Handlers for the `/auth` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use cardvault_core::types::DbId;
use cardvault_core::validation::schemas::TOKEN_ISSUE;
use serde::Deserialize;

use crate::auth::jwt::generate_access_token;
use crate::error::{AppError, AppResult};
use crate::extract::Payload;
use crate::resources::AuthResource;
use crate::state::AppState;

/// Token request body.
#[derive(Debug, Deserialize)]
pub struct TokenRequest {
    pub user_id: DbId,
    pub token_name: String,
}

/// POST /api/v1/auth/tokens
///
/// Issues an access token for an existing user. No credentials are checked.
pub async fn issue_token(
    State(state): State<AppState>,
    payload: Payload,
) -> AppResult<(StatusCode, Json<AuthResource>)> {
    let input: TokenRequest = payload
        .validated(&TOKEN_ISSUE, state.repos.lookup.as_ref())
        .await?;

    let user = state.repos.users.find_or_fail(input.user_id).await?;

    let access_token = generate_access_token(user.id, &input.token_name, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    tracing::info!(user_id = user.id, token_name = %input.token_name, "Access token issued");
    Ok((StatusCode::CREATED, Json(AuthResource { access_token })))
}
