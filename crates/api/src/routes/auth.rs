use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /tokens    -> issue_token
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/tokens", post(auth::issue_token))
}
