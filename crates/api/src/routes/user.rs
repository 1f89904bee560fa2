use axum::routing::get;
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /        -> index
/// POST   /        -> store
/// GET    /{id}    -> show
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(user::index).post(user::store))
        .route("/{id}", get(user::show))
}
