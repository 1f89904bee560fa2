use axum::routing::get;
use axum::Router;

use crate::handlers::card;
use crate::state::AppState;

/// Routes mounted at `/cards`. Every route requires a bearer token.
///
/// ```text
/// GET    /        -> index
/// POST   /        -> store
/// GET    /{id}    -> show
/// PATCH  /{id}    -> update
/// DELETE /{id}    -> destroy
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(card::index).post(card::store))
        .route(
            "/{id}",
            get(card::show).patch(card::update).delete(card::destroy),
        )
}
