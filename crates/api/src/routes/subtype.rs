use axum::routing::get;
use axum::Router;

use crate::handlers::subtype;
use crate::state::AppState;

/// Routes mounted at `/subtypes`. Every route requires a bearer token.
///
/// ```text
/// GET    /        -> index
/// POST   /        -> store
/// GET    /{id}    -> show
/// PUT    /{id}    -> update
/// PATCH  /{id}    -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(subtype::index).post(subtype::store))
        .route(
            "/{id}",
            get(subtype::show)
                .put(subtype::update)
                .patch(subtype::update),
        )
}
