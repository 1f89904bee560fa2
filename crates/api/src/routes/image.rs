use axum::routing::get;
use axum::Router;

use crate::handlers::image;
use crate::state::AppState;

/// Routes mounted at `/images`. Every route requires a bearer token.
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
        .route("/", get(image::index).post(image::store))
        .route(
            "/{id}",
            get(image::show).patch(image::update).delete(image::destroy),
        )
}
