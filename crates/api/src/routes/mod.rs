pub mod auth;
pub mod card;
pub mod health;
pub mod image;
pub mod subtype;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/tokens                 issue token (public)
///
/// /users                       list, register (public)
/// /users/{id}                  show (public)
///
/// /cards                       list, create (auth)
/// /cards/{id}                  show, update (PATCH), delete (auth)
///
/// /images                      list, create (auth)
/// /images/{id}                 show, update (PATCH), delete (auth)
///
/// /subtypes                    list, create (auth)
/// /subtypes/{id}               show, update (PUT or PATCH) (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", user::router())
        .nest("/cards", card::router())
        .nest("/images", image::router())
        .nest("/subtypes", subtype::router())
}
