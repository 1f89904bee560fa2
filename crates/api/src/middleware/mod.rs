//! Request extractors that guard routes.
//!
//! - [`auth::AuthUser`] -- Requires a valid JWT Bearer token for an existing user.

pub mod auth;
