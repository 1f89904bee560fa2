//! Card catalog API server library.
//!
//! Exposes config, state, error handling, and the router builder so the
//! binary entrypoint and integration tests share one application.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod resources;
pub mod router;
pub mod routes;
pub mod state;
