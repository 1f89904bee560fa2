use std::sync::Arc;

use cardvault_db::repositories::Repositories;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: repositories are `Arc` handles.
#[derive(Clone)]
pub struct AppState {
    /// Storage behind every controller, PostgreSQL or in-memory.
    pub repos: Repositories,
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
}
