use std::sync::Arc;

use brandhub_db::SharedStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Record store holding every collection.
    pub store: SharedStore,
    /// Server configuration (list cap, creator id, latency).
    pub config: Arc<ServerConfig>,
}
