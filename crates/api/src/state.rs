use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted internally and the
/// config sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Process-wide database connection pool.
    pub pool: tasktrack_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
