use std::sync::Arc;

use travelroute_db::store::RouteStore;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the store is behind an `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Route Store backing every travel route handler.
    pub store: Arc<dyn RouteStore>,
}
