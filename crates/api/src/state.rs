use std::sync::Arc;

use rateboard_core::store::PricingStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Record store for freelancer profiles and pricing.
    pub store: Arc<dyn PricingStore>,
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
}
