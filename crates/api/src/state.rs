use std::sync::Arc;

use tripjournal_core::album_suggestion::repository::{
    AlbumRepository, PhotoRepository, StoreHealth, TripRepository,
};
use tripjournal_core::album_suggestion::service::AlbumSuggestionService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (JWT secret, timeouts, suggestion thresholds).
    pub config: Arc<ServerConfig>,
    /// Album suggestion engine wired to the configured store.
    pub album_suggestions: Arc<AlbumSuggestionService>,
    /// Liveness probe for the store behind the engine.
    pub store_health: Arc<dyn StoreHealth>,
}

impl AppState {
    /// Build state from a single store implementing every repository trait.
    pub fn new<S>(config: ServerConfig, store: Arc<S>) -> Self
    where
        S: TripRepository + PhotoRepository + AlbumRepository + StoreHealth + 'static,
    {
        let album_suggestions = AlbumSuggestionService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            config.suggestions.clone(),
        );
        Self {
            config: Arc::new(config),
            album_suggestions: Arc::new(album_suggestions),
            store_health: store,
        }
    }
}
