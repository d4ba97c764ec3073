//! Route definitions for album suggestions.
//!
//! ```text
//! /trips/{trip_id}/album-suggestions            list suggestions (GET)
//! /trips/{trip_id}/album-suggestions/accept     accept a suggestion (POST)
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::album_suggestions;
use crate::state::AppState;

/// Album suggestion routes, nested at `/trips`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{trip_id}/album-suggestions",
            get(album_suggestions::list_suggestions),
        )
        .route(
            "/{trip_id}/album-suggestions/accept",
            post(album_suggestions::accept_suggestion),
        )
}
