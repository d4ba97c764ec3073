pub mod album_suggestions;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /trips/{trip_id}/album-suggestions               list suggestions (requires auth)
/// /trips/{trip_id}/album-suggestions/accept        accept suggestion (requires auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Trip-scoped album suggestions.
        .nest("/trips", album_suggestions::router())
}
