//! Handlers for trip album suggestions.
//!
//! Suggestions are computed fresh on every request; accepting one commits
//! the chosen photos as a new album of the trip.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tripjournal_core::album_suggestion::accept::AcceptSuggestionRequest;
use tripjournal_core::types::DbId;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/trips/{trip_id}/album-suggestions
///
/// Ranked album suggestions for the trip. An empty list means nothing
/// qualified and is not an error.
pub async fn list_suggestions(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(trip_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let suggestions = state
        .album_suggestions
        .get_album_suggestions(auth.user_id, trip_id)
        .await?;
    Ok(Json(DataResponse { data: suggestions }))
}

/// POST /api/v1/trips/{trip_id}/album-suggestions/accept
///
/// Create an album from the submitted name and ordered photo ids.
/// Returns `201` with the new album id.
pub async fn accept_suggestion(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(trip_id): Path<DbId>,
    Json(body): Json<AcceptSuggestionRequest>,
) -> AppResult<impl IntoResponse> {
    let accepted = state
        .album_suggestions
        .accept_suggestion(auth.user_id, trip_id, &body)
        .await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: accepted })))
}
