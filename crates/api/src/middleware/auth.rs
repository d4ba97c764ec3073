//! Bearer-token caller identity for the trip routes.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use tripjournal_core::error::CoreError;
use tripjournal_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The caller behind `Authorization: Bearer <jwt>`.
///
/// `user_id` is the token's `sub`, and it is what trip ownership is checked
/// against:
///
/// ```ignore
/// async fn list_suggestions(
///     State(state): State<AppState>,
///     auth: AuthUser,
///     Path(trip_id): Path<DbId>,
/// ) -> AppResult<impl IntoResponse> {
///     let suggestions = state
///         .album_suggestions
///         .get_album_suggestions(auth.user_id, trip_id)
///         .await?;
///     Ok(Json(DataResponse { data: suggestions }))
/// }
/// ```
///
/// Any missing, malformed, expired or wrongly signed token is a `401`
/// before the trip is looked up.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)?;
        let claims = validate_token(token, &state.config.jwt).map_err(|err| {
            tracing::debug!(error = %err, "Rejected access token");
            CoreError::Unauthorized("Invalid or expired token".into())
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
        })
    }
}

/// The raw token from an `Authorization: Bearer` header.
fn bearer_token(parts: &Parts) -> Result<&str, CoreError> {
    let header = parts
        .headers
        .get(AUTHORIZATION)
        .ok_or_else(|| CoreError::Unauthorized("Missing Authorization header".into()))?;

    header
        .to_str()
        .ok()
        .and_then(|value| value.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            CoreError::Unauthorized("Expected Authorization: Bearer <token>".into())
        })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use axum::http::Request;

    use super::*;

    fn parts_with(header: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/api/v1/trips/1/album-suggestions");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn bearer_token_is_extracted() {
        let parts = parts_with(Some("Bearer abc.def.ghi"));
        assert_eq!(bearer_token(&parts).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn other_schemes_and_empty_tokens_are_unauthorized() {
        for header in [None, Some("Basic dXNlcjpwYXNz"), Some("Bearer ")] {
            assert_matches!(
                bearer_token(&parts_with(header)),
                Err(CoreError::Unauthorized(_))
            );
        }
    }
}
