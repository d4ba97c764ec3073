//! Request shape and validation for committing a suggestion as an album.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/// Maximum album name length, in characters, after trimming.
pub const MAX_ALBUM_NAME_LEN: usize = 255;

/// Maximum number of photos committed in one accept call.
pub const MAX_ACCEPT_PHOTOS: usize = 1000;

/// Returned when any submitted photo is outside the trip. Deliberately names
/// no ids.
pub const PHOTO_OWNERSHIP_MESSAGE: &str = "Some photos do not belong to this trip";

/// A caller's choice of album name and ordered photo ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcceptSuggestionRequest {
    pub name: String,
    pub photo_ids: Vec<DbId>,
}

/// Result of a successful accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedAlbum {
    pub album_id: DbId,
}

/// Validate an accept request and return the album name to persist.
///
/// The name is trimmed. Photo ids must be non-empty, bounded and free of
/// duplicates since each photo gets exactly one position in the album.
pub fn validate_accept_request(request: &AcceptSuggestionRequest) -> Result<&str, CoreError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(CoreError::Validation("Album name must not be empty".to_string()));
    }
    if name.chars().count() > MAX_ALBUM_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Album name must be at most {MAX_ALBUM_NAME_LEN} characters"
        )));
    }

    if request.photo_ids.is_empty() {
        return Err(CoreError::Validation(
            "At least one photo is required".to_string(),
        ));
    }
    if request.photo_ids.len() > MAX_ACCEPT_PHOTOS {
        return Err(CoreError::Validation(format!(
            "At most {MAX_ACCEPT_PHOTOS} photos can be added at once, got {}",
            request.photo_ids.len()
        )));
    }

    let mut seen = HashSet::with_capacity(request.photo_ids.len());
    if !request.photo_ids.iter().all(|id| seen.insert(*id)) {
        return Err(CoreError::Validation(
            "Photo ids must not contain duplicates".to_string(),
        ));
    }

    Ok(name)
}
