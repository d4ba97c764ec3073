//! Album and album assignment models.

use serde::Serialize;
use sqlx::FromRow;
use tripjournal_core::types::{DbId, Timestamp};

/// A row from the `albums` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Album {
    pub id: DbId,
    pub trip_id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `album_photos` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct AlbumPhoto {
    pub album_id: DbId,
    pub photo_id: DbId,
    pub sort_order: i32,
}
