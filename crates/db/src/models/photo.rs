//! Photo entity model and DTOs.
//!
//! Capture time and coordinates are nullable; the suggestion engine skips a
//! photo for whichever signal it lacks.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tripjournal_core::album_suggestion;
use tripjournal_core::types::{DbId, Timestamp};

/// A row from the `photos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Photo {
    pub id: DbId,
    pub trip_id: DbId,
    pub file_path: String,
    pub taken_at: Option<Timestamp>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new photo record.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePhoto {
    pub trip_id: DbId,
    pub file_path: String,
    pub taken_at: Option<Timestamp>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl From<Photo> for album_suggestion::Photo {
    fn from(row: Photo) -> Self {
        Self {
            id: row.id,
            taken_at: row.taken_at,
            latitude: row.latitude,
            longitude: row.longitude,
        }
    }
}
