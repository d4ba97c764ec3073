//! Trip entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tripjournal_core::album_suggestion::repository;
use tripjournal_core::types::{DbId, Timestamp};

/// A row from the `trips` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Trip {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new trip.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTrip {
    pub user_id: DbId,
    pub name: String,
}

impl From<Trip> for repository::Trip {
    fn from(row: Trip) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
        }
    }
}
