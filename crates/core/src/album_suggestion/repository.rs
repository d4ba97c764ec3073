//! Persistence contracts consumed by the suggestion engine.
//!
//! The traits are object safe so the HTTP layer can hold `Arc<dyn …>` and
//! swap the PostgreSQL store for [`super::in_memory::InMemoryAlbumStore`].

use async_trait::async_trait;
use serde::Serialize;

use crate::error::CoreError;
use crate::types::DbId;

use super::Photo;

/// The subset of a trip the engine needs after an ownership check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trip {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
}

#[async_trait]
pub trait TripRepository: Send + Sync {
    /// Return the trip if it exists and belongs to `user_id`.
    ///
    /// Fails with [`CoreError::NotFound`] otherwise, without distinguishing
    /// a missing trip from someone else's.
    async fn verify_trip_ownership(&self, user_id: DbId, trip_id: DbId)
        -> Result<Trip, CoreError>;
}

#[async_trait]
pub trait PhotoRepository: Send + Sync {
    /// All current photos of a trip, unpaginated.
    async fn list_photos_for_trip(&self, trip_id: DbId) -> Result<Vec<Photo>, CoreError>;

    /// How many of `photo_ids` belong to `trip_id`.
    async fn count_photos_in_trip(
        &self,
        trip_id: DbId,
        photo_ids: &[DbId],
    ) -> Result<i64, CoreError>;
}

#[async_trait]
pub trait AlbumRepository: Send + Sync {
    /// Create an album and its assignments atomically.
    ///
    /// Assignment `i` gets `sort_order = i`. Photo ownership is checked again
    /// at commit time: if any id is no longer a live photo of `trip_id` this
    /// fails with [`CoreError::Validation`]. On failure nothing is written.
    async fn create_album_with_assignments(
        &self,
        trip_id: DbId,
        name: &str,
        ordered_photo_ids: &[DbId],
    ) -> Result<DbId, CoreError>;
}

/// Liveness probe for whatever backs the repositories.
#[async_trait]
pub trait StoreHealth: Send + Sync {
    async fn ping(&self) -> Result<(), CoreError>;
}
