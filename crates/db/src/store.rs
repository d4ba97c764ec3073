//! PostgreSQL implementation of the album engine's repository traits.

use async_trait::async_trait;
use tripjournal_core::album_suggestion::repository::{
    AlbumRepository, PhotoRepository, StoreHealth, Trip, TripRepository,
};
use tripjournal_core::album_suggestion::accept::PHOTO_OWNERSHIP_MESSAGE;
use tripjournal_core::album_suggestion::Photo;
use tripjournal_core::error::CoreError;
use tripjournal_core::types::DbId;

use crate::repositories::{AlbumRepo, PhotoRepo, TripRepo};
use crate::DbPool;

/// Adapts the zero-sized repositories to the engine's traits.
#[derive(Debug, Clone)]
pub struct PgAlbumStore {
    pool: DbPool,
}

impl PgAlbumStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Log a database failure and hide its details behind an internal error.
fn internal(operation: &'static str) -> impl FnOnce(sqlx::Error) -> CoreError {
    move |err| {
        tracing::error!(error = %err, operation, "Database error");
        CoreError::Internal(format!("{operation} failed"))
    }
}

#[async_trait]
impl TripRepository for PgAlbumStore {
    async fn verify_trip_ownership(
        &self,
        user_id: DbId,
        trip_id: DbId,
    ) -> Result<Trip, CoreError> {
        TripRepo::find_owned(&self.pool, user_id, trip_id)
            .await
            .map_err(internal("trip lookup"))?
            .map(Trip::from)
            .ok_or(CoreError::NotFound {
                entity: "Trip",
                id: trip_id,
            })
    }
}

#[async_trait]
impl PhotoRepository for PgAlbumStore {
    async fn list_photos_for_trip(&self, trip_id: DbId) -> Result<Vec<Photo>, CoreError> {
        let rows = PhotoRepo::list_for_trip(&self.pool, trip_id)
            .await
            .map_err(internal("photo listing"))?;
        Ok(rows.into_iter().map(Photo::from).collect())
    }

    async fn count_photos_in_trip(
        &self,
        trip_id: DbId,
        photo_ids: &[DbId],
    ) -> Result<i64, CoreError> {
        PhotoRepo::count_in_trip(&self.pool, trip_id, photo_ids)
            .await
            .map_err(internal("photo ownership count"))
    }
}

#[async_trait]
impl AlbumRepository for PgAlbumStore {
    async fn create_album_with_assignments(
        &self,
        trip_id: DbId,
        name: &str,
        ordered_photo_ids: &[DbId],
    ) -> Result<DbId, CoreError> {
        AlbumRepo::create_with_assignments(&self.pool, trip_id, name, ordered_photo_ids)
            .await
            .map_err(internal("album creation"))?
            .map(|album| album.id)
            .ok_or_else(|| CoreError::Validation(PHOTO_OWNERSHIP_MESSAGE.to_string()))
    }
}

#[async_trait]
impl StoreHealth for PgAlbumStore {
    async fn ping(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(internal("health check"))
    }
}
