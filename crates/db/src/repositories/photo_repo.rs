//! Repository for the `photos` table.

use sqlx::PgPool;
use tripjournal_core::types::DbId;

use crate::models::photo::{CreatePhoto, Photo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, trip_id, file_path, taken_at, latitude, longitude, created_at, updated_at";

/// Provides photo inserts and the trip-scoped reads used for suggestions.
pub struct PhotoRepo;

impl PhotoRepo {
    /// Insert a new photo record, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreatePhoto) -> Result<Photo, sqlx::Error> {
        let query = format!(
            "INSERT INTO photos (trip_id, file_path, taken_at, latitude, longitude) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(input.trip_id)
            .bind(&input.file_path)
            .bind(input.taken_at)
            .bind(input.latitude)
            .bind(input.longitude)
            .fetch_one(pool)
            .await
    }

    /// List every live photo of a trip, ordered by id.
    pub async fn list_for_trip(pool: &PgPool, trip_id: DbId) -> Result<Vec<Photo>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM photos \
             WHERE trip_id = $1 AND deleted_at IS NULL \
             ORDER BY id"
        );
        sqlx::query_as::<_, Photo>(&query)
            .bind(trip_id)
            .fetch_all(pool)
            .await
    }

    /// Count how many of `photo_ids` are live photos of `trip_id`.
    pub async fn count_in_trip(
        pool: &PgPool,
        trip_id: DbId,
        photo_ids: &[DbId],
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM photos \
             WHERE trip_id = $1 AND id = ANY($2) AND deleted_at IS NULL",
        )
        .bind(trip_id)
        .bind(photo_ids)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    /// Soft-delete a photo. Returns `true` if a live row was marked.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE photos SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
