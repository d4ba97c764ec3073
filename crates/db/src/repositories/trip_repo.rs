//! Repository for the `trips` table.

use sqlx::PgPool;
use tripjournal_core::types::DbId;

use crate::models::trip::{CreateTrip, Trip};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, deleted_at, created_at, updated_at";

/// Provides the trip lookups the album engine needs.
pub struct TripRepo;

impl TripRepo {
    /// Insert a new trip, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTrip) -> Result<Trip, sqlx::Error> {
        let query = format!(
            "INSERT INTO trips (user_id, name) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Trip>(&query)
            .bind(input.user_id)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Find a live trip owned by `user_id`.
    ///
    /// Returns `None` for missing, soft-deleted, and foreign trips alike.
    pub async fn find_owned(
        pool: &PgPool,
        user_id: DbId,
        trip_id: DbId,
    ) -> Result<Option<Trip>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM trips \
             WHERE id = $1 AND user_id = $2 AND deleted_at IS NULL"
        );
        sqlx::query_as::<_, Trip>(&query)
            .bind(trip_id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a trip. Returns `true` if a live row was marked.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE trips SET deleted_at = NOW(), updated_at = NOW() \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
