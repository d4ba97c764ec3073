//! Repository for the `albums` and `album_photos` tables.

use sqlx::PgPool;
use tripjournal_core::types::DbId;

use crate::models::album::{Album, AlbumPhoto};

/// Column list for the `albums` table.
const COLUMNS: &str = "id, trip_id, name, created_at, updated_at";

/// Provides album creation and the reads used to inspect assignments.
pub struct AlbumRepo;

impl AlbumRepo {
    /// Insert an album and its ordered photo assignments in one transaction.
    ///
    /// The photos are share-locked and re-checked inside the transaction, so a
    /// photo soft-deleted or moved out of the trip after an earlier check is
    /// still caught. Returns `None`, with nothing written, when any id is not a
    /// live photo of `trip_id`. Assignment `i` gets `sort_order = i`.
    pub async fn create_with_assignments(
        pool: &PgPool,
        trip_id: DbId,
        name: &str,
        ordered_photo_ids: &[DbId],
    ) -> Result<Option<Album>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (live,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM ( \
                 SELECT id FROM photos \
                 WHERE trip_id = $1 AND id = ANY($2) AND deleted_at IS NULL \
                 FOR SHARE \
             ) AS live",
        )
        .bind(trip_id)
        .bind(ordered_photo_ids)
        .fetch_one(&mut *tx)
        .await?;

        if live != ordered_photo_ids.len() as i64 {
            tx.rollback().await?;
            return Ok(None);
        }

        let insert_query = format!(
            "INSERT INTO albums (trip_id, name) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        let album = sqlx::query_as::<_, Album>(&insert_query)
            .bind(trip_id)
            .bind(name)
            .fetch_one(&mut *tx)
            .await?;

        let sort_orders: Vec<i32> = (0..ordered_photo_ids.len() as i32).collect();
        sqlx::query(
            "INSERT INTO album_photos (album_id, photo_id, sort_order) \
             SELECT $1, * FROM UNNEST($2::bigint[], $3::integer[])",
        )
        .bind(album.id)
        .bind(ordered_photo_ids)
        .bind(&sort_orders)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(album))
    }

    /// Find an album by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Album>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM albums WHERE id = $1");
        sqlx::query_as::<_, Album>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List an album's assignments in sort order.
    pub async fn list_assignments(
        pool: &PgPool,
        album_id: DbId,
    ) -> Result<Vec<AlbumPhoto>, sqlx::Error> {
        sqlx::query_as::<_, AlbumPhoto>(
            "SELECT album_id, photo_id, sort_order FROM album_photos \
             WHERE album_id = $1 \
             ORDER BY sort_order",
        )
        .bind(album_id)
        .fetch_all(pool)
        .await
    }

    /// Count the albums of a trip.
    pub async fn count_for_trip(pool: &PgPool, trip_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM albums WHERE trip_id = $1")
            .bind(trip_id)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
