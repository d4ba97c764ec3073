//! Orchestration of the two public engine operations.

use std::sync::Arc;

use crate::error::CoreError;
use crate::types::DbId;

use super::accept::{
    validate_accept_request, AcceptSuggestionRequest, AcceptedAlbum, PHOTO_OWNERSHIP_MESSAGE,
};
use super::repository::{AlbumRepository, PhotoRepository, TripRepository};
use super::{suggest_albums, Suggestion, SuggestionParams};

/// Album suggestion engine wired to its repositories.
///
/// Holds no mutable state; every call works on its own photo snapshot, so
/// one instance can serve concurrent requests for any trip.
#[derive(Clone)]
pub struct AlbumSuggestionService {
    trips: Arc<dyn TripRepository>,
    photos: Arc<dyn PhotoRepository>,
    albums: Arc<dyn AlbumRepository>,
    params: SuggestionParams,
}

impl AlbumSuggestionService {
    pub fn new(
        trips: Arc<dyn TripRepository>,
        photos: Arc<dyn PhotoRepository>,
        albums: Arc<dyn AlbumRepository>,
        params: SuggestionParams,
    ) -> Self {
        Self {
            trips,
            photos,
            albums,
            params,
        }
    }

    /// Ranked album suggestions for a trip the caller owns.
    ///
    /// Read-only. Fewer than three eligible photos of either kind yields an
    /// empty list rather than an error.
    pub async fn get_album_suggestions(
        &self,
        user_id: DbId,
        trip_id: DbId,
    ) -> Result<Vec<Suggestion>, CoreError> {
        self.trips.verify_trip_ownership(user_id, trip_id).await?;

        let photos = self.photos.list_photos_for_trip(trip_id).await?;
        let suggestions = suggest_albums(&photos, &self.params);

        tracing::debug!(
            user_id,
            trip_id,
            photo_count = photos.len(),
            suggestion_count = suggestions.len(),
            "Computed album suggestions"
        );

        Ok(suggestions)
    }

    /// Commit a chosen set of photos as a new album of the trip.
    ///
    /// The trip check runs first, so an inaccessible trip reports
    /// [`CoreError::NotFound`] before any photo lookup. Ownership is counted
    /// here to reject stale suggestions early, and checked once more by the
    /// album repository inside its write.
    pub async fn accept_suggestion(
        &self,
        user_id: DbId,
        trip_id: DbId,
        request: &AcceptSuggestionRequest,
    ) -> Result<AcceptedAlbum, CoreError> {
        self.trips.verify_trip_ownership(user_id, trip_id).await?;

        let name = validate_accept_request(request)?;

        let owned = self
            .photos
            .count_photos_in_trip(trip_id, &request.photo_ids)
            .await?;
        if owned != request.photo_ids.len() as i64 {
            tracing::debug!(
                user_id,
                trip_id,
                requested = request.photo_ids.len(),
                owned,
                "Rejected album accept with foreign photos"
            );
            return Err(CoreError::Validation(PHOTO_OWNERSHIP_MESSAGE.to_string()));
        }

        let album_id = self
            .albums
            .create_album_with_assignments(trip_id, name, &request.photo_ids)
            .await?;

        tracing::info!(
            user_id,
            trip_id,
            album_id,
            photo_count = request.photo_ids.len(),
            "Created album from suggestion"
        );

        Ok(AcceptedAlbum { album_id })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use assert_matches::assert_matches;
    use async_trait::async_trait;

    use super::*;
    use crate::album_suggestion::in_memory::InMemoryAlbumStore;
    use crate::album_suggestion::test_support::at;
    use crate::album_suggestion::{ClusterKind, Photo};

    const OWNER: DbId = 7;

    fn service_for(store: &Arc<InMemoryAlbumStore>) -> AlbumSuggestionService {
        AlbumSuggestionService::new(
            store.clone(),
            store.clone(),
            store.clone(),
            SuggestionParams::default(),
        )
    }

    fn accept(name: &str, photo_ids: Vec<DbId>) -> AcceptSuggestionRequest {
        AcceptSuggestionRequest {
            name: name.to_string(),
            photo_ids,
        }
    }

    /// Counts photo lookups so tests can assert they never happened.
    struct CountingPhotos {
        inner: Arc<InMemoryAlbumStore>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl PhotoRepository for CountingPhotos {
        async fn list_photos_for_trip(&self, trip_id: DbId) -> Result<Vec<Photo>, CoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.list_photos_for_trip(trip_id).await
        }

        async fn count_photos_in_trip(
            &self,
            trip_id: DbId,
            photo_ids: &[DbId],
        ) -> Result<i64, CoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.count_photos_in_trip(trip_id, photo_ids).await
        }
    }

    #[tokio::test]
    async fn suggestions_for_a_morning_walk() {
        let store = Arc::new(InMemoryAlbumStore::new());
        let trip = store.add_trip(OWNER, "Paris").await;
        for (hour, minute) in [(10, 0), (10, 30), (11, 0), (11, 30)] {
            store.add_photo(trip.id, Some(at(hour, minute)), None).await;
        }

        let suggestions = service_for(&store)
            .get_album_suggestions(OWNER, trip.id)
            .await
            .unwrap();

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].kind, ClusterKind::Date);
        assert_eq!(suggestions[0].label, "June 15, 2024");
        assert_eq!(suggestions[0].size(), 4);
    }

    #[tokio::test]
    async fn empty_trip_has_no_suggestions() {
        let store = Arc::new(InMemoryAlbumStore::new());
        let trip = store.add_trip(OWNER, "Empty").await;
        store.add_photo(trip.id, Some(at(9, 0)), Some((1.0, 1.0))).await;
        store.add_photo(trip.id, Some(at(9, 5)), Some((1.0, 1.0))).await;

        let suggestions = service_for(&store)
            .get_album_suggestions(OWNER, trip.id)
            .await
            .unwrap();
        assert!(suggestions.is_empty());
    }

    #[tokio::test]
    async fn suggestions_for_someone_elses_trip_are_not_found() {
        let store = Arc::new(InMemoryAlbumStore::new());
        let trip = store.add_trip(OWNER, "Private").await;

        let result = service_for(&store)
            .get_album_suggestions(OWNER + 1, trip.id)
            .await;
        assert_matches!(result, Err(CoreError::NotFound { entity: "Trip", id }) if id == trip.id);
    }

    #[tokio::test]
    async fn accept_creates_album_in_submitted_order() {
        let store = Arc::new(InMemoryAlbumStore::new());
        let trip = store.add_trip(OWNER, "Paris").await;
        let mut ids = Vec::new();
        for _ in 0..3 {
            ids.push(store.add_photo(trip.id, None, None).await.id);
        }
        ids.reverse();

        let accepted = service_for(&store)
            .accept_suggestion(OWNER, trip.id, &accept("June 15", ids.clone()))
            .await
            .unwrap();

        let album = store.album(accepted.album_id).await.unwrap();
        assert_eq!(album.trip_id, trip.id);
        assert_eq!(album.name, "June 15");
        assert_eq!(
            album.assignments,
            vec![(ids[0], 0), (ids[1], 1), (ids[2], 2)]
        );
    }

    #[tokio::test]
    async fn accept_with_foreign_photo_creates_nothing() {
        let store = Arc::new(InMemoryAlbumStore::new());
        let trip = store.add_trip(OWNER, "Paris").await;
        let other = store.add_trip(OWNER, "Rome").await;
        let a = store.add_photo(trip.id, None, None).await.id;
        let b = store.add_photo(trip.id, None, None).await.id;
        let foreign = store.add_photo(other.id, None, None).await.id;

        let service = service_for(&store);

        let result = service
            .accept_suggestion(OWNER, trip.id, &accept("Mixed", vec![a, b, foreign]))
            .await;
        assert_matches!(
            result,
            Err(CoreError::Validation(msg)) if msg == PHOTO_OWNERSHIP_MESSAGE
        );

        let result = service
            .accept_suggestion(OWNER, trip.id, &accept("Missing", vec![a, b, 999]))
            .await;
        assert_matches!(result, Err(CoreError::Validation(_)));

        assert_eq!(store.album_count().await, 0);
    }

    /// Reports every requested photo as owned, like a count taken just
    /// before one of them was removed from the trip.
    struct StaleCount {
        inner: Arc<InMemoryAlbumStore>,
    }

    #[async_trait]
    impl PhotoRepository for StaleCount {
        async fn list_photos_for_trip(&self, trip_id: DbId) -> Result<Vec<Photo>, CoreError> {
            self.inner.list_photos_for_trip(trip_id).await
        }

        async fn count_photos_in_trip(
            &self,
            _trip_id: DbId,
            photo_ids: &[DbId],
        ) -> Result<i64, CoreError> {
            Ok(photo_ids.len() as i64)
        }
    }

    #[tokio::test]
    async fn accept_rechecks_ownership_when_writing() {
        let store = Arc::new(InMemoryAlbumStore::new());
        let trip = store.add_trip(OWNER, "Paris").await;
        let other = store.add_trip(OWNER, "Rome").await;
        let a = store.add_photo(trip.id, None, None).await.id;
        let moved = store.add_photo(other.id, None, None).await.id;
        let service = AlbumSuggestionService::new(
            store.clone(),
            Arc::new(StaleCount {
                inner: store.clone(),
            }),
            store.clone(),
            SuggestionParams::default(),
        );

        let result = service
            .accept_suggestion(OWNER, trip.id, &accept("Stale", vec![a, moved]))
            .await;

        assert_matches!(
            result,
            Err(CoreError::Validation(msg)) if msg == PHOTO_OWNERSHIP_MESSAGE
        );
        assert_eq!(store.album_count().await, 0);
    }

    #[tokio::test]
    async fn accept_on_inaccessible_trip_skips_photo_checks() {
        let store = Arc::new(InMemoryAlbumStore::new());
        let trip = store.add_trip(OWNER, "Private").await;
        let photo = store.add_photo(trip.id, None, None).await.id;
        let photos = Arc::new(CountingPhotos {
            inner: store.clone(),
            calls: AtomicUsize::new(0),
        });
        let service = AlbumSuggestionService::new(
            store.clone(),
            photos.clone(),
            store.clone(),
            SuggestionParams::default(),
        );

        let wrong_user = service
            .accept_suggestion(OWNER + 1, trip.id, &accept("X", vec![photo]))
            .await;
        assert_matches!(wrong_user, Err(CoreError::NotFound { .. }));

        let missing_trip = service
            .accept_suggestion(OWNER, 424242, &accept("X", vec![photo]))
            .await;
        assert_matches!(missing_trip, Err(CoreError::NotFound { id: 424242, .. }));

        assert_eq!(photos.calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.album_count().await, 0);
    }

    #[tokio::test]
    async fn accept_rejects_invalid_requests_before_writing() {
        let store = Arc::new(InMemoryAlbumStore::new());
        let trip = store.add_trip(OWNER, "Paris").await;
        let photo = store.add_photo(trip.id, None, None).await.id;
        let service = service_for(&store);

        for request in [
            accept("", vec![photo]),
            accept("Name", vec![]),
            accept("Name", vec![photo, photo]),
        ] {
            let result = service.accept_suggestion(OWNER, trip.id, &request).await;
            assert_matches!(result, Err(CoreError::Validation(_)));
        }
        assert_eq!(store.album_count().await, 0);
    }

    #[tokio::test]
    async fn accept_persists_trimmed_name() {
        let store = Arc::new(InMemoryAlbumStore::new());
        let trip = store.add_trip(OWNER, "Paris").await;
        let photo = store.add_photo(trip.id, None, None).await.id;

        let accepted = service_for(&store)
            .accept_suggestion(OWNER, trip.id, &accept("  Louvre  ", vec![photo]))
            .await
            .unwrap();

        assert_eq!(store.album(accepted.album_id).await.unwrap().name, "Louvre");
    }

    #[tokio::test]
    async fn suggestions_are_stable_across_calls() {
        let store = Arc::new(InMemoryAlbumStore::new());
        let trip = store.add_trip(OWNER, "Paris").await;
        for minute in [0, 10, 20, 30] {
            store
                .add_photo(trip.id, Some(at(14, minute)), Some((48.8584, 2.2945)))
                .await;
        }
        let service = service_for(&store);

        let first = service.get_album_suggestions(OWNER, trip.id).await.unwrap();
        let second = service.get_album_suggestions(OWNER, trip.id).await.unwrap();

        assert_eq!(first.len(), 2);
        assert_eq!(first, second);
    }
}
