//! In-process implementation of the repository traits.
//!
//! Backs the service in tests and in local runs without PostgreSQL. All
//! state sits behind one async mutex, so album creation is all-or-nothing.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::CoreError;
use crate::types::{DbId, Timestamp};

use super::accept::PHOTO_OWNERSHIP_MESSAGE;
use super::repository::{AlbumRepository, PhotoRepository, StoreHealth, Trip, TripRepository};
use super::Photo;

/// An album as stored, with its ordered `(photo_id, sort_order)` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredAlbum {
    pub id: DbId,
    pub trip_id: DbId,
    pub name: String,
    pub assignments: Vec<(DbId, i32)>,
}

#[derive(Debug, Default)]
struct State {
    next_id: DbId,
    trips: BTreeMap<DbId, Trip>,
    /// Photo id -> (owning trip, photo).
    photos: BTreeMap<DbId, (DbId, Photo)>,
    albums: BTreeMap<DbId, StoredAlbum>,
}

impl State {
    fn allocate_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }
}

#[derive(Debug, Default)]
pub struct InMemoryAlbumStore {
    state: Mutex<State>,
}

impl InMemoryAlbumStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a trip owned by `user_id`.
    pub async fn add_trip(&self, user_id: DbId, name: &str) -> Trip {
        let mut state = self.state.lock().await;
        let trip = Trip {
            id: state.allocate_id(),
            user_id,
            name: name.to_string(),
        };
        state.trips.insert(trip.id, trip.clone());
        trip
    }

    /// Add a photo to `trip_id`, assigning it the next id.
    pub async fn add_photo(
        &self,
        trip_id: DbId,
        taken_at: Option<Timestamp>,
        coordinate: Option<(f64, f64)>,
    ) -> Photo {
        let mut state = self.state.lock().await;
        let photo = Photo {
            id: state.allocate_id(),
            taken_at,
            latitude: coordinate.map(|(lat, _)| lat),
            longitude: coordinate.map(|(_, lon)| lon),
        };
        state.photos.insert(photo.id, (trip_id, photo.clone()));
        photo
    }

    pub async fn album(&self, album_id: DbId) -> Option<StoredAlbum> {
        self.state.lock().await.albums.get(&album_id).cloned()
    }

    pub async fn album_count(&self) -> usize {
        self.state.lock().await.albums.len()
    }
}

#[async_trait]
impl TripRepository for InMemoryAlbumStore {
    async fn verify_trip_ownership(
        &self,
        user_id: DbId,
        trip_id: DbId,
    ) -> Result<Trip, CoreError> {
        let state = self.state.lock().await;
        state
            .trips
            .get(&trip_id)
            .filter(|trip| trip.user_id == user_id)
            .cloned()
            .ok_or(CoreError::NotFound {
                entity: "Trip",
                id: trip_id,
            })
    }
}

#[async_trait]
impl PhotoRepository for InMemoryAlbumStore {
    async fn list_photos_for_trip(&self, trip_id: DbId) -> Result<Vec<Photo>, CoreError> {
        let state = self.state.lock().await;
        Ok(state
            .photos
            .values()
            .filter(|(owner, _)| *owner == trip_id)
            .map(|(_, photo)| photo.clone())
            .collect())
    }

    async fn count_photos_in_trip(
        &self,
        trip_id: DbId,
        photo_ids: &[DbId],
    ) -> Result<i64, CoreError> {
        let state = self.state.lock().await;
        let count = photo_ids
            .iter()
            .filter(|id| matches!(state.photos.get(*id), Some((owner, _)) if *owner == trip_id))
            .count();
        Ok(count as i64)
    }
}

#[async_trait]
impl AlbumRepository for InMemoryAlbumStore {
    async fn create_album_with_assignments(
        &self,
        trip_id: DbId,
        name: &str,
        ordered_photo_ids: &[DbId],
    ) -> Result<DbId, CoreError> {
        let mut state = self.state.lock().await;

        if !state.trips.contains_key(&trip_id) {
            return Err(CoreError::Internal(format!(
                "album references missing trip {trip_id}"
            )));
        }
        let all_owned = ordered_photo_ids
            .iter()
            .all(|id| matches!(state.photos.get(id), Some((owner, _)) if *owner == trip_id));
        if !all_owned {
            return Err(CoreError::Validation(PHOTO_OWNERSHIP_MESSAGE.to_string()));
        }

        let id = state.allocate_id();
        let assignments = ordered_photo_ids
            .iter()
            .enumerate()
            .map(|(index, photo_id)| (*photo_id, index as i32))
            .collect();
        state.albums.insert(
            id,
            StoredAlbum {
                id,
                trip_id,
                name: name.to_string(),
                assignments,
            },
        );
        Ok(id)
    }
}

#[async_trait]
impl StoreHealth for InMemoryAlbumStore {
    async fn ping(&self) -> Result<(), CoreError> {
        Ok(())
    }
}
