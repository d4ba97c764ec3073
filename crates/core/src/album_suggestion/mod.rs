//! Photo album suggestion engine.
//!
//! Proposes candidate albums for a trip by grouping photos that were taken
//! close together in time ([`temporal`]) or in space ([`spatial`]), scoring
//! each group ([`scoring`]) and ranking the combined list ([`ranking`]).
//! Accepting a candidate goes through [`service::AlbumSuggestionService`],
//! which re-validates photo ownership before committing an album.
//!
//! Everything up to ranking is a pure, synchronous computation over a
//! snapshot of the trip's photos.

pub mod accept;
pub mod in_memory;
pub mod label;
pub mod ranking;
pub mod repository;
pub mod scoring;
pub mod service;
pub mod spatial;
pub mod temporal;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::geo::Coordinate;
use crate::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Tuning constants
// ---------------------------------------------------------------------------

/// Maximum gap between consecutive photos of one date cluster, in minutes.
pub const DEFAULT_TIME_WINDOW_MINS: i64 = 120;

/// Maximum distance between two connected photos of one location cluster.
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 0.5;

/// Number of suggestions returned after ranking.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Smallest group of photos that is worth suggesting as an album.
pub const MIN_CLUSTER_SIZE: usize = 3;

/// Label used for every location suggestion.
pub const LOCATION_LABEL: &str = "Nearby Photos";

// ---------------------------------------------------------------------------
// Photo
// ---------------------------------------------------------------------------

/// A trip photo as seen by the suggestion engine.
///
/// A missing timestamp excludes the photo from date clustering only; a
/// missing (or invalid) coordinate excludes it from location clustering only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: DbId,
    pub taken_at: Option<Timestamp>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Photo {
    /// The photo's position, if both halves are present and within range.
    pub fn coordinate(&self) -> Option<Coordinate> {
        let (lat, lon) = (self.latitude?, self.longitude?);
        let valid = lat.is_finite()
            && lon.is_finite()
            && (-90.0..=90.0).contains(&lat)
            && (-180.0..=180.0).contains(&lon);
        valid.then(|| Coordinate::new(lat, lon))
    }
}

// ---------------------------------------------------------------------------
// Clusters and suggestions
// ---------------------------------------------------------------------------

/// Which signal produced a cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterKind {
    Date,
    Location,
}

/// An ephemeral group of at least [`MIN_CLUSTER_SIZE`] photos.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    pub kind: ClusterKind,
    /// Unique photo ids; chronological for date clusters, ascending for
    /// location clusters.
    pub photo_ids: Vec<DbId>,
    /// First and last capture time. Only set for date clusters.
    pub taken_between: Option<(Timestamp, Timestamp)>,
}

impl Cluster {
    pub fn size(&self) -> usize {
        self.photo_ids.len()
    }
}

/// A labeled, scored cluster offered to the caller as a candidate album.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    #[serde(rename = "type")]
    pub kind: ClusterKind,
    pub label: String,
    pub photo_ids: Vec<DbId>,
    pub confidence: f64,
}

impl Suggestion {
    /// Build a suggestion from a cluster, attaching its label and score.
    pub fn from_cluster(cluster: Cluster) -> Self {
        let label = label::label_for(&cluster);
        let confidence = scoring::confidence(cluster.kind, cluster.size());
        Self {
            kind: cluster.kind,
            label,
            photo_ids: cluster.photo_ids,
            confidence,
        }
    }

    pub fn size(&self) -> usize {
        self.photo_ids.len()
    }
}

// ---------------------------------------------------------------------------
// Parameters
// ---------------------------------------------------------------------------

/// Tunable thresholds for one suggestion run.
#[derive(Debug, Clone, PartialEq)]
pub struct SuggestionParams {
    /// Largest allowed gap between consecutive photos in a date cluster.
    pub time_window: chrono::Duration,
    /// Largest distance at which two photos are considered connected.
    pub max_distance_km: f64,
    /// Length of the ranked list returned to the caller.
    pub max_suggestions: usize,
}

impl Default for SuggestionParams {
    fn default() -> Self {
        Self {
            time_window: chrono::Duration::minutes(DEFAULT_TIME_WINDOW_MINS),
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }
}

impl SuggestionParams {
    /// Reject parameter sets that would make clustering meaningless.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.time_window <= chrono::Duration::zero() {
            return Err(CoreError::Validation(
                "Suggestion time window must be positive".to_string(),
            ));
        }
        if !self.max_distance_km.is_finite() || self.max_distance_km <= 0.0 {
            return Err(CoreError::Validation(format!(
                "Suggestion distance threshold must be a positive number of km, got {}",
                self.max_distance_km
            )));
        }
        if self.max_suggestions == 0 {
            return Err(CoreError::Validation(
                "Maximum number of suggestions must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Compute ranked album suggestions for one snapshot of a trip's photos.
///
/// Date and location clusters are computed independently, so a photo may
/// appear in one suggestion of each kind. An empty result is not an error.
pub fn suggest_albums(photos: &[Photo], params: &SuggestionParams) -> Vec<Suggestion> {
    let date_clusters = temporal::cluster_by_time(photos, params.time_window);
    let location_clusters = spatial::cluster_by_location(photos, params.max_distance_km);

    tracing::debug!(
        photo_count = photos.len(),
        date_clusters = date_clusters.len(),
        location_clusters = location_clusters.len(),
        "Clustered trip photos"
    );

    let candidates = date_clusters
        .into_iter()
        .chain(location_clusters)
        .map(Suggestion::from_cluster)
        .collect();

    ranking::rank(candidates, params.max_suggestions)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn too_few_photos_yield_no_suggestions() {
        let params = SuggestionParams::default();
        assert!(suggest_albums(&[], &params).is_empty());

        let one = vec![Photo {
            id: 1,
            taken_at: Some(at(10, 0)),
            latitude: Some(48.8584),
            longitude: Some(2.2945),
        }];
        assert!(suggest_albums(&one, &params).is_empty());

        let two = vec![timed(1, at(10, 0)), placed(2, 48.8584, 2.2945)];
        assert!(suggest_albums(&two, &params).is_empty());
    }

    #[test]
    fn location_cluster_outranks_small_date_cluster() {
        let mut photos = vec![
            timed(1, at(10, 0)),
            timed(2, at(10, 20)),
            timed(3, at(10, 40)),
        ];
        photos.extend(eiffel_photos(10));
        photos.push(placed(14, 48.8585, 2.2946));

        let suggestions = suggest_albums(&photos, &SuggestionParams::default());

        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].kind, ClusterKind::Location);
        assert_eq!(suggestions[0].photo_ids, vec![10, 11, 12, 13, 14]);
        assert_eq!(suggestions[0].label, LOCATION_LABEL);
        assert_eq!(suggestions[1].kind, ClusterKind::Date);
        assert_eq!(suggestions[1].photo_ids, vec![1, 2, 3]);
        assert!(suggestions[0].confidence >= suggestions[1].confidence);
    }

    #[test]
    fn photo_may_appear_in_both_kinds() {
        let photos: Vec<Photo> = (1..=3)
            .map(|id| Photo {
                id,
                taken_at: Some(at(9, id as u32 * 10)),
                latitude: Some(48.8584),
                longitude: Some(2.2945),
            })
            .collect();

        let suggestions = suggest_albums(&photos, &SuggestionParams::default());

        assert_eq!(suggestions.len(), 2);
        assert!(suggestions.iter().all(|s| s.photo_ids == vec![1, 2, 3]));
    }

    #[test]
    fn eight_qualifying_clusters_are_capped_at_five() {
        let mut photos = Vec::new();
        let mut next_id = 1;
        // Eight groups of three, each on a different day.
        for day in 0..8 {
            let base = at(10, 0) + chrono::Duration::days(day);
            for offset in 0..3 {
                photos.push(timed(next_id, base + chrono::Duration::minutes(offset * 15)));
                next_id += 1;
            }
        }

        let suggestions = suggest_albums(&photos, &SuggestionParams::default());
        assert_eq!(suggestions.len(), 5);
    }

    #[test]
    fn repeated_runs_are_identical() {
        let mut photos = eiffel_photos(1);
        photos.extend(vec![
            timed(5, at(8, 0)),
            timed(6, at(8, 5)),
            timed(7, at(8, 10)),
            timed(8, at(20, 0)),
        ]);
        let params = SuggestionParams::default();

        let first = suggest_albums(&photos, &params);
        let second = suggest_albums(&photos, &params);
        assert_eq!(first, second);
    }

    #[test]
    fn suggestion_serializes_kind_as_type() {
        let suggestion = Suggestion {
            kind: ClusterKind::Location,
            label: LOCATION_LABEL.to_string(),
            photo_ids: vec![1, 2, 3],
            confidence: 0.4,
        };
        let json = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(json["type"], "location");
        assert_eq!(json["photo_ids"], serde_json::json!([1, 2, 3]));
    }

    #[test]
    fn out_of_range_coordinates_are_ignored() {
        let photo = Photo {
            id: 1,
            taken_at: None,
            latitude: Some(95.0),
            longitude: Some(2.0),
        };
        assert!(photo.coordinate().is_none());

        let half = Photo {
            id: 2,
            taken_at: None,
            latitude: Some(48.0),
            longitude: None,
        };
        assert!(half.coordinate().is_none());
    }

    #[test]
    fn params_validation() {
        assert!(SuggestionParams::default().validate().is_ok());

        let zero_window = SuggestionParams {
            time_window: chrono::Duration::zero(),
            ..Default::default()
        };
        assert!(zero_window.validate().is_err());

        let bad_distance = SuggestionParams {
            max_distance_km: f64::NAN,
            ..Default::default()
        };
        assert!(bad_distance.validate().is_err());

        let no_results = SuggestionParams {
            max_suggestions: 0,
            ..Default::default()
        };
        assert!(no_results.validate().is_err());
    }
}
