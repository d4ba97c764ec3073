//! Heuristic confidence scores for clusters.
//!
//! The score grows by one step per photo beyond the minimum cluster size and
//! saturates at 1.0. Location clusters get a fixed bonus.

use super::{ClusterKind, MIN_CLUSTER_SIZE};

/// Score of a cluster of exactly [`MIN_CLUSTER_SIZE`] photos.
pub const BASE_CONFIDENCE: f64 = 0.3;

/// Score added for every photo beyond [`MIN_CLUSTER_SIZE`].
pub const CONFIDENCE_PER_PHOTO: f64 = 0.1;

/// Bonus applied to location clusters before capping.
pub const LOCATION_BONUS: f64 = 0.1;

pub const MAX_CONFIDENCE: f64 = 1.0;

/// Confidence in `[0, 1]` for a cluster of `size` photos.
///
/// Rounded to three decimals so scores built from the same steps compare
/// equal regardless of floating-point accumulation order.
pub fn confidence(kind: ClusterKind, size: usize) -> f64 {
    let extra = size.saturating_sub(MIN_CLUSTER_SIZE) as f64;
    let base = (BASE_CONFIDENCE + CONFIDENCE_PER_PHOTO * extra).min(MAX_CONFIDENCE);

    let score = match kind {
        ClusterKind::Date => base,
        ClusterKind::Location => (base + LOCATION_BONUS).min(MAX_CONFIDENCE),
    };

    (score.clamp(0.0, MAX_CONFIDENCE) * 1000.0).round() / 1000.0
}
