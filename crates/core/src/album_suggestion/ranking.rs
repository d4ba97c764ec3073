//! Ordering and truncation of candidate suggestions.

use std::cmp::Ordering;

use super::{ClusterKind, Suggestion};

/// Sort suggestions best-first and keep the top `limit`.
///
/// Order: confidence descending, then size descending, then smallest photo
/// id ascending. Overlapping membership between suggestions is left as is.
pub fn rank(mut suggestions: Vec<Suggestion>, limit: usize) -> Vec<Suggestion> {
    suggestions.sort_by(compare);
    suggestions.truncate(limit);
    suggestions
}

fn compare(a: &Suggestion, b: &Suggestion) -> Ordering {
    b.confidence
        .total_cmp(&a.confidence)
        .then_with(|| b.size().cmp(&a.size()))
        .then_with(|| min_photo_id(a).cmp(&min_photo_id(b)))
        // Only reachable when a date and a location cluster both saturate
        // with identical membership.
        .then_with(|| kind_rank(a.kind).cmp(&kind_rank(b.kind)))
}

fn min_photo_id(s: &Suggestion) -> Option<i64> {
    s.photo_ids.iter().copied().min()
}

fn kind_rank(kind: ClusterKind) -> u8 {
    match kind {
        ClusterKind::Location => 0,
        ClusterKind::Date => 1,
    }
}
