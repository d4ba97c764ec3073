//! Human-readable labels for suggestions.

use crate::types::Timestamp;

use super::{Cluster, ClusterKind, LOCATION_LABEL};

/// Calendar date format used in date labels, e.g. `June 15, 2024`.
const DATE_FORMAT: &str = "%B %-d, %Y";

/// Label shown to the user for a cluster.
///
/// Date clusters are named after the UTC day they were taken on, or the
/// first and last day when they cross midnight.
pub fn label_for(cluster: &Cluster) -> String {
    match (cluster.kind, cluster.taken_between) {
        (ClusterKind::Date, Some((first, last))) => date_label(first, last),
        (ClusterKind::Date, None) => "Photos".to_string(),
        (ClusterKind::Location, _) => LOCATION_LABEL.to_string(),
    }
}

fn date_label(first: Timestamp, last: Timestamp) -> String {
    let start = first.date_naive();
    let end = last.date_naive();
    if start == end {
        start.format(DATE_FORMAT).to_string()
    } else {
        format!("{} - {}", start.format(DATE_FORMAT), end.format(DATE_FORMAT))
    }
}
