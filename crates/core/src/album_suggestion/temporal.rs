//! Date clustering by sequential time-gap thresholding.

use crate::types::{DbId, Timestamp};

use super::{Cluster, ClusterKind, Photo, MIN_CLUSTER_SIZE};

/// Group timestamped photos whose consecutive capture times are at most
/// `window` apart.
///
/// The gap is measured between neighbours in chronological order, not from
/// the first photo of the cluster, so a dense run can span longer than
/// `window`. Photos without a timestamp are skipped. Equal timestamps are
/// ordered by id so the output does not depend on input order.
pub fn cluster_by_time(photos: &[Photo], window: chrono::Duration) -> Vec<Cluster> {
    let mut timed: Vec<(Timestamp, DbId)> = photos
        .iter()
        .filter_map(|p| p.taken_at.map(|t| (t, p.id)))
        .collect();

    if timed.len() < MIN_CLUSTER_SIZE {
        return Vec::new();
    }

    timed.sort_unstable();

    let mut clusters = Vec::new();
    let mut open: Vec<(Timestamp, DbId)> = vec![timed[0]];

    for &(taken_at, id) in &timed[1..] {
        // `open` is never empty inside the loop.
        let previous = open[open.len() - 1].0;
        if taken_at - previous <= window {
            open.push((taken_at, id));
        } else {
            close(&mut clusters, std::mem::replace(&mut open, vec![(taken_at, id)]));
        }
    }
    close(&mut clusters, open);

    clusters
}

/// Emit `run` as a date cluster if it is large enough.
fn close(clusters: &mut Vec<Cluster>, run: Vec<(Timestamp, DbId)>) {
    if run.len() < MIN_CLUSTER_SIZE {
        return;
    }
    let first = run[0].0;
    let last = run[run.len() - 1].0;
    clusters.push(Cluster {
        kind: ClusterKind::Date,
        photo_ids: run.into_iter().map(|(_, id)| id).collect(),
        taken_between: Some((first, last)),
    });
}
