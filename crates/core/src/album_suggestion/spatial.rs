//! Location clustering by distance connectivity.
//!
//! Two geotagged photos are connected when their haversine distance is at
//! most the threshold; every connected component with at least
//! [`MIN_CLUSTER_SIZE`] photos becomes a cluster. Components do not depend
//! on iteration order, so a dense region is never split by where a scan
//! happened to start. Comparisons are pairwise, O(n²) in geotagged photos.

use std::collections::BTreeMap;

use crate::geo::{distance_km, Coordinate};
use crate::types::DbId;

use super::{Cluster, ClusterKind, Photo, MIN_CLUSTER_SIZE};

/// Group geotagged photos into connected components under `max_distance_km`.
///
/// Photo ids inside a cluster are ascending; clusters are ordered by their
/// smallest photo id. Photos count as geotagged only when both halves are
/// finite and in range, see [`Photo::coordinate`].
pub fn cluster_by_location(photos: &[Photo], max_distance_km: f64) -> Vec<Cluster> {
    let mut placed: Vec<(DbId, Coordinate)> = photos
        .iter()
        .filter_map(|p| p.coordinate().map(|c| (p.id, c)))
        .collect();

    if placed.len() < MIN_CLUSTER_SIZE {
        return Vec::new();
    }

    placed.sort_unstable_by_key(|(id, _)| *id);

    let mut components = DisjointSet::new(placed.len());
    for i in 0..placed.len() {
        for j in (i + 1)..placed.len() {
            if components.same(i, j) {
                continue;
            }
            if distance_km(placed[i].1, placed[j].1) <= max_distance_km {
                components.union(i, j);
            }
        }
    }

    // Indices are in id order, so each member list comes out ascending.
    let mut groups: BTreeMap<usize, Vec<DbId>> = BTreeMap::new();
    for (index, (id, _)) in placed.iter().enumerate() {
        let root = components.find(index);
        groups.entry(root).or_default().push(*id);
    }

    let mut clusters: Vec<Cluster> = groups
        .into_values()
        .filter(|ids| ids.len() >= MIN_CLUSTER_SIZE)
        .map(|photo_ids| Cluster {
            kind: ClusterKind::Location,
            photo_ids,
            taken_between: None,
        })
        .collect();
    clusters.sort_by_key(|c| c.photo_ids[0]);

    clusters
}

// ---------------------------------------------------------------------------
// Union-find over photo indices
// ---------------------------------------------------------------------------

struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            // Path halving.
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    fn same(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            std::cmp::Ordering::Less => self.parent[ra] = rb,
            std::cmp::Ordering::Greater => self.parent[rb] = ra,
            std::cmp::Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
    }
}
