use crate::math::{Point, Real};
use ena::unify::{InPlaceUnificationTable, UnifyKey};

#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq)]
struct PointKey(u32);

impl UnifyKey for PointKey {
    type Value = ();
    fn index(&self) -> u32 {
        self.0
    }
    fn from_index(u: u32) -> PointKey {
        PointKey(u)
    }
    fn tag() -> &'static str {
        "PointKey"
    }
}

/// Groups points that are closer than `epsilon` to each other.
///
/// Two points end up in the same cluster if they are connected by a chain of points where
/// each link is shorter than `epsilon`. The result does not depend on the input order.
///
/// Returns the clusters as lists of indices into `points`. Clusters are ordered by their
/// smallest index, and indices are increasing inside of each cluster.
pub fn cluster_points(points: &[Point<Real>], epsilon: Real) -> Vec<Vec<usize>> {
    let mut ufind: InPlaceUnificationTable<PointKey> = InPlaceUnificationTable::new();
    let keys: Vec<_> = points.iter().map(|_| ufind.new_key(())).collect();
    let sq_eps = epsilon * epsilon;

    for i in 0..points.len() {
        for j in i + 1..points.len() {
            if na::distance_squared(&points[i], &points[j]) < sq_eps {
                ufind.union(keys[i], keys[j]);
            }
        }
    }

    let mut root_to_cluster = vec![usize::MAX; points.len()];
    let mut clusters: Vec<Vec<usize>> = vec![];

    for (i, key) in keys.iter().enumerate() {
        let root = ufind.find(*key).index() as usize;

        if root_to_cluster[root] == usize::MAX {
            root_to_cluster[root] = clusters.len();
            clusters.push(vec![]);
        }

        clusters[root_to_cluster[root]].push(i);
    }

    clusters
}
