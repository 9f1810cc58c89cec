//! Deduplication and ordering of the split points of a member.

use crate::math::{Point, Real, Vector};
use crate::shape::Segment;
use crate::utils::cluster_points;
use ordered_float::OrderedFloat;

/// A point lying on a member curve, with its parameter on the curve.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CurvePoint {
    /// The point.
    pub point: Point<Real>,
    /// The parameter of `self.point` on the curve's `[0, 1]` domain.
    pub param: Real,
}

impl CurvePoint {
    /// Projects `point` on `curve`.
    pub fn project(curve: &Segment, point: &Point<Real>) -> Self {
        let (point, param) = curve.project_point_and_get_param(point);
        Self { point, param }
    }
}

/// The ordered split points of a member curve.
///
/// The first point is the start of the curve and the last point is its end, both exactly.
/// Parameters are strictly increasing, and two consecutive points are at least the
/// tolerance apart.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct PointSequence {
    points: Vec<CurvePoint>,
}

impl PointSequence {
    /// The points of this sequence, ordered along the curve.
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// The number of points, endpoints included.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Is this sequence empty? Never true for a sequence built by [`sequence_points`].
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The number of interior split points.
    pub fn split_count(&self) -> usize {
        self.points.len().saturating_sub(2)
    }

    /// Does this sequence contain at least one interior split point?
    pub fn has_splits(&self) -> bool {
        self.split_count() > 0
    }

    /// The segments between consecutive points.
    pub fn spans(&self) -> impl ExactSizeIterator<Item = Segment> + '_ {
        self.points
            .windows(2)
            .map(|pair| Segment::new(pair[0].point, pair[1].point))
    }
}

/// Merges the endpoints of `curve` and the `raw` crossing points into an ordered sequence.
///
/// Every raw point is projected on the curve first. Points closer than `epsilon` to each
/// other, directly or through a chain of such points, are merged. A merged group
/// containing an endpoint is represented by that endpoint, exactly. Other groups are
/// represented by their centroid, projected back on the curve.
pub fn sequence_points(curve: &Segment, raw: &[Point<Real>], epsilon: Real) -> PointSequence {
    let start = CurvePoint {
        point: curve.a,
        param: 0.0,
    };
    let end = CurvePoint {
        point: curve.b,
        param: 1.0,
    };

    if curve.is_degenerate(epsilon) {
        return PointSequence {
            points: vec![start, end],
        };
    }

    let mut candidates = vec![start, end];
    candidates.extend(raw.iter().map(|pt| CurvePoint::project(curve, pt)));

    let positions: Vec<_> = candidates.iter().map(|cp| cp.point).collect();
    let mut representatives = vec![];

    for cluster in cluster_points(&positions, epsilon) {
        let has_start = cluster.contains(&0);
        let has_end = cluster.contains(&1);

        if has_start {
            representatives.push(start);
        }

        if has_end {
            representatives.push(end);
        }

        if !has_start && !has_end {
            let sum = cluster
                .iter()
                .fold(Vector::zeros(), |acc, i| acc + positions[*i].coords);
            let centroid = Point::from(sum / cluster.len() as Real);
            representatives.push(CurvePoint::project(curve, &centroid));
        }
    }

    representatives.sort_by_key(|cp| OrderedFloat(cp.param));

    // Rounding of the re-projected centroids may bring them slightly under the tolerance
    // from their neighbors.
    let mut points = Vec::with_capacity(representatives.len());
    points.push(start);

    for cp in representatives {
        let last = points[points.len() - 1];
        if cp.param > last.param
            && cp.param < 1.0
            && na::distance(&cp.point, &last.point) >= epsilon
            && na::distance(&cp.point, &end.point) >= epsilon
        {
            points.push(cp);
        }
    }

    points.push(end);

    log::debug!(
        "Sequenced {} raw points into {} split points.",
        raw.len(),
        points.len() - 2
    );

    PointSequence { points }
}
