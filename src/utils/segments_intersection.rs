use crate::math::{Point, Real};
use crate::query::closest_points::closest_points_segment_segment_with_locations;
use crate::shape::{Segment, SegmentPointLocation};

/// Intersection between two segments.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SegmentsIntersection {
    /// Single point of intersection.
    Point {
        /// Location of the intersection point on the first segment.
        loc1: SegmentPointLocation,
        /// Location of the intersection point on the second segment.
        loc2: SegmentPointLocation,
        /// Distance between the two segments at that point.
        distance: Real,
    },
    /// Intersection along a segment (when both segments are collinear).
    Overlap {
        /// Parameters, on the first segment, of the ends of the overlapping part.
        params1: [Real; 2],
    },
}

/// Computes the intersection between two 3D segments.
///
/// The segments intersect if they pass within `epsilon` of each other. Returns `None` if
/// either segment is shorter than `epsilon`.
pub fn segments_intersection3d(
    seg1: &Segment,
    seg2: &Segment,
    epsilon: Real,
) -> Option<SegmentsIntersection> {
    let d1 = seg1.scaled_direction();
    let d2 = seg2.scaled_direction();
    let len1 = d1.norm();
    let len2 = d2.norm();

    if len1 < epsilon || len2 < epsilon {
        return None;
    }

    // |d1 x d2| / |d2| is how far the end of `seg1` drifts away from a line
    // parallel to `seg2` passing through `seg1.a`.
    if d1.cross(&d2).norm() <= epsilon * len2 {
        return parallel_intersection(seg1, seg2, epsilon);
    }

    let (loc1, loc2) = closest_points_segment_segment_with_locations(seg1, seg2);
    let distance = na::distance(&seg1.point_at(&loc1), &seg2.point_at(&loc2));

    if distance < epsilon {
        Some(SegmentsIntersection::Point {
            loc1,
            loc2,
            distance,
        })
    } else {
        None
    }
}

fn parallel_intersection(
    seg1: &Segment,
    seg2: &Segment,
    epsilon: Real,
) -> Option<SegmentsIntersection> {
    let d1 = seg1.scaled_direction();
    let sqlen1 = d1.norm_squared();
    let param = |pt: Point<Real>| (pt - seg1.a).dot(&d1) / sqlen1;
    let t_a = param(seg2.a);
    let t_b = param(seg2.b);

    // Distance from `seg2.a` to the line supporting `seg1`.
    let offset = na::distance(&seg2.a, &seg1.point_at_param(t_a));
    if offset >= epsilon {
        return None;
    }

    let slack = epsilon / sqlen1.sqrt();
    let start = t_a.min(t_b).max(0.0);
    let end = t_a.max(t_b).min(1.0);

    if start > end + slack {
        None
    } else {
        Some(SegmentsIntersection::Overlap {
            params1: [start, end.max(start)],
        })
    }
}
