use crate::math::{Real, DEFAULT_EPSILON};
use crate::shape::{Segment, SegmentPointLocation};

/// Closest points between two segments.
///
/// Returns the location of the closest point on `seg1`, and the location of the closest
/// point on `seg2`.
#[inline]
pub fn closest_points_segment_segment_with_locations(
    seg1: &Segment,
    seg2: &Segment,
) -> (SegmentPointLocation, SegmentPointLocation) {
    let (s, t) = closest_params_segment_segment(seg1, seg2);
    (
        SegmentPointLocation::from_param(s),
        SegmentPointLocation::from_param(t),
    )
}

/// Parameters of the closest points between two segments, on the `[0, 1]` domain of each.
///
/// If the segments are parallel, the closest point on `seg1` is taken at its first vertex
/// when it faces `seg2`, and at the end of the overlap otherwise.
pub fn closest_params_segment_segment(seg1: &Segment, seg2: &Segment) -> (Real, Real) {
    // Ericson, Real-Time Collision Detection, 5.1.9.
    let d1 = seg1.scaled_direction();
    let d2 = seg2.scaled_direction();
    let r = seg1.a - seg2.a;

    let sqlen1 = d1.norm_squared();
    let sqlen2 = d2.norm_squared();
    let f = d2.dot(&r);

    if sqlen1 <= DEFAULT_EPSILON && sqlen2 <= DEFAULT_EPSILON {
        return (0.0, 0.0);
    }

    if sqlen1 <= DEFAULT_EPSILON {
        return (0.0, na::clamp(f / sqlen2, 0.0, 1.0));
    }

    let c = d1.dot(&r);

    if sqlen2 <= DEFAULT_EPSILON {
        return (na::clamp(-c / sqlen1, 0.0, 1.0), 0.0);
    }

    let b = d1.dot(&d2);
    let ae = sqlen1 * sqlen2;
    let bb = b * b;
    let denom = ae - bb;

    // Both an absolute and an ulps test: `denom` vanishes for parallel segments.
    let mut s = if denom > DEFAULT_EPSILON && !ulps_eq!(ae, bb) {
        na::clamp((b * f - c * sqlen2) / denom, 0.0, 1.0)
    } else {
        0.0
    };
    let mut t = (b * s + f) / sqlen2;

    if t < 0.0 {
        t = 0.0;
        s = na::clamp(-c / sqlen1, 0.0, 1.0);
    } else if t > 1.0 {
        t = 1.0;
        s = na::clamp((b - c) / sqlen1, 0.0, 1.0);
    }

    (s, t)
}
