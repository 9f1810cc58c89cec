use crate::math::{Point2, Real};

/// Tests if a point is inside a closed polygon, with the even-odd rule.
///
/// The last vertex is implicitly connected to the first one. The orientation of the
/// polygon does not matter. Points exactly on the outline may be reported on either side.
pub fn point_in_poly2d(pt: &Point2<Real>, poly: &[Point2<Real>]) -> bool {
    let Some(mut prev) = poly.last() else {
        return false;
    };
    let mut inside = false;

    for curr in poly {
        // Edges straddling the horizontal line through `pt`, crossed on its right.
        if (curr.y > pt.y) != (prev.y > pt.y) {
            let x = curr.x + (pt.y - curr.y) / (prev.y - curr.y) * (prev.x - curr.x);
            if pt.x < x {
                inside = !inside;
            }
        }

        prev = curr;
    }

    inside
}
