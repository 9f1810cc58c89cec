use crate::math::{Point, Real};
use na;

/// Description of the projection of a point on a shape.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PointProjection {
    /// Whether or not the projected point was already on the shape.
    pub is_inside: bool,
    /// The projection result.
    pub point: Point<Real>,
}

impl PointProjection {
    /// Initializes a new `PointProjection`.
    pub fn new(is_inside: bool, point: Point<Real>) -> Self {
        PointProjection { is_inside, point }
    }
}

/// Trait of shapes points can be projected on.
///
/// Member curves are the projection targets: every crossing point found by the splitting
/// pipeline is snapped back on the curve it splits.
pub trait PointQuery {
    /// Projects a point on `self`.
    fn project_point(&self, pt: &Point<Real>) -> PointProjection;

    /// Computes the minimal distance between a point and `self`.
    fn distance_to_point(&self, pt: &Point<Real>) -> Real {
        na::distance(&self.project_point(pt).point, pt)
    }

    /// Tests if the given point lies on `self`.
    fn contains_point(&self, pt: &Point<Real>) -> bool {
        self.project_point(pt).is_inside
    }
}

/// Point projection returning, in addition, where the projection lies on the shape.
pub trait PointQueryWithLocation {
    /// The shape-specific description of where a projection lies.
    type Location;

    /// Projects a point on `self`.
    fn project_point_and_get_location(&self, pt: &Point<Real>)
        -> (PointProjection, Self::Location);
}
