use crate::math::{Point, Real};
use crate::query::{PointProjection, PointQuery, PointQueryWithLocation};
use crate::shape::{Segment, SegmentPointLocation};

impl PointQuery for Segment {
    #[inline]
    fn project_point(&self, pt: &Point<Real>) -> PointProjection {
        self.project_point_and_get_location(pt).0
    }
}

impl PointQueryWithLocation for Segment {
    type Location = SegmentPointLocation;

    #[inline]
    fn project_point_and_get_location(
        &self,
        pt: &Point<Real>,
    ) -> (PointProjection, Self::Location) {
        let ab = self.b - self.a;
        let ap = pt - self.a;
        let ab_ap = ab.dot(&ap);
        let sqnab = ab.norm_squared();
        let _1 = 1.0;

        let proj;
        let location;

        if ab_ap <= 0.0 {
            // Voronoï region of vertex 'a'.
            location = SegmentPointLocation::OnVertex(0);
            proj = self.a;
        } else if ab_ap >= sqnab {
            // Voronoï region of vertex 'b'.
            location = SegmentPointLocation::OnVertex(1);
            proj = self.b;
        } else {
            // Voronoï region of the segment interior.
            let u = ab_ap / sqnab;
            let bcoords = [_1 - u, u];
            location = SegmentPointLocation::OnEdge(bcoords);
            proj = self.a + ab * u;
        }

        let inside = relative_eq!(proj, *pt);

        (PointProjection::new(inside, proj), location)
    }
}

impl Segment {
    /// Projects a point on this segment and returns the projection with its parameter.
    ///
    /// The parameter lies in `[0, 1]`, the endpoints being returned exactly when the
    /// projection falls on or beyond them.
    pub fn project_point_and_get_param(&self, pt: &Point<Real>) -> (Point<Real>, Real) {
        let (proj, location) = self.project_point_and_get_location(pt);
        (proj.point, location.param())
    }
}
