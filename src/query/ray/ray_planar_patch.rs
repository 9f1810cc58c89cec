use crate::math::{Point, Real, Vector};
use crate::query::{Ray, RayCast, RayIntersection};
use crate::shape::PlanarPatch;
use crate::utils;

/// Computes the toi of an unbounded line with a plane described by a point and its normal.
///
/// Returns `None` if the line is parallel to the plane.
#[inline]
pub fn line_toi_with_plane(
    plane_point: &Point<Real>,
    plane_normal: &Vector<Real>,
    line_origin: &Point<Real>,
    line_dir: &Vector<Real>,
) -> Option<Real> {
    let dpos = *plane_point - *line_origin;
    let denom = plane_normal.dot(line_dir);

    if relative_eq!(denom, 0.0) {
        None
    } else {
        Some(plane_normal.dot(&dpos) / denom)
    }
}

impl RayCast for PlanarPatch {
    fn cast_ray_and_get_normal(
        &self,
        ray: &Ray,
        max_time_of_impact: Real,
    ) -> Option<RayIntersection> {
        let normal = self.normal();
        let t = line_toi_with_plane(&self.origin(), &normal, &ray.origin, &ray.dir)?;

        if t < 0.0 || t > max_time_of_impact {
            return None;
        }

        let hit = ray.point_at(t);
        let outline = self.plane_outline();

        if !utils::point_in_poly2d(&self.to_plane_coords(&hit), &outline) {
            return None;
        }

        let n = if normal.dot(&ray.dir) > 0.0 {
            -*normal
        } else {
            *normal
        };

        Some(RayIntersection::new(t, n))
    }
}
