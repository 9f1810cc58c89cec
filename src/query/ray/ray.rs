//! Traits and structure needed to cast rays.

use crate::math::{Point, Real, Vector};
use crate::shape::Segment;

/// A ray for ray-casting queries.
///
/// A ray is a half-infinite line starting at an origin point and extending
/// infinitely in a direction.
///
/// The direction does not need to be normalized, but the time-of-impact of a hit is
/// expressed in multiples of `dir.norm()`. Rays cast along a member use a unit direction
/// so that times-of-impact are distances from the member's start point.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    /// Direction vector of the ray.
    pub dir: Vector<Real>,
}

impl Ray {
    /// Creates a new ray from an origin point and direction vector.
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Ray {
        Ray { origin, dir }
    }

    /// The ray starting at `segment.a` with the unit direction of `segment`.
    ///
    /// Times of impact along this ray are distances from `segment.a`. Returns `None` if the
    /// segment is degenerate.
    pub fn along(segment: &Segment) -> Option<Ray> {
        segment
            .direction()
            .map(|dir| Ray::new(segment.a, dir.into_inner()))
    }

    /// Computes a point along the ray at parameter `t`.
    ///
    /// Returns `origin + dir * t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }
}

/// Structure containing the result of a successful ray cast.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct RayIntersection {
    /// The time of impact of the ray with the object. The exact contact point can be computed
    /// with: `ray.point_at(time_of_impact)` or equivalently `origin + dir * time_of_impact`.
    pub time_of_impact: Real,

    /// The normal at the intersection point, facing the ray origin.
    pub normal: Vector<Real>,
}

impl RayIntersection {
    /// Creates a new `RayIntersection`.
    #[inline]
    pub fn new(time_of_impact: Real, normal: Vector<Real>) -> RayIntersection {
        RayIntersection {
            time_of_impact,
            normal,
        }
    }
}

/// Traits of objects which can be tested for intersection with a ray.
///
/// Shapes are expressed in world-space: members and cutting elements carry no local frame.
pub trait RayCast {
    /// Computes the time of impact between this shape and a ray.
    fn cast_ray(&self, ray: &Ray, max_time_of_impact: Real) -> Option<Real> {
        self.cast_ray_and_get_normal(ray, max_time_of_impact)
            .map(|inter| inter.time_of_impact)
    }

    /// Computes the time of impact, and normal between this shape and a ray.
    fn cast_ray_and_get_normal(
        &self,
        ray: &Ray,
        max_time_of_impact: Real,
    ) -> Option<RayIntersection>;

    /// Tests whether a ray intersects this shape.
    #[inline]
    fn intersects_ray(&self, ray: &Ray, max_time_of_impact: Real) -> bool {
        self.cast_ray(ray, max_time_of_impact).is_some()
    }
}
