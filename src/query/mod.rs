//! Non-persistent geometric queries.
//!
//! Ray-casting and point-projection can be achieved by importing traits:
//!
//! * [`query::RayCast`](RayCast) for ray-casting.
//! * [`query::PointQuery`](PointQuery) for point projection.
//!
//! Closest points between two segments are computed by
//! [`closest_points::closest_points_segment_segment_with_locations`].

pub use self::point::{PointProjection, PointQuery, PointQueryWithLocation};
pub use self::ray::{Ray, RayCast, RayIntersection};

pub mod closest_points;
pub mod point;
pub mod ray;
