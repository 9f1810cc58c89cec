//! Ray-casting related definitions and implementations.

#[doc(inline)]
pub use self::ray::{Ray, RayCast, RayIntersection};
pub use self::ray_planar_patch::line_toi_with_plane;

#[doc(hidden)]
pub mod ray;
mod ray_planar_patch;
