//! Various unsorted geometrical and logical operators.

pub use self::point_cluster::cluster_points;
pub use self::point_in_poly2d::point_in_poly2d;
pub use self::segments_intersection::{segments_intersection3d, SegmentsIntersection};

mod point_cluster;
mod point_in_poly2d;
mod segments_intersection;
