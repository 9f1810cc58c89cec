//! Closest points between two segments.

pub use self::closest_points_segment_segment::{
    closest_params_segment_segment, closest_points_segment_segment_with_locations,
};

mod closest_points_segment_segment;
