//! Shapes the members and cutting elements are made of.

pub use self::planar_patch::{PatchError, PlanarPatch};
pub use self::segment::{Segment, SegmentPointLocation};

mod planar_patch;
mod segment;
