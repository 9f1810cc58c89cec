//! The splitting pipeline.
//!
//! A member is split in four steps, each depending only on the previous ones:
//!
//! 1. [`intersect_member`] finds the points where cutters cross the member curve.
//! 2. [`sequence_points`] merges near-duplicate points and orders them along the curve.
//! 3. [`build_segments`] creates one member per span between consecutive points, and
//!    deletes the original.
//! 4. [`transfer_attributes`] copies the attributes of the original onto each new member.
//!
//! [`split_members`] runs these steps for a whole selection.

pub use self::attribute_transfer::{
    transfer_attributes, AttributeOutcome, SkipReason, TransferReport,
};
pub use self::error::SplitError;
pub use self::intersector::{intersect_member, Intersections};
pub use self::options::{
    SplitFlags, SplitOptions, DEFAULT_MIN_SEGMENT_LENGTH, DEFAULT_TOLERANCE,
};
pub use self::segment_builder::{
    build_segments, SegmentBuildReport, SegmentOutcome, SegmentRecord,
};
pub use self::sequencer::{sequence_points, CurvePoint, PointSequence};
pub use self::split::{split_members, CutterSelection, MemberOutcome, MemberReport, SplitReport};

mod attribute_transfer;
mod error;
mod intersector;
mod options;
mod segment_builder;
mod sequencer;
mod split;
