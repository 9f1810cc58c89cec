use crate::math::Real;
use crate::model::builtin;
use crate::pipeline::SplitError;

/// The default distance under which two points are considered equal.
pub const DEFAULT_TOLERANCE: Real = 1.0e-4;
/// The default length under which a segment is not created.
pub const DEFAULT_MIN_SEGMENT_LENGTH: Real = 1.0e-3;

#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// Toggles of the splitting pipeline.
pub struct SplitFlags(u8);

bitflags::bitflags! {
    impl SplitFlags: u8 {
        /// Split members where they cross other linear members.
        const CURVE_CURVE = 1;
        /// Split members where they cross planar elements, found by ray casting.
        const RAY_CAST = 1 << 1;
        /// Do not create a segment if a member already spans the same two points.
        const SKIP_DUPLICATES = 1 << 2;
    }
}

impl Default for SplitFlags {
    fn default() -> Self {
        SplitFlags::all()
    }
}

/// Parameters of [`split_members`](crate::pipeline::split_members).
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct SplitOptions {
    /// Two points closer than this distance are the same point.
    ///
    /// This single tolerance is used to accept intersections, merge split points, and
    /// detect existing members spanning the same points.
    pub tolerance: Real,
    /// Segments shorter than this length are not created.
    pub min_segment_length: Real,
    /// Intersection modes and duplicate handling.
    pub flags: SplitFlags,
    /// Names of attributes never copied to the new segments, on top of the built-in ones.
    pub skipped_attributes: Vec<String>,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            min_segment_length: DEFAULT_MIN_SEGMENT_LENGTH,
            flags: SplitFlags::default(),
            skipped_attributes: vec![],
        }
    }
}

impl SplitOptions {
    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Real) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the minimum segment length.
    #[must_use]
    pub fn with_min_segment_length(mut self, min_segment_length: Real) -> Self {
        self.min_segment_length = min_segment_length;
        self
    }

    /// Sets the flags.
    #[must_use]
    pub fn with_flags(mut self, flags: SplitFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Adds an attribute name to the skip-list.
    #[must_use]
    pub fn with_skipped_attribute(mut self, name: impl Into<String>) -> Self {
        self.skipped_attributes.push(name.into());
        self
    }

    /// Checks that the tolerance and lengths are usable.
    pub fn validate(&self) -> Result<(), SplitError> {
        if !self.tolerance.is_finite() || self.tolerance <= 0.0 {
            return Err(SplitError::InvalidOptions(format!(
                "the tolerance must be positive, got {}",
                self.tolerance
            )));
        }

        if !self.min_segment_length.is_finite() || self.min_segment_length < 0.0 {
            return Err(SplitError::InvalidOptions(format!(
                "the minimum segment length must be non-negative, got {}",
                self.min_segment_length
            )));
        }

        if !self
            .flags
            .intersects(SplitFlags::CURVE_CURVE | SplitFlags::RAY_CAST)
        {
            return Err(SplitError::InvalidOptions(
                "at least one intersection mode must be enabled".to_string(),
            ));
        }

        Ok(())
    }

    /// Is the attribute with this name excluded from attribute transfer?
    pub fn is_skipped(&self, name: &str) -> bool {
        builtin::NAMES.contains(&name) || self.skipped_attributes.iter().any(|n| n == name)
    }
}
