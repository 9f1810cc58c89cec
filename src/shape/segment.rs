//! Definition of the segment shape.

use crate::math::{Point, Real, Vector};

use na::{self, Unit};
use std::mem;

/// A segment shape.
///
/// This is the bounded curve of every linear member. Its parametric domain is `[0, 1]`:
/// the parameter `0` maps to `self.a` and `1` maps to `self.b`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
}

/// Logical description of the location of a point on a segment.
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum SegmentPointLocation {
    /// The point lies on a vertex.
    OnVertex(u32),
    /// The point lies on the segment interior.
    OnEdge([Real; 2]),
}

impl SegmentPointLocation {
    /// The location of the point at the parameter `t` of the `[0, 1]` domain.
    pub fn from_param(t: Real) -> Self {
        if t <= 0.0 {
            SegmentPointLocation::OnVertex(0)
        } else if t >= 1.0 {
            SegmentPointLocation::OnVertex(1)
        } else {
            SegmentPointLocation::OnEdge([1.0 - t, t])
        }
    }

    /// The parameter of this location on the segment's `[0, 1]` domain.
    pub fn param(&self) -> Real {
        match self {
            SegmentPointLocation::OnVertex(0) => 0.0,
            SegmentPointLocation::OnVertex(_) => 1.0,
            SegmentPointLocation::OnEdge(uv) => uv[1],
        }
    }
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The length of this segment.
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// Swaps the two vertices of this segment.
    pub fn swap(&mut self) {
        mem::swap(&mut self.a, &mut self.b)
    }

    /// The unit direction of this segment.
    ///
    /// Points from `self.a()` toward `self.b()`.
    /// Returns `None` is both points are equal.
    pub fn direction(&self) -> Option<Unit<Vector<Real>>> {
        Unit::try_new(self.scaled_direction(), crate::math::DEFAULT_EPSILON)
    }

    /// Is this segment shorter than `epsilon`?
    pub fn is_degenerate(&self, epsilon: Real) -> bool {
        self.length() < epsilon
    }

    /// Computes the point at the given location.
    pub fn point_at(&self, location: &SegmentPointLocation) -> Point<Real> {
        match *location {
            SegmentPointLocation::OnVertex(0) => self.a,
            SegmentPointLocation::OnVertex(_) => self.b,
            SegmentPointLocation::OnEdge(bcoords) => {
                self.a * bcoords[0] + self.b.coords * bcoords[1]
            }
        }
    }

    /// Computes the point at the parameter `t` of the `[0, 1]` domain.
    ///
    /// The parameters `0` and `1` return the endpoints exactly.
    pub fn point_at_param(&self, t: Real) -> Point<Real> {
        if t == 0.0 {
            self.a
        } else if t == 1.0 {
            self.b
        } else {
            self.a + self.scaled_direction() * t
        }
    }

    /// Does `other` span the same two points as `self`, in either direction?
    pub fn same_span(&self, other: &Segment, epsilon: Real) -> bool {
        let direct = na::distance(&self.a, &other.a) < epsilon
            && na::distance(&self.b, &other.b) < epsilon;
        let reversed = na::distance(&self.a, &other.b) < epsilon
            && na::distance(&self.b, &other.a) < epsilon;
        direct || reversed
    }
}

impl From<[Point<Real>; 2]> for Segment {
    fn from(arr: [Point<Real>; 2]) -> Self {
        Segment::new(arr[0], arr[1])
    }
}
