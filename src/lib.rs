/*!
crosscut3d
==========

**crosscut3d** splits 3D linear members (beams, braces, pipes, ...) at every point
where another linear or planar element crosses them.

The geometric core computes the crossing points between a member and its cutters,
merges points that coincide within a tolerance, orders them along the member, and
rebuilds the member as a chain of disjoint segments that keep its attributes.
Everything the host application owns (element storage, scene ray casting, scoped
mutations, attribute reflection) is reached through the [`model::ModelStore`] trait.
An in-memory [`model::Model`] implementation is provided.

```
use crosscut3d::math::Point;
use crosscut3d::model::{MemberType, Model, ModelStore};
use crosscut3d::pipeline::{split_members, CutterSelection, SplitOptions};
use crosscut3d::shape::Segment;

let mut model = Model::new();
let beam = model.add_member_type(MemberType::new("Beam", "Structural Framing"));
let member = model
    .add_linear_member(Segment::new(Point::new(0.0, 0.0, 0.0), Point::new(10.0, 0.0, 0.0)), beam)
    .unwrap();
let cutter = model
    .add_linear_member(Segment::new(Point::new(5.0, -5.0, 0.0), Point::new(5.0, 5.0, 0.0)), beam)
    .unwrap();

let report = split_members(
    &mut model,
    &[member],
    CutterSelection::Elements(&[cutter]),
    &SplitOptions::default(),
)
.unwrap();
assert_eq!(report.created_segments().count(), 2);
assert!(!model.contains(member));
```
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod model;
pub mod pipeline;
pub mod query;
pub mod shape;
pub mod utils;

/// Aliases for the mathematical types used throughout this crate.
pub mod math {
    pub use na::{Point2, Point3, UnitVector3, Vector3};

    /// The scalar type used throughout this crate.
    pub type Real = f64;

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;
}
