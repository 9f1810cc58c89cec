//! Definition of the planar patch shape, the geometry of planar cutting elements.

use crate::math::{Point, Point2, Real, UnitVector, Vector};

use na::Unit;

/// Error raised when building an invalid [`PlanarPatch`].
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum PatchError {
    /// Less than three vertices were given.
    #[error("a planar patch needs at least 3 vertices, got {0}.")]
    NotEnoughVertices(usize),
    /// The vertices are collinear or coincident.
    #[error("the patch vertices are collinear or coincident.")]
    Degenerate,
    /// A vertex lies off the plane fitted through the other vertices.
    #[error("the vertex {index} lies {distance} away from the patch plane.")]
    NotPlanar {
        /// Index of the offending vertex.
        index: usize,
        /// Its distance to the plane.
        distance: Real,
    },
}

/// A bounded planar surface: a simple polygon lying on a plane.
///
/// Walls, slabs and plates used as cutters are described by their outline.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct PlanarPatch {
    vertices: Vec<Point<Real>>,
    normal: UnitVector<Real>,
}

impl PlanarPatch {
    /// Creates a patch from its outline.
    ///
    /// The outline is implicitly closed. Every vertex must lie within `epsilon` of the
    /// plane passing through the first vertex.
    pub fn new(vertices: Vec<Point<Real>>, epsilon: Real) -> Result<Self, PatchError> {
        if vertices.len() < 3 {
            return Err(PatchError::NotEnoughVertices(vertices.len()));
        }

        let normal = Unit::try_new(newell_normal(&vertices), crate::math::DEFAULT_EPSILON)
            .ok_or(PatchError::Degenerate)?;

        let origin = vertices[0];
        for (index, pt) in vertices.iter().enumerate().skip(1) {
            let distance = normal.dot(&(pt - origin)).abs();
            if distance > epsilon {
                return Err(PatchError::NotPlanar { index, distance });
            }
        }

        Ok(PlanarPatch { vertices, normal })
    }

    /// Creates the parallelogram with corners `origin`, `origin + u`, `origin + u + v`, `origin + v`.
    pub fn rectangle(
        origin: Point<Real>,
        u: Vector<Real>,
        v: Vector<Real>,
    ) -> Result<Self, PatchError> {
        Self::new(
            vec![origin, origin + u, origin + u + v, origin + v],
            crate::math::DEFAULT_EPSILON.sqrt(),
        )
    }

    /// The outline of this patch.
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The unit normal of the patch plane, oriented by the outline winding.
    pub fn normal(&self) -> UnitVector<Real> {
        self.normal
    }

    /// A point on the patch plane.
    pub fn origin(&self) -> Point<Real> {
        self.vertices[0]
    }

    /// Expresses a point of the patch plane in a 2D frame of that plane.
    ///
    /// The frame drops the coordinate along which the normal is the largest, so the
    /// projection never collapses the outline.
    pub fn to_plane_coords(&self, pt: &Point<Real>) -> Point2<Real> {
        match self.normal.iamax() {
            0 => Point2::new(pt.y, pt.z),
            1 => Point2::new(pt.z, pt.x),
            _ => Point2::new(pt.x, pt.y),
        }
    }

    /// The outline of this patch, in the 2D frame of [`Self::to_plane_coords`].
    pub fn plane_outline(&self) -> Vec<Point2<Real>> {
        self.vertices
            .iter()
            .map(|pt| self.to_plane_coords(pt))
            .collect()
    }

    /// The area of this patch.
    pub fn area(&self) -> Real {
        newell_normal(&self.vertices).norm() / 2.0
    }
}

/// Newell's normal of a polygon, scaled by twice its area.
///
/// Coordinates are taken relative to the first vertex to limit cancellation errors.
fn newell_normal(vertices: &[Point<Real>]) -> Vector<Real> {
    let origin = vertices[0];
    let mut scaled_normal = Vector::zeros();
    for (i, a) in vertices.iter().enumerate() {
        let b = vertices[(i + 1) % vertices.len()];
        scaled_normal += (a - origin).cross(&(b - origin));
    }
    scaled_normal
}
