//! Crossing points between a member and its cutters.

use crate::math::{Point, Real};
use crate::model::{Element, ElementId, ModelStore};
use crate::pipeline::{SplitFlags, SplitOptions};
use crate::query::{PointQuery, Ray};
use crate::shape::Segment;
use crate::utils::{segments_intersection3d, SegmentsIntersection};
use smallvec::SmallVec;

/// The crossing points between a target curve and a set of cutters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Intersections {
    /// The crossing points, lying on the target curve. They are neither sorted nor
    /// deduplicated.
    pub points: SmallVec<[Point<Real>; 8]>,
    /// The number of crossing points contributed by each cutter that crossed the target.
    pub per_cutter: Vec<(ElementId, usize)>,
    /// Linear cutters collinear with the target along a whole overlap.
    pub overlapping: Vec<ElementId>,
    /// Cutters that could not be tested: missing, degenerate, or not a cutting element.
    pub skipped: Vec<ElementId>,
}

impl Intersections {
    /// The number of crossing points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Were no crossing points found?
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    fn push(&mut self, cutter: ElementId, point: Point<Real>) {
        self.points.push(point);

        match self.per_cutter.iter_mut().find(|(id, _)| *id == cutter) {
            Some((_, count)) => *count += 1,
            None => self.per_cutter.push((cutter, 1)),
        }
    }
}

/// Computes the points where the curve of `target` is crossed by `cutters`.
///
/// Linear cutters are intersected analytically with the target curve. Planar cutters are
/// hit by a ray cast from the start of the curve along its direction, through the
/// scene query of the model. Hits closer than `options.tolerance` to either end of the
/// curve are rejected. The target is never tested against itself.
pub fn intersect_member<M: ModelStore + ?Sized>(
    model: &M,
    target: ElementId,
    curve: &Segment,
    cutters: &[ElementId],
    options: &SplitOptions,
) -> Intersections {
    let eps = options.tolerance;
    let mut result = Intersections::default();

    if curve.is_degenerate(eps) {
        log::debug!("Not intersecting the degenerate member {}.", target);
        return result;
    }

    let mut planar: SmallVec<[ElementId; 4]> = SmallVec::new();

    for &cutter in cutters {
        if cutter == target {
            continue;
        }

        match model.element(cutter) {
            Some(Element::LinearMember(member)) => {
                if !options.flags.contains(SplitFlags::CURVE_CURVE) {
                    continue;
                }

                if member.curve.is_degenerate(eps) {
                    result.skipped.push(cutter);
                    continue;
                }

                match segments_intersection3d(curve, &member.curve, eps) {
                    Some(SegmentsIntersection::Point { loc1, .. }) => {
                        result.push(cutter, curve.point_at(&loc1));
                    }
                    Some(SegmentsIntersection::Overlap { params1 }) => {
                        log::debug!(
                            "The member {} overlaps the member {} on [{}, {}], no split there.",
                            target,
                            cutter,
                            params1[0],
                            params1[1]
                        );
                        result.overlapping.push(cutter);
                    }
                    None => {}
                }
            }
            Some(Element::PlanarElement(_)) => {
                if options.flags.contains(SplitFlags::RAY_CAST) {
                    planar.push(cutter);
                }
            }
            _ => result.skipped.push(cutter),
        }
    }

    if !planar.is_empty() {
        cast_along_curve(model, curve, &planar, eps, &mut result);
    }

    log::debug!(
        "Found {} crossing points on the member {} ({} cutters).",
        result.len(),
        target,
        result.per_cutter.len()
    );

    result
}

fn cast_along_curve<M: ModelStore + ?Sized>(
    model: &M,
    curve: &Segment,
    candidates: &[ElementId],
    eps: Real,
    result: &mut Intersections,
) {
    let Some(ray) = Ray::along(curve) else {
        return;
    };

    let length = curve.length();

    for hit in model.cast_ray(&ray, candidates, length) {
        if hit.time_of_impact > eps && hit.time_of_impact < length - eps {
            let point = curve.project_point(&hit.point).point;
            result.push(hit.element, point);
        }
    }
}
