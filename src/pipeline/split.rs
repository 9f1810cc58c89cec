//! The split command: splits a selection of members at their crossings with a selection
//! of cutters.

use crate::model::{Element, ElementId, ElementKind, ModelStore, ScopedMutation, SpanIndex};
use crate::pipeline::{
    build_segments, intersect_member, sequence_points, PointSequence, SegmentBuildReport,
    SplitError, SplitOptions,
};
use std::fmt;

/// The elements the members are split against.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CutterSelection<'a> {
    /// The given linear members and planar elements.
    Elements(&'a [ElementId]),
    /// Every linear member and planar element of the model.
    AllInModel,
}

/// What happened to one member of the selection.
#[derive(Clone, Debug, PartialEq)]
pub enum MemberOutcome {
    /// The member was rebuilt as segments.
    Split(SegmentBuildReport),
    /// Nothing crosses the member.
    Unchanged,
    /// The member was not processed.
    Skipped(String),
    /// The split failed and was rolled back.
    Failed(SplitError),
}

/// The outcome of the split of one member.
#[derive(Clone, Debug, PartialEq)]
pub struct MemberReport {
    /// The member.
    pub member: ElementId,
    /// The number of interior split points found on the member.
    pub split_points: usize,
    /// What happened to the member.
    pub outcome: MemberOutcome,
}

/// The outcome of a [`split_members`] command.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SplitReport {
    /// One report per distinct selected member, in selection order.
    pub members: Vec<MemberReport>,
}

impl SplitReport {
    /// All the members created by the command.
    pub fn created_segments(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.members.iter().flat_map(|report| {
            let created = match &report.outcome {
                MemberOutcome::Split(build) => Some(build.created()),
                _ => None,
            };
            created.into_iter().flatten()
        })
    }

    /// The report of the given member.
    pub fn member(&self, id: ElementId) -> Option<&MemberReport> {
        self.members.iter().find(|report| report.member == id)
    }

    /// The number of members with the given outcome.
    fn count(&self, f: impl Fn(&MemberOutcome) -> bool) -> usize {
        self.members.iter().filter(|report| f(&report.outcome)).count()
    }

    /// The number of split members.
    pub fn split_count(&self) -> usize {
        self.count(|outcome| matches!(outcome, MemberOutcome::Split(_)))
    }

    /// The number of members whose split failed.
    pub fn failed_count(&self) -> usize {
        self.count(|outcome| matches!(outcome, MemberOutcome::Failed(_)))
    }
}

impl fmt::Display for SplitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} member(s) split into {} segment(s), {} unchanged, {} skipped, {} failed",
            self.split_count(),
            self.created_segments().count(),
            self.count(|outcome| matches!(outcome, MemberOutcome::Unchanged)),
            self.count(|outcome| matches!(outcome, MemberOutcome::Skipped(_))),
            self.failed_count(),
        )
    }
}

/// Splits every member of `members` where the elements of `cutters` cross it.
///
/// The crossings of all the members are computed first, against the model as it is
/// before any change. Each member is then rebuilt in its own scoped mutation: a failure
/// rolls that member back and the command moves on to the next one.
///
/// Fails without touching the model if the options are invalid, or if the selection
/// contains no usable member or no cutter.
pub fn split_members<M: ModelStore + ?Sized>(
    model: &mut M,
    members: &[ElementId],
    cutters: CutterSelection,
    options: &SplitOptions,
) -> Result<SplitReport, SplitError> {
    options.validate()?;

    let mut report = SplitReport::default();
    let mut targets = vec![];

    for &id in members {
        if report.member(id).is_some() {
            continue;
        }

        let skipped = match model.element(id) {
            Some(Element::LinearMember(member)) => {
                if member.curve.is_degenerate(options.tolerance) {
                    Some("the member curve is degenerate".to_string())
                } else {
                    None
                }
            }
            Some(_) => Some("not a linear member".to_string()),
            None => Some("the element does not exist".to_string()),
        };

        let outcome = match skipped {
            Some(reason) => {
                log::debug!("Skipping {}: {}.", id, reason);
                MemberOutcome::Skipped(reason)
            }
            None => {
                targets.push(id);
                MemberOutcome::Unchanged
            }
        };

        report.members.push(MemberReport {
            member: id,
            split_points: 0,
            outcome,
        });
    }

    if targets.is_empty() {
        return Err(SplitError::SelectionInvalid(
            "the selection contains no usable linear member".to_string(),
        ));
    }

    let cutters = collect_cutters(&*model, cutters);
    if cutters.is_empty() {
        return Err(SplitError::SelectionInvalid(
            "the selection contains no cutting element".to_string(),
        ));
    }

    // Phase 1: every crossing is computed before the model changes.
    let mut plans = Vec::with_capacity(targets.len());
    for id in targets {
        let curve = model.linear_member(id)?.curve;
        let intersections = intersect_member(&*model, id, &curve, &cutters, options);
        plans.push((id, sequence_points(&curve, &intersections.points, options.tolerance)));
    }

    // Phase 2: one scoped mutation per member.
    let mut index = SpanIndex::build(&*model);

    for (id, sequence) in plans {
        let outcome = if !sequence.has_splits() {
            MemberOutcome::Unchanged
        } else if !model.contains(id) {
            MemberOutcome::Skipped("the member was deleted".to_string())
        } else {
            match split_member(model, id, &sequence, &index, options) {
                Ok(build) => {
                    if build.created().next().is_some() {
                        index = SpanIndex::build(&*model);
                    }
                    MemberOutcome::Split(build)
                }
                Err(e) => {
                    log::warn!("Failed to split the member {}, rolled back: {}", id, e);
                    MemberOutcome::Failed(e)
                }
            }
        };

        if let Some(member_report) = report.members.iter_mut().find(|r| r.member == id) {
            member_report.split_points = sequence.split_count();
            member_report.outcome = outcome;
        }
    }

    log::debug!("Split command: {}.", report);
    Ok(report)
}

fn split_member<M: ModelStore + ?Sized>(
    model: &mut M,
    id: ElementId,
    sequence: &PointSequence,
    index: &SpanIndex,
    options: &SplitOptions,
) -> Result<SegmentBuildReport, SplitError> {
    let mut scope = ScopedMutation::begin(model, &format!("Split member {}", id))?;
    let build = build_segments(&mut *scope, id, sequence, index, options)?;
    scope.commit()?;
    Ok(build)
}

fn collect_cutters<M: ModelStore + ?Sized>(model: &M, selection: CutterSelection) -> Vec<ElementId> {
    match selection {
        CutterSelection::Elements(ids) => {
            let mut cutters: Vec<_> = ids
                .iter()
                .copied()
                .filter(|id| {
                    matches!(
                        model.element(*id).map(Element::kind),
                        Some(ElementKind::LinearMember | ElementKind::PlanarElement)
                    )
                })
                .collect();
            cutters.sort();
            cutters.dedup();
            cutters
        }
        CutterSelection::AllInModel => {
            let mut cutters = model.collect_elements_of_kind(ElementKind::LinearMember);
            cutters.extend(model.collect_elements_of_kind(ElementKind::PlanarElement));
            cutters
        }
    }
}
