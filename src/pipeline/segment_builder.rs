//! Reconstruction of a member as a chain of segments.

use crate::math::Real;
use crate::model::{ElementId, ModelStore, SpanIndex};
use crate::pipeline::{
    transfer_attributes, PointSequence, SplitError, SplitFlags, SplitOptions, TransferReport,
};
use crate::shape::Segment;

/// What happened to one span of a split member.
#[derive(Clone, Debug, PartialEq)]
pub enum SegmentOutcome {
    /// A new member was created for the span.
    Created {
        /// The new member.
        id: ElementId,
        /// The attributes copied from the original member.
        attributes: TransferReport,
    },
    /// The span is shorter than the minimum segment length.
    TooShort {
        /// The length of the span.
        length: Real,
    },
    /// Another member already spans the same two points.
    Duplicate(ElementId),
    /// The store refused to create the member.
    Failed(SplitError),
}

/// A span between two consecutive split points, with its outcome.
#[derive(Clone, Debug, PartialEq)]
pub struct SegmentRecord {
    /// The span.
    pub span: Segment,
    /// What happened to the span.
    pub outcome: SegmentOutcome,
}

/// The result of the reconstruction of one member.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SegmentBuildReport {
    /// One record per span, ordered along the original curve.
    pub segments: Vec<SegmentRecord>,
    /// Was the original member deleted?
    pub original_deleted: bool,
}

impl SegmentBuildReport {
    /// The new members, ordered along the original curve.
    pub fn created(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.segments.iter().filter_map(|record| match record.outcome {
            SegmentOutcome::Created { id, .. } => Some(id),
            _ => None,
        })
    }

    /// The number of spans for which no member was created.
    pub fn not_created(&self) -> usize {
        self.segments
            .iter()
            .filter(|record| !matches!(record.outcome, SegmentOutcome::Created { .. }))
            .count()
    }
}

/// Replaces the member `original` by one member per span of `sequence`.
///
/// Spans shorter than `options.min_segment_length`, and spans already covered by another
/// member found in `index`, are not created. Every created member has the type of the
/// original and receives its attributes. The original is deleted if at least one member was
/// created. A sequence without interior point leaves the model untouched.
///
/// Must be called inside of a scoped mutation. Per-span failures are recorded in the
/// report; an error is returned only if the original cannot be read or deleted, or if the
/// attribute transfer cannot run.
pub fn build_segments<M: ModelStore + ?Sized>(
    model: &mut M,
    original: ElementId,
    sequence: &PointSequence,
    index: &SpanIndex,
    options: &SplitOptions,
) -> Result<SegmentBuildReport, SplitError> {
    let type_id = model.linear_member(original)?.type_id;
    let mut report = SegmentBuildReport::default();

    if !sequence.has_splits() {
        return Ok(report);
    }

    for span in sequence.spans() {
        let length = span.length();

        let outcome = if length < options.min_segment_length {
            SegmentOutcome::TooShort { length }
        } else if let Some(existing) = options
            .flags
            .contains(SplitFlags::SKIP_DUPLICATES)
            .then(|| index.find_span(&span, options.tolerance, original))
            .flatten()
        {
            log::debug!("The member {} already spans {:?}.", existing, span);
            SegmentOutcome::Duplicate(existing)
        } else {
            match model.create_linear_member(span, type_id) {
                Ok(id) => SegmentOutcome::Created {
                    id,
                    attributes: transfer_attributes(model, original, id, options)?,
                },
                Err(e) => {
                    log::warn!("Failed to create a segment of the member {}: {}", original, e);
                    SegmentOutcome::Failed(SplitError::SegmentCreationFailed {
                        member: original,
                        source: e,
                    })
                }
            }
        };

        report.segments.push(SegmentRecord { span, outcome });
    }

    if report.created().next().is_some() {
        model.delete_element(original)?;
        report.original_deleted = true;
    }

    log::debug!(
        "Rebuilt the member {} as {} segments ({} spans not created).",
        original,
        report.created().count(),
        report.not_created()
    );

    Ok(report)
}
