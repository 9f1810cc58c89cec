//! Copy of the user-editable attributes of a member onto another member.

use crate::model::{Attribute, ElementId, ModelError, ModelStore, StorageType};
use crate::pipeline::{SplitError, SplitOptions};

/// Why an attribute was not copied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The attribute is in the skip-list.
    SkipList,
    /// The attribute is read-only on the source.
    ReadOnly,
    /// The target has no matching attribute.
    MissingOnTarget,
    /// The matching attribute of the target is read-only.
    ReadOnlyOnTarget,
    /// The source and target attributes store different types.
    StorageMismatch {
        /// The storage type on the source.
        source: StorageType,
        /// The storage type on the target.
        target: StorageType,
    },
    /// The attribute references an element that no longer exists.
    DanglingReference(ElementId),
    /// The attribute references the source member itself.
    SelfReference,
    /// The attribute references the type of the source member.
    TypeReference,
}

/// The result of the transfer of one attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeOutcome {
    /// The value was written on the target.
    Copied,
    /// The attribute was left untouched on the target.
    Skipped(SkipReason),
    /// The store refused to write the value.
    Failed(SplitError),
}

/// The per-attribute results of an attribute transfer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TransferReport {
    /// The name of each source attribute with its outcome, in the order of the source.
    pub attributes: Vec<(String, AttributeOutcome)>,
}

impl TransferReport {
    /// The number of copied attributes.
    pub fn copied(&self) -> usize {
        self.count(|outcome| matches!(outcome, AttributeOutcome::Copied))
    }

    /// The number of skipped attributes.
    pub fn skipped(&self) -> usize {
        self.count(|outcome| matches!(outcome, AttributeOutcome::Skipped(_)))
    }

    /// The number of attributes that failed to be written.
    pub fn failed(&self) -> usize {
        self.count(|outcome| matches!(outcome, AttributeOutcome::Failed(_)))
    }

    /// The outcome for the attribute with the given name.
    pub fn outcome(&self, name: &str) -> Option<&AttributeOutcome> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, outcome)| outcome)
    }

    fn count(&self, f: impl Fn(&AttributeOutcome) -> bool) -> usize {
        self.attributes.iter().filter(|(_, outcome)| f(outcome)).count()
    }
}

/// Copies the writable attributes of the member `source` onto the member `target`.
///
/// Target attributes are matched by definition id first, then by name. Attributes are
/// skipped when they are read-only or skip-listed, when they have no writable match of the
/// same storage type on the target, or when they reference the source, its type, or a
/// deleted element. A refused write is recorded and does not stop the transfer.
///
/// Fails only if `source` or `target` is not a live linear member.
pub fn transfer_attributes<M: ModelStore + ?Sized>(
    model: &mut M,
    source: ElementId,
    target: ElementId,
    options: &SplitOptions,
) -> Result<TransferReport, ModelError> {
    let source_member = model.linear_member(source)?;
    let source_type = source_member.type_id;
    let source_attributes: Vec<Attribute> = source_member.attributes.iter().cloned().collect();
    let target_attributes = model.attributes(target)?.clone();

    let mut report = TransferReport::default();

    for attribute in source_attributes {
        let name = attribute.name().to_string();

        let plan = if options.is_skipped(&name) {
            Err(SkipReason::SkipList)
        } else if attribute.definition.is_read_only() {
            Err(SkipReason::ReadOnly)
        } else {
            match target_attributes.find(&attribute.definition) {
                None => Err(SkipReason::MissingOnTarget),
                Some(found) if found.definition.is_read_only() => {
                    Err(SkipReason::ReadOnlyOnTarget)
                }
                Some(found) if found.definition.storage != attribute.definition.storage => {
                    Err(SkipReason::StorageMismatch {
                        source: attribute.definition.storage,
                        target: found.definition.storage,
                    })
                }
                Some(found) => match attribute.value.as_reference() {
                    Some(id) if id == source => Err(SkipReason::SelfReference),
                    Some(id) if id == source_type => Err(SkipReason::TypeReference),
                    Some(id) if !model.contains(id) => Err(SkipReason::DanglingReference(id)),
                    _ => Ok(found.definition.clone()),
                },
            }
        };

        let outcome = match plan {
            Ok(definition) => match model.set_attribute(target, &definition, attribute.value) {
                Ok(()) => AttributeOutcome::Copied,
                Err(e) => {
                    log::warn!(
                        "Failed to copy the attribute `{}` from {} to {}: {}",
                        name,
                        source,
                        target,
                        e
                    );
                    AttributeOutcome::Failed(SplitError::AttributeCopyFailed {
                        attribute: name.clone(),
                        source: e,
                    })
                }
            },
            Err(reason) => {
                log::debug!("Not copying the attribute `{}`: {:?}.", name, reason);
                AttributeOutcome::Skipped(reason)
            }
        };

        report.attributes.push((name, outcome));
    }

    log::debug!(
        "Copied {} attributes from {} to {} ({} skipped, {} failed).",
        report.copied(),
        source,
        target,
        report.skipped(),
        report.failed()
    );

    Ok(report)
}
