use crate::math::Real;
use crate::model::{ElementId, StorageType};

/// Errors raised by a [`ModelStore`](crate::model::ModelStore).
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum ModelError {
    /// No live element has this identifier.
    #[error("the element {0} does not exist.")]
    ElementNotFound(ElementId),
    /// The element exists but is not a linear member.
    #[error("the element {0} is not a linear member.")]
    NotALinearMember(ElementId),
    /// The element exists but is not a member type.
    #[error("the element {0} is not a member type.")]
    NotAMemberType(ElementId),
    /// A mutation was attempted outside of a scoped mutation.
    #[error("the model can only be modified inside of a scoped mutation.")]
    NoActiveMutation,
    /// A scoped mutation was opened while another one is still pending.
    #[error("the scoped mutation `{0}` is still pending.")]
    MutationAlreadyActive(String),
    /// The element has no attribute matching the given definition.
    #[error("the element {element} has no attribute `{name}`.")]
    UnknownAttribute {
        /// The element.
        element: ElementId,
        /// The attribute name.
        name: String,
    },
    /// The attribute cannot be written.
    #[error("the attribute `{name}` of the element {element} is read-only.")]
    ReadOnlyAttribute {
        /// The element.
        element: ElementId,
        /// The attribute name.
        name: String,
    },
    /// The value does not have the storage type of the attribute.
    #[error("the attribute `{name}` stores {expected:?} values, got {found:?}.")]
    StorageMismatch {
        /// The attribute name.
        name: String,
        /// The storage type of the attribute.
        expected: StorageType,
        /// The storage type of the value.
        found: StorageType,
    },
    /// A member curve is too short to be created.
    #[error("cannot create a member with a curve of length {0}.")]
    DegenerateCurve(Real),
}
