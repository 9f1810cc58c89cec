use crate::model::{ElementId, ModelError};

/// Errors raised by the splitting pipeline.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum SplitError {
    /// The split options cannot be used.
    #[error("invalid split options: {0}.")]
    InvalidOptions(String),
    /// The selection contains no usable member or no usable cutter.
    #[error("invalid selection: {0}.")]
    SelectionInvalid(String),
    /// The store refused to create a segment.
    #[error("failed to create a segment of the member {member}: {source}")]
    SegmentCreationFailed {
        /// The member being split.
        member: ElementId,
        /// The store error.
        source: ModelError,
    },
    /// The store refused to write an attribute of a new segment.
    #[error("failed to copy the attribute `{attribute}`: {source}")]
    AttributeCopyFailed {
        /// The attribute name.
        attribute: String,
        /// The store error.
        source: ModelError,
    },
    /// The store failed while a member was being split. The member was rolled back.
    #[error(transparent)]
    Model(#[from] ModelError),
}
