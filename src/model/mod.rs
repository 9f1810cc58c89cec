//! The element store seen by the splitting pipeline.
//!
//! The host application owns the elements. The pipeline reaches them only through the
//! [`ModelStore`] trait: enumeration by kind, scene ray casting, scoped mutations,
//! member creation and deletion, and attribute access. [`Model`] is an in-memory store
//! implementing that trait.

pub use self::attribute::{
    builtin, Attribute, AttributeDefinition, AttributeFlags, AttributeSet, AttributeValue,
    DefinitionId, StorageType,
};
pub use self::element::{
    Element, ElementId, ElementKind, LinearMember, MemberType, PlanarElement,
};
pub use self::error::ModelError;
pub use self::model::Model;
pub use self::span_index::SpanIndex;
pub use self::store::{ModelStore, RayHit, ScopedMutation};

mod attribute;
mod element;
mod error;
mod model;
mod span_index;
mod store;
