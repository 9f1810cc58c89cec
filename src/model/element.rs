//! Elements stored in a model.

use crate::model::{Attribute, AttributeDefinition, AttributeSet, AttributeValue};
use crate::shape::{PlanarPatch, Segment};
use std::fmt;

/// The identity of an element.
///
/// Identifiers are never reused: once an element is deleted, its identifier refers to
/// nothing, even if its storage slot is recycled.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId {
    index: u32,
    generation: u32,
}

impl ElementId {
    /// Creates an element identifier from its raw parts.
    pub fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// The storage slot of this element.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// The generation distinguishing this element from the other occupants of its slot.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}.{}", self.index, self.generation)
    }
}

/// The category of an element, used to enumerate the elements of a model.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// A [`LinearMember`].
    LinearMember,
    /// A [`PlanarElement`].
    PlanarElement,
    /// A [`MemberType`].
    MemberType,
}

/// A linear structural element: beam, brace, column, pipe...
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct LinearMember {
    /// The curve of this member.
    pub curve: Segment,
    /// The [`MemberType`] of this member.
    pub type_id: ElementId,
    /// The attributes of this member, built-in ones included.
    pub attributes: AttributeSet,
}

/// A bounded planar element: wall, slab, plate...
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct PlanarElement {
    /// A display name.
    pub name: String,
    /// The surface of this element.
    pub patch: PlanarPatch,
}

/// The family of a linear member, carrying the attributes its instances are created with.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct MemberType {
    /// The name of the type.
    pub name: String,
    /// The category of the members of this type.
    pub category: String,
    /// The attributes, with their default values, of every member of this type.
    pub schema: Vec<Attribute>,
}

impl MemberType {
    /// Creates a member type without attributes.
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            schema: vec![],
        }
    }

    /// Adds an attribute to the schema of this type.
    #[must_use]
    pub fn with_attribute(mut self, definition: AttributeDefinition, default: AttributeValue) -> Self {
        self.schema.push(Attribute::new(definition, default));
        self
    }
}

/// An element of a model.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    /// A linear member.
    LinearMember(LinearMember),
    /// A planar element.
    PlanarElement(PlanarElement),
    /// A member type.
    MemberType(MemberType),
}

impl Element {
    /// The kind of this element.
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::LinearMember(_) => ElementKind::LinearMember,
            Element::PlanarElement(_) => ElementKind::PlanarElement,
            Element::MemberType(_) => ElementKind::MemberType,
        }
    }

    /// This element as a linear member.
    pub fn as_linear_member(&self) -> Option<&LinearMember> {
        match self {
            Element::LinearMember(member) => Some(member),
            _ => None,
        }
    }

    /// This element as a planar element.
    pub fn as_planar_element(&self) -> Option<&PlanarElement> {
        match self {
            Element::PlanarElement(planar) => Some(planar),
            _ => None,
        }
    }

    /// This element as a member type.
    pub fn as_member_type(&self) -> Option<&MemberType> {
        match self {
            Element::MemberType(ty) => Some(ty),
            _ => None,
        }
    }

    /// The attributes of this element, if it can carry any.
    pub fn attributes(&self) -> Option<&AttributeSet> {
        self.as_linear_member().map(|member| &member.attributes)
    }
}
