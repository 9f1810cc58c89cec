//! Named, typed attributes attached to elements.

use crate::math::Real;
use crate::model::ElementId;

/// Stable identity of an attribute definition.
///
/// Two attributes with the same definition id describe the same property, even if their
/// display names differ.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DefinitionId(pub u64);

/// The type of the values an attribute stores.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum StorageType {
    /// A floating-point number.
    Real,
    /// A signed integer.
    Integer,
    /// A string.
    Text,
    /// A reference to another element.
    Reference,
}

/// The value of an attribute.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    /// A floating-point number.
    Real(Real),
    /// A signed integer.
    Integer(i64),
    /// A string.
    Text(String),
    /// A reference to another element.
    Reference(ElementId),
}

impl AttributeValue {
    /// The storage type of this value.
    pub fn storage_type(&self) -> StorageType {
        match self {
            AttributeValue::Real(_) => StorageType::Real,
            AttributeValue::Integer(_) => StorageType::Integer,
            AttributeValue::Text(_) => StorageType::Text,
            AttributeValue::Reference(_) => StorageType::Reference,
        }
    }

    /// The referenced element, if this is a reference value.
    pub fn as_reference(&self) -> Option<ElementId> {
        match self {
            AttributeValue::Reference(id) => Some(*id),
            _ => None,
        }
    }
}

#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
/// Properties of an attribute definition.
pub struct AttributeFlags(u8);

bitflags::bitflags! {
    impl AttributeFlags: u8 {
        /// The attribute cannot be written through [`ModelStore::set_attribute`](crate::model::ModelStore::set_attribute).
        const READ_ONLY = 1;
        /// The attribute value is computed from the element geometry or identity.
        const GEOMETRY_DERIVED = 1 << 1;
    }
}

/// The definition of an attribute: its identity, name, and storage type.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct AttributeDefinition {
    /// The stable identity of this definition.
    pub id: DefinitionId,
    /// The name of the attribute.
    pub name: String,
    /// The type of the values this attribute stores.
    pub storage: StorageType,
    /// The properties of this attribute.
    pub flags: AttributeFlags,
}

impl AttributeDefinition {
    /// Creates a writable attribute definition.
    pub fn new(id: u64, name: impl Into<String>, storage: StorageType) -> Self {
        Self {
            id: DefinitionId(id),
            name: name.into(),
            storage,
            flags: AttributeFlags::empty(),
        }
    }

    /// Sets the flags of this definition.
    #[must_use]
    pub fn with_flags(mut self, flags: AttributeFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Can this attribute be written?
    pub fn is_read_only(&self) -> bool {
        self.flags.contains(AttributeFlags::READ_ONLY)
    }
}

/// An attribute definition with its value.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    /// The definition of this attribute.
    pub definition: AttributeDefinition,
    /// The value of this attribute.
    pub value: AttributeValue,
}

impl Attribute {
    /// Creates a new attribute.
    pub fn new(definition: AttributeDefinition, value: AttributeValue) -> Self {
        Self { definition, value }
    }

    /// The name of this attribute.
    pub fn name(&self) -> &str {
        &self.definition.name
    }
}

/// The attributes of an element, in insertion order.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AttributeSet {
    attributes: Vec<Attribute>,
}

impl AttributeSet {
    /// Creates an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of attributes in this set.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Is this set empty?
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Iterates through the attributes of this set.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }

    /// The attribute with the given definition id.
    pub fn get(&self, id: DefinitionId) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.definition.id == id)
    }

    /// The first attribute with the given name.
    pub fn get_by_name(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attr| attr.name() == name)
    }

    /// The attribute matching `definition`: by definition id first, then by name.
    pub fn find(&self, definition: &AttributeDefinition) -> Option<&Attribute> {
        self.get(definition.id)
            .or_else(|| self.get_by_name(&definition.name))
    }

    /// The value of the attribute with the given name.
    pub fn value(&self, name: &str) -> Option<&AttributeValue> {
        self.get_by_name(name).map(|attr| &attr.value)
    }

    pub(crate) fn find_mut(&mut self, definition: &AttributeDefinition) -> Option<&mut Attribute> {
        let i = self
            .attributes
            .iter()
            .position(|attr| attr.definition.id == definition.id)
            .or_else(|| {
                self.attributes
                    .iter()
                    .position(|attr| attr.definition.name == definition.name)
            })?;
        Some(&mut self.attributes[i])
    }

    /// Inserts an attribute, replacing and returning the one with the same definition id.
    pub fn insert(&mut self, attribute: Attribute) -> Option<Attribute> {
        match self
            .attributes
            .iter_mut()
            .find(|attr| attr.definition.id == attribute.definition.id)
        {
            Some(existing) => Some(std::mem::replace(existing, attribute)),
            None => {
                self.attributes.push(attribute);
                None
            }
        }
    }
}

impl FromIterator<Attribute> for AttributeSet {
    fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
        let mut set = AttributeSet::new();
        for attribute in iter {
            let _ = set.insert(attribute);
        }
        set
    }
}

/// The attributes every linear member exposes.
///
/// They are computed by the store from the member geometry and identity, are read-only,
/// and are never copied from one member to another.
pub mod builtin {
    use super::{AttributeDefinition, AttributeFlags, StorageType};

    /// The length of the member curve.
    pub const LENGTH: &str = "length";
    /// The start point of the member curve, as text.
    pub const START_NODE: &str = "start_node";
    /// The end point of the member curve, as text.
    pub const END_NODE: &str = "end_node";
    /// The category of the member type.
    pub const CATEGORY: &str = "category";
    /// A reference to the member type.
    pub const TYPE: &str = "type";
    /// The unique identifier of the member.
    pub const UNIQUE_ID: &str = "unique_id";

    /// Names of all the built-in attributes.
    pub const NAMES: [&str; 6] = [LENGTH, START_NODE, END_NODE, CATEGORY, TYPE, UNIQUE_ID];

    /// The definitions of all the built-in attributes.
    pub fn definitions() -> [AttributeDefinition; 6] {
        let flags = AttributeFlags::READ_ONLY | AttributeFlags::GEOMETRY_DERIVED;
        [
            AttributeDefinition::new(1, LENGTH, StorageType::Real).with_flags(flags),
            AttributeDefinition::new(2, START_NODE, StorageType::Text).with_flags(flags),
            AttributeDefinition::new(3, END_NODE, StorageType::Text).with_flags(flags),
            AttributeDefinition::new(4, CATEGORY, StorageType::Text).with_flags(flags),
            AttributeDefinition::new(5, TYPE, StorageType::Reference).with_flags(flags),
            AttributeDefinition::new(6, UNIQUE_ID, StorageType::Text).with_flags(flags),
        ]
    }
}
