//! An in-memory element store.

use crate::math::{Point, Real};
use crate::model::{
    builtin, Attribute, AttributeDefinition, AttributeSet, AttributeValue, Element, ElementId,
    ElementKind, LinearMember, MemberType, ModelError, ModelStore, PlanarElement, RayHit,
};
use crate::query::{Ray, RayCast};
use crate::shape::{PlanarPatch, Segment};
use ordered_float::OrderedFloat;
use slab::Slab;

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    element: Element,
}

#[derive(Clone, Debug)]
struct PendingMutation {
    label: String,
    snapshot: Slab<Slot>,
}

/// An in-memory [`ModelStore`].
///
/// Elements live in an arena. Scoped mutations snapshot the arena when they are opened,
/// and restore it on rollback.
///
/// The `add_*` methods import elements outside of any scoped mutation, the way a document
/// is loaded before being edited.
#[derive(Clone, Debug, Default)]
pub struct Model {
    slots: Slab<Slot>,
    next_generation: u32,
    pending: Option<PendingMutation>,
}

impl Model {
    /// Creates an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of live elements.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Does this model contain no element?
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates through the live elements.
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &Element)> {
        self.slots
            .iter()
            .map(|(index, slot)| (ElementId::new(index as u32, slot.generation), &slot.element))
    }

    /// The label of the pending scoped mutation, if any.
    pub fn pending_mutation(&self) -> Option<&str> {
        self.pending.as_ref().map(|pending| pending.label.as_str())
    }

    /// Imports a member type.
    pub fn add_member_type(&mut self, member_type: MemberType) -> ElementId {
        self.insert(Element::MemberType(member_type))
    }

    /// Imports a planar element.
    pub fn add_planar_element(&mut self, name: impl Into<String>, patch: PlanarPatch) -> ElementId {
        self.insert(Element::PlanarElement(PlanarElement {
            name: name.into(),
            patch,
        }))
    }

    /// Imports a linear member of the given type.
    pub fn add_linear_member(
        &mut self,
        curve: Segment,
        type_id: ElementId,
    ) -> Result<ElementId, ModelError> {
        let id = self.next_id();
        let member = self.instantiate_member(id, curve, type_id)?;
        Ok(self.insert(Element::LinearMember(member)))
    }

    /// Adds an attribute to a linear member, on top of the ones of its type.
    ///
    /// Returns the attribute previously stored under the same definition id. Fails if the
    /// value does not have the storage type of its definition.
    pub fn insert_attribute(
        &mut self,
        id: ElementId,
        attribute: Attribute,
    ) -> Result<Option<Attribute>, ModelError> {
        check_storage(&attribute)?;
        Ok(self.linear_member_mut(id)?.attributes.insert(attribute))
    }

    fn next_id(&self) -> ElementId {
        ElementId::new(self.slots.vacant_key() as u32, self.next_generation)
    }

    fn insert(&mut self, element: Element) -> ElementId {
        let id = self.next_id();
        let index = self.slots.insert(Slot {
            generation: id.generation(),
            element,
        });
        debug_assert_eq!(index as u32, id.index());
        self.next_generation += 1;
        id
    }

    fn linear_member_mut(&mut self, id: ElementId) -> Result<&mut LinearMember, ModelError> {
        match self.slots.get_mut(id.index() as usize) {
            Some(slot) if slot.generation == id.generation() => match &mut slot.element {
                Element::LinearMember(member) => Ok(member),
                _ => Err(ModelError::NotALinearMember(id)),
            },
            _ => Err(ModelError::ElementNotFound(id)),
        }
    }

    fn instantiate_member(
        &self,
        id: ElementId,
        curve: Segment,
        type_id: ElementId,
    ) -> Result<LinearMember, ModelError> {
        let member_type = self
            .element(type_id)
            .ok_or(ModelError::ElementNotFound(type_id))?
            .as_member_type()
            .ok_or(ModelError::NotAMemberType(type_id))?;

        let length = curve.length();
        if length < crate::math::DEFAULT_EPSILON {
            return Err(ModelError::DegenerateCurve(length));
        }

        let [def_length, def_start, def_end, def_category, def_type, def_uid] =
            builtin::definitions();
        let mut attributes: AttributeSet = [
            Attribute::new(def_length, AttributeValue::Real(length)),
            Attribute::new(def_start, AttributeValue::Text(format_node(&curve.a))),
            Attribute::new(def_end, AttributeValue::Text(format_node(&curve.b))),
            Attribute::new(
                def_category,
                AttributeValue::Text(member_type.category.clone()),
            ),
            Attribute::new(def_type, AttributeValue::Reference(type_id)),
            Attribute::new(def_uid, AttributeValue::Text(id.to_string())),
        ]
        .into_iter()
        .collect();

        for attribute in &member_type.schema {
            check_storage(attribute)?;
            let _ = attributes.insert(attribute.clone());
        }

        Ok(LinearMember {
            curve,
            type_id,
            attributes,
        })
    }

    fn require_pending(&self) -> Result<(), ModelError> {
        if self.pending.is_some() {
            Ok(())
        } else {
            Err(ModelError::NoActiveMutation)
        }
    }
}

fn check_storage(attribute: &Attribute) -> Result<(), ModelError> {
    let found = attribute.value.storage_type();
    if attribute.definition.storage == found {
        Ok(())
    } else {
        Err(ModelError::StorageMismatch {
            name: attribute.definition.name.clone(),
            expected: attribute.definition.storage,
            found,
        })
    }
}

fn format_node(pt: &Point<Real>) -> String {
    format!("{}, {}, {}", pt.x, pt.y, pt.z)
}

impl ModelStore for Model {
    fn collect_elements_of_kind(&self, kind: ElementKind) -> Vec<ElementId> {
        self.iter()
            .filter(|(_, element)| element.kind() == kind)
            .map(|(id, _)| id)
            .collect()
    }

    fn element(&self, id: ElementId) -> Option<&Element> {
        self.slots
            .get(id.index() as usize)
            .filter(|slot| slot.generation == id.generation())
            .map(|slot| &slot.element)
    }

    fn cast_ray(
        &self,
        ray: &Ray,
        candidates: &[ElementId],
        max_time_of_impact: Real,
    ) -> Vec<RayHit> {
        let mut hits: Vec<_> = candidates
            .iter()
            .filter_map(|id| {
                let planar = self.element(*id)?.as_planar_element()?;
                let toi = planar.patch.cast_ray(ray, max_time_of_impact)?;
                Some(RayHit {
                    element: *id,
                    time_of_impact: toi,
                    point: ray.point_at(toi),
                })
            })
            .collect();
        hits.sort_by_key(|hit| OrderedFloat(hit.time_of_impact));
        hits
    }

    fn begin_scoped_mutation(&mut self, label: &str) -> Result<(), ModelError> {
        if let Some(pending) = &self.pending {
            return Err(ModelError::MutationAlreadyActive(pending.label.clone()));
        }

        log::debug!("Opening the scoped mutation `{}`.", label);
        self.pending = Some(PendingMutation {
            label: label.to_string(),
            snapshot: self.slots.clone(),
        });
        Ok(())
    }

    fn commit(&mut self) -> Result<(), ModelError> {
        let pending = self.pending.take().ok_or(ModelError::NoActiveMutation)?;
        log::debug!("Committed the scoped mutation `{}`.", pending.label);
        Ok(())
    }

    fn rollback(&mut self) {
        if let Some(pending) = self.pending.take() {
            log::debug!("Rolled back the scoped mutation `{}`.", pending.label);
            self.slots = pending.snapshot;
        }
    }

    fn create_linear_member(
        &mut self,
        curve: Segment,
        type_id: ElementId,
    ) -> Result<ElementId, ModelError> {
        self.require_pending()?;
        self.add_linear_member(curve, type_id)
    }

    fn delete_element(&mut self, id: ElementId) -> Result<(), ModelError> {
        self.require_pending()?;

        if !self.contains(id) {
            return Err(ModelError::ElementNotFound(id));
        }

        let _ = self.slots.remove(id.index() as usize);
        Ok(())
    }

    fn set_attribute(
        &mut self,
        id: ElementId,
        definition: &AttributeDefinition,
        value: AttributeValue,
    ) -> Result<(), ModelError> {
        self.require_pending()?;

        let member = self.linear_member_mut(id)?;
        let attribute =
            member
                .attributes
                .find_mut(definition)
                .ok_or_else(|| ModelError::UnknownAttribute {
                    element: id,
                    name: definition.name.clone(),
                })?;

        if attribute.definition.is_read_only() {
            return Err(ModelError::ReadOnlyAttribute {
                element: id,
                name: attribute.definition.name.clone(),
            });
        }

        if attribute.definition.storage != value.storage_type() {
            return Err(ModelError::StorageMismatch {
                name: attribute.definition.name.clone(),
                expected: attribute.definition.storage,
                found: value.storage_type(),
            });
        }

        attribute.value = value;
        Ok(())
    }
}
