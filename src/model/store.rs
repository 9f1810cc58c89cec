//! The interface between the splitting pipeline and the element store.

use crate::math::{Point, Real};
use crate::model::{
    AttributeDefinition, AttributeSet, AttributeValue, Element, ElementId, ElementKind,
    LinearMember, ModelError,
};
use crate::query::Ray;
use crate::shape::Segment;
use std::ops::{Deref, DerefMut};

/// A ray hit returned by a scene ray cast.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RayHit {
    /// The element hit by the ray.
    pub element: ElementId,
    /// The time of impact of the ray with the element.
    pub time_of_impact: Real,
    /// The hit point.
    pub point: Point<Real>,
}

/// An element store.
///
/// Every mutating operation must happen between [`Self::begin_scoped_mutation`] and
/// [`Self::commit`]. Use [`ScopedMutation`] instead of calling these directly: it rolls
/// the changes back if it is dropped before being committed.
pub trait ModelStore {
    /// Identifiers of all the live elements of the given kind.
    fn collect_elements_of_kind(&self, kind: ElementKind) -> Vec<ElementId>;

    /// The live element with the given identifier.
    fn element(&self, id: ElementId) -> Option<&Element>;

    /// Casts a ray against the candidate elements.
    ///
    /// Returns at most one hit per candidate, the nearest one, with hits sorted by
    /// increasing time of impact. Candidates that cannot be hit by a ray are ignored.
    fn cast_ray(&self, ray: &Ray, candidates: &[ElementId], max_time_of_impact: Real)
        -> Vec<RayHit>;

    /// Opens a scoped mutation.
    fn begin_scoped_mutation(&mut self, label: &str) -> Result<(), ModelError>;

    /// Commits the pending scoped mutation.
    fn commit(&mut self) -> Result<(), ModelError>;

    /// Reverts every change made since the pending scoped mutation was opened.
    ///
    /// Does nothing if no scoped mutation is pending.
    fn rollback(&mut self);

    /// Creates a linear member of the given type, with the default attributes of that type.
    fn create_linear_member(
        &mut self,
        curve: Segment,
        type_id: ElementId,
    ) -> Result<ElementId, ModelError>;

    /// Deletes an element.
    fn delete_element(&mut self, id: ElementId) -> Result<(), ModelError>;

    /// Writes the attribute of `id` matching `definition`.
    fn set_attribute(
        &mut self,
        id: ElementId,
        definition: &AttributeDefinition,
        value: AttributeValue,
    ) -> Result<(), ModelError>;

    /// Is there a live element with this identifier?
    fn contains(&self, id: ElementId) -> bool {
        self.element(id).is_some()
    }

    /// The live linear member with the given identifier.
    fn linear_member(&self, id: ElementId) -> Result<&LinearMember, ModelError> {
        self.element(id)
            .ok_or(ModelError::ElementNotFound(id))?
            .as_linear_member()
            .ok_or(ModelError::NotALinearMember(id))
    }

    /// The attributes of the given element.
    fn attributes(&self, id: ElementId) -> Result<&AttributeSet, ModelError> {
        self.linear_member(id).map(|member| &member.attributes)
    }
}

/// A pending scoped mutation of a [`ModelStore`].
///
/// The store is reachable through this guard while the mutation is pending. Dropping the
/// guard without calling [`Self::commit`] rolls every change back.
pub struct ScopedMutation<'a, M: ModelStore + ?Sized> {
    model: &'a mut M,
    committed: bool,
}

impl<'a, M: ModelStore + ?Sized> ScopedMutation<'a, M> {
    /// Opens a scoped mutation on `model`.
    pub fn begin(model: &'a mut M, label: &str) -> Result<Self, ModelError> {
        model.begin_scoped_mutation(label)?;
        Ok(Self {
            model,
            committed: false,
        })
    }

    /// Commits the changes.
    ///
    /// If the store fails to commit, the changes are rolled back.
    pub fn commit(mut self) -> Result<(), ModelError> {
        self.model.commit()?;
        self.committed = true;
        Ok(())
    }
}

impl<M: ModelStore + ?Sized> Deref for ScopedMutation<'_, M> {
    type Target = M;

    fn deref(&self) -> &M {
        self.model
    }
}

impl<M: ModelStore + ?Sized> DerefMut for ScopedMutation<'_, M> {
    fn deref_mut(&mut self) -> &mut M {
        self.model
    }
}

impl<M: ModelStore + ?Sized> Drop for ScopedMutation<'_, M> {
    fn drop(&mut self) {
        if !self.committed {
            log::debug!("Rolling back an uncommitted scoped mutation.");
            self.model.rollback();
        }
    }
}
