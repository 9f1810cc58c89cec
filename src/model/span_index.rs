use crate::math::{Point, Real};
use crate::model::{ElementId, ElementKind, ModelStore};
use crate::shape::Segment;
use rstar::primitives::GeomWithData;
use rstar::RTree;

/// An endpoint of a member, carrying the member and its other endpoint.
type Endpoint = GeomWithData<[Real; 3], (ElementId, Point<Real>)>;

/// A spatial index of the endpoints of the live linear members of a model.
///
/// Answers "is there a member spanning these two points?" without scanning every member.
/// The index is a snapshot: it must be rebuilt once the model has been modified.
#[derive(Debug)]
pub struct SpanIndex {
    tree: RTree<Endpoint>,
}

impl SpanIndex {
    /// Indexes the endpoints of every live linear member of `model`.
    pub fn build<M: ModelStore + ?Sized>(model: &M) -> Self {
        let mut endpoints = vec![];

        for id in model.collect_elements_of_kind(ElementKind::LinearMember) {
            if let Ok(member) = model.linear_member(id) {
                let curve = member.curve;
                endpoints.push(Endpoint::new(curve.a.coords.into(), (id, curve.b)));
                endpoints.push(Endpoint::new(curve.b.coords.into(), (id, curve.a)));
            }
        }

        Self {
            tree: RTree::bulk_load(endpoints),
        }
    }

    /// The number of indexed members.
    pub fn len(&self) -> usize {
        self.tree.size() / 2
    }

    /// Is this index empty?
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Finds a member other than `exclude` spanning the same two points as `span`, in
    /// either direction, within `epsilon`.
    pub fn find_span(&self, span: &Segment, epsilon: Real, exclude: ElementId) -> Option<ElementId> {
        let query: [Real; 3] = span.a.coords.into();

        self.tree
            .locate_within_distance(query, epsilon * epsilon)
            .filter(|endpoint| {
                let (member, other) = endpoint.data;
                member != exclude
                    && span.same_span(&Segment::new(Point::from(*endpoint.geom()), other), epsilon)
            })
            .map(|endpoint| endpoint.data.0)
            .min()
    }
}
