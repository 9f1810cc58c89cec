use crosscut3d::math::{Point, Real};
use crosscut3d::model::{
    AttributeDefinition, AttributeValue, Element, ElementId, ElementKind, MemberType, Model,
    ModelError, ModelStore, RayHit,
};
use crosscut3d::pipeline::{split_members, CutterSelection, MemberOutcome, SplitError, SplitOptions};
use crosscut3d::query::Ray;
use crosscut3d::shape::Segment;

/// A store refusing to delete one element.
struct StubbornModel {
    inner: Model,
    undeletable: ElementId,
}

impl ModelStore for StubbornModel {
    fn collect_elements_of_kind(&self, kind: ElementKind) -> Vec<ElementId> {
        self.inner.collect_elements_of_kind(kind)
    }

    fn element(&self, id: ElementId) -> Option<&Element> {
        self.inner.element(id)
    }

    fn cast_ray(&self, ray: &Ray, candidates: &[ElementId], max_toi: Real) -> Vec<RayHit> {
        self.inner.cast_ray(ray, candidates, max_toi)
    }

    fn begin_scoped_mutation(&mut self, label: &str) -> Result<(), ModelError> {
        self.inner.begin_scoped_mutation(label)
    }

    fn commit(&mut self) -> Result<(), ModelError> {
        self.inner.commit()
    }

    fn rollback(&mut self) {
        self.inner.rollback()
    }

    fn create_linear_member(
        &mut self,
        curve: Segment,
        type_id: ElementId,
    ) -> Result<ElementId, ModelError> {
        self.inner.create_linear_member(curve, type_id)
    }

    fn delete_element(&mut self, id: ElementId) -> Result<(), ModelError> {
        if id == self.undeletable {
            Err(ModelError::ReadOnlyAttribute {
                element: id,
                name: "pinned".to_string(),
            })
        } else {
            self.inner.delete_element(id)
        }
    }

    fn set_attribute(
        &mut self,
        id: ElementId,
        definition: &AttributeDefinition,
        value: AttributeValue,
    ) -> Result<(), ModelError> {
        self.inner.set_attribute(id, definition, value)
    }
}

fn seg(a: [f64; 3], b: [f64; 3]) -> Segment {
    Segment::new(Point::from(a), Point::from(b))
}

#[test]
fn failed_member_is_rolled_back_alone() {
    let mut inner = Model::new();
    let ty = inner.add_member_type(MemberType::new("L4x4", "Structural Framing"));
    let beams: Vec<_> = [0.0, 2.0, 4.0]
        .iter()
        .map(|y| {
            inner
                .add_linear_member(seg([0.0, *y, 0.0], [10.0, *y, 0.0]), ty)
                .unwrap()
        })
        .collect();
    let girder = inner
        .add_linear_member(seg([5.0, -1.0, 0.0], [5.0, 5.0, 0.0]), ty)
        .unwrap();

    let mut model = StubbornModel {
        inner,
        undeletable: beams[1],
    };
    let report = split_members(
        &mut model,
        &beams,
        CutterSelection::Elements(&[girder]),
        &SplitOptions::default(),
    )
    .unwrap();

    assert_eq!(report.split_count(), 2);
    assert_eq!(report.failed_count(), 1);
    assert!(matches!(
        report.member(beams[1]).unwrap().outcome,
        MemberOutcome::Failed(SplitError::Model(ModelError::ReadOnlyAttribute { .. }))
    ));

    assert!(!model.contains(beams[0]));
    assert!(model.contains(beams[1]));
    assert!(!model.contains(beams[2]));
    assert!(model.inner.pending_mutation().is_none());

    // The girder, the rolled-back beam, and two segments per split beam.
    let members = model.collect_elements_of_kind(ElementKind::LinearMember);
    assert_eq!(members.len(), 6);
    let y2_members = members
        .iter()
        .filter(|id| model.linear_member(**id).unwrap().curve.a.y == 2.0)
        .count();
    assert_eq!(y2_members, 1);
}
