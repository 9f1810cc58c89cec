use crosscut3d::math::Point;
use crosscut3d::model::{
    builtin, Attribute, AttributeDefinition, AttributeValue, MemberType, Model, ModelStore,
    StorageType,
};
use crosscut3d::pipeline::{
    split_members, AttributeOutcome, CutterSelection, MemberOutcome, SegmentOutcome, SkipReason,
    SplitOptions,
};
use crosscut3d::shape::Segment;

#[test]
fn segments_inherit_the_editable_attributes() {
    let mark = AttributeDefinition::new(100, "mark", StorageType::Text);
    let phase = AttributeDefinition::new(101, "phase", StorageType::Integer);
    let comments = AttributeDefinition::new(102, "comments", StorageType::Text);

    let mut model = Model::new();
    let ty = model.add_member_type(
        MemberType::new("W8x10", "Structural Framing")
            .with_attribute(mark.clone(), AttributeValue::Text(String::new()))
            .with_attribute(phase.clone(), AttributeValue::Integer(0)),
    );
    let member = model
        .add_linear_member(
            Segment::new(Point::new(0.0, 0.0, 3.0), Point::new(0.0, 8.0, 3.0)),
            ty,
        )
        .unwrap();
    let cutter = model
        .add_linear_member(
            Segment::new(Point::new(-1.0, 2.0, 3.0), Point::new(1.0, 2.0, 3.0)),
            ty,
        )
        .unwrap();

    for attribute in [
        Attribute::new(mark, AttributeValue::Text("B7".to_string())),
        Attribute::new(phase, AttributeValue::Integer(2)),
        Attribute::new(comments, AttributeValue::Text("check camber".to_string())),
    ] {
        let _ = model.insert_attribute(member, attribute).unwrap();
    }

    let options = SplitOptions::default().with_skipped_attribute("phase");
    let report = split_members(
        &mut model,
        &[member],
        CutterSelection::Elements(&[cutter]),
        &options,
    )
    .unwrap();

    let build = match &report.member(member).unwrap().outcome {
        MemberOutcome::Split(build) => build,
        other => panic!("unexpected outcome: {:?}", other),
    };
    assert_eq!(build.created().count(), 2);

    for record in &build.segments {
        let (id, transfer) = match &record.outcome {
            SegmentOutcome::Created { id, attributes } => (*id, attributes),
            other => panic!("unexpected outcome: {:?}", other),
        };

        assert_eq!(transfer.outcome("mark"), Some(&AttributeOutcome::Copied));
        assert_eq!(
            transfer.outcome("phase"),
            Some(&AttributeOutcome::Skipped(SkipReason::SkipList))
        );
        assert_eq!(
            transfer.outcome("comments"),
            Some(&AttributeOutcome::Skipped(SkipReason::MissingOnTarget))
        );
        for name in builtin::NAMES {
            assert_eq!(
                transfer.outcome(name),
                Some(&AttributeOutcome::Skipped(SkipReason::SkipList))
            );
        }

        let attributes = model.attributes(id).unwrap();
        assert_eq!(
            attributes.value("mark"),
            Some(&AttributeValue::Text("B7".to_string()))
        );
        assert_eq!(attributes.value("phase"), Some(&AttributeValue::Integer(0)));
        assert_eq!(attributes.value("comments"), None);
        assert_eq!(
            attributes.value(builtin::LENGTH),
            Some(&AttributeValue::Real(record.span.length()))
        );
        assert_eq!(
            attributes.value(builtin::UNIQUE_ID),
            Some(&AttributeValue::Text(id.to_string()))
        );
    }
}
