use crosscut3d::math::Point;
use crosscut3d::model::{ElementId, ElementKind, MemberType, Model, ModelStore};
use crosscut3d::pipeline::{
    split_members, CutterSelection, MemberOutcome, SegmentOutcome, SplitError, SplitOptions,
};
use crosscut3d::shape::Segment;

fn seg(a: [f64; 3], b: [f64; 3]) -> Segment {
    Segment::new(Point::from(a), Point::from(b))
}

fn model_with_type() -> (Model, ElementId) {
    let mut model = Model::new();
    let ty = model.add_member_type(MemberType::new("W10x22", "Structural Framing"));
    (model, ty)
}

fn curves(model: &Model, ids: &[ElementId]) -> Vec<Segment> {
    ids.iter()
        .map(|id| model.linear_member(*id).unwrap().curve)
        .collect()
}

#[test]
fn crossing_beam_is_split_in_two() {
    let (mut model, ty) = model_with_type();
    let a = model.add_linear_member(seg([0.0, 0.0, 0.0], [10.0, 0.0, 0.0]), ty).unwrap();
    let b = model.add_linear_member(seg([5.0, -5.0, 0.0], [5.0, 5.0, 0.0]), ty).unwrap();

    let report = split_members(
        &mut model,
        &[a],
        CutterSelection::Elements(&[b]),
        &SplitOptions::default(),
    )
    .unwrap();

    let created: Vec<_> = report.created_segments().collect();
    assert_eq!(
        curves(&model, &created),
        vec![
            seg([0.0, 0.0, 0.0], [5.0, 0.0, 0.0]),
            seg([5.0, 0.0, 0.0], [10.0, 0.0, 0.0])
        ]
    );
    assert_eq!(report.member(a).unwrap().split_points, 1);
    assert!(!model.contains(a));
    assert!(model.contains(b));

    let total: f64 = curves(&model, &created).iter().map(|c| c.length()).sum();
    assert!(relative_eq!(total, 10.0));
}

#[test]
fn member_without_crossing_is_untouched() {
    let (mut model, ty) = model_with_type();
    let a = model.add_linear_member(seg([0.0, 0.0, 0.0], [10.0, 0.0, 0.0]), ty).unwrap();
    let far = model.add_linear_member(seg([5.0, 1.0, 0.0], [5.0, 5.0, 0.0]), ty).unwrap();
    let before = model.clone();

    let report = split_members(
        &mut model,
        &[a],
        CutterSelection::Elements(&[far]),
        &SplitOptions::default(),
    )
    .unwrap();

    assert_eq!(report.member(a).unwrap().outcome, MemberOutcome::Unchanged);
    assert_eq!(report.created_segments().count(), 0);
    assert_eq!(model.len(), before.len());
    assert_eq!(model.linear_member(a), before.linear_member(a));
}

#[test]
fn cutters_closer_than_the_tolerance_give_one_split() {
    let options = SplitOptions::default().with_tolerance(1.0e-3);
    let eps = options.tolerance;
    let (mut model, ty) = model_with_type();
    let a = model.add_linear_member(seg([0.0, 0.0, 0.0], [10.0, 0.0, 0.0]), ty).unwrap();
    let c1 = model.add_linear_member(seg([3.0, -1.0, 0.0], [3.0, 1.0, 0.0]), ty).unwrap();
    let c2 = model
        .add_linear_member(seg([3.0 + 0.5 * eps, -1.0, 0.0], [3.0 + 0.5 * eps, 1.0, 0.0]), ty)
        .unwrap();

    let report =
        split_members(&mut model, &[a], CutterSelection::Elements(&[c1, c2]), &options).unwrap();

    assert_eq!(report.member(a).unwrap().split_points, 1);
    assert_eq!(report.created_segments().count(), 2);
}

#[test]
fn splitting_the_halves_again_creates_nothing() {
    let (mut model, ty) = model_with_type();
    let a = model.add_linear_member(seg([0.0, 0.0, 0.0], [10.0, 0.0, 0.0]), ty).unwrap();
    let b = model.add_linear_member(seg([5.0, -5.0, 0.0], [5.0, 5.0, 0.0]), ty).unwrap();
    let options = SplitOptions::default();

    let first = split_members(&mut model, &[a], CutterSelection::Elements(&[b]), &options).unwrap();
    let halves: Vec<_> = first.created_segments().collect();
    let count = model.len();

    let second =
        split_members(&mut model, &halves, CutterSelection::AllInModel, &options).unwrap();
    assert_eq!(second.created_segments().count(), 0);
    assert!(second
        .members
        .iter()
        .all(|report| report.outcome == MemberOutcome::Unchanged));
    assert_eq!(model.len(), count);
}

#[test]
fn rerun_on_a_restored_member_reuses_the_segments() {
    let (mut model, ty) = model_with_type();
    let curve = seg([0.0, 0.0, 0.0], [10.0, 0.0, 0.0]);
    let a = model.add_linear_member(curve, ty).unwrap();
    let b = model.add_linear_member(seg([5.0, -5.0, 0.0], [5.0, 5.0, 0.0]), ty).unwrap();
    let options = SplitOptions::default();

    let first = split_members(&mut model, &[a], CutterSelection::Elements(&[b]), &options).unwrap();
    let halves: Vec<_> = first.created_segments().collect();
    assert_eq!(halves.len(), 2);

    // The same member imported again, on top of its halves.
    let restored = model.add_linear_member(curve, ty).unwrap();
    let count = model.len();

    let second =
        split_members(&mut model, &[restored], CutterSelection::Elements(&[b]), &options).unwrap();
    match &second.member(restored).unwrap().outcome {
        MemberOutcome::Split(build) => {
            let reused: Vec<_> = build
                .segments
                .iter()
                .map(|record| record.outcome.clone())
                .collect();
            assert_eq!(
                reused,
                vec![
                    SegmentOutcome::Duplicate(halves[0]),
                    SegmentOutcome::Duplicate(halves[1])
                ]
            );
            assert!(!build.original_deleted);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert_eq!(second.created_segments().count(), 0);
    assert!(model.contains(restored));
    assert_eq!(model.len(), count);
}

#[test]
fn existing_spans_are_reused() {
    let (mut model, ty) = model_with_type();
    let a = model.add_linear_member(seg([0.0, 0.0, 0.0], [10.0, 0.0, 0.0]), ty).unwrap();
    let b = model.add_linear_member(seg([5.0, -5.0, 0.0], [5.0, 5.0, 0.0]), ty).unwrap();
    let existing = model.add_linear_member(seg([5.0, 0.0, 0.0], [0.0, 0.0, 0.0]), ty).unwrap();

    let report = split_members(
        &mut model,
        &[a],
        CutterSelection::Elements(&[b]),
        &SplitOptions::default(),
    )
    .unwrap();

    match &report.member(a).unwrap().outcome {
        MemberOutcome::Split(build) => {
            assert_eq!(build.segments[0].outcome, SegmentOutcome::Duplicate(existing));
            assert_eq!(build.created().count(), 1);
            assert!(build.original_deleted);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn crossing_members_split_each_other() {
    let (mut model, ty) = model_with_type();
    let a = model.add_linear_member(seg([0.0, 0.0, 0.0], [10.0, 0.0, 0.0]), ty).unwrap();
    let b = model.add_linear_member(seg([5.0, -5.0, 0.0], [5.0, 5.0, 0.0]), ty).unwrap();

    let report = split_members(
        &mut model,
        &[a, b, a],
        CutterSelection::AllInModel,
        &SplitOptions::default(),
    )
    .unwrap();

    assert_eq!(report.members.len(), 2);
    assert_eq!(report.split_count(), 2);
    assert_eq!(report.created_segments().count(), 4);
    assert!(!model.contains(a) && !model.contains(b));
    assert_eq!(model.collect_elements_of_kind(ElementKind::LinearMember).len(), 4);
    assert_eq!(
        report.to_string(),
        "2 member(s) split into 4 segment(s), 0 unchanged, 0 skipped, 0 failed"
    );
}

#[test]
fn collinear_cutter_does_not_split() {
    let (mut model, ty) = model_with_type();
    let a = model.add_linear_member(seg([0.0, 0.0, 0.0], [10.0, 0.0, 0.0]), ty).unwrap();
    let lap = model.add_linear_member(seg([2.0, 0.0, 0.0], [6.0, 0.0, 0.0]), ty).unwrap();

    let report = split_members(
        &mut model,
        &[a],
        CutterSelection::Elements(&[lap]),
        &SplitOptions::default(),
    )
    .unwrap();
    assert_eq!(report.member(a).unwrap().outcome, MemberOutcome::Unchanged);
    assert!(model.contains(a));
}

#[test]
fn invalid_selections_abort_before_any_change() {
    let (mut model, ty) = model_with_type();
    let a = model.add_linear_member(seg([0.0, 0.0, 0.0], [10.0, 0.0, 0.0]), ty).unwrap();
    let b = model.add_linear_member(seg([5.0, -5.0, 0.0], [5.0, 5.0, 0.0]), ty).unwrap();
    let options = SplitOptions::default();

    for (members, cutters) in [
        (vec![], vec![b]),
        (vec![ty], vec![b]),
        (vec![a], vec![]),
        (vec![a], vec![ty]),
    ] {
        let result = split_members(
            &mut model,
            &members,
            CutterSelection::Elements(&cutters),
            &options,
        );
        assert!(matches!(result, Err(SplitError::SelectionInvalid(_))));
    }

    let result = split_members(
        &mut model,
        &[a],
        CutterSelection::AllInModel,
        &options.with_tolerance(-1.0),
    );
    assert!(matches!(result, Err(SplitError::InvalidOptions(_))));

    assert!(model.contains(a));
    assert_eq!(model.len(), 3);
}
