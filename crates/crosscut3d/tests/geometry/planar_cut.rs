use crosscut3d::math::{Point, Vector};
use crosscut3d::model::{ElementId, MemberType, Model, ModelStore};
use crosscut3d::pipeline::{split_members, CutterSelection, MemberOutcome, SplitFlags, SplitOptions};
use crosscut3d::shape::{PlanarPatch, Segment};

/// A 4x4 wall in the plane `x = at`, centered on the x axis.
fn wall(model: &mut Model, at: f64) -> ElementId {
    let patch = PlanarPatch::rectangle(
        Point::new(at, -2.0, -2.0),
        Vector::new(0.0, 4.0, 0.0),
        Vector::new(0.0, 0.0, 4.0),
    )
    .unwrap();
    model.add_planar_element(format!("wall at {}", at), patch)
}

fn beam(model: &mut Model) -> ElementId {
    let ty = model.add_member_type(MemberType::new("HSS6x6", "Structural Framing"));
    model
        .add_linear_member(
            Segment::new(Point::new(0.0, 0.0, 0.0), Point::new(12.0, 0.0, 0.0)),
            ty,
        )
        .unwrap()
}

#[test]
fn walls_split_the_beam() {
    let mut model = Model::new();
    let member = beam(&mut model);
    let walls = [wall(&mut model, 8.0), wall(&mut model, 4.0)];

    let report = split_members(
        &mut model,
        &[member],
        CutterSelection::Elements(&walls),
        &SplitOptions::default(),
    )
    .unwrap();

    let lengths: Vec<_> = report
        .created_segments()
        .map(|id| model.linear_member(id).unwrap().curve.length())
        .collect();
    assert_eq!(lengths.len(), 3);
    assert!(relative_eq!(lengths[0], 4.0, epsilon = 1.0e-9));
    assert!(relative_eq!(lengths[1], 4.0, epsilon = 1.0e-9));
    assert!(relative_eq!(lengths[2], 4.0, epsilon = 1.0e-9));
}

#[test]
fn walls_at_the_ends_or_out_of_reach_do_not_split() {
    let mut model = Model::new();
    let member = beam(&mut model);
    let mut cutters = vec![wall(&mut model, 0.0), wall(&mut model, 12.0), wall(&mut model, 20.0)];

    let offset = PlanarPatch::rectangle(
        Point::new(6.0, 1.0, -2.0),
        Vector::new(0.0, 4.0, 0.0),
        Vector::new(0.0, 0.0, 4.0),
    )
    .unwrap();
    cutters.push(model.add_planar_element("offset wall", offset));

    let floor = PlanarPatch::rectangle(
        Point::new(-1.0, -1.0, 0.0),
        Vector::new(20.0, 0.0, 0.0),
        Vector::new(0.0, 2.0, 0.0),
    )
    .unwrap();
    cutters.push(model.add_planar_element("floor", floor));

    let report = split_members(
        &mut model,
        &[member],
        CutterSelection::Elements(&cutters),
        &SplitOptions::default(),
    )
    .unwrap();

    assert_eq!(report.member(member).unwrap().outcome, MemberOutcome::Unchanged);
    assert!(model.contains(member));
}

#[test]
fn ray_casting_can_be_disabled() {
    let mut model = Model::new();
    let member = beam(&mut model);
    let _ = wall(&mut model, 6.0);
    let options = SplitOptions::default().with_flags(SplitFlags::CURVE_CURVE);

    let report = split_members(&mut model, &[member], CutterSelection::AllInModel, &options).unwrap();
    assert_eq!(report.member(member).unwrap().outcome, MemberOutcome::Unchanged);

    let report = split_members(
        &mut model,
        &[member],
        CutterSelection::AllInModel,
        &SplitOptions::default(),
    )
    .unwrap();
    assert_eq!(report.created_segments().count(), 2);
}
