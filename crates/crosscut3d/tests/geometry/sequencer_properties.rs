use crosscut3d::na;
use crosscut3d::math::{Point, Real, Vector};
use crosscut3d::pipeline::sequence_points;
use crosscut3d::shape::Segment;

fn rand_point(rng: &mut oorandom::Rand64, extent: Real) -> Point<Real> {
    Point::from(Vector::from_fn(|_, _| (rng.rand_float() * 2.0 - 1.0) * extent))
}

#[test]
fn sequences_are_ordered_and_separated() {
    let mut rng = oorandom::Rand64::new(42);

    for _ in 0..500 {
        let curve = Segment::new(rand_point(&mut rng, 10.0), rand_point(&mut rng, 10.0));
        if curve.length() < 1.0 {
            continue;
        }

        let eps = 10.0 as Real * (1.0e-4 as Real).powf(rng.rand_float());
        let eps = eps.min(0.1);
        let n = rng.rand_range(0..30) as usize;
        let mut raw = vec![];

        for _ in 0..n {
            let t = rng.rand_float() * 1.2 - 0.1;
            let pt = curve.point_at_param(t) + rand_point(&mut rng, 0.5).coords;
            raw.push(pt);

            // Near-duplicate of the previous point.
            if rng.rand_float() < 0.3 {
                raw.push(pt + rand_point(&mut rng, eps * 0.3).coords);
            }
        }

        let seq = sequence_points(&curve, &raw, eps);
        let points = seq.points();

        assert_eq!(points[0].point, curve.a);
        assert_eq!(points[0].param, 0.0);
        assert_eq!(points[points.len() - 1].point, curve.b);
        assert_eq!(points[points.len() - 1].param, 1.0);

        for pair in points.windows(2) {
            assert!(pair[0].param < pair[1].param);
            assert!(na::distance(&pair[0].point, &pair[1].point) >= eps);
        }

        let total: Real = seq.spans().map(|span| span.length()).sum();
        assert!(relative_eq!(total, curve.length(), epsilon = 1.0e-9));
    }
}

#[test]
fn sequences_do_not_depend_on_the_input_order() {
    let mut rng = oorandom::Rand64::new(7);
    let curve = Segment::new(Point::new(1.0, 2.0, 3.0), Point::new(-4.0, 6.0, 0.5));
    let eps = 1.0e-3;

    for _ in 0..50 {
        let mut raw: Vec<_> = (0..12)
            .map(|_| curve.point_at_param(rng.rand_float()))
            .collect();
        let forward = sequence_points(&curve, &raw, eps);
        raw.reverse();
        let backward = sequence_points(&curve, &raw, eps);

        assert_eq!(forward.len(), backward.len());
        for (a, b) in forward.points().iter().zip(backward.points()) {
            assert!(relative_eq!(a.point, b.point, epsilon = 1.0e-9));
        }
    }
}
