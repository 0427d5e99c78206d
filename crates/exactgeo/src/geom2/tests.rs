use super::*;
use num_traits::{Signed, Zero};
use std::cmp::Ordering;
use std::collections::HashSet;

fn pt(x: i64, y: i64) -> Point {
    Point::new(x, y).unwrap()
}

fn ptf(x: f64, y: f64) -> Point {
    Point::new(x, y).unwrap()
}

fn q(s: &str) -> Scalar {
    parse_scalar(s).unwrap()
}

fn seg(a: (f64, f64), b: (f64, f64)) -> Segment {
    Segment::new(a, b).unwrap()
}

fn ray(a: (f64, f64), b: (f64, f64)) -> Ray {
    Ray::new(a, b).unwrap()
}

fn line(a: (f64, f64), b: (f64, f64)) -> Line {
    Line::new(a, b).unwrap()
}

fn poly(vs: &[(i64, i64)]) -> Polygon {
    Polygon::new(vs.iter().copied()).unwrap()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

// ---------------------------------------------------------------------------
// Scalars and points

#[test]
fn floats_convert_through_their_decimal_form() {
    assert_eq!(0.1f64.into_scalar().unwrap(), q("1/10"));
    assert_eq!(1.25f64.into_scalar().unwrap(), q("5/4"));
    assert_eq!((-0.5f32).into_scalar().unwrap(), q("-1/2"));
    assert!(f64::NAN.into_scalar().unwrap_err().is_type_violation());
    assert!(Point::new(f64::INFINITY, 0).is_err());
}

#[test]
fn parse_scalar_accepts_integers_fractions_decimals() {
    assert_eq!(q("-3"), Scalar::from_integer((-3).into()));
    assert_eq!(q(" 2/4 "), q("1/2"));
    assert_eq!(q("-.5"), q("-1/2"));
    assert_eq!(q("+0.25"), q("1/4"));
    for bad in ["", ".", "1/0", "abc", "1e5", "--1"] {
        assert!(parse_scalar(bad).is_err(), "{bad:?} should not parse");
    }
}

#[test]
fn point_distance_and_midpoint() {
    assert_eq!(pt(0, 0).distance(&pt(1, 1)), 2f64.sqrt());
    assert_eq!(pt(0, 0).midpoint(&pt(1, 1)), ptf(0.5, 0.5));
    assert_eq!(pt(3, 4).abs(), 5.0);
    assert_eq!(&pt(1, 2) + &pt(3, 4), pt(4, 6));
    assert_eq!(&pt(1, 2) - &pt(3, 4), pt(-2, -2));
    assert_eq!(-pt(1, -2), pt(-1, 2));
    assert_eq!(pt(1, 2) * q("1/2"), ptf(0.5, 1.0));
    assert_eq!(pt(1, 2) / q("2"), ptf(0.5, 1.0));
}

#[test]
fn project_onto_vector() {
    let p = Point::project(&pt(2, 3), &pt(1, 0)).unwrap();
    assert_eq!(p, pt(2, 0));
    let p = Point::project(&pt(1, 0), &pt(1, 1)).unwrap();
    assert_eq!(p, ptf(0.5, 0.5));
    let err = Point::project(&pt(1, 1), &pt(0, 0)).unwrap_err();
    assert!(err.is_invariant_violation());
}

#[test]
fn affine_rank_and_collinearity() {
    assert_eq!(Point::affine_rank([]), -1);
    assert_eq!(Point::affine_rank([&pt(1, 1)]), 0);
    assert_eq!(Point::affine_rank([&pt(1, 1), &pt(1, 1)]), 0);
    assert_eq!(Point::affine_rank([&pt(0, 0), &pt(1, 1), &pt(2, 2)]), 1);
    assert_eq!(Point::affine_rank([&pt(0, 0), &pt(1, 1), &pt(2, 3)]), 2);
    assert!(Point::is_collinear([&pt(0, 0), &pt(1, 1), &pt(1, 1), &pt(5, 5)]));
    assert!(!Point::is_collinear([&pt(0, 0), &pt(1, 1), &pt(1, 0)]));
    assert!(Point::is_collinear([]));
}

#[test]
fn points_order_lexicographically() {
    let mut v = vec![pt(1, 0), pt(0, 5), pt(0, -1)];
    v.sort();
    assert_eq!(v, vec![pt(0, -1), pt(0, 5), pt(1, 0)]);
}

#[test]
fn vector_products_and_orthogonal_direction() {
    let a = Vector::new(1, 2).unwrap();
    let b = Vector::new(3, 4).unwrap();
    assert_eq!(a.dot(&b), q("11"));
    assert_eq!(a.cross(&b), q("-2"));
    assert_eq!(Vector::new(0, 3).unwrap().orthogonal_direction(), Vector::new(1, 0).unwrap());
    assert_eq!(Vector::new(3, 0).unwrap().orthogonal_direction(), Vector::new(0, 1).unwrap());
    let o = a.orthogonal_direction();
    assert!(o.dot(&a).is_zero());
    assert_eq!(Point::from(a.clone()).to_vector(), a);
}

// ---------------------------------------------------------------------------
// Linear entities

#[test]
fn equal_endpoints_are_rejected() {
    assert!(Segment::new((0, 0), (0, 0)).unwrap_err().is_invariant_violation());
    assert!(Line::new((1, 1), pt(1, 1)).unwrap_err().is_invariant_violation());
    assert!(Ray::new([2, 2], [2, 2]).unwrap_err().is_invariant_violation());
    assert!(Segment::new((f64::NAN, 0.0), (1.0, 0.0)).unwrap_err().is_type_violation());
}

#[test]
fn endpoints_are_contained() {
    let entities = [
        line((0.0, 0.0), (1.0, 2.0)).as_linear().to_entity(),
        ray((3.0, -1.0), (1.0, 2.0)).as_linear().to_entity(),
        seg((0.5, 0.0), (-1.0, 7.0)).as_linear().to_entity(),
    ];
    for e in &entities {
        let lin = e.as_linear().unwrap();
        assert!(lin.contains_point(lin.p1()), "{e}");
        assert!(lin.contains_point(lin.p2()), "{e}");
    }
}

#[test]
fn direction_slope_and_span() {
    let s1 = seg((0.0, 0.0), (1.0, 1.0));
    assert_eq!(s1.direction(), &Vector::new(1, 1).unwrap());
    assert_eq!(s1.slope(), Slope::Finite(q("1")));
    assert_eq!(seg((0.0, 0.0), (1.0, 0.0)).slope(), Slope::Finite(q("0")));
    assert!(seg((0.0, 0.0), (0.0, 2.0)).slope().is_infinite());
    assert_eq!(s1.span_test(&pt(0, 0)), Ordering::Equal);
    assert_eq!(s1.span_test(&pt(1, 1)), Ordering::Greater);
    assert_eq!(s1.span_test(&pt(-1, -1)), Ordering::Less);
}

#[test]
fn angles_between_linear_entities() {
    let s1 = seg((0.0, 0.0), (1.0, 1.0));
    let s2 = seg((0.0, 0.0), (-1.0, 1.0));
    let l3 = line((0.0, 0.0), (1.0, 0.0));
    assert_eq!(s1.angle_between(&s2), std::f64::consts::FRAC_PI_2);
    assert_eq!(s1.angle_between(&s1), 0.0);
    assert!(close(s1.angle_between(&l3), std::f64::consts::FRAC_PI_4));
    assert!(close(l3.angle_between(&ray((0.0, 0.0), (-1.0, 0.0))), std::f64::consts::PI));
}

#[test]
fn parallel_perpendicular_similar() {
    let s1 = seg((0.0, 0.0), (1.0, 1.0));
    let s2 = seg((0.0, 0.0), (-1.0, 1.0));
    let s3 = seg((0.0, 0.0), (1.0, 0.0));
    assert!(s3.parallel_to(&seg((6.0, 6.0), (12.0, 6.0))));
    assert!(!s3.parallel_to(&seg((6.0, 6.0), (12.0, 6.00001))));
    assert!(s1.perpendicular_to(&s2) && s2.perpendicular_to(&s1));
    assert!(!s1.perpendicular_to(&s3));
    assert!(s1.similar_to(&ray((2.0, 2.0), (4.0, 4.0))));
    assert!(s3.similar_to(&seg((10.0, 0.0), (40.0, 0.0))));
    assert!(!s1.similar_to(&s3));
}

#[test]
fn parallel_and_perpendicular_lines_through_point() {
    let s3 = seg((0.0, 0.0), (1.0, 0.0));
    let p = pt(1, 1);
    let par = s3.parallel_line(&p);
    let perp = s3.perpendicular_line(&p);
    assert!(par.parallel_to(&s3) && par.contains_point(&p));
    assert!(perp.perpendicular_to(&s3) && perp.contains_point(&p));
}

#[test]
fn perpendicular_segment_to_point() {
    let s2 = seg((0.0, 0.0), (-1.0, 1.0));
    let s3 = seg((0.0, 0.0), (1.0, 0.0));
    assert_eq!(s3.perpendicular_segment(&pt(0, 0)), Perpendicular::Degenerate(pt(0, 0)));
    assert_eq!(
        s2.perpendicular_segment(&pt(1, 1)),
        Perpendicular::Segment(seg((1.0, 1.0), (0.0, 0.0)))
    );
    assert_eq!(
        s3.perpendicular_segment(&pt(2, 2)),
        Perpendicular::Segment(seg((2.0, 2.0), (2.0, 0.0)))
    );
    // On the supporting line but past the segment's end.
    assert_eq!(s3.perpendicular_segment(&pt(5, 0)), Perpendicular::Degenerate(pt(5, 0)));
}

#[test]
fn line_coefficients_and_equation() {
    let l = line((0.0, 0.0), (1.0, 1.0));
    let (a, b, c) = l.coefficients();
    assert_eq!((a.clone(), b.clone(), c.clone()), (q("-1"), q("1"), q("0")));
    assert_eq!(l.equation(), "-1*x + 1*y + 0 = 0");
    let l = line((1.0, 2.0), (3.0, 5.0));
    let (a, b, c) = l.coefficients();
    for p in [pt(1, 2), pt(3, 5), pt(5, 8)] {
        assert!((a * p.x() + b * p.y() + c).is_zero());
    }
}

#[test]
fn line_containment_and_equality() {
    let l1 = line((0.0, 0.0), (1.0, 1.0));
    assert!(l1.contains_point(&pt(100, 100)));
    assert!(l1.contains(&seg((1000.0, 1000.0), (2000.0, 2000.0)).into()));
    assert!(l1.contains(&ray((-1000.0, -1000.0), (2000.0, 2000.0)).into()));
    assert!(!l1.contains(&seg((0.0, 0.0), (1.0, 0.0)).into()));
    assert_eq!(l1, line((5.0, 5.0), (-3.0, -3.0)));
    assert_ne!(l1, line((0.0, 0.0), (-1.0, 1.0)));
}

#[test]
fn any_two_points_on_a_line_define_it() {
    let l = line((1.0, 2.0), (3.0, 5.0));
    let p = l.projection_point(&pt(10, -4));
    let r = l.projection_point(&pt(-7, 0));
    assert!(l.contains_point(&p) && l.contains_point(&r));
    assert_eq!(Line::new(p, r).unwrap(), l);
}

#[test]
fn ray_containment() {
    let r1 = ray((0.0, 0.0), (1.0, 1.0));
    let r3 = ray((0.0, 0.0), (1.0, 0.0));
    assert!(r1.contains_point(&pt(125, 125)));
    assert!(!r3.contains_point(&ptf(-0.000001, 0.0)));
    assert!(!r3.contains_point(&pt(20, 20)));
    assert!(r1.contains(&ray((20.0, 20.0), (900.0, 900.0)).into()));
    assert!(ray((-2.0, -2.0), (9.0, 9.0)).contains(&r1.clone().into()));
    assert!(ray((0.0, 0.0), (0.1, 0.1)).contains(&r1.clone().into()));
    assert!(!r1.contains(&ray((0.0, 0.0), (-1.0, -1.0)).into()));
    assert!(!r1.contains(&ray((0.0, 0.0), (1.0, 1.1)).into()));
    assert!(r1.contains(&seg((271.0, 271.0), (373.0, 373.0)).into()));
    assert!(!r1.contains(&seg((-1.0, -1.0), (2.0, 2.0)).into()));
    assert!(!r1.contains(&line((0.0, 0.0), (1.0, 1.0)).into()));
}

#[test]
fn ray_equality_and_directions() {
    let r1 = ray((0.0, 0.0), (1.0, 1.0));
    assert_eq!(r1, ray((0.0, 0.0), (100.0, 100.0)));
    assert_ne!(r1, ray((-1.0, -1.0), (1.0, 1.0)));
    assert_ne!(r1, ray((0.0, 0.0), (-1.0, -1.0)));
    assert_eq!(ray((0.0, 0.0), (0.0, 2.0)).xdirection(), 0.0);
    assert_eq!(ray((0.0, 0.0), (-1.0, 2.0)).xdirection(), f64::NEG_INFINITY);
    assert_eq!(r1.ydirection(), f64::INFINITY);
    assert_eq!(ray((0.0, 0.0), (-1.0, -2.0)).ydirection(), f64::NEG_INFINITY);
    assert_eq!(r1.source(), &pt(0, 0));
}

#[test]
fn segment_containment_and_equality() {
    let s1 = seg((0.0, 0.0), (1.0, 1.0));
    let s3 = seg((0.0, 0.0), (1.0, 0.0));
    assert!(s1.contains_point(&ptf(0.0123, 0.0123)));
    assert!(!s3.contains_point(&ptf(1.000001, 0.0)));
    assert!(seg((0.0, 0.0), (0.0, 2.0)).contains_point(&pt(0, 1)));
    assert!(!seg((0.0, 0.0), (0.0, 2.0)).contains_point(&pt(0, 3)));
    assert!(s1.contains(&seg((0.5555551, 0.5555551), (0.5555552, 0.5555552)).into()));
    assert!(!s1.contains(&seg((0.0, 0.0), (1.000001, 1.000001)).into()));
    assert!(!s1.contains(&ray((0.0, 0.0), (1.0, 1.0)).into()));
    assert_eq!(s1, seg((1.0, 1.0), (0.0, 0.0)));
    assert_ne!(s1, seg((0.000001, 0.000001), (1.0, 1.0)));
}

#[test]
fn linear_distances() {
    let s3 = seg((0.0, 0.0), (1.0, 0.0));
    let s = seg((0.5, 0.0), (1.0, 0.0));
    assert_eq!(s.distance_to_point(&pt(0, 0)), 0.5);
    assert_eq!(s.distance_to_point(&ptf(1.5, 1.5)), 10f64.sqrt() / 2.0);
    assert_eq!(s3.distance_to_point(&ptf(0.5, 0.0)), 0.0);
    assert_eq!(seg((0.0, 0.0), (1.0, 1.0)).distance_to_point(&pt(-1, 1)), 2f64.sqrt());

    let r1 = ray((0.0, 0.0), (1.0, 1.0));
    assert_eq!(r1.distance_to_point(&pt(1000, 1000)), 0.0);
    assert_eq!(r1.distance_to_point(&pt(-1, -1)), 2f64.sqrt());
    assert_eq!(r1.distance_to_point(&pt(-1, 1)), 2f64.sqrt());

    let l1 = line((0.0, 0.0), (1.0, 1.0));
    assert_eq!(l1.distance_to_point(&pt(1, 1)), 0.0);
    assert!(close(l1.distance_to_point(&pt(0, 1)), 2f64.sqrt() / 2.0));

    let err = s3.distance(&l1.clone().into()).unwrap_err();
    assert!(err.is_type_violation());
    assert_eq!(s3.distance(&pt(0, 2).into()).unwrap(), 2.0);
}

#[test]
fn segment_length_midpoint_bisector() {
    let s1 = seg((0.0, 0.0), (1.0, 1.0));
    assert_eq!(s1.length(), 2f64.sqrt());
    assert_eq!(seg((0.0, 0.0), (-1.0, 1.0)).midpoint(), ptf(-0.5, 0.5));
    let bis = s1.perpendicular_bisector();
    assert_eq!(bis, line((0.5, 0.5), (1.5, -0.5)));
    assert!(bis.perpendicular_to(&s1));
    assert!(s1.contains_point(&s1.midpoint()));

    let on = seg((0.5, 0.5), (1.5, -0.5)).midpoint();
    assert_eq!(s1.bisector_segment(&on), Some(Segment::new(on.clone(), s1.midpoint()).unwrap()));
    assert_eq!(s1.bisector_segment(&s1.midpoint()), None);
    assert_eq!(s1.bisector_segment(&pt(3, 0)), None);
}

// ---------------------------------------------------------------------------
// Intersections

fn ents<E: Into<Entity>>(v: Vec<E>) -> Vec<Entity> {
    v.into_iter().map(Into::into).collect()
}

#[test]
fn segment_intersections_on_a_shared_line() {
    let s1 = seg((0.0, 0.0), (1.0, 1.0));
    let p1: Entity = pt(0, 0).into();
    let p2: Entity = pt(1, 1).into();
    assert_eq!(s1.intersection(&line((10.0, 10.0), (20.0, 20.0)).into()), ents(vec![s1.clone()]));
    assert_eq!(s1.intersection(&s1.clone().into()), ents(vec![s1.clone()]));
    let half = seg((0.5, 0.5), (1.0, 1.0));
    assert_eq!(s1.intersection(&seg((0.5, 0.5), (2.0, 2.0)).into()), ents(vec![half.clone()]));
    assert_eq!(s1.intersection(&seg((2.0, 2.0), (0.5, 0.5)).into()), ents(vec![half.clone()]));
    assert_eq!(s1.intersection(&seg((1.0, 1.0), (4.0, 4.0)).into()), vec![p2.clone()]);
    assert!(s1.intersection(&seg((2.0, 2.0), (4.0, 4.0)).into()).is_empty());

    assert_eq!(s1.intersection(&ray((0.5, 0.5), (2.0, 2.0)).into()), ents(vec![half]));
    assert_eq!(
        s1.intersection(&ray((0.5, 0.5), (-1.0, -1.0)).into()),
        ents(vec![seg((0.0, 0.0), (0.5, 0.5))])
    );
    assert_eq!(s1.intersection(&ray((2.0, 2.0), (0.5, 0.5)).into()), ents(vec![s1.clone()]));
    assert_eq!(s1.intersection(&ray((1.0, 1.0), (6.0, 6.0)).into()), vec![p2]);
    assert_eq!(s1.intersection(&ray((0.0, 0.0), (-6.0, -6.0)).into()), vec![p1]);
    assert!(s1.intersection(&ray((2.0, 2.0), (6.0, 6.0)).into()).is_empty());
}

#[test]
fn ray_intersections_on_a_shared_line() {
    let r1 = ray((0.0, 0.0), (1.0, 1.0));
    let s1 = seg((0.0, 0.0), (1.0, 1.0));
    let p1: Entity = pt(0, 0).into();
    assert_eq!(r1.intersection(&r1.clone().into()), ents(vec![r1.clone()]));
    let ahead = ray((0.5, 0.5), (2.0, 2.0));
    assert_eq!(r1.intersection(&ahead.clone().into()), ents(vec![ahead]));
    assert_eq!(r1.intersection(&ray((-1.0, -1.0), (2.0, 2.0)).into()), ents(vec![r1.clone()]));
    assert_eq!(r1.intersection(&ray((0.0, 0.0), (-2.0, -2.0)).into()), vec![p1.clone()]);
    assert!(r1.intersection(&ray((-1.0, -1.0), (-2.0, -2.0)).into()).is_empty());

    assert_eq!(r1.intersection(&seg((-1.0, -1.0), (0.0, 0.0)).into()), vec![p1.clone()]);
    assert_eq!(ray((0.0, 0.0), (-2.0, -2.0)).intersection(&s1.clone().into()), vec![p1]);
    assert_eq!(ray((1.0, 1.0), (0.0, 0.0)).intersection(&s1.clone().into()), ents(vec![s1.clone()]));
    assert_eq!(
        ray((0.5, 0.5), (0.0, 0.0)).intersection(&s1.clone().into()),
        ents(vec![seg((0.5, 0.5), (0.0, 0.0))])
    );
    assert!(ray((2.0, 2.0), (9.0, 9.0)).intersection(&s1.into()).is_empty());
}

#[test]
fn crossing_intersections() {
    let s3 = seg((0.0, 0.0), (1.0, 0.0));
    let p1: Entity = pt(0, 0).into();
    assert_eq!(
        seg((0.0, 0.0), (1.0, 1.0)).intersection(&ray((0.0, 0.0), (-1.0, 1.0)).into()),
        vec![p1.clone()]
    );
    assert_eq!(
        seg((0.0, 0.0), (10.0, 0.0)).intersection(&Entity::from(seg((9.0, 2.0), (3.0, -1.0)))),
        vec![Entity::from(pt(5, 0))]
    );
    assert_eq!(
        seg((-10.0, 0.0), (10.0, 0.0)).intersection(&Entity::from(seg((-3.0, -1.0), (2.0, 9.0)))),
        vec![Entity::from(ptf(-2.5, 0.0))]
    );
    assert_eq!(
        seg((0.0, 0.2), (0.5, -0.1)).intersection(&Entity::from(line((-12.0, 0.0), (12.0, 0.0)))),
        vec![Entity::from(Point::from_scalars(q("1/3"), q("0")))]
    );
    assert_eq!(
        s3.intersection(&Entity::from(ray((0.0, -1.0), (1.0, 1.0)))),
        vec![Entity::from(ptf(0.5, 0.0))]
    );
    assert_eq!(
        seg((-10.0, 0.0), (10.0, 0.0)).intersection(&Entity::from(ray((-3.0, 0.9), (1.0, 0.3)))),
        vec![Entity::from(pt(3, 0))]
    );
    assert_eq!(s3.intersection(&Entity::from(ray((0.2, 0.2), (0.1, 0.1)))), vec![p1]);

    assert!(s3.intersection(&seg((1.01, -1.0), (1.01, 4.0)).into()).is_empty());
    assert!(s3.intersection(&ray((0.0, 0.001), (1.0, 1.0)).into()).is_empty());
    assert!(s3.intersection(&ray((1.0001, 0.0), (1.0001, -1.0)).into()).is_empty());
    assert!(s3.intersection(&seg((0.0, 1.0), (1.0, 1.0)).into()).is_empty());
    assert!(line((0.0, 0.0), (1.0, 1.0))
        .intersection(&line((1.0, 0.0), (2.0, 1.0)).into())
        .is_empty());
}

#[test]
fn intersection_with_points() {
    let s1 = seg((0.0, 0.0), (1.0, 1.0));
    let mid: Entity = ptf(0.5, 0.5).into();
    assert_eq!(s1.intersection(&mid), vec![mid.clone()]);
    assert!(seg((0.0, 0.0), (1.0, 0.0)).intersection(&pt(1, 1).into()).is_empty());
    let e: Entity = s1.into();
    assert_eq!(mid.intersection(&e), vec![mid.clone()]);
    assert_eq!(mid.intersection(&mid), vec![mid.clone()]);
}

#[test]
fn intersection_is_symmetric() {
    let es: Vec<Entity> = vec![
        line((0.0, 0.0), (1.0, 1.0)).into(),
        ray((0.5, 0.5), (-1.0, -1.0)).into(),
        ray((0.0, 1.0), (1.0, 0.0)).into(),
        seg((0.0, 0.0), (2.0, 2.0)).into(),
        seg((3.0, 3.0), (1.0, 1.0)).into(),
        seg((0.0, 1.0), (1.0, 0.0)).into(),
        ray((5.0, 5.0), (6.0, 6.0)).into(),
    ];
    for a in &es {
        for b in &es {
            let ab = a.intersection(b);
            let ba = b.intersection(a);
            assert_eq!(ab.len(), ba.len(), "{a} vs {b}");
            for x in &ab {
                assert!(ba.contains(x), "{a} ∩ {b}: {x} missing from reverse");
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Polygons

fn poly1() -> Polygon {
    poly(&[(0, 0), (3, -1), (6, 0), (4, 5), (2, 3), (0, 3)])
}

fn unit_square() -> Polygon {
    poly(&[(0, 0), (1, 0), (1, 1), (0, 1)])
}

#[test]
fn polygon_construction_errors() {
    assert!(poly_err(&[(0, 0), (0, 1)]));
    assert!(poly_err(&[(0, 0), (0, 1), (0, 1)]));
    assert!(poly_err(&[(0, 0), (1, 1), (2, 2), (3, 3)]));
    assert!(Polygon::new([(0.0, 0.0), (f64::NAN, 1.0), (1.0, 1.0)])
        .unwrap_err()
        .is_type_violation());
}

fn poly_err(vs: &[(i64, i64)]) -> bool {
    Polygon::new(vs.iter().copied())
        .map_err(|e| e.is_invariant_violation())
        .err()
        .unwrap_or(false)
}

#[test]
fn polygon_normalization() {
    let p = poly(&[(0, 0), (0, 1), (0, 1), (0, 1), (0, 1), (1, 1), (1, 1), (1, 0)]);
    assert_eq!(p, poly(&[(0, 0), (0, 1), (1, 1), (1, 0)]));
    assert_eq!(p.vertices().len(), 4);

    let closed = poly(&[(0, 0), (1, 0), (1, 1), (0, 0)]);
    assert_eq!(closed.vertices().len(), 3);

    let big = poly(&[
        (-4, 15),
        (-11, 15),
        (-15, 15),
        (-15, 6),
        (-15, -9),
        (-15, -15),
        (-8, -15),
        (-2, -15),
        (7, -15),
        (15, -15),
        (15, -3),
        (15, 10),
        (15, 15),
    ]);
    assert_eq!(big, poly(&[(-15, -15), (15, -15), (15, 15), (-15, 15)]));
    assert_eq!(big.vertices().len(), 4);

    // An out-and-back spike collapses onto its base vertex.
    let spiked = poly(&[(0, 0), (4, 0), (4, 4), (6, 6), (4, 4), (0, 4)]);
    assert_eq!(spiked.vertices().len(), 4);
    assert_eq!(spiked, poly(&[(0, 0), (4, 0), (4, 4), (0, 4)]));
}

#[test]
fn turn_predicate() {
    assert!(Polygon::is_right(&pt(0, 0), &pt(1, 1), &pt(1, 0)));
    assert!(!Polygon::is_right(&pt(0, 0), &pt(1, 0), &pt(1, 1)));
    assert!(Polygon::is_right(&pt(0, 0), &pt(1, 1), &pt(2, 2)));
}

#[test]
fn polygon_area_sign_follows_orientation() {
    let p = poly1();
    assert_eq!(p.area(), &q("22"));
    let mut rev: Vec<_> = p.vertices().to_vec();
    rev.reverse();
    assert_eq!(Polygon::from_points(rev).unwrap().area(), &q("-22"));
    assert!(poly(&[(0, 2), (2, 2), (0, 0), (2, 0)]).area().is_zero());
    assert_eq!(unit_square().area().abs(), q("1"));
}

#[test]
fn polygon_perimeter() {
    let expected = 5.0 + 2.0 * 10f64.sqrt() + 29f64.sqrt() + 8f64.sqrt();
    assert!(close(poly1().perimeter(), expected));
    assert_eq!(unit_square().perimeter(), 4.0);
}

#[test]
fn polygon_centroid() {
    let p6 = poly(&[(0, 0), (1, 0), (5, 1), (0, 1)]);
    assert_eq!(p6.centroid().unwrap(), Point::from_scalars(q("31/18"), q("11/18")));
    assert_eq!(unit_square().centroid().unwrap(), ptf(0.5, 0.5));
    let bowtie = poly(&[(0, 2), (2, 2), (0, 0), (2, 0)]);
    assert!(bowtie.centroid().unwrap_err().is_invariant_violation());
}

#[test]
fn polygon_sides_and_bounds() {
    let p6 = poly(&[(0, 0), (1, 0), (5, 1), (0, 1)]);
    let expected = vec![
        seg((0.0, 0.0), (1.0, 0.0)),
        seg((1.0, 0.0), (5.0, 1.0)),
        seg((5.0, 1.0), (0.0, 1.0)),
        seg((0.0, 1.0), (0.0, 0.0)),
    ];
    assert_eq!(p6.sides(), expected.as_slice());
    assert_eq!(p6.sides()[1].p1(), &pt(1, 0));
    assert_eq!(poly1().sides().len(), 6);

    let b = poly1().bounds().clone();
    assert_eq!((b.xmin, b.ymin, b.xmax, b.ymax), (q("0"), q("-1"), q("6"), q("5")));
}

#[test]
fn polygon_convexity() {
    assert!(unit_square().is_convex());
    assert!(poly(&[(0, 0), (3, 0), (5, 2), (4, 4)]).is_convex());
    assert!(poly(&[(0, 0), (1, 0), (5, 1), (0, 1)]).is_convex());
    assert!(poly(&[(0, 0), (4, 4), (5, 2), (3, 0)]).is_convex());
    assert!(poly(&[(0, 0), (5, 0), (0, 5)]).is_convex());
    assert!(!poly1().is_convex());
    // Turns agree but the boundary winds twice around.
    let pentagram = poly(&[(0, 10), (6, -8), (-10, 3), (10, 3), (-6, -8)]);
    assert!(!pentagram.is_convex());
}

#[test]
fn polygon_encloses_point() {
    let tri = poly(&[(0, 0), (4, 4), (0, 4)]);
    let notched = poly(&[(0, 0), (0, 2), (4, 4), (8, 2), (8, 0), (4, 2)]);
    assert!(tri.encloses_point(&pt(1, 3)));
    assert!(notched.encloses_point(&pt(4, 3)));
    assert!(notched.encloses(ptf(4.0, 3.99999)).unwrap());

    assert!(!poly1().encloses_point(&pt(0, 0)));
    assert!(!poly1().encloses_point(&pt(6, 0)));
    for (x, y) in [(2, 2), (2, 1), (5, 5), (0, 0), (4, 0), (4, 4), (0, 2)] {
        assert!(!tri.encloses_point(&pt(x, y)), "({x}, {y})");
    }
    assert!(!notched.encloses_point(&pt(4, 4)));
    assert!(!notched.encloses_point(&pt(4, 1)));
    assert!(notched.encloses_point(&pt(1, 1)));
}

#[test]
fn polygon_never_encloses_its_boundary() {
    let p = poly1();
    for v in p.vertices() {
        assert!(!p.encloses_point(v));
    }
    for s in p.sides() {
        assert!(!p.encloses_point(&s.midpoint()));
    }
}

#[test]
fn polygon_translation_preserves_shape() {
    let p = poly1();
    let moved = p.translated(&Vector::new(3, -2).unwrap());
    assert_eq!(moved.area(), p.area());
    assert_eq!(moved.vertices()[0], pt(3, -2));
    assert!(moved.encloses_point(&pt(4, 0)));
}

fn tri1() -> Polygon {
    poly(&[(0, 0), (1, 0), (0, 1)])
}

fn notched_kite() -> Polygon {
    Polygon::new([
        (q("0"), q("1")),
        (q("-5"), q("0")),
        (q("0"), q("-4")),
        (q("0"), q("1/5")),
        (q("1/2"), q("-1/10")),
        (q("1"), q("0")),
        (q("0"), q("1")),
    ])
    .unwrap()
}

fn qpt(x: &str, y: &str) -> Point {
    Point::from_scalars(q(x), q(y))
}

fn qseg(a: (&str, &str), b: (&str, &str)) -> Segment {
    Segment::new(qpt(a.0, a.1), qpt(b.0, b.1)).unwrap()
}

#[test]
fn polygon_intersection_with_points_and_lines() {
    let t = tri1();
    assert_eq!(t.intersection(&Entity::from(pt(0, 0))), vec![Entity::from(pt(0, 0))]);
    assert_eq!(t.intersection(&Entity::from(ptf(0.5, 0.0))), vec![Entity::from(ptf(0.5, 0.0))]);
    assert!(t.intersection(&Entity::from(pt(-12, -43))).is_empty());
    assert!(t.intersection(&Entity::from(ptf(0.1, 0.1))).is_empty());

    let k = notched_kite();
    assert_eq!(
        k.intersection(&Entity::from(line((-12.0, 0.0), (12.0, 0.0)))),
        vec![
            Entity::from(pt(-5, 0)),
            Entity::from(pt(0, 0)),
            Entity::from(qpt("1/3", "0")),
            Entity::from(pt(1, 0)),
        ]
    );
    assert_eq!(
        k.intersection(&Entity::from(line((-5.0, 0.0), (0.0, 1.0)))),
        ents(vec![seg((-5.0, 0.0), (0.0, 1.0))])
    );
    assert_eq!(
        k.intersection(&Entity::from(line((0.0, 0.0), (0.0, 1.0)))),
        vec![Entity::from(pt(0, 1)), Entity::from(qseg(("0", "-4"), ("0", "1/5")))]
    );
    assert_eq!(
        k.intersection(&Entity::from(ray((-3.0, 4.0), (1.0, 0.0)))),
        ents(vec![seg((1.0, 0.0), (0.0, 1.0))])
    );
    assert!(t.intersection(&Entity::from(line((-12.0, 0.0), (12.0, 12.0)))).is_empty());

    // Linear entities delegate to the polygon.
    let l = Entity::from(line((0.0, 0.0), (0.0, 1.0)));
    assert_eq!(l.intersection(&Entity::from(k.clone())), k.intersection(&l));
}

#[test]
fn polygon_intersection_with_polygons() {
    let t = tri1();
    let k = notched_kite();
    let expected = vec![
        Entity::from(qpt("1/3", "0")),
        Entity::from(qseg(("0", "0"), ("0", "1/5"))),
        Entity::from(seg((1.0, 0.0), (0.0, 1.0))),
    ];
    assert_eq!(t.intersection(&Entity::from(k.clone())), expected);
    assert_eq!(k.intersection(&Entity::from(t.clone())), expected);

    assert_eq!(
        t.intersection(&Entity::from(t.clone())),
        ents(vec![
            seg((0.0, 0.0), (0.0, 1.0)),
            seg((0.0, 0.0), (1.0, 0.0)),
            seg((0.0, 1.0), (1.0, 0.0)),
        ])
    );
    assert_eq!(k.intersection(&Entity::from(k.clone())).len(), 6);

    assert_eq!(
        k.intersection(&Entity::from(poly(&[(0, 1), (1, 0), (-1, 1)]))),
        vec![Entity::from(qpt("-5/7", "6/7")), Entity::from(seg((0.0, 1.0), (1.0, 0.0)))]
    );
    assert_eq!(
        t.intersection(&Entity::from(poly(&[(3, 0), (1, 2), (1, 0)]))),
        vec![Entity::from(pt(1, 0))]
    );
    let apart = Polygon::new([(3.0, 0.0), (1.0, 2.0), (1.0004, 0.0)]).unwrap();
    assert!(t.intersection(&apart.into()).is_empty());
}

#[test]
fn polygon_distance_to_points() {
    let sq = unit_square();
    let shifted = Polygon::new([(0.0, 1.25), (1.0, 1.25), (1.0, 2.25), (0.0, 2.25)]).unwrap();
    let tri = poly(&[(1, 2), (2, 2), (2, 1)]);
    assert_eq!(sq.distance_to_point(&ptf(0.5, 0.5)), 0.5);
    assert_eq!(sq.distance_to_point(&pt(1, 1)), 0.0);
    assert_eq!(shifted.distance_to_point(&ptf(0.5, 0.5)), 0.75);
    assert!(close(tri.distance_to_point(&pt(1, 1)), 2f64.sqrt() / 2.0));

    let e: Entity = sq.clone().into();
    assert_eq!(e.distance(&ptf(0.5, 0.5).into()).unwrap(), 0.5);
    assert!(e.distance(&line((0.0, 0.0), (1.0, 1.0)).into()).unwrap_err().is_type_violation());
}

#[test]
fn convex_polygon_distance() {
    let sq = unit_square();
    let shifted = Polygon::new([(0.0, 1.25), (1.0, 1.25), (1.0, 2.25), (0.0, 2.25)]).unwrap();
    let tri = poly(&[(1, 2), (2, 2), (2, 1)]);
    let small = Polygon::new([(q("1"), q("1")), (q("6/5"), q("1")), (q("1"), q("6/5"))]).unwrap();
    let big = poly(&[(0, 0), (4, 4), (0, 4)]);

    assert_eq!(sq.distance(&shifted).unwrap(), 0.25);
    assert!(close(sq.distance(&tri).unwrap(), 2f64.sqrt() / 2.0));
    assert!(close(tri.distance(&small).unwrap(), 2.0 * 2f64.sqrt() / 5.0));
    assert!(close(big.distance(&poly(&[(10, 10), (14, 14), (10, 14)])).unwrap(), 6.0 * 2f64.sqrt()));
    assert!(close(big.distance(&poly(&[(1, 8), (5, 8), (8, 12), (1, 12)])).unwrap(), 4.0));

    let quiet = GeomCfg {
        warn_overlap: false,
        ..GeomCfg::default()
    };
    assert_eq!(sq.distance_with_cfg(&shifted, &quiet).unwrap(), 0.25);
}

#[test]
fn convex_distance_rejects_non_convex() {
    let err = poly1().distance(&unit_square()).unwrap_err();
    assert!(err.is_invariant_violation());
    let e: Entity = unit_square().into();
    assert!(e.distance(&poly1().into()).unwrap_err().is_invariant_violation());
}

#[test]
fn overlap_diagnostic() {
    let sq = unit_square();
    assert!(sq.may_overlap(&sq.translated(&Vector::new(1, 0).unwrap())));
    assert!(!sq.may_overlap(&sq.translated(&Vector::new(5, 5).unwrap())));
}

#[test]
fn canonical_equality_ignores_start_and_direction() {
    let p1 = poly1();
    let p2 = poly(&[(6, 0), (3, -1), (0, 0), (0, 3), (2, 3), (4, 5)]);
    let p3 = poly(&[(0, 0), (3, 0), (5, 2), (4, 4)]);
    assert_eq!(p1, p1.clone());
    assert_eq!(p1, p2);
    assert_ne!(p1, p3);
    assert_ne!(p2, p3);

    let a = poly(&[(0, 0), (2, 0), (2, 1), (0, 1)]);
    let rotated = poly(&[(2, 1), (0, 1), (0, 0), (2, 0)]);
    let reversed = poly(&[(0, 1), (2, 1), (2, 0), (0, 0)]);
    assert_eq!(a, rotated);
    assert_eq!(a, reversed);
    assert_eq!(a.canonical_form(), reversed.canonical_form());

    let set: HashSet<Polygon> = [a.clone(), rotated, reversed].into_iter().collect();
    assert_eq!(set.len(), 1);

    // Same vertex set, different cycle.
    let crossed = poly(&[(0, 0), (2, 1), (2, 0), (0, 1)]);
    assert_ne!(a, crossed);
}

#[test]
fn entity_dispatch_names_operands() {
    let e: Entity = line((0.0, 0.0), (1.0, 0.0)).into();
    let err = e.distance(&seg((0.0, 1.0), (1.0, 1.0)).into()).unwrap_err();
    assert_eq!(err.to_string(), "type violation: distance between Line and Segment is not defined");
    assert_eq!(e.kind_name(), "Line");
    assert!(e.as_linear().is_some());
    assert!(Entity::from(pt(0, 0)).as_point().is_some());
}

// ---------------------------------------------------------------------------
// Triangles

#[test]
fn triangle_construction() {
    assert!(Triangle::new((0, 0), (1, 0), (2, 0)).unwrap_err().is_invariant_violation());
    assert!(Triangle::new((0, 0), (0, 0), (2, 1)).is_err());
    let t = Triangle::new((0, 0), (4, 0), (0, 3)).unwrap();
    assert_eq!(t.vertices().len(), 3);
    assert_eq!(t.polygon().area(), &q("6"));
}

#[test]
fn triangle_derived_points() {
    let t = Triangle::new((0, 0), (4, 0), (0, 3)).unwrap();
    assert!(t.is_right());
    assert!(!Triangle::new((0, 0), (4, 0), (1, 3)).unwrap().is_right());
    assert_eq!(t.circumcenter().unwrap(), qpt("2", "3/2"));
    assert_eq!(t.orthocenter().unwrap(), pt(0, 0));
    assert_eq!(t.centroid().unwrap(), qpt("4/3", "1"));

    let m = t.medians();
    assert_eq!(m[0], Segment::new(pt(0, 0), qpt("2", "3/2")).unwrap());
    assert_eq!(m[1], Segment::new(pt(4, 0), qpt("0", "3/2")).unwrap());
    assert_eq!(m[2], Segment::new(pt(0, 3), pt(2, 0)).unwrap());

    let a = t.altitudes();
    assert_eq!(a[1], Segment::new(pt(4, 0), pt(0, 0)).unwrap());
    assert_eq!(a[2], Segment::new(pt(0, 3), pt(0, 0)).unwrap());
    assert!(a[0].perpendicular_to(&t.sides()[1]));
}
