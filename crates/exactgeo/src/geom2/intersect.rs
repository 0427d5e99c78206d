//! Intersection algebra for linear entities.
//!
//! Classification by the affine rank of the four defining points:
//! - rank 1: both entities share one infinite line; resolve as 1-D interval
//!   algebra along it, ordering points with `span_test`.
//! - rank 2: solve the two implicit line equations by Cramer's rule, then
//!   keep the point only if both (possibly bounded) entities reach it.
//! - anything else cannot happen for distinct defining points; empty.
//!
//! Code cross-refs: `LinearEntity::intersection`, `Polygon::intersection`

use std::cmp::Ordering;

use num_traits::Signed;

use super::entity::Entity;
use super::linear::{LinearEntity, LinearRef, Ray, Segment};
use super::point::Point;

/// Intersection of a linear entity with any entity.
pub(crate) fn intersect_linear(a: LinearRef<'_>, other: &Entity) -> Vec<Entity> {
    match other {
        Entity::Point(p) => {
            if a.contains_point(p) {
                vec![Entity::Point(p.clone())]
            } else {
                Vec::new()
            }
        }
        Entity::Line(l) => intersect_pair(a, l.as_linear()),
        Entity::Ray(r) => intersect_pair(a, r.as_linear()),
        Entity::Segment(s) => intersect_pair(a, s.as_linear()),
        // Polygons own the side-wise union; delegate by symmetry.
        Entity::Polygon(poly) => poly.intersection(&a.to_entity()),
    }
}

/// Intersection of two linear entities.
pub(crate) fn intersect_pair(a: LinearRef<'_>, b: LinearRef<'_>) -> Vec<Entity> {
    match Point::affine_rank([a.p1(), a.p2(), b.p1(), b.p2()]) {
        1 => collinear(a, b),
        2 => crossing(a, b),
        _ => Vec::new(),
    }
}

fn crossing(a: LinearRef<'_>, b: LinearRef<'_>) -> Vec<Entity> {
    let (l1, l2) = (a.supporting_line(), b.supporting_line());
    // Parallel and not collinear (rank 2): disjoint.
    let Some(x) = l1.meet(&l2) else {
        return Vec::new();
    };
    let both_lines = matches!((a, b), (LinearRef::Line(_), LinearRef::Line(_)));
    if both_lines || (a.contains_point(&x) && b.contains_point(&x)) {
        vec![Entity::Point(x)]
    } else {
        Vec::new()
    }
}

fn collinear(a: LinearRef<'_>, b: LinearRef<'_>) -> Vec<Entity> {
    match (a, b) {
        // A line contains everything collinear with it.
        (LinearRef::Line(_), _) => vec![b.to_entity()],
        (_, LinearRef::Line(_)) => vec![a.to_entity()],
        (LinearRef::Ray(r1), LinearRef::Ray(r2)) => collinear_rays(r1, r2),
        (LinearRef::Ray(r), LinearRef::Segment(s)) | (LinearRef::Segment(s), LinearRef::Ray(r)) => {
            collinear_ray_segment(r, s)
        }
        (LinearRef::Segment(s1), LinearRef::Segment(s2)) => collinear_segments(s1, s2),
    }
}

/// Point result when the two ends coincide, segment otherwise.
fn span(from: &Point, to: &Point) -> Entity {
    if from == to {
        Entity::Point(from.clone())
    } else {
        Entity::Segment(Segment::between(from.clone(), to.clone()))
    }
}

fn collinear_rays(r1: &Ray, r2: &Ray) -> Vec<Entity> {
    if r1.direction().dot(r2.direction()).is_positive() {
        // Same heading: the ray whose source is further ahead is the overlap.
        return if r1.span_test(r2.source()) != Ordering::Less {
            vec![Entity::Ray(r2.clone())]
        } else {
            vec![Entity::Ray(r1.clone())]
        };
    }
    match r1.span_test(r2.source()) {
        Ordering::Less => Vec::new(),
        Ordering::Equal => vec![Entity::Point(r2.source().clone())],
        Ordering::Greater => vec![span(r1.source(), r2.source())],
    }
}

fn collinear_ray_segment(ray: &Ray, seg: &Segment) -> Vec<Entity> {
    let ahead1 = ray.span_test(seg.p1()) != Ordering::Less;
    let ahead2 = ray.span_test(seg.p2()) != Ordering::Less;
    match (ahead1, ahead2) {
        (false, false) => Vec::new(),
        (true, true) => vec![Entity::Segment(seg.clone())],
        (true, false) => vec![span(ray.source(), seg.p1())],
        (false, true) => vec![span(ray.source(), seg.p2())],
    }
}

fn collinear_segments(s1: &Segment, s2: &Segment) -> Vec<Entity> {
    if s1.contains_segment(s2) {
        return vec![Entity::Segment(s2.clone())];
    }
    if s2.contains_segment(s1) {
        return vec![Entity::Segment(s1.clone())];
    }
    // Orient both the same way, then put the trailing one first.
    let s2 = if s1.direction().dot(s2.direction()).is_negative() {
        s2.reversed()
    } else {
        s2.clone()
    };
    let (behind, ahead) = if s1.span_test(s2.p1()) == Ordering::Less {
        (&s2, s1)
    } else {
        (s1, &s2)
    };
    if ahead.span_test(behind.p2()) == Ordering::Less {
        return Vec::new();
    }
    vec![span(ahead.p1(), behind.p2())]
}
