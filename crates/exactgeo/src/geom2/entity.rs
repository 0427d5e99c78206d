//! Closed set of geometric entities with exhaustive binary dispatch.
//!
//! `Entity` is what intersections return and what the binary operations
//! (`intersection`, `distance`) accept. Every operand pair is
//! matched explicitly; pairs an operation does not define surface as a
//! `TypeViolation` rather than a runtime class check.

use std::fmt;

use super::intersect::intersect_linear;
use super::linear::{LinearEntity, LinearRef, Line, Ray, Segment};
use super::point::Point;
use super::polygon::Polygon;
use crate::error::{GeomError, Result};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entity {
    Point(Point),
    Line(Line),
    Ray(Ray),
    Segment(Segment),
    Polygon(Polygon),
}

impl Entity {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Entity::Point(_) => "Point",
            Entity::Line(_) => "Line",
            Entity::Ray(_) => "Ray",
            Entity::Segment(_) => "Segment",
            Entity::Polygon(_) => "Polygon",
        }
    }

    /// Linear view, if this is a line, ray or segment.
    pub fn as_linear(&self) -> Option<LinearRef<'_>> {
        match self {
            Entity::Line(l) => Some(l.as_linear()),
            Entity::Ray(r) => Some(r.as_linear()),
            Entity::Segment(s) => Some(s.as_linear()),
            Entity::Point(_) | Entity::Polygon(_) => None,
        }
    }

    pub fn as_point(&self) -> Option<&Point> {
        match self {
            Entity::Point(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_segment(&self) -> Option<&Segment> {
        match self {
            Entity::Segment(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_polygon(&self) -> Option<&Polygon> {
        match self {
            Entity::Polygon(p) => Some(p),
            _ => None,
        }
    }

    /// Geometric intersection as a list of points, linear pieces or polygons.
    pub fn intersection(&self, other: &Entity) -> Vec<Entity> {
        match (self, other) {
            (Entity::Point(p), Entity::Point(q)) => {
                if p == q {
                    vec![Entity::Point(p.clone())]
                } else {
                    Vec::new()
                }
            }
            (Entity::Point(_), _) => other.intersection(self),
            (Entity::Polygon(poly), _) => poly.intersection(other),
            (Entity::Line(l), _) => intersect_linear(l.as_linear(), other),
            (Entity::Ray(r), _) => intersect_linear(r.as_linear(), other),
            (Entity::Segment(s), _) => intersect_linear(s.as_linear(), other),
        }
    }

    /// Minimum Euclidean distance. Defined for point/anything and for
    /// convex polygon pairs; other pairs are a type violation.
    pub fn distance(&self, other: &Entity) -> Result<f64> {
        match (self, other) {
            (Entity::Point(p), Entity::Point(q)) => Ok(p.distance(q)),
            (Entity::Point(p), Entity::Polygon(poly)) | (Entity::Polygon(poly), Entity::Point(p)) => {
                Ok(poly.distance_to_point(p))
            }
            (Entity::Point(p), _) => match other.as_linear() {
                Some(lin) => Ok(lin.distance_to_point(p)),
                None => Err(undefined("distance", self, other)),
            },
            (Entity::Polygon(a), Entity::Polygon(b)) => a.distance(b),
            (Entity::Polygon(_), _) => Err(undefined("distance", self, other)),
            (Entity::Line(l), _) => l.distance(other),
            (Entity::Ray(r), _) => r.distance(other),
            (Entity::Segment(s), _) => s.distance(other),
        }
    }
}

fn undefined(op: &str, a: &Entity, b: &Entity) -> GeomError {
    GeomError::type_violation(format!(
        "{op} between {} and {} is not defined",
        a.kind_name(),
        b.kind_name()
    ))
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Point(p) => write!(f, "Point{p}"),
            Entity::Line(l) => fmt::Display::fmt(l, f),
            Entity::Ray(r) => fmt::Display::fmt(r, f),
            Entity::Segment(s) => fmt::Display::fmt(s, f),
            Entity::Polygon(p) => fmt::Display::fmt(p, f),
        }
    }
}

macro_rules! entity_from {
    ($($v:ident),*) => {
        $(
            impl From<$v> for Entity {
                #[inline]
                fn from(x: $v) -> Entity {
                    Entity::$v(x)
                }
            }
        )*
    };
}

entity_from!(Point, Line, Ray, Segment, Polygon);
