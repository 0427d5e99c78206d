//! Linear entities: `Line`, `Ray` and `Segment`.
//!
//! Purpose
//! - Share one algorithm surface (`LinearEntity`) across the three variants;
//!   each variant supplies only its own containment and point distance.
//! - `LinearRef` is the tagged view the intersection algebra dispatches on.
//!
//! Invariants
//! - `p1 != p2` for every entity (checked at construction).
//! - `direction = p2 - p1` is computed once and stored.
//! - `Line` stores the implicit coefficients of `a·x + b·y + c = 0`.
//!
//! Code cross-refs: `intersect::intersect_linear`, `entity::Entity`

use std::cmp::Ordering;
use std::fmt;

use num_traits::{Signed, Zero};

use super::entity::Entity;
use super::intersect::intersect_linear;
use super::point::{Point, ToPoint, Vector};
use super::types::{sqrt, Scalar, Slope};
use crate::error::{GeomError, Result};

/// Two distinct defining points plus the cached direction.
#[derive(Clone, Debug)]
pub(crate) struct Ends {
    p1: Point,
    p2: Point,
    direction: Vector,
}

impl Ends {
    fn new(p1: impl ToPoint, p2: impl ToPoint, what: &str) -> Result<Self> {
        let p1 = p1.to_point()?;
        let p2 = p2.to_point()?;
        if p1 == p2 {
            return Err(GeomError::invariant(format!(
                "{what} requires two distinct points, got {p1} twice"
            )));
        }
        Ok(Self::between(p1, p2))
    }

    /// Caller guarantees `p1 != p2`.
    fn between(p1: Point, p2: Point) -> Self {
        debug_assert_ne!(p1, p2, "linear entity with coincident points");
        let direction = (&p2 - &p1).to_vector();
        Self { p1, p2, direction }
    }
}

/// Result of dropping a perpendicular from a point onto a linear entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Perpendicular {
    /// The point already lies on the supporting line; no segment exists.
    Degenerate(Point),
    /// From the point to its foot on the supporting line.
    Segment(Segment),
}

/// Borrowed, tagged view of any linear entity.
#[derive(Clone, Copy, Debug)]
pub enum LinearRef<'a> {
    Line(&'a Line),
    Ray(&'a Ray),
    Segment(&'a Segment),
}

impl LinearRef<'_> {
    fn ends(&self) -> &Ends {
        match self {
            LinearRef::Line(l) => &l.ends,
            LinearRef::Ray(r) => &r.ends,
            LinearRef::Segment(s) => &s.ends,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LinearRef::Line(_) => "Line",
            LinearRef::Ray(_) => "Ray",
            LinearRef::Segment(_) => "Segment",
        }
    }

    /// Owned copy as an `Entity`.
    pub fn to_entity(&self) -> Entity {
        match *self {
            LinearRef::Line(l) => Entity::Line(l.clone()),
            LinearRef::Ray(r) => Entity::Ray(r.clone()),
            LinearRef::Segment(s) => Entity::Segment(s.clone()),
        }
    }
}

/// Behavior common to lines, rays and segments.
pub trait LinearEntity {
    fn p1(&self) -> &Point;
    fn p2(&self) -> &Point;
    /// `p2 - p1`.
    fn direction(&self) -> &Vector;
    fn as_linear(&self) -> LinearRef<'_>;
    fn contains_point(&self, p: &Point) -> bool;
    fn contains(&self, other: &Entity) -> bool;
    fn distance_to_point(&self, p: &Point) -> f64;

    /// Distance to a point; any other operand is a type violation.
    fn distance(&self, other: &Entity) -> Result<f64> {
        match other {
            Entity::Point(p) => Ok(self.distance_to_point(p)),
            other => Err(GeomError::type_violation(format!(
                "distance between {} and {} is not defined",
                self.as_linear().name(),
                other.kind_name()
            ))),
        }
    }

    /// The infinite line through `p1` and `p2`.
    fn supporting_line(&self) -> Line {
        Line::between(self.p1().clone(), self.p2().clone())
    }

    /// Angle in `[0, π]` between the direction vectors.
    fn angle_between<O: LinearEntity + ?Sized>(&self, other: &O) -> f64 {
        self.direction().angle_between(other.direction())
    }

    fn parallel_to<O: LinearEntity + ?Sized>(&self, other: &O) -> bool {
        self.direction().cross(other.direction()).is_zero()
    }

    fn perpendicular_to<O: LinearEntity + ?Sized>(&self, other: &O) -> bool {
        self.direction().dot(other.direction()).is_zero()
    }

    /// True if `other` lies on the infinite line through `p1` and `p2`.
    fn similar_to<O: LinearEntity + ?Sized>(&self, other: &O) -> bool {
        self.supporting_line().contains_linear(other)
    }

    /// Position of `p` along the direction, relative to `p1`:
    /// `Equal` at `p1`, `Greater` ahead, `Less` behind (or abeam).
    fn span_test(&self, p: &Point) -> Ordering {
        if p == self.p1() {
            return Ordering::Equal;
        }
        if self.direction().dot(&(p - self.p1()).to_vector()).is_positive() {
            Ordering::Greater
        } else {
            Ordering::Less
        }
    }

    /// Line through `p` with the same direction.
    fn parallel_line(&self, p: &Point) -> Line {
        Line::between(p.clone(), p + self.direction())
    }

    /// Line through `p` orthogonal to this entity.
    fn perpendicular_line(&self, p: &Point) -> Line {
        Line::between(p.clone(), p + &self.direction().orthogonal_direction())
    }

    /// Segment from `p` to its foot on the supporting line, or the point
    /// itself when it already lies on that line.
    fn perpendicular_segment(&self, p: &Point) -> Perpendicular {
        if self.contains_point(p) {
            return Perpendicular::Degenerate(p.clone());
        }
        let foot = self.projection_point(p);
        if &foot == p {
            // On the supporting line, outside a bounded entity.
            return Perpendicular::Degenerate(foot);
        }
        Perpendicular::Segment(Segment::between(p.clone(), foot))
    }

    fn slope(&self) -> Slope {
        let d = self.direction();
        if d.y().is_zero() {
            Slope::Finite(Scalar::zero())
        } else if d.x().is_zero() {
            Slope::Infinite
        } else {
            Slope::Finite(d.y() / d.x())
        }
    }

    /// Orthogonal projection of `p` onto the supporting line.
    fn projection_point(&self, p: &Point) -> Point {
        let d = self.direction();
        let rel = (p - self.p1()).to_vector();
        let t = rel.dot(d) / d.norm_squared();
        self.p1() + &(d * &t)
    }

    fn intersection(&self, other: &Entity) -> Vec<Entity> {
        intersect_linear(self.as_linear(), other)
    }
}

impl LinearEntity for LinearRef<'_> {
    fn p1(&self) -> &Point {
        &self.ends().p1
    }
    fn p2(&self) -> &Point {
        &self.ends().p2
    }
    fn direction(&self) -> &Vector {
        &self.ends().direction
    }
    fn as_linear(&self) -> LinearRef<'_> {
        *self
    }
    fn contains_point(&self, p: &Point) -> bool {
        match self {
            LinearRef::Line(l) => l.contains_point(p),
            LinearRef::Ray(r) => r.contains_point(p),
            LinearRef::Segment(s) => s.contains_point(p),
        }
    }
    fn contains(&self, other: &Entity) -> bool {
        match self {
            LinearRef::Line(l) => l.contains(other),
            LinearRef::Ray(r) => r.contains(other),
            LinearRef::Segment(s) => s.contains(other),
        }
    }
    fn distance_to_point(&self, p: &Point) -> f64 {
        match self {
            LinearRef::Line(l) => l.distance_to_point(p),
            LinearRef::Ray(r) => r.distance_to_point(p),
            LinearRef::Segment(s) => s.distance_to_point(p),
        }
    }
}

macro_rules! ends_accessors {
    () => {
        #[inline]
        fn p1(&self) -> &Point {
            &self.ends.p1
        }
        #[inline]
        fn p2(&self) -> &Point {
            &self.ends.p2
        }
        #[inline]
        fn direction(&self) -> &Vector {
            &self.ends.direction
        }
    };
}

// ---------------------------------------------------------------------------
// Line

/// Infinite line through two distinct points.
#[derive(Clone, Debug)]
pub struct Line {
    ends: Ends,
    a: Scalar,
    b: Scalar,
    c: Scalar,
}

impl Line {
    pub fn new(p1: impl ToPoint, p2: impl ToPoint) -> Result<Self> {
        Ok(Self::from_ends(Ends::new(p1, p2, "Line")?))
    }

    pub(crate) fn between(p1: Point, p2: Point) -> Self {
        Self::from_ends(Ends::between(p1, p2))
    }

    fn from_ends(ends: Ends) -> Self {
        let (p1, p2) = (&ends.p1, &ends.p2);
        let a = p1.y() - p2.y();
        let b = p2.x() - p1.x();
        let c = p1.x() * p2.y() - p1.y() * p2.x();
        Self { ends, a, b, c }
    }

    /// `(a, b, c)` of `a·x + b·y + c = 0`.
    #[inline]
    pub fn coefficients(&self) -> (&Scalar, &Scalar, &Scalar) {
        (&self.a, &self.b, &self.c)
    }

    /// Human-readable implicit equation.
    pub fn equation(&self) -> String {
        format!("{}*x + {}*y + {} = 0", self.a, self.b, self.c)
    }

    /// True if every point of `other` lies on this line.
    pub fn contains_linear<O: LinearEntity + ?Sized>(&self, other: &O) -> bool {
        Point::is_collinear([other.p1(), other.p2(), self.p1(), self.p2()])
    }

    /// Meeting point of two non-parallel lines by Cramer's rule.
    pub(crate) fn meet(&self, other: &Line) -> Option<Point> {
        let det = &self.a * &other.b - &other.a * &self.b;
        if det.is_zero() {
            return None;
        }
        let x = (&self.b * &other.c - &self.c * &other.b) / &det;
        let y = (&other.a * &self.c - &other.c * &self.a) / &det;
        Some(Point::from_scalars(x, y))
    }
}

impl LinearEntity for Line {
    ends_accessors!();

    fn as_linear(&self) -> LinearRef<'_> {
        LinearRef::Line(self)
    }

    fn contains_point(&self, p: &Point) -> bool {
        Point::is_collinear([p, self.p1(), self.p2()])
    }

    fn contains(&self, other: &Entity) -> bool {
        match other {
            Entity::Point(p) => self.contains_point(p),
            Entity::Line(l) => self.contains_linear(l),
            Entity::Ray(r) => self.contains_linear(r),
            Entity::Segment(s) => self.contains_linear(s),
            Entity::Polygon(_) => false,
        }
    }

    fn distance_to_point(&self, p: &Point) -> f64 {
        if self.contains_point(p) {
            return 0.0;
        }
        // |d × (p - p1)|² / |d|², exact until the root.
        let d = self.direction();
        let cross = d.cross(&(p - self.p1()).to_vector());
        sqrt(&(&cross * &cross / d.norm_squared()))
    }
}

/// Same infinite line.
impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.contains_linear(other)
    }
}
impl Eq for Line {}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line({}, {})", self.p1(), self.p2())
    }
}

// ---------------------------------------------------------------------------
// Ray

/// Half-line from `p1` (the source) through `p2`.
#[derive(Clone, Debug)]
pub struct Ray {
    ends: Ends,
}

impl Ray {
    pub fn new(source: impl ToPoint, through: impl ToPoint) -> Result<Self> {
        Ok(Self {
            ends: Ends::new(source, through, "Ray")?,
        })
    }

    pub(crate) fn between(p1: Point, p2: Point) -> Self {
        Self {
            ends: Ends::between(p1, p2),
        }
    }

    /// The point from which the ray emanates.
    #[inline]
    pub fn source(&self) -> &Point {
        &self.ends.p1
    }

    /// `+∞` when the ray heads towards positive x, `-∞` towards negative x,
    /// `0` when vertical.
    pub fn xdirection(&self) -> f64 {
        signed_infinity(self.direction().x())
    }

    /// As `xdirection`, for the y axis.
    pub fn ydirection(&self) -> f64 {
        signed_infinity(self.direction().y())
    }
}

fn signed_infinity(component: &Scalar) -> f64 {
    if component.is_positive() {
        f64::INFINITY
    } else if component.is_negative() {
        f64::NEG_INFINITY
    } else {
        0.0
    }
}

impl LinearEntity for Ray {
    ends_accessors!();

    fn as_linear(&self) -> LinearRef<'_> {
        LinearRef::Ray(self)
    }

    fn contains_point(&self, p: &Point) -> bool {
        Point::is_collinear([p, self.p1(), self.p2()])
            && !self.direction().dot(&(p - self.p1()).to_vector()).is_negative()
    }

    fn contains(&self, other: &Entity) -> bool {
        match other {
            Entity::Point(p) => self.contains_point(p),
            Entity::Ray(r) => {
                self.contains_point(r.source())
                    && self.contains_point(r.p2())
                    && self.direction().dot(r.direction()).is_positive()
            }
            Entity::Segment(s) => self.contains_point(s.p1()) && self.contains_point(s.p2()),
            Entity::Line(_) | Entity::Polygon(_) => false,
        }
    }

    fn distance_to_point(&self, p: &Point) -> f64 {
        if self.contains_point(p) {
            return 0.0;
        }
        let foot = self.projection_point(p);
        if self.contains_point(&foot) {
            p.distance(&foot)
        } else {
            p.distance(self.source())
        }
    }
}

/// Same source and same heading.
impl PartialEq for Ray {
    fn eq(&self, other: &Self) -> bool {
        self.source() == other.source() && self.contains_point(other.p2())
    }
}
impl Eq for Ray {}

impl fmt::Display for Ray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ray({}, {})", self.p1(), self.p2())
    }
}

// ---------------------------------------------------------------------------
// Segment

/// Bounded segment between `p1` and `p2`.
#[derive(Clone, Debug)]
pub struct Segment {
    ends: Ends,
}

impl Segment {
    pub fn new(p1: impl ToPoint, p2: impl ToPoint) -> Result<Self> {
        Ok(Self {
            ends: Ends::new(p1, p2, "Segment")?,
        })
    }

    pub(crate) fn between(p1: Point, p2: Point) -> Self {
        Self {
            ends: Ends::between(p1, p2),
        }
    }

    /// Same segment traversed from `p2` to `p1`.
    pub fn reversed(&self) -> Segment {
        Segment::between(self.ends.p2.clone(), self.ends.p1.clone())
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.p1().distance(self.p2())
    }

    #[inline]
    pub fn midpoint(&self) -> Point {
        self.p1().midpoint(self.p2())
    }

    /// Endpoints ordered lexicographically; the orientation-free identity of
    /// the segment, used for deduplication and deterministic ordering.
    pub fn sort_key(&self) -> (&Point, &Point) {
        let (a, b) = (self.p1(), self.p2());
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Line through the midpoint, orthogonal to the segment.
    pub fn perpendicular_bisector(&self) -> Line {
        self.perpendicular_line(&self.midpoint())
    }

    /// Segment from `p` to the midpoint when `p` lies on the bisector (and is
    /// not the midpoint itself).
    pub fn bisector_segment(&self, p: &Point) -> Option<Segment> {
        let mid = self.midpoint();
        if p == &mid || !self.perpendicular_bisector().contains_point(p) {
            return None;
        }
        Some(Segment::between(p.clone(), mid))
    }

    pub fn contains_segment(&self, other: &Segment) -> bool {
        self.contains_point(other.p1()) && self.contains_point(other.p2())
    }
}

impl LinearEntity for Segment {
    ends_accessors!();

    fn as_linear(&self) -> LinearRef<'_> {
        LinearRef::Segment(self)
    }

    fn contains_point(&self, p: &Point) -> bool {
        if !Point::is_collinear([p, self.p1(), self.p2()]) {
            return false;
        }
        // Collinear: inside iff within the extent along the varying axis.
        let (a, b, q) = if self.direction().x().is_zero() {
            (self.p1().y(), self.p2().y(), p.y())
        } else {
            (self.p1().x(), self.p2().x(), p.x())
        };
        !((a - q) * (b - q)).is_positive()
    }

    fn contains(&self, other: &Entity) -> bool {
        match other {
            Entity::Point(p) => self.contains_point(p),
            Entity::Segment(s) => self.contains_segment(s),
            Entity::Line(_) | Entity::Ray(_) | Entity::Polygon(_) => false,
        }
    }

    fn distance_to_point(&self, p: &Point) -> f64 {
        let d = self.direction();
        let from_p1 = (p - self.p1()).to_vector();
        let from_p2 = (p - self.p2()).to_vector();
        let past_p1 = !d.dot(&from_p1).is_negative();
        let before_p2 = !d.dot(&from_p2).is_positive();
        match (past_p1, before_p2) {
            (true, true) => self.supporting_line().distance_to_point(p),
            (true, false) => from_p2.norm(),
            _ => from_p1.norm(),
        }
    }
}

/// Same unordered endpoint pair.
impl PartialEq for Segment {
    fn eq(&self, other: &Self) -> bool {
        self.sort_key() == other.sort_key()
    }
}
impl Eq for Segment {}

impl std::hash::Hash for Segment {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.sort_key().hash(state);
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Segment({}, {})", self.p1(), self.p2())
    }
}
