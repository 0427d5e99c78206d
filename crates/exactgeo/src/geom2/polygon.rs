//! Simple polygons with exact vertices.
//!
//! Purpose
//! - Normalize the vertex cycle once at construction, then answer metric,
//!   convexity, containment, intersection and distance queries on it.
//! - Equality is geometric: same vertex cycle up to rotation and reversal
//!   (see `canonical`).
//!
//! Invariants (after `new`)
//! - At least 3 vertices, no two consecutive equal (cyclically).
//! - No vertex collinear with both of its neighbours.
//! - Orientation is kept as given; `area` is signed accordingly.
//!
//! Derived values are memoized in `OnceLock`s and depend only on the
//! immutable vertex list.
//!
//! Code cross-refs: `canonical::canonical_form`, `calipers::convex_distance`

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use num_traits::{Signed, Zero};
use tracing::debug;

use super::calipers;
use super::canonical::canonical_form;
use super::entity::Entity;
use super::intersect::{intersect_linear, intersect_pair};
use super::linear::{LinearEntity, Segment};
use super::point::{Point, ToPoint, Vector};
use super::types::{GeomCfg, Scalar};
use crate::error::{GeomError, Result};

/// Axis-aligned bounding box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub xmin: Scalar,
    pub ymin: Scalar,
    pub xmax: Scalar,
    pub ymax: Scalar,
}

#[derive(Clone, Debug, Default)]
struct Derived {
    area: OnceLock<Scalar>,
    perimeter: OnceLock<f64>,
    centroid: OnceLock<Option<Point>>,
    sides: OnceLock<Vec<Segment>>,
    bounds: OnceLock<Bounds>,
    convex: OnceLock<bool>,
    canonical: OnceLock<Vec<Point>>,
}

#[derive(Clone)]
pub struct Polygon {
    vertices: Vec<Point>,
    derived: Derived,
}

impl Polygon {
    /// Build from anything convertible to points (`Point`, `(x, y)`, `[x, y]`).
    pub fn new<I>(points: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: ToPoint,
    {
        let points = points
            .into_iter()
            .map(ToPoint::to_point)
            .collect::<Result<Vec<_>>>()?;
        Self::from_points(points)
    }

    pub fn from_points(points: Vec<Point>) -> Result<Self> {
        let given = points.len();
        let vertices = normalize(points)?;
        if vertices.len() != given {
            debug!(given, kept = vertices.len(), "polygon normalized");
        }
        Ok(Self::from_normalized(vertices))
    }

    /// Caller guarantees the vertex list already satisfies the invariants.
    pub(crate) fn from_normalized(vertices: Vec<Point>) -> Self {
        Self {
            vertices,
            derived: Derived::default(),
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Turn predicate: true when `a → b → c` turns clockwise or goes straight.
    pub fn is_right(a: &Point, b: &Point, c: &Point) -> bool {
        let ba = (b - a).to_vector();
        let ca = (c - a).to_vector();
        !ba.cross(&ca).is_positive()
    }

    /// Signed shoelace area; positive for counter-clockwise vertex order.
    pub fn area(&self) -> &Scalar {
        self.derived.area.get_or_init(|| {
            let twice = self.edges().fold(Scalar::zero(), |acc, (prev, curr)| {
                acc + prev.x() * curr.y() - prev.y() * curr.x()
            });
            twice / Scalar::from_integer(2.into())
        })
    }

    pub fn perimeter(&self) -> f64 {
        *self
            .derived
            .perimeter
            .get_or_init(|| self.edges().map(|(a, b)| a.distance(b)).sum())
    }

    /// Area-weighted centroid. Undefined for a zero-area (self-cancelling)
    /// polygon, which is reported as an invariant violation.
    pub fn centroid(&self) -> Result<Point> {
        self.derived
            .centroid
            .get_or_init(|| {
                let area = self.area();
                if area.is_zero() {
                    return None;
                }
                let (mut cx, mut cy) = (Scalar::zero(), Scalar::zero());
                for (prev, curr) in self.edges() {
                    let v = prev.x() * curr.y() - curr.x() * prev.y();
                    cx += &v * (prev.x() + curr.x());
                    cy += &v * (prev.y() + curr.y());
                }
                let six_area = area * Scalar::from_integer(6.into());
                Some(Point::from_scalars(cx / &six_area, cy / &six_area))
            })
            .clone()
            .ok_or_else(|| GeomError::invariant("centroid of a zero-area polygon is undefined"))
    }

    /// Sides `v[i] → v[i+1]`, closing edge last.
    pub fn sides(&self) -> &[Segment] {
        self.derived.sides.get_or_init(|| {
            self.edges()
                .map(|(a, b)| Segment::between(a.clone(), b.clone()))
                .collect()
        })
    }

    pub fn bounds(&self) -> &Bounds {
        self.derived.bounds.get_or_init(|| {
            let first = &self.vertices[0];
            let mut b = Bounds {
                xmin: first.x().clone(),
                ymin: first.y().clone(),
                xmax: first.x().clone(),
                ymax: first.y().clone(),
            };
            for v in &self.vertices[1..] {
                if v.x() < &b.xmin {
                    b.xmin = v.x().clone();
                }
                if v.x() > &b.xmax {
                    b.xmax = v.x().clone();
                }
                if v.y() < &b.ymin {
                    b.ymin = v.y().clone();
                }
                if v.y() > &b.ymax {
                    b.ymax = v.y().clone();
                }
            }
            b
        })
    }

    /// All turns agree and no two non-adjacent sides meet.
    pub fn is_convex(&self) -> bool {
        *self.derived.convex.get_or_init(|| self.compute_convex())
    }

    fn compute_convex(&self) -> bool {
        let v = &self.vertices;
        let n = v.len();
        let cw = Self::is_right(&v[n - 2], &v[n - 1], &v[0]);
        for i in 0..n {
            let (a, b, c) = (&v[(i + n - 2) % n], &v[(i + n - 1) % n], &v[i]);
            if cw != Self::is_right(a, b, c) {
                return false;
            }
        }

        let sides = self.sides();
        for (i, si) in sides.iter().enumerate() {
            // The closing side is adjacent to side 0.
            let first = usize::from(i == sides.len() - 1);
            for sj in sides.iter().take(i.saturating_sub(1)).skip(first) {
                let shares_end = [si.p1(), si.p2()].contains(&sj.p1())
                    || [si.p1(), si.p2()].contains(&sj.p2());
                if !shares_end && !intersect_pair(si.as_linear(), sj.as_linear()).is_empty() {
                    return false;
                }
            }
        }
        true
    }

    /// Strict interior test; vertices and side points are not enclosed.
    pub fn encloses_point(&self, p: &Point) -> bool {
        if self.vertices.contains(p) || self.sides().iter().any(|s| s.contains_point(p)) {
            return false;
        }
        let moved = self.translated(&-p.to_vector());
        let v = moved.vertices();
        let n = v.len();

        if moved.is_convex() {
            // Inside iff the origin is on the same side of every edge.
            let mut orientation = None;
            for i in 0..n {
                let (a, b) = (&v[i], &v[(i + 1) % n]);
                let turn = (-a.y()) * (b.x() - a.x()) - (-a.x()) * (b.y() - a.y());
                let test = turn.is_negative();
                match orientation {
                    None => orientation = Some(test),
                    Some(o) if o != test => return false,
                    Some(_) => {}
                }
            }
            return true;
        }

        // Even-odd rule along the positive x-axis.
        let zero = Scalar::zero();
        let mut hit_odd = false;
        for i in 0..n {
            let (a, b) = (&v[i], &v[(i + 1) % n]);
            let (p1x, p1y, p2x, p2y) = (a.x(), a.y(), b.x(), b.y());
            if p1y.min(p2y) < &zero && p1y.max(p2y) >= &zero && p1x.max(p2x) >= &zero && p1y != p2y
            {
                let xinters = (-p1y) * (p2x - p1x) / (p2y - p1y) + p1x;
                if p1x == p2x || !xinters.is_negative() {
                    hit_odd = !hit_odd;
                }
            }
        }
        hit_odd
    }

    /// `encloses_point` for any point-like input.
    pub fn encloses(&self, p: impl ToPoint) -> Result<bool> {
        Ok(self.encloses_point(&p.to_point()?))
    }

    /// Same polygon shifted by `offset`.
    pub fn translated(&self, offset: &Vector) -> Polygon {
        Polygon::from_normalized(self.vertices.iter().map(|v| v + offset).collect())
    }

    /// Union of side-wise intersections with `other`: isolated points first,
    /// then segments, each group deduplicated and sorted. Points already
    /// covered by a returned segment are dropped.
    pub fn intersection(&self, other: &Entity) -> Vec<Entity> {
        let mut raw = Vec::new();
        for side in self.sides() {
            match other {
                Entity::Polygon(poly) => {
                    for theirs in poly.sides() {
                        raw.extend(intersect_pair(side.as_linear(), theirs.as_linear()));
                    }
                }
                _ => raw.extend(intersect_linear(side.as_linear(), other)),
            }
        }

        let mut points = BTreeSet::new();
        let mut segments = BTreeMap::new();
        for e in raw {
            match e {
                Entity::Point(p) => {
                    points.insert(p);
                }
                Entity::Segment(s) => {
                    let (lo, hi) = s.sort_key();
                    let key = (lo.clone(), hi.clone());
                    segments.entry(key).or_insert(s);
                }
                // Sides are segments; nothing unbounded can come back.
                unexpected => {
                    debug!(kind = unexpected.kind_name(), "ignoring unexpected side intersection")
                }
            }
        }
        points.retain(|p| !segments.values().any(|s: &Segment| s.contains_point(p)));

        points
            .into_iter()
            .map(Entity::Point)
            .chain(segments.into_values().map(Entity::Segment))
            .collect()
    }

    /// Minimum distance from `p` to the boundary (0 on the boundary).
    pub fn distance_to_point(&self, p: &Point) -> f64 {
        let mut best = f64::INFINITY;
        for side in self.sides() {
            let d = side.distance_to_point(p);
            if d == 0.0 {
                return 0.0;
            }
            best = best.min(d);
        }
        best
    }

    /// Distance between two convex polygons (rotating calipers).
    pub fn distance(&self, other: &Polygon) -> Result<f64> {
        self.distance_with_cfg(other, &GeomCfg::default())
    }

    pub fn distance_with_cfg(&self, other: &Polygon, cfg: &GeomCfg) -> Result<f64> {
        if !self.is_convex() || !other.is_convex() {
            return Err(GeomError::invariant(
                "polygon distance requires both polygons to be convex",
            ));
        }
        Ok(calipers::convex_distance(self, other, cfg))
    }

    /// Coarse overlap test: centroid distance within the sum of the
    /// vertex radii.
    pub fn may_overlap(&self, other: &Polygon) -> bool {
        calipers::may_overlap(self, other)
    }

    /// Vertex cycle rebased and oriented into its canonical representative.
    pub fn canonical_form(&self) -> &[Point] {
        self.derived
            .canonical
            .get_or_init(|| canonical_form(&self.vertices))
    }

    /// Consecutive vertex pairs `(v[i], v[i+1])`, closing pair last.
    fn edges(&self) -> impl Iterator<Item = (&Point, &Point)> {
        let n = self.vertices.len();
        (0..n).map(move |i| (&self.vertices[i], &self.vertices[(i + 1) % n]))
    }
}

/// Collapse duplicates, drop collinear vertices to a fixpoint, then require
/// at least 3 survivors.
fn normalize(mut pts: Vec<Point>) -> Result<Vec<Point>> {
    pts.dedup();
    if pts.len() > 1 && pts.first() == pts.last() {
        pts.pop();
    }

    while pts.len() >= 3 {
        let n = pts.len();
        let found = (0..n).find(|&i| {
            Point::is_collinear([&pts[(i + n - 1) % n], &pts[i], &pts[(i + 1) % n]])
        });
        let Some(i) = found else {
            break;
        };
        let spike = pts[(i + n - 1) % n] == pts[(i + 1) % n];
        pts.remove(i);
        if spike {
            // Neighbours of the removed spike coincide; keep one of them.
            pts.remove(if i + 1 == n { 0 } else { i });
        }
    }

    if pts.len() < 3 {
        return Err(GeomError::invariant(format!(
            "polygon needs at least 3 distinct non-collinear vertices, {} remain",
            pts.len()
        )));
    }
    Ok(pts)
}

impl PartialEq for Polygon {
    fn eq(&self, other: &Self) -> bool {
        self.vertices.len() == other.vertices.len() && self.canonical_form() == other.canonical_form()
    }
}

impl Eq for Polygon {}

impl Hash for Polygon {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical_form().hash(state);
    }
}

impl fmt::Debug for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polygon")
            .field("vertices", &self.vertices)
            .finish()
    }
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Polygon(")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, ")")
    }
}
