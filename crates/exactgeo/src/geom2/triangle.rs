//! Triangles as three-vertex polygons, with a few classic derived points.
//!
//! Everything here is a composition of polygon sides, perpendiculars and
//! line meets; no algorithm of its own.

use super::linear::{LinearEntity, Line, Segment};
use super::point::{Point, ToPoint};
use super::polygon::Polygon;
use crate::error::{GeomError, Result};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Triangle {
    polygon: Polygon,
}

impl Triangle {
    /// Fails unless normalization leaves exactly three vertices.
    pub fn new(a: impl ToPoint, b: impl ToPoint, c: impl ToPoint) -> Result<Self> {
        let polygon = Polygon::from_points(vec![a.to_point()?, b.to_point()?, c.to_point()?])?;
        if polygon.vertices().len() != 3 {
            return Err(GeomError::invariant("triangle requires three vertices"));
        }
        Ok(Self { polygon })
    }

    #[inline]
    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        self.polygon.vertices()
    }

    #[inline]
    pub fn sides(&self) -> &[Segment] {
        self.polygon.sides()
    }

    /// Any two sides perpendicular.
    pub fn is_right(&self) -> bool {
        let s = self.sides();
        s[0].perpendicular_to(&s[1]) || s[1].perpendicular_to(&s[2]) || s[0].perpendicular_to(&s[2])
    }

    /// Segments from each vertex to the midpoint of the opposite side,
    /// in vertex order.
    pub fn medians(&self) -> [Segment; 3] {
        let (v, s) = (self.vertices(), self.sides());
        [
            Segment::between(v[0].clone(), s[1].midpoint()),
            Segment::between(v[1].clone(), s[2].midpoint()),
            Segment::between(v[2].clone(), s[0].midpoint()),
        ]
    }

    /// Segments from each vertex to its foot on the opposite side's line,
    /// in vertex order.
    pub fn altitudes(&self) -> [Segment; 3] {
        let (v, s) = (self.vertices(), self.sides());
        // Vertices are never collinear with the opposite side, so each foot
        // differs from its vertex.
        let foot = |i: usize, side: &Segment| Segment::between(v[i].clone(), side.projection_point(&v[i]));
        [foot(0, &s[1]), foot(1, &s[2]), foot(2, &s[0])]
    }

    /// Meeting point of the altitudes.
    pub fn orthocenter(&self) -> Result<Point> {
        let [a0, a1, _] = self.altitudes();
        meet(&a0.supporting_line(), &a1.supporting_line())
    }

    /// Meeting point of the perpendicular side bisectors.
    pub fn circumcenter(&self) -> Result<Point> {
        let s = self.sides();
        meet(&s[0].perpendicular_bisector(), &s[1].perpendicular_bisector())
    }

    pub fn centroid(&self) -> Result<Point> {
        self.polygon.centroid()
    }
}

fn meet(l1: &Line, l2: &Line) -> Result<Point> {
    l1.meet(l2)
        .ok_or_else(|| GeomError::invariant("triangle construction lines are parallel"))
}
