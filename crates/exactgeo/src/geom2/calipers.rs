//! Minimum distance between convex polygons by rotating calipers.
//!
//! Model
//! - Two parallel supporting lines start horizontal: one through the
//!   top-then-rightmost vertex of `e1`, one through the bottom-then-leftmost
//!   vertex of `e2`.
//! - Each step rotates the lines onto whichever next edge makes the smaller
//!   angle (both on a tie), and measures the advancing edge against the
//!   opposite vertex. The walk ends when both pointers are back at their
//!   starting vertices.
//! - Angles are irrational, so ties are decided with `GeomCfg::eps_angle`;
//!   all distances are exact until the final square root.
//!
//! References
//! - G. Toussaint, "Solving geometric problems with the rotating calipers" (1983).
//! - Code cross-refs: `Polygon::distance_with_cfg`

use std::f64::consts::PI;

use nalgebra::Vector2;
use num_traits::{One, Zero};
use tracing::{debug, trace, warn};

use super::linear::LinearEntity;
use super::point::{Point, Vector};
use super::polygon::Polygon;
use super::types::{GeomCfg, Scalar};

/// Cursor walking a vertex cycle in a fixed direction.
#[derive(Clone, Copy, Debug)]
struct Walker {
    cur: usize,
    forward: bool,
    n: usize,
}

impl Walker {
    #[inline]
    fn nxt(&self) -> usize {
        if self.forward {
            (self.cur + 1) % self.n
        } else {
            (self.cur + self.n - 1) % self.n
        }
    }

    /// Index into `Polygon::sides` of the edge from `cur` to `nxt`.
    #[inline]
    fn side(&self) -> usize {
        if self.forward {
            self.cur
        } else {
            self.nxt()
        }
    }

    #[inline]
    fn advance(&mut self) {
        self.cur = self.nxt();
    }
}

/// Which neighbour of the start vertex opens the walk.
#[derive(Clone, Copy, Debug)]
enum Open {
    SmallerAngle,
    LargerAngle,
}

fn first_step(v: &[Point], start: usize, support: &Vector, open: Open) -> bool {
    let n = v.len();
    let prev = &v[(start + n - 1) % n];
    let next = &v[(start + 1) % n];
    let here = &v[start];
    let a_prev = support.angle_between(&(prev - here).to_vector());
    let a_next = support.angle_between(&(next - here).to_vector());
    if a_prev == a_next {
        // Collinear neighbours: step towards the nearer one.
        return here.distance_squared(next) < here.distance_squared(prev);
    }
    match open {
        Open::SmallerAngle => a_next < a_prev,
        Open::LargerAngle => a_next > a_prev,
    }
}

/// Distance between two convex polygons. Convexity is the caller's
/// precondition.
pub(crate) fn convex_distance(e1: &Polygon, e2: &Polygon, cfg: &GeomCfg) -> f64 {
    if cfg.warn_overlap && may_overlap(e1, e2) {
        warn!("polygons may intersect; calipers distance is not meaningful");
    }

    let (v1, v2) = (e1.vertices(), e2.vertices());
    let (s1, s2) = (e1.sides(), e2.sides());

    let start1 = (0..v1.len())
        .max_by(|&i, &j| (v1[i].y(), v1[i].x()).cmp(&(v1[j].y(), v1[j].x())))
        .unwrap_or(0);
    let start2 = (0..v2.len())
        .min_by(|&i, &j| (v2[i].y(), v2[i].x()).cmp(&(v2[j].y(), v2[j].x())))
        .unwrap_or(0);

    let mut min_dist = v1[start1].distance(&v2[start2]);
    let mut support = Vector::from_scalars(Scalar::one(), Scalar::zero());

    let mut w1 = Walker {
        cur: start1,
        forward: first_step(v1, start1, &support, Open::SmallerAngle),
        n: v1.len(),
    };
    let mut w2 = Walker {
        cur: start2,
        forward: first_step(v2, start2, &support, Open::LargerAngle),
        n: v2.len(),
    };

    let bound = 2 * (v1.len() + v2.len());
    for step in 0..bound {
        let (cur1, nxt1) = (&v1[w1.cur], &v1[w1.nxt()]);
        let (cur2, nxt2) = (&v2[w2.cur], &v2[w2.nxt()]);
        let edge1 = (nxt1 - cur1).to_vector();
        let edge2 = (nxt2 - cur2).to_vector();
        let a1 = support.angle_between(&edge1);
        let a2 = PI - support.angle_between(&edge2);

        let d = if (a1 - a2).abs() <= cfg.eps_angle {
            // Parallel edges: every endpoint against the opposite edge.
            let (e1s, e2s) = (&s1[w1.side()], &s2[w2.side()]);
            let d = e1s
                .distance_to_point(cur2)
                .min(e1s.distance_to_point(nxt2))
                .min(e2s.distance_to_point(cur1))
                .min(e2s.distance_to_point(nxt1));
            support = edge1;
            w1.advance();
            w2.advance();
            d
        } else if a1 < a2 {
            let d = s1[w1.side()].distance_to_point(cur2);
            support = edge1;
            w1.advance();
            d
        } else {
            let d = s2[w2.side()].distance_to_point(cur1);
            support = -edge2;
            w2.advance();
            d
        };
        trace!(step, a1, a2, d, "calipers step");
        min_dist = min_dist.min(d);

        if w1.cur == start1 && w2.cur == start2 {
            debug!(steps = step + 1, min_dist, "calipers walk closed");
            return min_dist;
        }
    }

    warn!(bound, "calipers walk did not close; returning best distance seen");
    min_dist
}

/// True if the centroid distance is within the sum of the two vertex radii
/// around the centroids. Zero-area inputs are reported as overlapping.
pub(crate) fn may_overlap(e1: &Polygon, e2: &Polygon) -> bool {
    let (Ok(c1), Ok(c2)) = (e1.centroid(), e2.centroid()) else {
        return true;
    };
    let (c1, c2) = (c1.to_vec2(), c2.to_vec2());
    let radius = |poly: &Polygon, c: Vector2<f64>| {
        poly.vertices()
            .iter()
            .map(|v| (v.to_vec2() - c).norm())
            .fold(0.0, f64::max)
    };
    (c1 - c2).norm() <= radius(e1, c1) + radius(e2, c2)
}
