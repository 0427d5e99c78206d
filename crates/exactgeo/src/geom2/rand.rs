//! Random convex polygons in 2D (radial jitter + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler of convex polygons with exact
//!   vertices, used by property tests and benchmarks.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, snap the float vertices to a dyadic grid (exact as
//!   rationals), then take the exact convex hull.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Code cross-refs: `Polygon`, `calipers::convex_distance`

use nalgebra::Vector2;
use num_bigint::BigInt;
use num_traits::Signed;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::point::Point;
use super::polygon::Polygon;
use super::types::Scalar;

/// Grid resolution for snapped vertices (`1 / GRID` units).
const GRID: i64 = 1024;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
    /// Offset added to every vertex before snapping.
    pub center: Vector2<f64>,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(8),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 1.0,
            random_phase: true,
            center: Vector2::zeros(),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random convex polygon (counter-clockwise, exact vertices).
///
/// Returns `None` only if snapping collapsed the hull below three vertices.
pub fn draw_convex_polygon(cfg: RadialCfg, tok: ReplayToken) -> Option<Polygon> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng).max(3);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-3);
    let delta = 2.0 * std::f64::consts::PI / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * 2.0 * std::f64::consts::PI
    } else {
        0.0
    };
    let pts: Vec<Point> = (0..n)
        .filter_map(|k| {
            let th = phase + (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u).max(1e-3) * r0;
            snap(cfg.center + Vector2::new(th.cos() * r, th.sin() * r))
        })
        .collect();
    let hull = convex_hull(pts);
    if hull.len() < 3 {
        return None;
    }
    // A strict hull has no repeated or collinear vertices.
    Some(Polygon::from_normalized(hull))
}

/// Nearest grid point as an exact rational (`None` for non-finite input).
fn snap(p: Vector2<f64>) -> Option<Point> {
    let step = Scalar::new(BigInt::from(1), BigInt::from(GRID));
    let q = |c: f64| Scalar::from_float((c * GRID as f64).round()).map(|k| k * &step);
    Some(Point::from_scalars(q(p.x)?, q(p.y)?))
}

/// Andrew's monotone chain with exact cross products; strict hull in
/// counter-clockwise order.
fn convex_hull(mut pts: Vec<Point>) -> Vec<Point> {
    pts.sort();
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }
    let turns_left = |a: &Point, b: &Point, c: &Point| {
        (b - a).to_vector().cross(&(c - a).to_vector()).is_positive()
    };
    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && !turns_left(&lower[lower.len() - 2], &lower[lower.len() - 1], p) {
            lower.pop();
        }
        lower.push(p.clone());
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && !turns_left(&upper[upper.len() - 2], &upper[upper.len() - 1], p) {
            upper.pop();
        }
        upper.push(p.clone());
    }
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}
