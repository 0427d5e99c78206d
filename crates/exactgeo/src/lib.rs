//! Exact-rational 2D computational geometry.
//!
//! Value types (points, vectors, lines, rays, segments, polygons) and the
//! algorithms relating them: containment, intersection, distance, convexity
//! and canonical polygon equality. Coordinates are arbitrary-precision
//! rationals, so predicates never drift.
//!
//! API Policy
//! - `api` is the curated surface for callers (the CLI uses it).
//! - `prelude` is the quick-import set for tests and experiments.

pub mod api;
pub mod error;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{GeomError, Result};
pub use geom2::GeomCfg;

/// Common geometry exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{GeomError, Result};
    pub use crate::geom2::rand::{draw_convex_polygon, RadialCfg, ReplayToken, VertexCount};
    pub use crate::geom2::{
        Entity, GeomCfg, LinearEntity, Line, Point, Polygon, Ray, Scalar, Segment, ToPoint,
        Triangle, Vector,
    };
    pub use nalgebra::Vector2 as Vec2;
}
