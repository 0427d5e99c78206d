//! Curated API surface.
//!
//! Prefer these re-exports over reaching into `geom2` submodules; the CLI
//! and the integration tests go through here.

// Values and entities
pub use crate::geom2::{
    parse_scalar, Bounds, Coord, Entity, LinearEntity, LinearRef, Line, Perpendicular, Point,
    Polygon, Ray, Scalar, Segment, Slope, ToPoint, Triangle, Vector,
};
// Numeric policy
pub use crate::geom2::GeomCfg;
// Random convex polygons
pub use crate::geom2::rand::{draw_convex_polygon, RadialCfg, ReplayToken, VertexCount};
// Errors
pub use crate::error::{GeomError, Result};
