//! Exact 2D geometry.
//!
//! Purpose
//! - Points, vectors, lines, rays, segments and simple polygons over exact
//!   rationals, with the intersection/containment algebra between them.
//! - Equality is exact everywhere; `f64` appears only for results that are
//!   irrational by nature (distances, lengths, angles).
//!
//! Layout
//! - `types`, `point`: scalars and the vector space.
//! - `linear`, `intersect`: the `LinearEntity` family and its intersections.
//! - `polygon`, `canonical`, `calipers`: polygon algorithms.
//! - `entity`: closed variant for binary dispatch.
//! - `triangle`, `rand`: thin layers built on the above.
//!
//! Code cross-refs: `Entity`, `LinearEntity`, `Polygon`, `GeomCfg`

mod calipers;
mod canonical;
mod entity;
mod intersect;
mod linear;
mod point;
mod polygon;
pub mod rand;
mod triangle;
mod types;

pub use entity::Entity;
pub use linear::{LinearEntity, LinearRef, Line, Perpendicular, Ray, Segment};
pub use point::{Point, ToPoint, Vector};
pub use polygon::{Bounds, Polygon};
pub use triangle::Triangle;
pub use types::{parse_scalar, Coord, GeomCfg, Scalar, Slope};

#[cfg(test)]
mod tests;
