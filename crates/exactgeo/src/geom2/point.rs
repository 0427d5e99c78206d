//! Points and vectors in the plane, with exact arithmetic.
//!
//! `Point` is a position (and doubles as a displacement); `Vector` carries
//! "direction, not location" semantics (cross product, orthogonal direction).
//! Both compare exactly and order lexicographically by `(x, y)`.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use nalgebra::Vector2;
use num_traits::{Signed, Zero};

use super::types::{sqrt, to_f64, Coord, Scalar};
use crate::error::{GeomError, Result};

/// A point in the plane. Immutable once constructed.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    x: Scalar,
    y: Scalar,
}

/// A direction in the plane; same representation as `Point`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vector {
    x: Scalar,
    y: Scalar,
}

/// Explicit conversion applied at every public entry point that expects a
/// point: a `Point`, a numeric pair `(x, y)` or a numeric array `[x, y]`.
pub trait ToPoint {
    fn to_point(self) -> Result<Point>;
}

impl ToPoint for Point {
    #[inline]
    fn to_point(self) -> Result<Point> {
        Ok(self)
    }
}

impl ToPoint for &Point {
    #[inline]
    fn to_point(self) -> Result<Point> {
        Ok(self.clone())
    }
}

impl<X: Coord, Y: Coord> ToPoint for (X, Y) {
    #[inline]
    fn to_point(self) -> Result<Point> {
        Point::new(self.0, self.1)
    }
}

impl<T: Coord> ToPoint for [T; 2] {
    #[inline]
    fn to_point(self) -> Result<Point> {
        let [x, y] = self;
        Point::new(x, y)
    }
}

impl Point {
    /// Convert both coordinates to exact rationals.
    pub fn new(x: impl Coord, y: impl Coord) -> Result<Self> {
        Ok(Self {
            x: x.into_scalar()?,
            y: y.into_scalar()?,
        })
    }

    #[inline]
    pub fn from_scalars(x: Scalar, y: Scalar) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn origin() -> Self {
        Self::from_scalars(Scalar::zero(), Scalar::zero())
    }

    /// Nearest exact point of a float vector.
    pub fn from_vec2(v: Vector2<f64>) -> Result<Self> {
        Self::new(v.x, v.y)
    }

    #[inline]
    pub fn x(&self) -> &Scalar {
        &self.x
    }

    #[inline]
    pub fn y(&self) -> &Scalar {
        &self.y
    }

    /// Float view for approximate work (diagnostics, sampling, plotting).
    #[inline]
    pub fn to_vec2(&self) -> Vector2<f64> {
        Vector2::new(to_f64(&self.x), to_f64(&self.y))
    }

    #[inline]
    pub fn to_vector(&self) -> Vector {
        Vector::from_scalars(self.x.clone(), self.y.clone())
    }

    /// True if every coordinate is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    #[inline]
    pub fn dot(&self, other: &Point) -> Scalar {
        &self.x * &other.x + &self.y * &other.y
    }

    /// Exact squared Euclidean distance.
    pub fn distance_squared(&self, other: &Point) -> Scalar {
        let dx = &other.x - &self.x;
        let dy = &other.y - &self.y;
        &dx * &dx + &dy * &dy
    }

    /// Euclidean distance; irrational in general, hence `f64`.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        sqrt(&self.distance_squared(other))
    }

    /// Distance to the origin.
    #[inline]
    pub fn abs(&self) -> f64 {
        sqrt(&self.dot(self))
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        let two = Scalar::from_integer(2.into());
        Point::from_scalars((&self.x + &other.x) / &two, (&self.y + &other.y) / &two)
    }

    /// Scalar multiple.
    pub fn scale(&self, k: &Scalar) -> Point {
        Point::from_scalars(&self.x * k, &self.y * k)
    }

    /// Component of `a` along `b`: `b * (a·b)/(b·b)`.
    ///
    /// Fails with an invariant violation when `b` is the zero vector.
    pub fn project(a: &Point, b: &Point) -> Result<Point> {
        if b.is_zero() {
            return Err(GeomError::invariant("cannot project onto the zero vector"));
        }
        Ok(b.scale(&(a.dot(b) / b.dot(b))))
    }

    /// Dimension of the smallest affine subspace containing `points`:
    /// `-1` for no points, `0` if all coincide, `1` if collinear, `2` otherwise.
    ///
    /// Rank of the matrix whose rows are `p_i - p_0`, computed exactly.
    pub fn affine_rank<'a>(points: impl IntoIterator<Item = &'a Point>) -> i32 {
        let mut it = points.into_iter();
        let Some(origin) = it.next() else {
            return -1;
        };
        let rows: Vec<Vector> = it.map(|p| (p - origin).to_vector()).collect();
        let Some(pivot) = rows.iter().find(|r| !r.is_zero()) else {
            return 0;
        };
        if rows.iter().any(|r| !pivot.cross(r).is_zero()) {
            2
        } else {
            1
        }
    }

    /// True if a single line contains all (distinct) `points`, or if none are given.
    pub fn is_collinear<'a>(points: impl IntoIterator<Item = &'a Point>) -> bool {
        let mut unique: Vec<&Point> = Vec::new();
        for p in points {
            if !unique.contains(&p) {
                unique.push(p);
            }
        }
        Point::affine_rank(unique) <= 1
    }
}

impl Vector {
    pub fn new(x: impl Coord, y: impl Coord) -> Result<Self> {
        Ok(Self {
            x: x.into_scalar()?,
            y: y.into_scalar()?,
        })
    }

    #[inline]
    pub fn from_scalars(x: Scalar, y: Scalar) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> &Scalar {
        &self.x
    }

    #[inline]
    pub fn y(&self) -> &Scalar {
        &self.y
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    #[inline]
    pub fn dot(&self, other: &Vector) -> Scalar {
        &self.x * &other.x + &self.y * &other.y
    }

    /// z-component of the 3D cross product: positive when `other` lies
    /// counter-clockwise of `self`, zero when collinear.
    #[inline]
    pub fn cross(&self, other: &Vector) -> Scalar {
        &self.x * &other.y - &self.y * &other.x
    }

    #[inline]
    pub fn norm_squared(&self) -> Scalar {
        self.dot(self)
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        sqrt(&self.norm_squared())
    }

    /// Non-zero vector orthogonal to `self`.
    pub fn orthogonal_direction(&self) -> Vector {
        if self.x.is_zero() {
            return Vector::from_scalars(Scalar::from_integer(1.into()), Scalar::zero());
        }
        if self.y.is_zero() {
            return Vector::from_scalars(Scalar::zero(), Scalar::from_integer(1.into()));
        }
        Vector::from_scalars(-&self.y, self.x.clone())
    }

    /// Non-reflex angle in `[0, π]` between `self` and `other`.
    ///
    /// `cos²` is formed exactly and rooted once, so perpendicular and
    /// parallel directions land on `π/2`, `0` and `π` without cancellation.
    pub fn angle_between(&self, other: &Vector) -> f64 {
        let dot = self.dot(other);
        let denom = self.norm_squared() * other.norm_squared();
        if denom.is_zero() {
            return f64::NAN;
        }
        let cos_abs = to_f64(&(&dot * &dot / denom)).sqrt();
        let cos = if dot.is_negative() { -cos_abs } else { cos_abs };
        cos.clamp(-1.0, 1.0).acos()
    }

    #[inline]
    pub fn to_point(&self) -> Point {
        Point::from_scalars(self.x.clone(), self.y.clone())
    }

    #[inline]
    pub fn to_vec2(&self) -> Vector2<f64> {
        Vector2::new(to_f64(&self.x), to_f64(&self.y))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

macro_rules! coordinate_ops {
    ($ty:ident) => {
        impl Add<&$ty> for &$ty {
            type Output = $ty;
            #[inline]
            fn add(self, rhs: &$ty) -> $ty {
                $ty::from_scalars(&self.x + &rhs.x, &self.y + &rhs.y)
            }
        }
        impl Sub<&$ty> for &$ty {
            type Output = $ty;
            #[inline]
            fn sub(self, rhs: &$ty) -> $ty {
                $ty::from_scalars(&self.x - &rhs.x, &self.y - &rhs.y)
            }
        }
        impl Add for $ty {
            type Output = $ty;
            #[inline]
            fn add(self, rhs: $ty) -> $ty {
                &self + &rhs
            }
        }
        impl Sub for $ty {
            type Output = $ty;
            #[inline]
            fn sub(self, rhs: $ty) -> $ty {
                &self - &rhs
            }
        }
        impl Add<&$ty> for $ty {
            type Output = $ty;
            #[inline]
            fn add(self, rhs: &$ty) -> $ty {
                &self + rhs
            }
        }
        impl Sub<&$ty> for $ty {
            type Output = $ty;
            #[inline]
            fn sub(self, rhs: &$ty) -> $ty {
                &self - rhs
            }
        }
        impl Neg for &$ty {
            type Output = $ty;
            #[inline]
            fn neg(self) -> $ty {
                $ty::from_scalars(-&self.x, -&self.y)
            }
        }
        impl Neg for $ty {
            type Output = $ty;
            #[inline]
            fn neg(self) -> $ty {
                -&self
            }
        }
        impl Mul<&Scalar> for &$ty {
            type Output = $ty;
            #[inline]
            fn mul(self, k: &Scalar) -> $ty {
                $ty::from_scalars(&self.x * k, &self.y * k)
            }
        }
        impl Mul<Scalar> for $ty {
            type Output = $ty;
            #[inline]
            fn mul(self, k: Scalar) -> $ty {
                &self * &k
            }
        }
        /// Panics if `k` is zero, like integer division.
        impl Div<&Scalar> for &$ty {
            type Output = $ty;
            #[inline]
            fn div(self, k: &Scalar) -> $ty {
                $ty::from_scalars(&self.x / k, &self.y / k)
            }
        }
        impl Div<Scalar> for $ty {
            type Output = $ty;
            #[inline]
            fn div(self, k: Scalar) -> $ty {
                &self / &k
            }
        }
    };
}

coordinate_ops!(Point);
coordinate_ops!(Vector);

/// Point + displacement.
impl Add<&Vector> for &Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: &Vector) -> Point {
        Point::from_scalars(&self.x + &rhs.x, &self.y + &rhs.y)
    }
}

impl From<Vector> for Point {
    #[inline]
    fn from(v: Vector) -> Point {
        Point::from_scalars(v.x, v.y)
    }
}

impl From<Point> for Vector {
    #[inline]
    fn from(p: Point) -> Vector {
        Vector::from_scalars(p.x, p.y)
    }
}
