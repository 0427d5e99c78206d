//! Scalars, numeric conversions and tolerances.
//!
//! - `Scalar`: exact rational coordinate type (arbitrary precision).
//! - `Coord`: one-shot conversion of caller numerics into `Scalar`.
//! - `Slope`: finite slope or the vertical sentinel.
//! - `GeomCfg`: tolerances for comparisons of irrational (`f64`) results.
//!
//! Code cross-refs: `point::{Point, ToPoint}`, `calipers::convex_distance`

use std::str::FromStr;

use num_bigint::BigInt;
use num_rational::{BigRational, Ratio};
use num_traits::{ToPrimitive, Zero};

use crate::error::{GeomError, Result};

/// Exact coordinate type. Every entity stores its coordinates as `Scalar`.
pub type Scalar = BigRational;

/// Conversion of a caller-supplied number into an exact `Scalar`.
///
/// Integers convert exactly. Floats convert through their shortest decimal
/// representation, so `0.1` becomes `1/10` rather than the binary expansion
/// of the nearest double. Non-finite floats are rejected.
pub trait Coord {
    fn into_scalar(self) -> Result<Scalar>;
}

macro_rules! coord_from_integer {
    ($($t:ty),*) => {
        $(
            impl Coord for $t {
                #[inline]
                fn into_scalar(self) -> Result<Scalar> {
                    Ok(Scalar::from_integer(BigInt::from(self)))
                }
            }
        )*
    };
}

coord_from_integer!(i32, i64, u32, u64, isize, usize);

impl Coord for f64 {
    fn into_scalar(self) -> Result<Scalar> {
        if !self.is_finite() {
            return Err(GeomError::type_violation(format!(
                "coordinate {self} is not a finite number"
            )));
        }
        // Display never uses exponent notation for f64.
        parse_scalar(&self.to_string())
    }
}

impl Coord for f32 {
    fn into_scalar(self) -> Result<Scalar> {
        if !self.is_finite() {
            return Err(GeomError::type_violation(format!(
                "coordinate {self} is not a finite number"
            )));
        }
        parse_scalar(&self.to_string())
    }
}

impl Coord for BigInt {
    #[inline]
    fn into_scalar(self) -> Result<Scalar> {
        Ok(Scalar::from_integer(self))
    }
}

impl Coord for Scalar {
    #[inline]
    fn into_scalar(self) -> Result<Scalar> {
        Ok(self)
    }
}

impl Coord for &Scalar {
    #[inline]
    fn into_scalar(self) -> Result<Scalar> {
        Ok(self.clone())
    }
}

impl Coord for Ratio<i64> {
    #[inline]
    fn into_scalar(self) -> Result<Scalar> {
        Ok(Scalar::new(
            BigInt::from(*self.numer()),
            BigInt::from(*self.denom()),
        ))
    }
}

/// Parse an integer (`-3`), a fraction (`1/5`) or a plain decimal (`0.25`,
/// `-.5`) into an exact `Scalar`.
pub fn parse_scalar(s: &str) -> Result<Scalar> {
    let t = s.trim();
    let err = || GeomError::type_violation(format!("`{s}` is not a number"));

    if let Some((n, d)) = t.split_once('/') {
        let n = BigInt::from_str(n.trim()).map_err(|_| err())?;
        let d = BigInt::from_str(d.trim()).map_err(|_| err())?;
        if d.is_zero() {
            return Err(err());
        }
        return Ok(Scalar::new(n, d));
    }

    let (negative, body) = match t.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, t.strip_prefix('+').unwrap_or(t)),
    };
    let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
    let all_digits = |p: &str| p.chars().all(|c| c.is_ascii_digit());
    if (int_part.is_empty() && frac_part.is_empty()) || !all_digits(int_part) || !all_digits(frac_part)
    {
        return Err(err());
    }
    let numer = BigInt::from_str(&format!("{int_part}{frac_part}")).map_err(|_| err())?;
    let denom = num_traits::pow(BigInt::from(10u32), frac_part.len());
    let value = Scalar::new(numer, denom);
    Ok(if negative { -value } else { value })
}

/// Nearest `f64` of an exact value (`NaN` only if the value is out of range).
#[inline]
pub(crate) fn to_f64(s: &Scalar) -> f64 {
    s.to_f64().unwrap_or(f64::NAN)
}

/// Square root of an exact, non-negative value. The one place exactness ends.
#[inline]
pub(crate) fn sqrt(s: &Scalar) -> f64 {
    to_f64(s).sqrt()
}

/// Slope of a linear entity: `0` when horizontal, `Infinite` when vertical.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slope {
    Finite(Scalar),
    Infinite,
}

impl Slope {
    #[inline]
    pub fn is_infinite(&self) -> bool {
        matches!(self, Slope::Infinite)
    }

    /// Float view; the vertical sentinel maps to `f64::INFINITY`.
    pub fn to_f64(&self) -> f64 {
        match self {
            Slope::Finite(m) => to_f64(m),
            Slope::Infinite => f64::INFINITY,
        }
    }
}

/// Geometry configuration (tolerances for float-valued comparisons).
///
/// Exact rational comparisons never consult these; only results that are
/// irrational by nature (angles, square roots) do.
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    /// Supporting-line angles closer than this count as a tie in the
    /// rotating-calipers walk.
    pub eps_angle: f64,
    /// Emit the overlap diagnostic before a convex distance walk.
    pub warn_overlap: bool,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_angle: 1e-12,
            warn_overlap: true,
        }
    }
}
