//! Base-unit magnitudes whose quantity is known only by its SI dimensions.

use crate::dimension::SiDimensions;
use crate::error::{ScalarError, ScalarResult};
use crate::parse::split_number;
use crate::registry::Locale;
use crate::scalar::Scalar;
use crate::unit::Quantity;
use core::cmp::Ordering;
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::ops::*;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A base-unit magnitude tagged with its SI dimensions instead of a named quantity.
///
/// Produced by [`Scalar::reciprocal`] and [`Scalar::to_si_scalar`]; products and quotients combine the dimensions
/// structurally. Use [`SiScalar::to_quantity`] to get back to a named quantity.
///
/// ```rust
/// use scalars_core::{length, Length, Scalar};
///
/// let side = Scalar::new(3.0, length::METER).to_si_scalar();
/// let volume = side * side * side;
/// assert_eq!(volume.to_string(), "27 m3");
///
/// let edge = (volume / side / side).to_quantity::<Length>().unwrap();
/// assert_eq!(edge.si(), 3.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SiScalar {
    si: f64,
    dimensions: SiDimensions,
}

impl SiScalar {
    /// Creates an SI scalar.
    #[inline]
    pub const fn new(si: f64, dimensions: SiDimensions) -> Self {
        Self { si, dimensions }
    }

    /// A dimensionless SI scalar.
    #[inline]
    pub const fn dimensionless(si: f64) -> Self {
        Self::new(si, SiDimensions::DIMENSIONLESS)
    }

    /// Magnitude in base units.
    #[inline]
    pub const fn si(&self) -> f64 {
        self.si
    }

    /// The dimension vector.
    #[inline]
    pub const fn dimensions(&self) -> SiDimensions {
        self.dimensions
    }

    /// `1 / self`.
    pub fn reciprocal(self) -> Self {
        Self::new(1.0 / self.si, self.dimensions.invert())
    }

    /// Narrows to a named quantity, displayed in its base unit.
    ///
    /// # Errors
    ///
    /// [`ScalarError::DimensionMismatch`] when the dimensions differ from `Q::DIMENSIONS`.
    pub fn to_quantity<Q: Quantity>(self) -> ScalarResult<Scalar<Q>> {
        if self.dimensions != Q::DIMENSIONS {
            return Err(ScalarError::DimensionMismatch {
                quantity: Q::NAME,
                expected: Q::DIMENSIONS.to_string(),
                found: self.dimensions.to_string(),
            });
        }
        Ok(Scalar::from_si(self.si))
    }
}

impl<Q: Quantity> From<Scalar<Q>> for SiScalar {
    fn from(scalar: Scalar<Q>) -> Self {
        scalar.to_si_scalar()
    }
}

impl PartialOrd for SiScalar {
    /// Ordered only when the dimensions agree.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.dimensions != other.dimensions {
            return None;
        }
        self.si.partial_cmp(&other.si)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl Mul for SiScalar {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.si * rhs.si, self.dimensions * rhs.dimensions)
    }
}

impl Div for SiScalar {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.si / rhs.si, self.dimensions / rhs.dimensions)
    }
}

impl Mul<f64> for SiScalar {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.si * rhs, self.dimensions)
    }
}

impl Mul<SiScalar> for f64 {
    type Output = SiScalar;
    #[inline]
    fn mul(self, rhs: SiScalar) -> SiScalar {
        rhs * self
    }
}

impl Div<f64> for SiScalar {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.si / rhs, self.dimensions)
    }
}

impl Neg for SiScalar {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.si, self.dimensions)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Text
// ─────────────────────────────────────────────────────────────────────────────

impl Display for SiScalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        crate::measure::write_value(f, self.si, &self.dimensions.to_string())
    }
}

impl FromStr for SiScalar {
    type Err = ScalarError;

    /// Parses `"<number> <dimensions>"`, e.g. `"9.81 m.s-2"`.
    fn from_str(text: &str) -> ScalarResult<Self> {
        if text.trim().is_empty() {
            return Err(ScalarError::EmptyText { quantity: "SI scalar" });
        }
        let (si, rest) = split_number(text).ok_or_else(|| ScalarError::NoNumber {
            text: text.to_string(),
            quantity: "SI scalar",
            locale: Locale::ROOT.to_string(),
        })?;
        Ok(Self::new(si, rest.parse()?))
    }
}
