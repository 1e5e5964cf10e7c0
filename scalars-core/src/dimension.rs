//! SI dimension vectors.

use crate::error::{ScalarError, ScalarResult};
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::ops::{Div, Mul};
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Printable symbols of the exponent vector, in storage order.
pub const SI_SYMBOLS: [&str; 9] = ["rad", "sr", "kg", "m", "s", "A", "K", "mol", "cd"];

/// Exponents of the SI base units (plus radian and steradian) that make up a quantity.
///
/// Every [`Quantity`](crate::Quantity) declares its dimensions; derived results that have no named quantity, such as
/// the reciprocal of a temperature, carry them structurally inside an [`SiScalar`](crate::SiScalar).
///
/// The textual form is a dot-separated list of `<symbol><exponent>` terms, e.g. `kg.m-1.s-2` for pressure. An
/// exponent of one is written without a number, and a dimensionless vector is the empty string.
///
/// ```rust
/// use scalars_core::SiDimensions;
///
/// let pressure: SiDimensions = "kg.m-1.s-2".parse().unwrap();
/// let area: SiDimensions = "m2".parse().unwrap();
/// assert_eq!((pressure * area).to_string(), "kg.m.s-2");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct SiDimensions([i8; 9]);

impl SiDimensions {
    /// The dimensionless vector (all exponents zero).
    pub const DIMENSIONLESS: Self = Self([0; 9]);

    /// Creates a vector from raw exponents ordered as [`SI_SYMBOLS`].
    #[inline]
    pub const fn new(exponents: [i8; 9]) -> Self {
        Self(exponents)
    }

    /// Returns the raw exponents ordered as [`SI_SYMBOLS`].
    #[inline]
    pub const fn exponents(&self) -> [i8; 9] {
        self.0
    }

    /// Whether every exponent is zero.
    pub const fn is_dimensionless(&self) -> bool {
        let mut i = 0;
        while i < 9 {
            if self.0[i] != 0 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Exponent-wise equality, usable in constant expressions.
    pub const fn equals(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < 9 {
            if self.0[i] != other.0[i] {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Dimensions of a product (exponents add, saturating at the `i8` bounds).
    pub const fn multiply(&self, other: &Self) -> Self {
        let mut out = [0i8; 9];
        let mut i = 0;
        while i < 9 {
            out[i] = self.0[i].saturating_add(other.0[i]);
            i += 1;
        }
        Self(out)
    }

    /// Dimensions of a quotient (exponents subtract, saturating at the `i8` bounds).
    pub const fn divide(&self, other: &Self) -> Self {
        let mut out = [0i8; 9];
        let mut i = 0;
        while i < 9 {
            out[i] = self.0[i].saturating_sub(other.0[i]);
            i += 1;
        }
        Self(out)
    }

    /// Dimensions of a reciprocal (exponents negate).
    pub const fn invert(&self) -> Self {
        Self::DIMENSIONLESS.divide(self)
    }
}

impl Mul for SiDimensions {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl Div for SiDimensions {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        self.divide(&rhs)
    }
}

impl Display for SiDimensions {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut first = true;
        for (symbol, exponent) in SI_SYMBOLS.iter().zip(self.0) {
            if exponent == 0 {
                continue;
            }
            if !first {
                f.write_str(".")?;
            }
            first = false;
            if exponent == 1 {
                f.write_str(symbol)?;
            } else {
                write!(f, "{}{}", symbol, exponent)?;
            }
        }
        Ok(())
    }
}

impl FromStr for SiDimensions {
    type Err = ScalarError;

    fn from_str(text: &str) -> ScalarResult<Self> {
        let invalid = || ScalarError::InvalidDimensions {
            text: text.to_string(),
        };
        let mut exponents = [0i8; 9];

        for term in text.trim().split('.').map(str::trim).filter(|t| !t.is_empty()) {
            let split = term
                .find(|c: char| c == '-' || c == '+' || c.is_ascii_digit())
                .unwrap_or(term.len());
            let (symbol, exponent) = term.split_at(split);
            let index = SI_SYMBOLS
                .iter()
                .position(|s| *s == symbol)
                .ok_or_else(invalid)?;
            let exponent: i8 = if exponent.is_empty() {
                1
            } else {
                exponent.parse().map_err(|_| invalid())?
            };
            exponents[index] = exponents[index]
                .checked_add(exponent)
                .ok_or_else(invalid)?;
        }

        Ok(Self(exponents))
    }
}

#[cfg(feature = "serde")]
impl Serialize for SiDimensions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for SiDimensions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
