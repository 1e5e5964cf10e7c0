//! Capabilities shared by relative and absolute scalars, and the generic helpers built on them.
//!
//! [`Measure`] is implemented by [`Scalar`](crate::Scalar) and [`AbsoluteScalar`](crate::AbsoluteScalar). The
//! helpers in this module ([`max_of`], [`min_of`], [`interpolate`], [`spread`]) are written once against it and
//! construct their results through [`Measure::instantiate`] or [`AbsoluteFactory`], so they never need to know the
//! concrete scalar type.

use crate::unit::{Quantity, Unit};
use core::fmt::{Formatter, Result};

/// A magnitude of some quantity carried together with its display unit.
pub trait Measure: Copy + PartialOrd {
    /// The quantity tag.
    type Quantity: Quantity;

    /// Creates an instance from a magnitude in `unit`.
    fn instantiate(value: f64, unit: Unit<Self::Quantity>) -> Self;

    /// Magnitude in the base unit.
    fn si(&self) -> f64;

    /// Magnitude in the display unit.
    fn value(&self) -> f64;

    /// The display unit.
    fn unit(&self) -> Unit<Self::Quantity>;

    /// Magnitude expressed in `unit`.
    fn in_unit(&self, unit: Unit<Self::Quantity>) -> f64 {
        unit.from_base(self.si())
    }

    /// `si > 0`.
    fn gt0(&self) -> bool {
        self.si() > 0.0
    }

    /// `si >= 0`.
    fn ge0(&self) -> bool {
        self.si() >= 0.0
    }

    /// `si < 0`.
    fn lt0(&self) -> bool {
        self.si() < 0.0
    }

    /// `si <= 0`.
    fn le0(&self) -> bool {
        self.si() <= 0.0
    }

    /// `si == 0`.
    fn eq0(&self) -> bool {
        self.si() == 0.0
    }

    /// `si != 0`. True for NaN.
    fn ne0(&self) -> bool {
        self.si() != 0.0
    }
}

/// Paired construction for an absolute scalar and its relative sibling.
///
/// Generic code that only holds an absolute measure uses this to produce differences without naming the relative
/// scalar type.
pub trait AbsoluteFactory: Measure {
    /// The relative scalar used for differences and offsets.
    type Relative: Measure;

    /// Creates an absolute instance.
    fn instantiate_abs(value: f64, unit: Unit<Self::Quantity>) -> Self;

    /// Creates a relative instance.
    fn instantiate_rel(
        value: f64,
        unit: Unit<<Self::Relative as Measure>::Quantity>,
    ) -> Self::Relative;

    /// The relative unit matching this instance's display unit.
    fn relative_unit(&self) -> Unit<<Self::Relative as Measure>::Quantity>;
}

/// Returns the larger of `first` and every element of `rest`.
///
/// The first pair is settled with `if first > second { first } else { second }`, so a NaN `first` gives way to the
/// second element. After that a later element replaces the pick only when it is strictly greater, so a NaN never
/// replaces a comparable pick. With exactly two elements this is the pairwise rule: `max(x, NaN)` is NaN.
pub fn max_of<M: Measure>(first: M, rest: impl IntoIterator<Item = M>) -> M {
    let mut rest = rest.into_iter();
    let Some(second) = rest.next() else {
        return first;
    };
    let pick = if first > second { first } else { second };
    rest.fold(pick, |best, next| if next > best { next } else { best })
}

/// Returns the smaller of `first` and every element of `rest`, mirroring [`max_of`] with `<`.
pub fn min_of<M: Measure>(first: M, rest: impl IntoIterator<Item = M>) -> M {
    let mut rest = rest.into_iter();
    let Some(second) = rest.next() else {
        return first;
    };
    let pick = if first < second { first } else { second };
    rest.fold(pick, |best, next| if next < best { next } else { best })
}

/// Linear interpolation between `zero` (ratio 0) and `one` (ratio 1), in `zero`'s display unit.
///
/// Ratios outside `[0, 1]` extrapolate.
pub fn interpolate<M: Measure>(zero: M, one: M, ratio: f64) -> M {
    let unit = zero.unit();
    let value = zero.value() * (1.0 - ratio) + one.in_unit(unit) * ratio;
    M::instantiate(value, unit)
}

/// Distance between the largest and smallest of `first` and `rest`, as a relative measure.
///
/// The result is expressed in the relative unit that matches the smallest element's display unit.
pub fn spread<M: AbsoluteFactory>(first: M, rest: impl IntoIterator<Item = M> + Clone) -> M::Relative {
    let high = max_of(first, rest.clone());
    let low = min_of(first, rest);
    let unit = low.relative_unit();
    M::instantiate_rel(unit.from_base(high.si() - low.si()), unit)
}

/// Writes `"<value> <abbreviation>"`, honouring the formatter's precision and omitting the space for an empty
/// abbreviation.
pub(crate) fn write_value(f: &mut Formatter<'_>, value: f64, abbreviation: &str) -> Result {
    match f.precision() {
        Some(precision) => write!(f, "{:.*}", precision, value)?,
        None => write!(f, "{}", value)?,
    }
    if abbreviation.is_empty() {
        Ok(())
    } else {
        write!(f, " {}", abbreviation)
    }
}
