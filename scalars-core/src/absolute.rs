//! Absolute scalars: magnitudes measured from a fixed reference point.
//!
//! An [`AbsoluteScalar<A>`] is paired with the relative quantity `A::Relative` at the type level. The arithmetic is
//! restricted to the combinations that make sense for points on a scale:
//!
//! | Expression                 | Result                     |
//! |----------------------------|----------------------------|
//! | `absolute - absolute`      | `Scalar<A::Relative>`      |
//! | `absolute + relative`      | `AbsoluteScalar<A>`        |
//! | `absolute - relative`      | `AbsoluteScalar<A>`        |
//! | `relative + absolute`      | `AbsoluteScalar<A>`        |
//!
//! Adding two absolute scalars does not type-check:
//!
//! ```compile_fail
//! use scalars_core::{absolute_temperature, AbsoluteScalar};
//!
//! let a = AbsoluteScalar::new(20.0, absolute_temperature::DEGREE_CELSIUS);
//! let b = AbsoluteScalar::new(30.0, absolute_temperature::DEGREE_CELSIUS);
//! let _ = a + b;
//! ```

use crate::error::{ScalarError, ScalarResult};
use crate::measure::{self, AbsoluteFactory, Measure};
use crate::parse;
use crate::registry::Locale;
use crate::scalar::Scalar;
use crate::si::SiScalar;
use crate::unit::{AbsoluteQuantity, Quantity, Unit};
use core::cmp::Ordering;
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::ops::*;
use core::str::FromStr;

/// A point on the scale of absolute quantity `A`, displayed in one of its units.
///
/// ```rust
/// use scalars_core::{absolute_temperature, temperature, AbsoluteScalar};
///
/// let morning = AbsoluteScalar::new(12.0, absolute_temperature::DEGREE_CELSIUS);
/// let noon = AbsoluteScalar::new(293.15, absolute_temperature::KELVIN);
///
/// let warming = noon - morning;
/// assert_eq!(warming.unit(), temperature::KELVIN);
/// assert!((warming.value() - 8.0).abs() < 1e-9);
///
/// let evening = noon - warming * 0.5;
/// assert!((evening.in_unit(absolute_temperature::DEGREE_CELSIUS) - 16.0).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct AbsoluteScalar<A: AbsoluteQuantity> {
    value: f64,
    si: f64,
    unit: Unit<A>,
}

impl<A: AbsoluteQuantity> AbsoluteScalar<A> {
    /// The reference point, in the base unit.
    pub const ZERO: Self = Self::from_si(0.0);
    /// One base unit above the reference point.
    pub const ONE: Self = Self::from_si(1.0);
    /// NaN, in the base unit.
    pub const NAN: Self = Self::from_si(f64::NAN);
    /// Positive infinity, in the base unit.
    pub const POSITIVE_INFINITY: Self = Self::from_si(f64::INFINITY);
    /// Negative infinity, in the base unit.
    pub const NEGATIVE_INFINITY: Self = Self::from_si(f64::NEG_INFINITY);
    /// Largest finite value, in the base unit.
    pub const POS_MAXVALUE: Self = Self::from_si(f64::MAX);
    /// Most negative finite value, in the base unit.
    pub const NEG_MAXVALUE: Self = Self::from_si(f64::MIN);

    /// Creates an absolute scalar from a magnitude in `unit`.
    #[inline]
    pub fn new(value: f64, unit: Unit<A>) -> Self {
        Self {
            value,
            si: unit.to_base(value),
            unit,
        }
    }

    /// Creates an absolute scalar from a base-unit magnitude.
    #[inline]
    pub const fn from_si(si: f64) -> Self {
        Self {
            value: si,
            si,
            unit: A::BASE,
        }
    }

    /// Creates an absolute scalar from a magnitude and a unit abbreviation in the root locale.
    ///
    /// # Errors
    ///
    /// Same as [`Scalar::of`].
    pub fn of<'a>(value: f64, abbreviation: impl Into<Option<&'a str>>) -> ScalarResult<Self> {
        Self::of_in(value, abbreviation, &Locale::ROOT)
    }

    /// Like [`AbsoluteScalar::of`], resolving the abbreviation for `locale`.
    pub fn of_in<'a>(
        value: f64,
        abbreviation: impl Into<Option<&'a str>>,
        locale: &Locale,
    ) -> ScalarResult<Self> {
        let unit = parse::resolve_unit::<A>(abbreviation.into(), locale)?;
        Ok(Self::new(value, unit))
    }

    /// Parses `"<number> <abbreviation>"` in the root locale.
    ///
    /// # Errors
    ///
    /// Same as [`Scalar::value_of`].
    pub fn value_of<'a>(text: impl Into<Option<&'a str>>) -> ScalarResult<Self> {
        Self::value_of_in(text, &Locale::ROOT)
    }

    /// Like [`AbsoluteScalar::value_of`], resolving the abbreviation for `locale`.
    pub fn value_of_in<'a>(text: impl Into<Option<&'a str>>, locale: &Locale) -> ScalarResult<Self> {
        let text = text.into().ok_or(ScalarError::MissingArgument("text"))?;
        let (value, unit) = parse::parse_scalar::<A>(text, locale)?;
        Ok(Self::new(value, unit))
    }

    /// Magnitude in the display unit.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Magnitude in the base unit.
    #[inline]
    pub const fn si(&self) -> f64 {
        self.si
    }

    /// The display unit.
    #[inline]
    pub const fn unit(&self) -> Unit<A> {
        self.unit
    }

    /// Magnitude expressed in `unit`.
    #[inline]
    pub fn in_unit(&self, unit: Unit<A>) -> f64 {
        unit.from_base(self.si)
    }

    /// The same point displayed in `unit`.
    pub fn to_unit(self, unit: Unit<A>) -> Self {
        if unit == self.unit {
            return self;
        }
        Self::new(unit.from_base(self.si), unit)
    }

    /// `self + rhs`, where `rhs` is a relative offset.
    pub fn plus<R>(self, rhs: R) -> <Self as Add<R>>::Output
    where
        Self: Add<R>,
    {
        self + rhs
    }

    /// `self - rhs`: a relative difference for an absolute `rhs`, a shifted point for a relative one.
    pub fn minus<R>(self, rhs: R) -> <Self as Sub<R>>::Output
    where
        Self: Sub<R>,
    {
        self - rhs
    }

    /// The base-unit magnitude with this quantity's dimensions.
    pub fn to_si_scalar(self) -> SiScalar {
        SiScalar::new(self.si, A::DIMENSIONS)
    }

    /// Smallest integer not below the display-unit magnitude.
    pub fn ceil(self) -> Self {
        Self::new(self.value.ceil(), self.unit)
    }

    /// Largest integer not above the display-unit magnitude.
    pub fn floor(self) -> Self {
        Self::new(self.value.floor(), self.unit)
    }

    /// Display-unit magnitude rounded half away from zero.
    pub fn round(self) -> Self {
        Self::new(self.value.round(), self.unit)
    }

    /// Linear interpolation in `zero`'s display unit.
    ///
    /// # Errors
    ///
    /// [`ScalarError::RatioOutOfRange`] unless `0 <= ratio <= 1`; absolute scalars never extrapolate.
    pub fn interpolate(zero: Self, one: Self, ratio: f64) -> ScalarResult<Self> {
        if !(0.0..=1.0).contains(&ratio) {
            return Err(ScalarError::RatioOutOfRange { ratio });
        }
        Ok(measure::interpolate(zero, one, ratio))
    }

    /// The later reading: `self` when `self > other`, else `other`.
    pub fn max(self, other: Self) -> Self {
        measure::max_of(self, [other])
    }

    /// The earlier reading: `self` when `self < other`, else `other`.
    pub fn min(self, other: Self) -> Self {
        measure::min_of(self, [other])
    }

    /// The largest of `first` and `rest`.
    pub fn max_of(first: Self, rest: impl IntoIterator<Item = Self>) -> Self {
        measure::max_of(first, rest)
    }

    /// The smallest of `first` and `rest`.
    pub fn min_of(first: Self, rest: impl IntoIterator<Item = Self>) -> Self {
        measure::min_of(first, rest)
    }

    /// Formats the magnitude in `unit`.
    pub fn format_in(&self, unit: Unit<A>) -> String {
        self.to_unit(unit).to_string()
    }

    /// Formats with the localized abbreviation of the display unit.
    pub fn format_localized(&self, locale: &Locale) -> String {
        Scalar::<A>::new(self.value, self.unit).format_localized(locale)
    }

    fn shifted(self, delta_si: f64) -> Self {
        Self::new(self.unit.from_base(self.si + delta_si), self.unit)
    }
}

impl<A: AbsoluteQuantity> Measure for AbsoluteScalar<A> {
    type Quantity = A;

    fn instantiate(value: f64, unit: Unit<A>) -> Self {
        Self::new(value, unit)
    }

    fn si(&self) -> f64 {
        self.si
    }

    fn value(&self) -> f64 {
        self.value
    }

    fn unit(&self) -> Unit<A> {
        self.unit
    }
}

impl<A: AbsoluteQuantity> AbsoluteFactory for AbsoluteScalar<A> {
    type Relative = Scalar<A::Relative>;

    fn instantiate_abs(value: f64, unit: Unit<A>) -> Self {
        Self::new(value, unit)
    }

    fn instantiate_rel(value: f64, unit: Unit<A::Relative>) -> Scalar<A::Relative> {
        Scalar::new(value, unit)
    }

    fn relative_unit(&self) -> Unit<A::Relative> {
        self.unit.relative_unit()
    }
}

impl<A: AbsoluteQuantity> Default for AbsoluteScalar<A> {
    fn default() -> Self {
        Self::ZERO
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison
// ─────────────────────────────────────────────────────────────────────────────

impl<A: AbsoluteQuantity> PartialEq for AbsoluteScalar<A> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.si == other.si
    }
}

impl<A: AbsoluteQuantity> PartialOrd for AbsoluteScalar<A> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.si.partial_cmp(&other.si)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Absolute / relative arithmetic
// ─────────────────────────────────────────────────────────────────────────────

impl<A: AbsoluteQuantity> Sub for AbsoluteScalar<A> {
    type Output = Scalar<A::Relative>;

    /// Difference expressed in the relative unit matching `self`'s display unit.
    fn sub(self, rhs: Self) -> Scalar<A::Relative> {
        let unit = self.unit.relative_unit();
        if self.unit == rhs.unit && unit.scale() == self.unit.scale() {
            Scalar::new(self.value - rhs.value, unit)
        } else {
            Scalar::new(unit.from_base(self.si - rhs.si), unit)
        }
    }
}

impl<A: AbsoluteQuantity> Add<Scalar<A::Relative>> for AbsoluteScalar<A> {
    type Output = Self;

    fn add(self, rhs: Scalar<A::Relative>) -> Self {
        self.shifted(rhs.si())
    }
}

impl<A: AbsoluteQuantity> Sub<Scalar<A::Relative>> for AbsoluteScalar<A> {
    type Output = Self;

    fn sub(self, rhs: Scalar<A::Relative>) -> Self {
        self.shifted(-rhs.si())
    }
}

impl<A: AbsoluteQuantity> AddAssign<Scalar<A::Relative>> for AbsoluteScalar<A> {
    fn add_assign(&mut self, rhs: Scalar<A::Relative>) {
        *self = *self + rhs;
    }
}

impl<A: AbsoluteQuantity> SubAssign<Scalar<A::Relative>> for AbsoluteScalar<A> {
    fn sub_assign(&mut self, rhs: Scalar<A::Relative>) {
        *self = *self - rhs;
    }
}

impl<A: AbsoluteQuantity> Add<AbsoluteScalar<A>> for Scalar<A::Relative> {
    type Output = AbsoluteScalar<A>;

    fn add(self, rhs: AbsoluteScalar<A>) -> AbsoluteScalar<A> {
        rhs + self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Text
// ─────────────────────────────────────────────────────────────────────────────

impl<A: AbsoluteQuantity> Display for AbsoluteScalar<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        measure::write_value(f, self.value, self.unit.abbreviation())
    }
}

impl<A: AbsoluteQuantity> FromStr for AbsoluteScalar<A> {
    type Err = ScalarError;

    fn from_str(text: &str) -> ScalarResult<Self> {
        Self::value_of(text)
    }
}
