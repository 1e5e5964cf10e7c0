//! Relative scalars: a magnitude of a quantity tagged with its display unit.

use crate::dimensionless::Dimensionless;
use crate::error::{ScalarError, ScalarResult};
use crate::measure::{self, Measure};
use crate::parse;
use crate::registry::Locale;
use crate::si::SiScalar;
use crate::unit::{Quantity, Unit};
use core::cmp::Ordering;
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::iter::Sum;
use core::ops::*;
use core::str::FromStr;

/// A magnitude of quantity `Q` together with the unit it is displayed in.
///
/// The base-unit magnitude (`si`) is computed once at construction and all arithmetic and comparison operate on it.
/// Scalars are immutable `Copy` values; every operation returns a new instance.
///
/// Equality and ordering compare `si` with plain `f64` semantics, so a NaN scalar is neither equal to, less than nor
/// greater than anything, itself included.
///
/// # Examples
///
/// ```rust
/// use scalars_core::{pressure, Scalar};
///
/// let p = Scalar::new(1.5, pressure::KILOPASCAL);
/// assert_eq!(p.si(), 1500.0);
/// assert_eq!(p.to_string(), "1.5 kPa");
///
/// let q: Scalar<scalars_core::Pressure> = "12 bar".parse().unwrap();
/// assert!(q > p);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Scalar<Q: Quantity> {
    value: f64,
    si: f64,
    unit: Unit<Q>,
}

impl<Q: Quantity> Scalar<Q> {
    /// Zero, in the base unit.
    pub const ZERO: Self = Self::from_si(0.0);
    /// One, in the base unit.
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

    /// Creates a scalar from a magnitude in `unit`.
    #[inline]
    pub fn new(value: f64, unit: Unit<Q>) -> Self {
        Self {
            value,
            si: unit.to_base(value),
            unit,
        }
    }

    /// Creates a scalar from a base-unit magnitude; the display unit is the base unit.
    #[inline]
    pub const fn from_si(si: f64) -> Self {
        Self {
            value: si,
            si,
            unit: Q::BASE,
        }
    }

    /// Creates a scalar from a magnitude and a unit abbreviation in the root locale.
    ///
    /// # Errors
    ///
    /// [`ScalarError::MissingArgument`] when `abbreviation` is `None`, [`ScalarError::EmptyUnit`] when it is blank and
    /// [`ScalarError::UnknownUnit`] when it is not registered for `Q`.
    ///
    /// ```rust
    /// use scalars_core::{Scalar, Temperature};
    ///
    /// let dt = Scalar::<Temperature>::of(5.0, "°F").unwrap();
    /// assert!((dt.si() - 25.0 / 9.0).abs() < 1e-12);
    /// assert!(Scalar::<Temperature>::of(5.0, None::<&str>).is_err());
    /// ```
    pub fn of<'a>(value: f64, abbreviation: impl Into<Option<&'a str>>) -> ScalarResult<Self> {
        Self::of_in(value, abbreviation, &Locale::ROOT)
    }

    /// Like [`Scalar::of`], resolving the abbreviation for `locale`.
    pub fn of_in<'a>(
        value: f64,
        abbreviation: impl Into<Option<&'a str>>,
        locale: &Locale,
    ) -> ScalarResult<Self> {
        let unit = parse::resolve_unit::<Q>(abbreviation.into(), locale)?;
        Ok(Self::new(value, unit))
    }

    /// Parses `"<number> <abbreviation>"` in the root locale. The space is optional.
    ///
    /// # Errors
    ///
    /// [`ScalarError::MissingArgument`] when `text` is `None`; otherwise the errors of
    /// [`parse_scalar`](crate::parse::parse_scalar).
    pub fn value_of<'a>(text: impl Into<Option<&'a str>>) -> ScalarResult<Self> {
        Self::value_of_in(text, &Locale::ROOT)
    }

    /// Like [`Scalar::value_of`], resolving the abbreviation for `locale`.
    pub fn value_of_in<'a>(text: impl Into<Option<&'a str>>, locale: &Locale) -> ScalarResult<Self> {
        let text = text.into().ok_or(ScalarError::MissingArgument("text"))?;
        let (value, unit) = parse::parse_scalar::<Q>(text, locale)?;
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
    pub const fn unit(&self) -> Unit<Q> {
        self.unit
    }

    /// Magnitude expressed in `unit`.
    #[inline]
    pub fn in_unit(&self, unit: Unit<Q>) -> f64 {
        unit.from_base(self.si)
    }

    /// The same magnitude displayed in `unit`.
    pub fn to_unit(self, unit: Unit<Q>) -> Self {
        if unit == self.unit {
            return self;
        }
        Self::new(unit.from_base(self.si), unit)
    }

    /// `self + rhs`; see the `Add` impls for the result type.
    pub fn plus<R>(self, rhs: R) -> <Self as Add<R>>::Output
    where
        Self: Add<R>,
    {
        self + rhs
    }

    /// `self - rhs`; see the `Sub` impls for the result type.
    pub fn minus<R>(self, rhs: R) -> <Self as Sub<R>>::Output
    where
        Self: Sub<R>,
    {
        self - rhs
    }

    /// `self * rhs`: scaling by `f64` or a declared cross-quantity product.
    pub fn times<R>(self, rhs: R) -> <Self as Mul<R>>::Output
    where
        Self: Mul<R>,
    {
        self * rhs
    }

    /// `self / rhs`: scaling by `f64`, a dimensionless ratio or a declared cross-quantity quotient.
    pub fn divide<R>(self, rhs: R) -> <Self as Div<R>>::Output
    where
        Self: Div<R>,
    {
        self / rhs
    }

    /// `1 / self` as a generic SI scalar with inverted dimensions.
    ///
    /// ```rust
    /// use scalars_core::{duration, Scalar};
    ///
    /// let period = Scalar::new(2.0, duration::MILLISECOND);
    /// let rate = period.reciprocal();
    /// assert_eq!(rate.si(), 500.0);
    /// assert_eq!(rate.dimensions().to_string(), "s-1");
    /// ```
    pub fn reciprocal(self) -> SiScalar {
        Scalar::<Dimensionless>::ONE.to_si_scalar() / self.to_si_scalar()
    }

    /// The base-unit magnitude with this quantity's dimensions.
    pub fn to_si_scalar(self) -> SiScalar {
        SiScalar::new(self.si, Q::DIMENSIONS)
    }

    /// Absolute value, in the display unit.
    pub fn abs(self) -> Self {
        Self::new(self.value.abs(), self.unit)
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

    /// Linear interpolation in `zero`'s display unit; ratios outside `[0, 1]` extrapolate.
    pub fn interpolate(zero: Self, one: Self, ratio: f64) -> Self {
        measure::interpolate(zero, one, ratio)
    }

    /// `self` when `self > other`, else `other` (so a NaN `self` yields `other`).
    pub fn max(self, other: Self) -> Self {
        measure::max_of(self, [other])
    }

    /// `self` when `self < other`, else `other`.
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
    pub fn format_in(&self, unit: Unit<Q>) -> String {
        self.to_unit(unit).to_string()
    }

    /// Formats with the localized abbreviation of the display unit.
    ///
    /// ```rust
    /// use scalars_core::{duration, Locale, Scalar};
    ///
    /// let d = Scalar::new(3.0, duration::HOUR);
    /// assert_eq!(d.format_localized(&Locale::new("nl")), "3 u");
    /// ```
    pub fn format_localized(&self, locale: &Locale) -> String {
        Localized(self.value, self.unit.localized_abbreviation(locale)).to_string()
    }
}

struct Localized(f64, &'static str);

impl Display for Localized {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        measure::write_value(f, self.0, self.1)
    }
}

impl<Q: Quantity> Measure for Scalar<Q> {
    type Quantity = Q;

    fn instantiate(value: f64, unit: Unit<Q>) -> Self {
        Self::new(value, unit)
    }

    fn si(&self) -> f64 {
        self.si
    }

    fn value(&self) -> f64 {
        self.value
    }

    fn unit(&self) -> Unit<Q> {
        self.unit
    }
}

impl<Q: Quantity> Default for Scalar<Q> {
    fn default() -> Self {
        Self::ZERO
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Comparison
// ─────────────────────────────────────────────────────────────────────────────

impl<Q: Quantity> PartialEq for Scalar<Q> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.si == other.si
    }
}

impl<Q: Quantity> PartialOrd for Scalar<Q> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.si.partial_cmp(&other.si)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<Q: Quantity> Add for Scalar<Q> {
    type Output = Self;

    /// Keeps the shared display unit when both operands use the same one, else uses the base unit.
    #[inline]
    fn add(self, rhs: Self) -> Self {
        if self.unit == rhs.unit {
            Self::new(self.value + rhs.value, self.unit)
        } else {
            Self::from_si(self.si + rhs.si)
        }
    }
}

impl<Q: Quantity> AddAssign for Scalar<Q> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<Q: Quantity> Sub for Scalar<Q> {
    type Output = Self;

    /// Keeps the shared display unit when both operands use the same one, else uses the base unit.
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        if self.unit == rhs.unit {
            Self::new(self.value - rhs.value, self.unit)
        } else {
            Self::from_si(self.si - rhs.si)
        }
    }
}

impl<Q: Quantity> SubAssign for Scalar<Q> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<Q: Quantity> Mul<f64> for Scalar<Q> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.value * rhs, self.unit)
    }
}

impl<Q: Quantity> Mul<Scalar<Q>> for f64 {
    type Output = Scalar<Q>;
    #[inline]
    fn mul(self, rhs: Scalar<Q>) -> Scalar<Q> {
        rhs * self
    }
}

impl<Q: Quantity> MulAssign<f64> for Scalar<Q> {
    #[inline]
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

impl<Q: Quantity> Div<f64> for Scalar<Q> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.value / rhs, self.unit)
    }
}

impl<Q: Quantity> DivAssign<f64> for Scalar<Q> {
    #[inline]
    fn div_assign(&mut self, rhs: f64) {
        *self = *self / rhs;
    }
}

impl<Q: Quantity> Div for Scalar<Q> {
    type Output = Scalar<Dimensionless>;

    /// Dimensionless ratio of the base values; a zero divisor yields an infinity or NaN.
    #[inline]
    fn div(self, rhs: Self) -> Scalar<Dimensionless> {
        Scalar::from_si(self.si / rhs.si)
    }
}

impl<Q: Quantity> Neg for Scalar<Q> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.value, self.unit)
    }
}

impl<Q: Quantity> Sum for Scalar<Q> {
    fn sum<I: Iterator<Item = Self>>(mut iter: I) -> Self {
        match iter.next() {
            Some(first) => iter.fold(first, Add::add),
            None => Self::ZERO,
        }
    }
}

impl<'a, Q: Quantity> Sum<&'a Scalar<Q>> for Scalar<Q> {
    fn sum<I: Iterator<Item = &'a Scalar<Q>>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Text
// ─────────────────────────────────────────────────────────────────────────────

impl<Q: Quantity> Display for Scalar<Q> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        measure::write_value(f, self.value, self.unit.abbreviation())
    }
}

impl<Q: Quantity> FromStr for Scalar<Q> {
    type Err = ScalarError;

    fn from_str(text: &str) -> ScalarResult<Self> {
        Self::value_of(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::{self, Area};
    use crate::duration::{self, Duration};
    use crate::error::ErrorKind;
    use crate::illuminance::{self, Illuminance};
    use crate::length::{self, Length};
    use crate::pressure::{self, Pressure};
    use crate::temperature::{self, Temperature};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn new_caches_base_value() {
        let p = Scalar::new(2.5, pressure::BAR);
        assert_eq!(p.value(), 2.5);
        assert_eq!(p.si(), 250_000.0);
        assert_eq!(p.unit(), pressure::BAR);
    }

    #[test]
    fn from_si_uses_base_unit() {
        let p = Scalar::<Pressure>::from_si(101_325.0);
        assert_eq!(p.value(), 101_325.0);
        assert_eq!(p.unit(), Pressure::BASE);
    }

    #[test]
    fn constants() {
        assert_eq!(Scalar::<Length>::ZERO.si(), 0.0);
        assert_eq!(Scalar::<Length>::ONE.si(), 1.0);
        assert!(Scalar::<Length>::NAN.si().is_nan());
        assert_eq!(Scalar::<Length>::POSITIVE_INFINITY.si(), f64::INFINITY);
        assert_eq!(Scalar::<Length>::NEGATIVE_INFINITY.si(), f64::NEG_INFINITY);
        assert_eq!(Scalar::<Length>::POS_MAXVALUE.si(), f64::MAX);
        assert_eq!(Scalar::<Length>::NEG_MAXVALUE.si(), f64::MIN);
        assert_eq!(Scalar::<Length>::default(), Scalar::ZERO);
    }

    #[test]
    fn of_resolves_abbreviation() {
        let d = Scalar::<Duration>::of(90.0, "min").unwrap();
        assert_eq!(d.si(), 5400.0);
        assert_eq!(d.unit(), duration::MINUTE);
    }

    #[test]
    fn of_rejects_missing_empty_and_unknown() {
        let err = Scalar::<Duration>::of(1.0, None::<&str>).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NullArgument);
        let err = Scalar::<Duration>::of(1.0, " ").unwrap_err();
        assert_eq!(err, ScalarError::EmptyUnit { quantity: "Duration" });
        let err = Scalar::<Duration>::of(1.0, "fortnight").unwrap_err();
        assert!(matches!(err, ScalarError::UnknownUnit { .. }));
    }

    #[test]
    fn of_in_locale() {
        let d = Scalar::<Duration>::of_in(2.0, "dag", &Locale::new("nl-BE")).unwrap();
        assert_eq!(d.unit(), duration::DAY);
        assert!(Scalar::<Duration>::of(2.0, "dag").is_err());
    }

    #[test]
    fn value_of_parses_text() {
        let t = Scalar::<Temperature>::value_of("100 K").unwrap();
        assert_eq!(t.si(), 100.0);
        let t = Scalar::<Temperature>::value_of("-40°F").unwrap();
        assert_relative_eq!(t.si(), -40.0 * 5.0 / 9.0, epsilon = 1e-12);
    }

    #[test]
    fn value_of_rejects_missing_and_empty() {
        let err = Scalar::<Temperature>::value_of(None::<&str>).unwrap_err();
        assert_eq!(err, ScalarError::MissingArgument("text"));
        let err = Scalar::<Temperature>::value_of("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversion
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn in_unit_projects() {
        let l = Scalar::new(1.0, length::MILE);
        assert_relative_eq!(l.in_unit(length::KILOMETER), 1.609344, epsilon = 1e-12);
    }

    #[test]
    fn to_unit_keeps_base_value() {
        let l = Scalar::new(2500.0, length::METER).to_unit(length::KILOMETER);
        assert_eq!(l.unit(), length::KILOMETER);
        assert_relative_eq!(l.value(), 2.5);
        assert_eq!(l.si(), 2500.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Arithmetic
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn add_same_unit_keeps_unit() {
        let sum = Scalar::new(1.0, length::KILOMETER) + Scalar::new(0.5, length::KILOMETER);
        assert_eq!(sum.unit(), length::KILOMETER);
        assert_eq!(sum.value(), 1.5);
    }

    #[test]
    fn add_mixed_units_uses_base() {
        let sum = Scalar::new(1.0, length::KILOMETER).plus(Scalar::new(20.0, length::METER));
        assert_eq!(sum.unit(), Length::BASE);
        assert_eq!(sum.value(), 1020.0);
    }

    #[test]
    fn minus_and_assign_ops() {
        let mut d = Scalar::new(2.0, duration::HOUR);
        d -= Scalar::new(30.0, duration::MINUTE);
        assert_eq!(d.si(), 5400.0);
        d += Scalar::new(0.5, duration::HOUR);
        assert_eq!(d.si(), 7200.0);
        d *= 2.0;
        d /= 4.0;
        assert_eq!(d.si(), 3600.0);
        assert_eq!(d.minus(d).si(), 0.0);
    }

    #[test]
    fn scaling_keeps_unit() {
        let p = Scalar::new(3.0, pressure::KILOPASCAL);
        assert_eq!((p * 2.0).value(), 6.0);
        assert_eq!((2.0 * p).unit(), pressure::KILOPASCAL);
        assert_eq!(p.divide(3.0).value(), 1.0);
        assert_eq!(p.times(0.5).value(), 1.5);
        assert_eq!((-p).value(), -3.0);
    }

    #[test]
    fn same_quantity_division_is_dimensionless() {
        let ratio = Scalar::<Illuminance>::from_si(4.0).divide(Scalar::from_si(2.0));
        assert_eq!(ratio.si(), 2.0);
        let ratio = Scalar::new(1.0, illuminance::FOOT_CANDLE) / Scalar::<Illuminance>::ZERO;
        assert_eq!(ratio.si(), f64::INFINITY);
        let ratio = Scalar::<Illuminance>::ZERO / Scalar::<Illuminance>::ZERO;
        assert!(ratio.si().is_nan());
    }

    #[test]
    fn reciprocal_inverts_dimensions() {
        let r = Scalar::new(4.0, area::SQUARE_METER).reciprocal();
        assert_eq!(r.si(), 0.25);
        assert_eq!(r.dimensions(), Area::DIMENSIONS.invert());
    }

    #[test]
    fn rounding_in_display_unit() {
        let t = Scalar::new(-2.5, temperature::DEGREE_CELSIUS);
        assert_eq!(t.abs().value(), 2.5);
        assert_eq!(t.ceil().value(), -2.0);
        assert_eq!(t.floor().value(), -3.0);
        assert_eq!(t.round().value(), -3.0);
        assert_eq!(t.round().unit(), temperature::DEGREE_CELSIUS);
    }

    #[test]
    fn sum_of_scalars() {
        let legs = [
            Scalar::new(1.0, length::KILOMETER),
            Scalar::new(2.0, length::KILOMETER),
        ];
        let total: Scalar<Length> = legs.iter().sum();
        assert_eq!(total.unit(), length::KILOMETER);
        assert_eq!(total.value(), 3.0);
        let empty: Scalar<Length> = core::iter::empty::<Scalar<Length>>().sum();
        assert_eq!(empty, Scalar::ZERO);
    }

    #[test]
    fn nan_and_infinity_propagate() {
        let sum = Scalar::<Length>::NAN + Scalar::ONE;
        assert!(sum.si().is_nan());
        let sum = Scalar::<Length>::POSITIVE_INFINITY + Scalar::NEGATIVE_INFINITY;
        assert!(sum.si().is_nan());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Comparison
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn comparison_uses_base_value() {
        let a = Scalar::new(1.0, length::KILOMETER);
        let b = Scalar::new(999.0, length::METER);
        assert!(a > b);
        assert!(b < a);
        assert_eq!(a, Scalar::new(1000.0, length::METER));
        assert_eq!(a.partial_cmp(&b), Some(Ordering::Greater));
    }

    #[test]
    fn nan_is_unordered() {
        let nan = Scalar::<Length>::NAN;
        assert!(nan != nan);
        assert!(!(nan < Scalar::ONE) && !(nan > Scalar::ONE) && !(nan == Scalar::ONE));
        assert_eq!(nan.partial_cmp(&Scalar::ONE), None);
    }

    #[test]
    fn max_min_helpers() {
        let t = |v| Scalar::<Temperature>::from_si(v);
        assert_eq!(Scalar::max_of(t(1.0), [t(2.0), t(5.0)]).si(), 5.0);
        assert_eq!(Scalar::min_of(t(1.0), [t(2.0), t(5.0)]).si(), 1.0);
        assert_eq!(t(1.0).max(t(2.0)).si(), 2.0);
        assert_eq!(t(1.0).min(t(2.0)).si(), 1.0);
    }

    #[test]
    fn max_min_skip_leading_nan() {
        let t = |v| Scalar::<Temperature>::from_si(v);
        let nan = Scalar::<Temperature>::NAN;
        assert_eq!(nan.max(t(-4.0)).si(), -4.0);
        assert_eq!(nan.min(t(-4.0)).si(), -4.0);
        assert_eq!(Scalar::min_of(nan, [t(3.0)]).si(), 3.0);
        assert_eq!(Scalar::max_of(nan, [t(3.0), t(1.0)]).si(), 3.0);
        assert!(t(3.0).max(nan).si().is_nan());
    }

    #[test]
    fn interpolate_boundaries() {
        let zero = Scalar::new(1.0, length::KILOMETER);
        let one = Scalar::new(1500.0, length::METER);
        assert_relative_eq!(Scalar::interpolate(zero, one, 0.0).si(), 1000.0);
        assert_relative_eq!(Scalar::interpolate(zero, one, 1.0).si(), 1500.0);
        assert_relative_eq!(Scalar::interpolate(zero, one, 2.0).si(), 2000.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Text
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn display_value_and_abbreviation() {
        let p = Scalar::new(1013.27, pressure::HECTOPASCAL);
        assert_eq!(p.to_string(), "1013.27 hPa");
        assert_eq!(format!("{:.1}", p), "1013.3 hPa");
        assert_eq!(Scalar::<crate::Dimensionless>::from_si(0.5).to_string(), "0.5");
    }

    #[test]
    fn format_in_other_unit() {
        let p = Scalar::new(1.0, pressure::BAR);
        assert_eq!(p.format_in(pressure::KILOPASCAL), "100 kPa");
    }

    #[test]
    fn from_str_parses_root_locale() {
        let d: Scalar<Duration> = "1.5 h".parse().unwrap();
        assert_eq!(d.si(), 5400.0);
        assert!("1.5 u".parse::<Scalar<Duration>>().is_err());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_base_value_invariant(v in -1e9..1e9f64, idx in 0usize..Pressure::UNITS.len()) {
            let unit = Pressure::UNITS[idx];
            let s = Scalar::new(v, unit);
            prop_assert_eq!(s.si(), unit.to_base(s.value()));
            let moved = s.to_unit(Pressure::BASE) * 3.0;
            prop_assert_eq!(moved.si(), moved.unit().to_base(moved.value()));
        }

        #[test]
        fn prop_format_parse_inverse(v in -1e12..1e12f64, idx in 0usize..Length::UNITS.len()) {
            let s = Scalar::new(v, Length::UNITS[idx]);
            let back: Scalar<Length> = s.to_string().parse().unwrap();
            prop_assert_eq!(back.si(), s.si());
        }

        #[test]
        fn prop_ordering_is_total_without_nan(a in -1e9..1e9f64, b in -1e9..1e9f64) {
            let (a, b) = (Scalar::<Length>::from_si(a), Scalar::<Length>::from_si(b));
            let holds = [a < b, a == b, a > b].iter().filter(|x| **x).count();
            prop_assert_eq!(holds, 1);
        }

        #[test]
        fn prop_interpolation_hits_endpoints(a in -1e6..1e6f64, b in -1e6..1e6f64) {
            let zero = Scalar::new(a, length::FOOT);
            let one = Scalar::new(b, length::METER);
            let start = Scalar::interpolate(zero, one, 0.0);
            let end = Scalar::interpolate(zero, one, 1.0);
            prop_assert!((start.si() - zero.si()).abs() <= 1e-9 * zero.si().abs().max(1.0));
            prop_assert!((end.si() - one.si()).abs() <= 1e-9 * one.si().abs().max(1.0));
        }
    }
}
