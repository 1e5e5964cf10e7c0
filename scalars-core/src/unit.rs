//! Quantity tags and unit descriptors.

use crate::dimension::SiDimensions;
use crate::registry::{Locale, UnitRegistry};
use core::fmt::{Debug, Display, Formatter, Result};
use core::marker::PhantomData;

/// Trait implemented by every **quantity** tag type (Pressure, Length, AbsoluteTemperature …).
///
/// A quantity tag is an uninhabited enum that only exists at the type level; it is usually implemented with
/// `#[derive(Quantity)]` and a `#[quantity(...)]` attribute.
///
/// * `NAME` is the human-readable quantity name used in error messages.
/// * `DIMENSIONS` are the SI exponents shared by every unit of the quantity.
/// * `BASE` is the base (SI) unit; it always has scale 1 and offset 0.
/// * `UNITS` lists every unit of the quantity, base unit first.
///
/// # Invariants
///
/// - Abbreviations (including aliases) are unique within `UNITS`.
/// - The registry returned by [`Quantity::registry`] is built once and never mutated afterwards.
pub trait Quantity: Copy + PartialEq + Debug + Send + Sync + 'static {
    /// Human-readable name.
    const NAME: &'static str;

    /// SI dimension vector.
    const DIMENSIONS: SiDimensions;

    /// Base (SI) unit.
    const BASE: Unit<Self>;

    /// Every unit of this quantity, base unit first.
    const UNITS: &'static [Unit<Self>];

    /// Abbreviation lookup table, built on first use.
    fn registry() -> &'static UnitRegistry<Self>;
}

/// Quantity whose zero point is a fixed reference (a calendar time, an absolute temperature …).
///
/// Each absolute quantity is permanently paired with the relative quantity used for its differences and offsets.
pub trait AbsoluteQuantity: Quantity {
    /// The relative counterpart (e.g. `Duration` for `Time`).
    type Relative: Quantity;
}

/// A unit of quantity `Q`.
///
/// A unit converts a magnitude expressed in itself to the base representation of its quantity with
/// `si = value * scale + offset`. Relative quantities only use the scale; absolute quantities may also carry an
/// offset (e.g. degree Celsius on the absolute temperature scale).
///
/// ```rust
/// use scalars_core::pressure::{KILOPASCAL, PASCAL};
///
/// assert_eq!(KILOPASCAL.to_base(1.5), 1500.0);
/// assert_eq!(PASCAL.abbreviation(), "Pa");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Unit<Q> {
    abbreviation: &'static str,
    name: &'static str,
    aliases: &'static [&'static str],
    localized: &'static [(&'static str, &'static str)],
    scale: f64,
    offset: f64,
    _quantity: PhantomData<fn() -> Q>,
}

impl<Q: Quantity> Unit<Q> {
    /// Creates a unit with a pure scale factor to the base unit.
    pub const fn new(abbreviation: &'static str, name: &'static str, scale: f64) -> Self {
        Self {
            abbreviation,
            name,
            aliases: &[],
            localized: &[],
            scale,
            offset: 0.0,
            _quantity: PhantomData,
        }
    }

    /// Creates a unit with a scale factor and an additive offset to the base unit.
    pub const fn with_offset(
        abbreviation: &'static str,
        name: &'static str,
        scale: f64,
        offset: f64,
    ) -> Self {
        Self {
            offset,
            ..Self::new(abbreviation, name, scale)
        }
    }

    /// Adds alternative abbreviations accepted when parsing.
    pub const fn aliases(self, aliases: &'static [&'static str]) -> Self {
        Self { aliases, ..self }
    }

    /// Adds `(language, abbreviation)` pairs used for locale-aware parsing and formatting.
    pub const fn localized(self, localized: &'static [(&'static str, &'static str)]) -> Self {
        Self { localized, ..self }
    }

    /// Default display abbreviation.
    #[inline]
    pub const fn abbreviation(&self) -> &'static str {
        self.abbreviation
    }

    /// Long name of the unit.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Alternative abbreviations accepted when parsing.
    #[inline]
    pub const fn alias_list(&self) -> &'static [&'static str] {
        self.aliases
    }

    /// `(language, abbreviation)` pairs.
    #[inline]
    pub const fn localized_list(&self) -> &'static [(&'static str, &'static str)] {
        self.localized
    }

    /// Multiplicative factor to the base unit.
    #[inline]
    pub const fn scale(&self) -> f64 {
        self.scale
    }

    /// Additive offset to the base unit, applied after scaling.
    #[inline]
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    /// Whether this unit is the neutral base unit.
    pub fn is_base(&self) -> bool {
        self.scale == 1.0 && self.offset == 0.0
    }

    /// Converts a magnitude in this unit to the base representation.
    #[inline]
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.scale + self.offset
    }

    /// Converts a base-representation magnitude to this unit.
    #[inline]
    pub fn from_base(&self, si: f64) -> f64 {
        (si - self.offset) / self.scale
    }

    /// Abbreviation for `locale`, falling back to the default abbreviation.
    pub fn localized_abbreviation(&self, locale: &Locale) -> &'static str {
        let language = locale.language();
        self.localized
            .iter()
            .find(|(lang, _)| lang.eq_ignore_ascii_case(language))
            .map(|(_, abbreviation)| *abbreviation)
            .unwrap_or(self.abbreviation)
    }

    /// Every abbreviation accepted for this unit in the root locale.
    pub fn abbreviations(&self) -> impl Iterator<Item = &'static str> {
        core::iter::once(self.abbreviation).chain(self.aliases.iter().copied())
    }
}

impl<A: AbsoluteQuantity> Unit<A> {
    /// The relative unit used for differences of values displayed in this unit.
    ///
    /// This is the relative unit with the same abbreviation and scale (e.g. absolute `°C` maps to the
    /// temperature-difference `°C`), or the relative base unit when no such unit exists.
    pub fn relative_unit(&self) -> Unit<A::Relative> {
        A::Relative::registry()
            .lookup(self.abbreviation, &Locale::ROOT)
            .filter(|unit| unit.scale == self.scale)
            .unwrap_or(A::Relative::BASE)
    }
}

impl<Q: Quantity> Display for Unit<Q> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.abbreviation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::absolute_temperature::{self, AbsoluteTemperature};
    use crate::duration::{self, Duration};
    use crate::temperature::{self, Temperature};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Conversion to and from the base unit
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn scale_only_unit() {
        assert_eq!(duration::HOUR.to_base(2.0), 7200.0);
        assert_eq!(duration::HOUR.from_base(1800.0), 0.5);
    }

    #[test]
    fn offset_unit() {
        let celsius = absolute_temperature::DEGREE_CELSIUS;
        assert_relative_eq!(celsius.to_base(0.0), 273.15, epsilon = 1e-12);
        assert_relative_eq!(celsius.from_base(373.15), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn fahrenheit_absolute() {
        let fahrenheit = absolute_temperature::DEGREE_FAHRENHEIT;
        assert_relative_eq!(fahrenheit.to_base(32.0), 273.15, epsilon = 1e-9);
        assert_relative_eq!(fahrenheit.to_base(212.0), 373.15, epsilon = 1e-9);
    }

    #[test]
    fn base_unit_is_neutral() {
        assert!(Temperature::BASE.is_base());
        assert!(Duration::BASE.is_base());
        assert!(!duration::MINUTE.is_base());
        assert!(!absolute_temperature::DEGREE_CELSIUS.is_base());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Abbreviations
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn abbreviations_include_aliases() {
        let all: Vec<_> = temperature::DEGREE_CELSIUS.abbreviations().collect();
        assert_eq!(all[0], "°C");
        assert!(all.contains(&"degC"));
    }

    #[test]
    fn localized_abbreviation_falls_back() {
        let dutch = Locale::new("nl-NL");
        assert_eq!(duration::HOUR.localized_abbreviation(&dutch), "u");
        assert_eq!(duration::SECOND.localized_abbreviation(&dutch), "s");
        assert_eq!(duration::HOUR.localized_abbreviation(&Locale::ROOT), "h");
    }

    #[test]
    fn display_is_abbreviation() {
        assert_eq!(temperature::KELVIN.to_string(), "K");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Absolute to relative unit mapping
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn relative_unit_matches_abbreviation_and_scale() {
        let rel = absolute_temperature::DEGREE_CELSIUS.relative_unit();
        assert_eq!(rel, temperature::DEGREE_CELSIUS);
        let rel = absolute_temperature::DEGREE_FAHRENHEIT.relative_unit();
        assert_eq!(rel, temperature::DEGREE_FAHRENHEIT);
    }

    #[test]
    fn relative_unit_of_base_is_base() {
        assert_eq!(AbsoluteTemperature::BASE.relative_unit(), Temperature::BASE);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_roundtrip_every_absolute_temperature_unit(v in -1e6..1e6f64) {
            for unit in AbsoluteTemperature::UNITS {
                let back = unit.from_base(unit.to_base(v));
                prop_assert!((back - v).abs() <= 1e-9 * v.abs().max(1.0));
            }
        }

        #[test]
        fn prop_roundtrip_every_duration_unit(v in -1e9..1e9f64) {
            for unit in Duration::UNITS {
                let back = unit.from_base(unit.to_base(v));
                prop_assert!((back - v).abs() <= 1e-9 * v.abs().max(1.0));
            }
        }
    }
}
