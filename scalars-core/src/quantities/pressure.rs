//! Pressures and stresses.

use crate::{Quantity, Unit};

/// Force per unit area (SI base `Pa`).
///
/// ```rust
/// use scalars_core::{pressure, Pressure, Scalar};
///
/// let tyre = Scalar::<Pressure>::value_of("32 psi").unwrap();
/// assert!((tyre.in_unit(pressure::BAR) - 2.206).abs() < 1e-3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Quantity)]
#[quantity(
    dimensions = "kg.m-1.s-2",
    units = [
        PASCAL, HECTOPASCAL, KILOPASCAL, MEGAPASCAL, BAR, MILLIBAR,
        ATMOSPHERE, MILLIMETER_OF_MERCURY, TORR, PSI,
    ]
)]
pub enum Pressure {}

/// Pascal.
pub const PASCAL: Unit<Pressure> = Unit::new("Pa", "pascal", 1.0);
/// Hectopascal.
pub const HECTOPASCAL: Unit<Pressure> = Unit::new("hPa", "hectopascal", 1e2);
/// Kilopascal.
pub const KILOPASCAL: Unit<Pressure> = Unit::new("kPa", "kilopascal", 1e3);
/// Megapascal.
pub const MEGAPASCAL: Unit<Pressure> = Unit::new("MPa", "megapascal", 1e6);
/// Bar.
pub const BAR: Unit<Pressure> = Unit::new("bar", "bar", 1e5);
/// Millibar.
pub const MILLIBAR: Unit<Pressure> = Unit::new("mbar", "millibar", 1e2);
/// Standard atmosphere.
pub const ATMOSPHERE: Unit<Pressure> = Unit::new("atm", "standard atmosphere", 101_325.0);
/// Conventional millimeter of mercury.
pub const MILLIMETER_OF_MERCURY: Unit<Pressure> =
    Unit::new("mmHg", "millimeter of mercury", 133.322387415);
/// Torr (1/760 atmosphere).
pub const TORR: Unit<Pressure> = Unit::new("Torr", "torr", 101_325.0 / 760.0);
/// Pound-force per square inch.
pub const PSI: Unit<Pressure> = Unit::new("psi", "pound per square inch", 6894.757293168);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Scalar;
    use approx::assert_relative_eq;

    #[test]
    fn atmosphere_conversions() {
        let atm = Scalar::new(1.0, ATMOSPHERE);
        assert_relative_eq!(atm.in_unit(HECTOPASCAL), 1013.25, epsilon = 1e-9);
        assert_relative_eq!(atm.in_unit(TORR), 760.0, epsilon = 1e-9);
        assert_relative_eq!(atm.in_unit(MILLIMETER_OF_MERCURY), 760.0, epsilon = 1e-3);
    }

    #[test]
    fn millibar_equals_hectopascal() {
        assert_eq!(Scalar::new(5.0, MILLIBAR), Scalar::new(5.0, HECTOPASCAL));
    }
}
