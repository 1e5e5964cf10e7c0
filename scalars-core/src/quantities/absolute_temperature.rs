//! Thermodynamic temperatures, measured from absolute zero.

use super::temperature::Temperature;
use crate::{Quantity, Unit};

/// A temperature reading. Differences of readings are [`Temperature`]s.
///
/// ```rust
/// use scalars_core::{absolute_temperature, AbsoluteScalar, AbsoluteTemperature};
///
/// let body = AbsoluteScalar::<AbsoluteTemperature>::value_of("98.6 °F").unwrap();
/// assert!((body.in_unit(absolute_temperature::DEGREE_CELSIUS) - 37.0).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Quantity)]
#[quantity(
    name = "AbsoluteTemperature",
    dimensions = "K",
    units = [KELVIN, DEGREE_CELSIUS, DEGREE_FAHRENHEIT, DEGREE_RANKINE],
    relative = Temperature
)]
pub enum AbsoluteTemperature {}

/// Kelvin.
pub const KELVIN: Unit<AbsoluteTemperature> = Unit::new("K", "kelvin", 1.0);
/// Degree Celsius; 0 °C is 273.15 K.
pub const DEGREE_CELSIUS: Unit<AbsoluteTemperature> =
    Unit::with_offset("°C", "degree Celsius", 1.0, 273.15).aliases(&["degC"]);
/// Degree Fahrenheit; 0 °F is 459.67 °R.
pub const DEGREE_FAHRENHEIT: Unit<AbsoluteTemperature> =
    Unit::with_offset("°F", "degree Fahrenheit", 5.0 / 9.0, 459.67 * 5.0 / 9.0).aliases(&["degF"]);
/// Degree Rankine.
pub const DEGREE_RANKINE: Unit<AbsoluteTemperature> =
    Unit::new("°R", "degree Rankine", 5.0 / 9.0).aliases(&["degR"]);
