//! Temperature differences.
//!
//! These units only scale: a difference of one degree Celsius equals one kelvin. Use
//! [`AbsoluteTemperature`](super::AbsoluteTemperature) for readings on a thermometer.

use crate::{Quantity, Unit};

/// A temperature difference.
#[derive(Clone, Copy, Debug, PartialEq, Quantity)]
#[quantity(
    dimensions = "K",
    units = [KELVIN, DEGREE_CELSIUS, DEGREE_FAHRENHEIT, DEGREE_RANKINE]
)]
pub enum Temperature {}

/// Kelvin.
pub const KELVIN: Unit<Temperature> = Unit::new("K", "kelvin", 1.0);
/// Degree Celsius (difference).
pub const DEGREE_CELSIUS: Unit<Temperature> = Unit::new("°C", "degree Celsius", 1.0).aliases(&["degC"]);
/// Degree Fahrenheit (difference).
pub const DEGREE_FAHRENHEIT: Unit<Temperature> =
    Unit::new("°F", "degree Fahrenheit", 5.0 / 9.0).aliases(&["degF"]);
/// Degree Rankine (difference).
pub const DEGREE_RANKINE: Unit<Temperature> =
    Unit::new("°R", "degree Rankine", 5.0 / 9.0).aliases(&["degR"]);
