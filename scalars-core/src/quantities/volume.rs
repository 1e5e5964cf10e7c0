//! Volumes.

use crate::{Quantity, Unit};

/// Volume (SI base `m3`).
#[derive(Clone, Copy, Debug, PartialEq, Quantity)]
#[quantity(
    dimensions = "m3",
    units = [
        CUBIC_METER, CUBIC_DECIMETER, CUBIC_CENTIMETER, LITER, MILLILITER,
        CUBIC_FOOT, CUBIC_INCH, GALLON,
    ]
)]
pub enum Volume {}

/// Cubic meter.
pub const CUBIC_METER: Unit<Volume> = Unit::new("m3", "cubic meter", 1.0).aliases(&["m³"]);
/// Cubic decimeter.
pub const CUBIC_DECIMETER: Unit<Volume> = Unit::new("dm3", "cubic decimeter", 1e-3).aliases(&["dm³"]);
/// Cubic centimeter.
pub const CUBIC_CENTIMETER: Unit<Volume> =
    Unit::new("cm3", "cubic centimeter", 1e-6).aliases(&["cm³", "cc"]);
/// Liter.
pub const LITER: Unit<Volume> = Unit::new("L", "liter", 1e-3).aliases(&["l"]);
/// Milliliter.
pub const MILLILITER: Unit<Volume> = Unit::new("mL", "milliliter", 1e-6).aliases(&["ml"]);
/// Cubic foot.
pub const CUBIC_FOOT: Unit<Volume> = Unit::new("ft3", "cubic foot", 0.028316846592).aliases(&["ft³"]);
/// Cubic inch.
pub const CUBIC_INCH: Unit<Volume> = Unit::new("in3", "cubic inch", 1.6387064e-5).aliases(&["in³"]);
/// US liquid gallon.
pub const GALLON: Unit<Volume> = Unit::new("gal", "gallon", 3.785411784e-3);
