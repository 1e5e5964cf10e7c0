//! Areas.

use crate::{Quantity, Unit};

/// Area (SI base `m2`).
#[derive(Clone, Copy, Debug, PartialEq, Quantity)]
#[quantity(
    dimensions = "m2",
    units = [
        SQUARE_METER, SQUARE_KILOMETER, SQUARE_CENTIMETER, SQUARE_MILLIMETER,
        HECTARE, ARE, SQUARE_FOOT, SQUARE_INCH, ACRE,
    ]
)]
pub enum Area {}

/// Square meter.
pub const SQUARE_METER: Unit<Area> = Unit::new("m2", "square meter", 1.0).aliases(&["m²"]);
/// Square kilometer.
pub const SQUARE_KILOMETER: Unit<Area> = Unit::new("km2", "square kilometer", 1e6).aliases(&["km²"]);
/// Square centimeter.
pub const SQUARE_CENTIMETER: Unit<Area> = Unit::new("cm2", "square centimeter", 1e-4).aliases(&["cm²"]);
/// Square millimeter.
pub const SQUARE_MILLIMETER: Unit<Area> = Unit::new("mm2", "square millimeter", 1e-6).aliases(&["mm²"]);
/// Hectare.
pub const HECTARE: Unit<Area> = Unit::new("ha", "hectare", 1e4);
/// Are.
pub const ARE: Unit<Area> = Unit::new("a", "are", 1e2);
/// Square foot.
pub const SQUARE_FOOT: Unit<Area> = Unit::new("ft2", "square foot", 0.09290304).aliases(&["ft²"]);
/// Square inch.
pub const SQUARE_INCH: Unit<Area> = Unit::new("in2", "square inch", 6.4516e-4).aliases(&["in²"]);
/// International acre.
pub const ACRE: Unit<Area> = Unit::new("ac", "acre", 4046.8564224);
