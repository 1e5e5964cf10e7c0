//! Lengths and distances (relative).

use crate::{Quantity, Unit};

/// A distance between two points.
#[derive(Clone, Copy, Debug, PartialEq, Quantity)]
#[quantity(
    dimensions = "m",
    units = [
        METER, KILOMETER, DECIMETER, CENTIMETER, MILLIMETER, MICROMETER, NANOMETER,
        INCH, FOOT, YARD, MILE, NAUTICAL_MILE, ASTRONOMICAL_UNIT,
    ]
)]
pub enum Length {}

/// Meter.
pub const METER: Unit<Length> = Unit::new("m", "meter", 1.0);
/// Kilometer.
pub const KILOMETER: Unit<Length> = Unit::new("km", "kilometer", 1e3);
/// Decimeter.
pub const DECIMETER: Unit<Length> = Unit::new("dm", "decimeter", 1e-1);
/// Centimeter.
pub const CENTIMETER: Unit<Length> = Unit::new("cm", "centimeter", 1e-2);
/// Millimeter.
pub const MILLIMETER: Unit<Length> = Unit::new("mm", "millimeter", 1e-3);
/// Micrometer.
pub const MICROMETER: Unit<Length> = Unit::new("µm", "micrometer", 1e-6).aliases(&["um"]);
/// Nanometer.
pub const NANOMETER: Unit<Length> = Unit::new("nm", "nanometer", 1e-9);
/// International inch.
pub const INCH: Unit<Length> = Unit::new("in", "inch", 0.0254);
/// International foot.
pub const FOOT: Unit<Length> = Unit::new("ft", "foot", 0.3048);
/// International yard.
pub const YARD: Unit<Length> = Unit::new("yd", "yard", 0.9144);
/// Statute mile.
pub const MILE: Unit<Length> = Unit::new("mi", "mile", 1609.344);
/// Nautical mile.
pub const NAUTICAL_MILE: Unit<Length> = Unit::new("nmi", "nautical mile", 1852.0);
/// Astronomical unit (IAU 2012).
pub const ASTRONOMICAL_UNIT: Unit<Length> = Unit::new("au", "astronomical unit", 149_597_870_700.0);
