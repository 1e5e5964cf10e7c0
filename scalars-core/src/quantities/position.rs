//! Positions along an axis, measured from an origin.

use super::length::Length;
use crate::{Quantity, Unit};

/// A coordinate on a line; the distance between two positions is a [`Length`].
#[derive(Clone, Copy, Debug, PartialEq, Quantity)]
#[quantity(
    dimensions = "m",
    units = [METER, KILOMETER, CENTIMETER, MILLIMETER, FOOT, MILE],
    relative = Length
)]
pub enum Position {}

/// Meter.
pub const METER: Unit<Position> = Unit::new("m", "meter", 1.0);
/// Kilometer.
pub const KILOMETER: Unit<Position> = Unit::new("km", "kilometer", 1e3);
/// Centimeter.
pub const CENTIMETER: Unit<Position> = Unit::new("cm", "centimeter", 1e-2);
/// Millimeter.
pub const MILLIMETER: Unit<Position> = Unit::new("mm", "millimeter", 1e-3);
/// International foot.
pub const FOOT: Unit<Position> = Unit::new("ft", "foot", 0.3048);
/// Statute mile.
pub const MILE: Unit<Position> = Unit::new("mi", "mile", 1609.344);
