//! Speeds.

use crate::{Quantity, Unit};

/// Distance covered per unit of time.
#[derive(Clone, Copy, Debug, PartialEq, Quantity)]
#[quantity(
    dimensions = "m.s-1",
    units = [METER_PER_SECOND, KILOMETER_PER_HOUR, MILE_PER_HOUR, KNOT, FOOT_PER_SECOND]
)]
pub enum Speed {}

/// Meter per second.
pub const METER_PER_SECOND: Unit<Speed> = Unit::new("m/s", "meter per second", 1.0);
/// Kilometer per hour.
pub const KILOMETER_PER_HOUR: Unit<Speed> =
    Unit::new("km/h", "kilometer per hour", 1.0 / 3.6).aliases(&["kph"]);
/// Mile per hour.
pub const MILE_PER_HOUR: Unit<Speed> = Unit::new("mi/h", "mile per hour", 0.44704).aliases(&["mph"]);
/// Knot (nautical mile per hour).
pub const KNOT: Unit<Speed> = Unit::new("kt", "knot", 1852.0 / 3600.0).aliases(&["kn"]);
/// Foot per second.
pub const FOOT_PER_SECOND: Unit<Speed> = Unit::new("ft/s", "foot per second", 0.3048);
