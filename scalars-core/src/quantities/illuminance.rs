//! Illuminance.

use crate::{Quantity, Unit};

/// Luminous flux per unit area (SI base `lx`).
#[derive(Clone, Copy, Debug, PartialEq, Quantity)]
#[quantity(dimensions = "cd.sr.m-2", units = [LUX, KILOLUX, PHOT, FOOT_CANDLE])]
pub enum Illuminance {}

/// Lux.
pub const LUX: Unit<Illuminance> = Unit::new("lx", "lux", 1.0);
/// Kilolux.
pub const KILOLUX: Unit<Illuminance> = Unit::new("klx", "kilolux", 1e3);
/// Phot (lumen per square centimeter).
pub const PHOT: Unit<Illuminance> = Unit::new("ph", "phot", 1e4);
/// Foot-candle (lumen per square foot).
pub const FOOT_CANDLE: Unit<Illuminance> = Unit::new("fc", "foot-candle", 10.763_910_416_709_722);
