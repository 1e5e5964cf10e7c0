//! Power.

use crate::{Quantity, Unit};

/// Energy per unit of time (SI base `W`).
#[derive(Clone, Copy, Debug, PartialEq, Quantity)]
#[quantity(
    dimensions = "kg.m2.s-3",
    units = [WATT, MILLIWATT, KILOWATT, MEGAWATT, GIGAWATT, HORSEPOWER, METRIC_HORSEPOWER]
)]
pub enum Power {}

/// Watt.
pub const WATT: Unit<Power> = Unit::new("W", "watt", 1.0);
/// Milliwatt.
pub const MILLIWATT: Unit<Power> = Unit::new("mW", "milliwatt", 1e-3);
/// Kilowatt.
pub const KILOWATT: Unit<Power> = Unit::new("kW", "kilowatt", 1e3);
/// Megawatt.
pub const MEGAWATT: Unit<Power> = Unit::new("MW", "megawatt", 1e6);
/// Gigawatt.
pub const GIGAWATT: Unit<Power> = Unit::new("GW", "gigawatt", 1e9);
/// Mechanical horsepower.
pub const HORSEPOWER: Unit<Power> = Unit::new("hp", "horsepower", 745.699_871_582_270_2);
/// Metric horsepower.
pub const METRIC_HORSEPOWER: Unit<Power> = Unit::new("PS", "metric horsepower", 735.498_75);
