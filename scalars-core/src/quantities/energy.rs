//! Energy, work and heat.

use crate::{Quantity, Unit};

/// Energy (SI base `J`).
#[derive(Clone, Copy, Debug, PartialEq, Quantity)]
#[quantity(
    dimensions = "kg.m2.s-2",
    units = [
        JOULE, KILOJOULE, MEGAJOULE, GIGAJOULE, WATT_HOUR, KILOWATT_HOUR,
        CALORIE, KILOCALORIE, ELECTRONVOLT, BRITISH_THERMAL_UNIT,
    ]
)]
pub enum Energy {}

/// Joule.
pub const JOULE: Unit<Energy> = Unit::new("J", "joule", 1.0);
/// Kilojoule.
pub const KILOJOULE: Unit<Energy> = Unit::new("kJ", "kilojoule", 1e3);
/// Megajoule.
pub const MEGAJOULE: Unit<Energy> = Unit::new("MJ", "megajoule", 1e6);
/// Gigajoule.
pub const GIGAJOULE: Unit<Energy> = Unit::new("GJ", "gigajoule", 1e9);
/// Watt-hour.
pub const WATT_HOUR: Unit<Energy> = Unit::new("Wh", "watt-hour", 3.6e3);
/// Kilowatt-hour.
pub const KILOWATT_HOUR: Unit<Energy> = Unit::new("kWh", "kilowatt-hour", 3.6e6);
/// Thermochemical calorie.
pub const CALORIE: Unit<Energy> = Unit::new("cal", "calorie", 4.184);
/// Thermochemical kilocalorie.
pub const KILOCALORIE: Unit<Energy> = Unit::new("kcal", "kilocalorie", 4184.0);
/// Electronvolt.
pub const ELECTRONVOLT: Unit<Energy> = Unit::new("eV", "electronvolt", 1.602176634e-19);
/// International-table British thermal unit.
pub const BRITISH_THERMAL_UNIT: Unit<Energy> =
    Unit::new("BTU", "british thermal unit", 1055.05585262).aliases(&["Btu"]);
