//! Masses.

use crate::{Quantity, Unit};

/// Mass; the kilogram is the base unit.
#[derive(Clone, Copy, Debug, PartialEq, Quantity)]
#[quantity(dimensions = "kg", units = [KILOGRAM, GRAM, MILLIGRAM, TONNE, POUND, OUNCE])]
pub enum Mass {}

/// Kilogram.
pub const KILOGRAM: Unit<Mass> = Unit::new("kg", "kilogram", 1.0);
/// Gram.
pub const GRAM: Unit<Mass> = Unit::new("g", "gram", 1e-3);
/// Milligram.
pub const MILLIGRAM: Unit<Mass> = Unit::new("mg", "milligram", 1e-6);
/// Metric tonne.
pub const TONNE: Unit<Mass> = Unit::new("t", "tonne", 1e3);
/// Avoirdupois pound.
pub const POUND: Unit<Mass> = Unit::new("lb", "pound", 0.45359237).aliases(&["lbs"]);
/// Avoirdupois ounce.
pub const OUNCE: Unit<Mass> = Unit::new("oz", "ounce", 0.028349523125);
