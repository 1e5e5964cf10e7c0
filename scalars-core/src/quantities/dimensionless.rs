//! Dimensionless ratios.

use crate::{Quantity, Unit};

/// A pure number: ratios, counts, fractions.
#[derive(Clone, Copy, Debug, PartialEq, Quantity)]
#[quantity(dimensions = "", units = [UNITLESS, PERCENT, PERMILLE, PARTS_PER_MILLION])]
pub enum Dimensionless {}

/// The bare number; displayed without an abbreviation.
pub const UNITLESS: Unit<Dimensionless> = Unit::new("", "one", 1.0);
/// Percent.
pub const PERCENT: Unit<Dimensionless> = Unit::new("%", "percent", 1e-2);
/// Per mille.
pub const PERMILLE: Unit<Dimensionless> = Unit::new("‰", "per mille", 1e-3);
/// Parts per million.
pub const PARTS_PER_MILLION: Unit<Dimensionless> = Unit::new("ppm", "parts per million", 1e-6);
