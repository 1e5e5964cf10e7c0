//! Luminous intensity.

use crate::{Quantity, Unit};

/// Luminous intensity (SI base `cd`).
#[derive(Clone, Copy, Debug, PartialEq, Quantity)]
#[quantity(name = "LuminousIntensity", dimensions = "cd", units = [CANDELA, MILLICANDELA])]
pub enum LuminousIntensity {}

/// Candela.
pub const CANDELA: Unit<LuminousIntensity> = Unit::new("cd", "candela", 1.0);
/// Millicandela.
pub const MILLICANDELA: Unit<LuminousIntensity> = Unit::new("mcd", "millicandela", 1e-3);
