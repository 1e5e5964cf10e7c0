//! Luminous flux.

use crate::{Quantity, Unit};

/// Luminous flux: intensity times solid angle (SI base `lm`).
#[derive(Clone, Copy, Debug, PartialEq, Quantity)]
#[quantity(name = "LuminousFlux", dimensions = "cd.sr", units = [LUMEN, KILOLUMEN])]
pub enum LuminousFlux {}

/// Lumen.
pub const LUMEN: Unit<LuminousFlux> = Unit::new("lm", "lumen", 1.0);
/// Kilolumen.
pub const KILOLUMEN: Unit<LuminousFlux> = Unit::new("klm", "kilolumen", 1e3);
