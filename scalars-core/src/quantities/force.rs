//! Forces.

use crate::{Quantity, Unit};

/// Force (SI base `N`).
#[derive(Clone, Copy, Debug, PartialEq, Quantity)]
#[quantity(
    dimensions = "kg.m.s-2",
    units = [NEWTON, KILONEWTON, MEGANEWTON, DYNE, KILOGRAM_FORCE, POUND_FORCE]
)]
pub enum Force {}

/// Newton.
pub const NEWTON: Unit<Force> = Unit::new("N", "newton", 1.0);
/// Kilonewton.
pub const KILONEWTON: Unit<Force> = Unit::new("kN", "kilonewton", 1e3);
/// Meganewton.
pub const MEGANEWTON: Unit<Force> = Unit::new("MN", "meganewton", 1e6);
/// Dyne.
pub const DYNE: Unit<Force> = Unit::new("dyn", "dyne", 1e-5);
/// Kilogram-force (standard gravity).
pub const KILOGRAM_FORCE: Unit<Force> = Unit::new("kgf", "kilogram-force", 9.80665);
/// Pound-force.
pub const POUND_FORCE: Unit<Force> = Unit::new("lbf", "pound-force", 4.4482216152605);
