//! Solid angles.

use crate::{Quantity, Unit};
use core::f64::consts::PI;

/// Solid angle (SI base `sr`).
#[derive(Clone, Copy, Debug, PartialEq, Quantity)]
#[quantity(name = "SolidAngle", dimensions = "sr", units = [STERADIAN, SQUARE_DEGREE, SPAT])]
pub enum SolidAngle {}

/// Steradian.
pub const STERADIAN: Unit<SolidAngle> = Unit::new("sr", "steradian", 1.0);
/// Square degree.
pub const SQUARE_DEGREE: Unit<SolidAngle> =
    Unit::new("deg2", "square degree", (PI / 180.0) * (PI / 180.0)).aliases(&["sq.deg", "°²"]);
/// The full sphere.
pub const SPAT: Unit<SolidAngle> = Unit::new("sp", "spat", 4.0 * PI);
