//! Directions: absolute angles measured from a reference heading.

use super::angle::Angle;
use crate::{Quantity, Unit};
use core::f64::consts::PI;

/// A heading or bearing; differences of directions are [`Angle`]s.
#[derive(Clone, Copy, Debug, PartialEq, Quantity)]
#[quantity(dimensions = "rad", units = [RADIAN, DEGREE, GRADIAN], relative = Angle)]
pub enum Direction {}

/// Radian.
pub const RADIAN: Unit<Direction> = Unit::new("rad", "radian", 1.0);
/// Degree.
pub const DEGREE: Unit<Direction> = Unit::new("°", "degree", PI / 180.0).aliases(&["deg"]);
/// Gradian.
pub const GRADIAN: Unit<Direction> = Unit::new("grad", "gradian", PI / 200.0).aliases(&["gon"]);
