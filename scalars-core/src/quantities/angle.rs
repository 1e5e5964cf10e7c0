//! Plane angles (relative).

use crate::{Quantity, Unit};
use core::f64::consts::PI;

/// An angular difference, such as a rotation or an aperture.
#[derive(Clone, Copy, Debug, PartialEq, Quantity)]
#[quantity(
    dimensions = "rad",
    units = [RADIAN, MILLIRADIAN, DEGREE, ARC_MINUTE, ARC_SECOND, GRADIAN, REVOLUTION]
)]
pub enum Angle {}

/// Radian.
pub const RADIAN: Unit<Angle> = Unit::new("rad", "radian", 1.0);
/// Milliradian.
pub const MILLIRADIAN: Unit<Angle> = Unit::new("mrad", "milliradian", 1e-3);
/// Degree.
pub const DEGREE: Unit<Angle> = Unit::new("°", "degree", PI / 180.0).aliases(&["deg"]);
/// Minute of arc.
pub const ARC_MINUTE: Unit<Angle> = Unit::new("arcmin", "arc minute", PI / 10_800.0).aliases(&["′"]);
/// Second of arc.
pub const ARC_SECOND: Unit<Angle> = Unit::new("arcsec", "arc second", PI / 648_000.0).aliases(&["″"]);
/// Gradian (1/400 of a turn).
pub const GRADIAN: Unit<Angle> = Unit::new("grad", "gradian", PI / 200.0).aliases(&["gon"]);
/// Full revolution.
pub const REVOLUTION: Unit<Angle> = Unit::new("rev", "revolution", 2.0 * PI).aliases(&["turn"]);
