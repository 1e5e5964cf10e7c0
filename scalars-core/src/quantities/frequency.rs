//! Frequencies.

use crate::{Quantity, Unit};

/// Events per unit of time (SI base `Hz`).
#[derive(Clone, Copy, Debug, PartialEq, Quantity)]
#[quantity(
    dimensions = "s-1",
    units = [HERTZ, KILOHERTZ, MEGAHERTZ, GIGAHERTZ, REVOLUTIONS_PER_MINUTE]
)]
pub enum Frequency {}

/// Hertz.
pub const HERTZ: Unit<Frequency> = Unit::new("Hz", "hertz", 1.0);
/// Kilohertz.
pub const KILOHERTZ: Unit<Frequency> = Unit::new("kHz", "kilohertz", 1e3);
/// Megahertz.
pub const MEGAHERTZ: Unit<Frequency> = Unit::new("MHz", "megahertz", 1e6);
/// Gigahertz.
pub const GIGAHERTZ: Unit<Frequency> = Unit::new("GHz", "gigahertz", 1e9);
/// Revolutions (or events) per minute.
pub const REVOLUTIONS_PER_MINUTE: Unit<Frequency> =
    Unit::new("rpm", "revolutions per minute", 1.0 / 60.0).aliases(&["/min"]);
