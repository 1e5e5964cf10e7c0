//! Radioactivity.

use crate::{Quantity, Unit};

/// Decays per unit of time (SI base `Bq`).
#[derive(Clone, Copy, Debug, PartialEq, Quantity)]
#[quantity(
    dimensions = "s-1",
    units = [
        BECQUEREL, KILOBECQUEREL, MEGABECQUEREL, GIGABECQUEREL,
        CURIE, MILLICURIE, MICROCURIE, RUTHERFORD,
    ]
)]
pub enum Radioactivity {}

/// Becquerel.
pub const BECQUEREL: Unit<Radioactivity> = Unit::new("Bq", "becquerel", 1.0);
/// Kilobecquerel.
pub const KILOBECQUEREL: Unit<Radioactivity> = Unit::new("kBq", "kilobecquerel", 1e3);
/// Megabecquerel.
pub const MEGABECQUEREL: Unit<Radioactivity> = Unit::new("MBq", "megabecquerel", 1e6);
/// Gigabecquerel.
pub const GIGABECQUEREL: Unit<Radioactivity> = Unit::new("GBq", "gigabecquerel", 1e9);
/// Curie.
pub const CURIE: Unit<Radioactivity> = Unit::new("Ci", "curie", 3.7e10);
/// Millicurie.
pub const MILLICURIE: Unit<Radioactivity> = Unit::new("mCi", "millicurie", 3.7e7);
/// Microcurie.
pub const MICROCURIE: Unit<Radioactivity> = Unit::new("µCi", "microcurie", 3.7e4).aliases(&["uCi"]);
/// Rutherford.
pub const RUTHERFORD: Unit<Radioactivity> = Unit::new("Rd", "rutherford", 1e6);
