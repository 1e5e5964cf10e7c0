//! Minimal end-to-end example: parse, convert, and combine pressure with area.

use scalars::{area, force, pressure, Force, Pressure, Scalar};

fn main() {
    let tyre: Scalar<Pressure> = "32 psi".parse().expect("valid pressure");
    println!("{} = {:.2}", tyre, tyre.to_unit(pressure::BAR));

    let patch = Scalar::new(150.0, area::SQUARE_CENTIMETER);
    let load: Scalar<Force> = tyre * patch;
    println!("load on a {} contact patch: {:.1}", patch, load.to_unit(force::KILONEWTON));
    assert!((load.in_unit(force::KILONEWTON) - 3.309).abs() < 1e-3);
}
