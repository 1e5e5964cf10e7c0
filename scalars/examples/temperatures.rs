//! Absolute readings versus relative differences, with locale-aware parsing.
//!
//! Run with: cargo run --example temperatures

use scalars::prelude::*;
use scalars::{absolute_temperature as reading, duration, temperature, AbsoluteTemperature, Duration};

fn main() -> ScalarResult<()> {
    let samples = ["18.5 °C", "65 °F", "292.4 K", "19.1 degC"]
        .iter()
        .map(|text| AbsoluteScalar::<AbsoluteTemperature>::value_of(*text))
        .collect::<ScalarResult<Vec<_>>>()?;

    for sample in &samples {
        println!("{:>10} = {:.2}", sample.to_string(), sample.to_unit(reading::DEGREE_CELSIUS));
    }

    let (first, rest) = samples.split_first().expect("at least one sample");
    let warmest = AbsoluteScalar::max_of(*first, rest.iter().copied());
    let coolest = AbsoluteScalar::min_of(*first, rest.iter().copied());
    let range = warmest - coolest;
    println!("warmest {warmest}, coolest {coolest}, range {:.2}", range.to_unit(temperature::KELVIN));

    let midpoint = AbsoluteScalar::interpolate(coolest, warmest, 0.5)?;
    println!("midpoint {:.2}", midpoint.to_unit(reading::DEGREE_CELSIUS));

    let nl = Locale::new("nl");
    let window = Scalar::<Duration>::value_of_in("2 u", &nl)?;
    let rate = range.si() / window.in_unit(duration::MINUTE);
    println!("{} ({}): {:.4} K/min", window.format_localized(&nl), window, rate);

    Ok(())
}
