//! Serializing scalars with their display unit, or compactly as base-unit magnitudes.
//!
//! Run with: cargo run --example serde_scalars --features serde

use scalars::{absolute_temperature, length, pressure, AbsoluteScalar, AbsoluteTemperature, Length, Pressure, Scalar};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
struct Station {
    name: String,
    // {"value": .., "unit": ".."}
    elevation: Scalar<Length>,
    air_temperature: AbsoluteScalar<AbsoluteTemperature>,
    // raw pascals
    #[serde(with = "scalars::serde_si")]
    barometer: Scalar<Pressure>,
}

fn main() -> Result<(), serde_json::Error> {
    let station = Station {
        name: "Ukkel".to_string(),
        elevation: Scalar::new(100.0, length::METER),
        air_temperature: AbsoluteScalar::new(12.3, absolute_temperature::DEGREE_CELSIUS),
        barometer: Scalar::new(1013.2, pressure::HECTOPASCAL),
    };

    let json = serde_json::to_string_pretty(&station)?;
    println!("{json}");

    let incoming = r#"{
        "name": "Jungfraujoch",
        "elevation": {"value": 11330, "unit": "ft"},
        "air_temperature": {"value": 14.9, "unit": "°F"},
        "barometer": 65800.0
    }"#;
    let parsed: Station = serde_json::from_str(incoming)?;
    println!(
        "{}: {:.0} at {:.1}, {:.1}",
        parsed.name,
        parsed.elevation.to_unit(length::METER),
        parsed.air_temperature.to_unit(absolute_temperature::DEGREE_CELSIUS),
        parsed.barometer.to_unit(pressure::HECTOPASCAL),
    );

    let rejected = serde_json::from_str::<Station>(&incoming.replace("\"ft\"", "\"furlong\""));
    println!("unknown unit: {}", rejected.map(|_| ()).unwrap_err());
    Ok(())
}
