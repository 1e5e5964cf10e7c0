//! Built-in quantities.
//!
//! Each module defines a quantity tag (an uninhabited enum implementing [`Quantity`](crate::Quantity)) and the unit
//! constants that belong to it. The first unit listed for a quantity is its base unit.
//!
//! Relative quantities can be added and subtracted freely. Absolute quantities ([`Direction`], [`Position`],
//! [`Time`], [`AbsoluteTemperature`]) are points on a scale and pair with the relative quantity of their differences.

pub mod absolute_temperature;
pub mod angle;
pub mod area;
pub mod dimensionless;
pub mod direction;
pub mod duration;
pub mod energy;
pub mod force;
pub mod frequency;
pub mod illuminance;
pub mod length;
pub mod luminous_flux;
pub mod luminous_intensity;
pub mod mass;
pub mod position;
pub mod power;
pub mod pressure;
pub mod radioactivity;
pub mod solid_angle;
pub mod speed;
pub mod temperature;
pub mod time;
pub mod volume;

pub use absolute_temperature::AbsoluteTemperature;
pub use angle::Angle;
pub use area::Area;
pub use dimensionless::Dimensionless;
pub use direction::Direction;
pub use duration::Duration;
pub use energy::Energy;
pub use force::Force;
pub use frequency::Frequency;
pub use illuminance::Illuminance;
pub use length::Length;
pub use luminous_flux::LuminousFlux;
pub use luminous_intensity::LuminousIntensity;
pub use mass::Mass;
pub use position::Position;
pub use power::Power;
pub use pressure::Pressure;
pub use radioactivity::Radioactivity;
pub use solid_angle::SolidAngle;
pub use speed::Speed;
pub use temperature::Temperature;
pub use time::Time;
pub use volume::Volume;
