//! Unit-aware physical scalars.
//!
//! `scalars` is the user-facing crate in this workspace. It re-exports the full API from `scalars-core`: the
//! [`Scalar`] and [`AbsoluteScalar`] value types, one module per built-in quantity with its unit constants, text
//! parsing and formatting, and the declared cross-quantity operators.
//!
//! A value is always tagged with its quantity at compile time and with its display unit at run time. Conversion is
//! free (every scalar also carries its base-unit magnitude), and only physically meaningful arithmetic type-checks.
//!
//! # Quick start
//!
//! Parse, convert and compare:
//!
//! ```rust
//! use scalars::prelude::*;
//! use scalars::{length, Length};
//!
//! let marathon: Scalar<Length> = "42.195 km".parse().unwrap();
//! assert!((marathon.in_unit(length::MILE) - 26.219).abs() < 1e-3);
//! assert!(marathon > Scalar::new(26.0, length::MILE));
//! ```
//!
//! Combine quantities through the declared operators:
//!
//! ```rust
//! use scalars::{duration, energy, power, Power, Scalar};
//!
//! let used = Scalar::new(3.0, energy::KILOWATT_HOUR);
//! let draw: Scalar<Power> = used / Scalar::new(90.0, duration::MINUTE);
//! assert!((draw.in_unit(power::KILOWATT) - 2.0).abs() < 1e-12);
//! ```
//!
//! Work with points on an absolute scale:
//!
//! ```rust
//! use scalars::{absolute_temperature as abs_t, temperature, AbsoluteScalar, Scalar};
//!
//! let start = AbsoluteScalar::new(18.0, abs_t::DEGREE_CELSIUS);
//! let end = start + Scalar::new(9.0, temperature::DEGREE_FAHRENHEIT);
//! assert!((end.in_unit(abs_t::DEGREE_CELSIUS) - 23.0).abs() < 1e-9);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use scalars::{duration, length, Scalar};
//!
//! let _ = Scalar::new(1.0, length::METER) + Scalar::new(1.0, duration::SECOND);
//! ```
//!
//! # Modules
//!
//! Each built-in quantity lives in its own module, named after the quantity in snake case, and its tag type is also
//! re-exported at the crate root: `scalars::pressure::{PASCAL, BAR, ..}` with `scalars::Pressure`, and so on.
//! Absolute quantities (`direction`, `position`, `time`, `absolute_temperature`) pair with `angle`, `length`,
//! `duration` and `temperature` respectively.
//!
//! # Feature flags
//!
//! - `serde`: serializes scalars as `{"value": .., "unit": ".."}`; `scalars::serde_si` stores the raw base-unit
//!   magnitude instead.
//!
//! # Errors
//!
//! Parsing and unit resolution return [`ScalarResult`]; see [`ScalarError`] and [`ErrorKind`].
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![forbid(unsafe_code)]

pub use scalars_core::*;

/// The types and traits most code needs, in one import.
///
/// ```rust
/// use scalars::prelude::*;
///
/// let reading: AbsoluteScalar<scalars::Time> = AbsoluteScalar::value_of_in("3 u", &Locale::new("nl")).unwrap();
/// assert_eq!(reading.si(), 10_800.0);
/// ```
pub mod prelude {
    pub use scalars_core::{
        AbsoluteFactory, AbsoluteQuantity, AbsoluteScalar, Locale, Measure, Quantity, Scalar, ScalarError,
        ScalarResult, SiScalar, Unit,
    };
}
