//! Core type system for unit-tagged physical scalars.
//!
//! `scalars-core` models a measured magnitude as an `f64` tagged at the type level with the physical quantity it
//! belongs to and, at run time, with the unit it is displayed in:
//!
//! - A *quantity* is an uninhabited tag type implementing [`Quantity`] (for example [`Pressure`]), declared with
//!   `#[derive(Quantity)]`. It owns a fixed table of [`Unit`]s and a lazily built [`UnitRegistry`].
//! - A [`Scalar<Q>`] is a relative magnitude (a length, a duration, a temperature difference). It stores both the
//!   display value and the base-unit (`si`) value, and compares and computes on the latter.
//! - An [`AbsoluteScalar<A>`] is a point on a scale with a fixed origin (a temperature reading, a timestamp). Its
//!   differences are relative scalars of the paired quantity `A::Relative`.
//! - Products and quotients between different quantities exist only where they are declared, so
//!   `pressure * area` yields a force while `pressure * mass` does not compile.
//!
//! Most users should depend on `scalars` (the facade crate) instead.
//!
//! # Quick start
//!
//! ```rust
//! use scalars_core::{area, pressure, Force, Pressure, Scalar};
//!
//! let p: Scalar<Pressure> = "1013.25 hPa".parse().unwrap();
//! assert!((p.in_unit(pressure::BAR) - 1.01325).abs() < 1e-12);
//!
//! let f: Scalar<Force> = p * Scalar::new(2.0, area::SQUARE_METER);
//! assert!((f.si() - 202_650.0).abs() < 1e-6);
//! ```
//!
//! Readings on an absolute scale subtract to a relative scalar:
//!
//! ```rust
//! use scalars_core::{absolute_temperature, temperature, AbsoluteScalar};
//!
//! let inside = AbsoluteScalar::new(21.0, absolute_temperature::DEGREE_CELSIUS);
//! let outside = AbsoluteScalar::new(50.0, absolute_temperature::DEGREE_FAHRENHEIT);
//! let gap = inside - outside;
//! assert_eq!(gap.unit(), temperature::DEGREE_CELSIUS);
//! assert!((gap.value() - 11.0).abs() < 1e-9);
//! ```
//!
//! # Feature flags
//!
//! - `serde`: `Serialize`/`Deserialize` for scalars (`{"value": .., "unit": ".."}`), [`SiDimensions`], [`SiScalar`]
//!   and [`Locale`], plus the compact `serde_si` adapter.
//!
//! # Errors
//!
//! Only boundary operations return [`ScalarResult`]: parsing text, resolving unit abbreviations, interpolating
//! absolute scalars and narrowing an [`SiScalar`]. Arithmetic follows IEEE-754 and never fails.
//!
//! # Logging
//!
//! Diagnostics go through the [`log`] facade: registry construction at `debug`, conflicting unit tables at `warn` and
//! rejected input at `trace`. The crate never installs a logger.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod absolute;
mod dimension;
mod error;
mod measure;
mod operators;
pub mod parse;
mod quantities;
mod registry;
mod scalar;
mod si;
mod unit;

#[cfg(feature = "serde")]
mod serde_impls;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use absolute::AbsoluteScalar;
pub use dimension::{SiDimensions, SI_SYMBOLS};
pub use error::{ErrorKind, ScalarError, ScalarResult};
pub use measure::{interpolate, max_of, min_of, spread, AbsoluteFactory, Measure};
pub use registry::{Locale, UnitRegistry};
pub use scalar::Scalar;
pub use si::SiScalar;
pub use unit::{AbsoluteQuantity, Quantity, Unit};

/// Derives [`Quantity`] (and [`AbsoluteQuantity`] with `relative = ...`) for a quantity tag.
pub use scalars_derive::Quantity;

#[cfg(feature = "serde")]
pub use serde_impls::serde_si;

// ─────────────────────────────────────────────────────────────────────────────
// Built-in quantities (one module per quantity, tags re-exported at the root)
// ─────────────────────────────────────────────────────────────────────────────

pub use quantities::*;
