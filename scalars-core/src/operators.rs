//! Declared cross-quantity products and quotients.
//!
//! Each row of the table below becomes a `Mul` or `Div` impl between two scalar types that yields a scalar of a third
//! quantity in its base unit. Combinations that are not listed simply have no operator, so they fail to compile
//! instead of failing at run time. Every row is also checked at compile time: the dimensions of the operands must
//! combine to the dimensions of the declared result.
//!
//! ```rust
//! use scalars_core::{area, pressure, Force, Scalar};
//!
//! let p = Scalar::new(2.0, pressure::KILOPASCAL);
//! let a = Scalar::new(3.0, area::SQUARE_METER);
//! let f: Scalar<Force> = p * a;
//! assert_eq!(f.si(), 6000.0);
//! ```
//!
//! ```compile_fail
//! use scalars_core::{Mass, Pressure, Scalar};
//!
//! let _ = Scalar::<Pressure>::ONE * Scalar::<Mass>::ONE;
//! ```

use crate::quantities::*;
use crate::scalar::Scalar;
use crate::unit::Quantity;
use core::ops::{Div, Mul};

/// Expands `Lhs * Rhs => Out;` and `Lhs / Rhs => Out;` rows into operator impls on [`Scalar`].
macro_rules! derived_operators {
    () => {};

    ($lhs:ident * $rhs:ident => $out:ident; $($rest:tt)*) => {
        const _: () = assert!(
            <$lhs as Quantity>::DIMENSIONS
                .multiply(&<$rhs as Quantity>::DIMENSIONS)
                .equals(&<$out as Quantity>::DIMENSIONS),
            concat!("dimensions of ", stringify!($lhs * $rhs), " do not match ", stringify!($out))
        );

        impl Mul<Scalar<$rhs>> for Scalar<$lhs> {
            type Output = Scalar<$out>;
            #[inline]
            fn mul(self, rhs: Scalar<$rhs>) -> Scalar<$out> {
                Scalar::from_si(self.si() * rhs.si())
            }
        }

        derived_operators!($($rest)*);
    };

    ($lhs:ident / $rhs:ident => $out:ident; $($rest:tt)*) => {
        const _: () = assert!(
            <$lhs as Quantity>::DIMENSIONS
                .divide(&<$rhs as Quantity>::DIMENSIONS)
                .equals(&<$out as Quantity>::DIMENSIONS),
            concat!("dimensions of ", stringify!($lhs / $rhs), " do not match ", stringify!($out))
        );

        impl Div<Scalar<$rhs>> for Scalar<$lhs> {
            type Output = Scalar<$out>;
            #[inline]
            fn div(self, rhs: Scalar<$rhs>) -> Scalar<$out> {
                Scalar::from_si(self.si() / rhs.si())
            }
        }

        derived_operators!($($rest)*);
    };
}

derived_operators! {
    // pressure
    Pressure * Area => Force;
    Area * Pressure => Force;
    Force / Area => Pressure;
    Force / Pressure => Area;
    Pressure * Volume => Energy;
    Volume * Pressure => Energy;
    Energy / Volume => Pressure;
    Energy / Pressure => Volume;

    // photometry
    Illuminance * Area => LuminousFlux;
    Area * Illuminance => LuminousFlux;
    LuminousFlux / Area => Illuminance;
    LuminousFlux / Illuminance => Area;
    SolidAngle * LuminousIntensity => LuminousFlux;
    LuminousIntensity * SolidAngle => LuminousFlux;
    LuminousFlux / SolidAngle => LuminousIntensity;
    LuminousFlux / LuminousIntensity => SolidAngle;

    // geometry
    Length * Length => Area;
    Area * Length => Volume;
    Length * Area => Volume;
    Area / Length => Length;
    Volume / Length => Area;
    Volume / Area => Length;

    // mechanics
    Force * Length => Energy;
    Length * Force => Energy;
    Energy / Length => Force;
    Energy / Force => Length;
    Energy / Duration => Power;
    Energy / Power => Duration;
    Power * Duration => Energy;
    Duration * Power => Energy;
    Force * Speed => Power;
    Speed * Force => Power;
    Power / Speed => Force;
    Power / Force => Speed;

    // kinematics
    Length / Duration => Speed;
    Length / Speed => Duration;
    Speed * Duration => Length;
    Duration * Speed => Length;

    // rates
    Dimensionless / Duration => Frequency;
    Dimensionless / Frequency => Duration;
    Frequency * Duration => Dimensionless;
    Duration * Frequency => Dimensionless;
}
