//! Serde support for relative and absolute scalars.
//!
//! Both scalar kinds serialize as `{"value": <display value>, "unit": "<abbreviation>"}`. On the way in the unit is
//! resolved through the quantity's registry; a missing `unit` field means the base unit.

use crate::absolute::AbsoluteScalar;
use crate::error::ScalarError;
use crate::registry::Locale;
use crate::scalar::Scalar;
use crate::unit::{AbsoluteQuantity, Quantity, Unit};
use core::fmt;
use core::marker::PhantomData;
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

fn serialize_parts<Q, S>(name: &'static str, value: f64, unit: Unit<Q>, serializer: S) -> Result<S::Ok, S::Error>
where
    Q: Quantity,
    S: Serializer,
{
    let mut state = serializer.serialize_struct(name, 2)?;
    state.serialize_field("value", &value)?;
    state.serialize_field("unit", unit.abbreviation())?;
    state.end()
}

fn deserialize_parts<'de, Q, D>(name: &'static str, deserializer: D) -> Result<(f64, Unit<Q>), D::Error>
where
    Q: Quantity,
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(field_identifier, rename_all = "lowercase")]
    enum Field {
        Value,
        Unit,
    }

    struct PartsVisitor<Q>(PhantomData<Q>);

    impl<'de, Q: Quantity> Visitor<'de> for PartsVisitor<Q> {
        type Value = (f64, Unit<Q>);

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            write!(formatter, "a {} with value and unit fields", Q::NAME)
        }

        fn visit_map<V>(self, mut map: V) -> Result<Self::Value, V::Error>
        where
            V: MapAccess<'de>,
        {
            let mut value: Option<f64> = None;
            let mut unit: Option<String> = None;

            while let Some(key) = map.next_key()? {
                match key {
                    Field::Value => {
                        if value.is_some() {
                            return Err(de::Error::duplicate_field("value"));
                        }
                        value = Some(map.next_value()?);
                    }
                    Field::Unit => {
                        if unit.is_some() {
                            return Err(de::Error::duplicate_field("unit"));
                        }
                        unit = Some(map.next_value()?);
                    }
                }
            }

            let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
            let unit = match unit {
                None => Q::BASE,
                Some(text) => Q::registry().lookup(&text, &Locale::ROOT).ok_or_else(|| {
                    de::Error::custom(ScalarError::UnknownUnit {
                        unit: text.trim().to_string(),
                        text,
                        quantity: Q::NAME,
                        locale: Locale::ROOT.to_string(),
                    })
                })?,
            };
            Ok((value, unit))
        }
    }

    deserializer.deserialize_struct(name, &["value", "unit"], PartsVisitor(PhantomData))
}

impl<Q: Quantity> Serialize for Scalar<Q> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_parts("Scalar", self.value(), self.unit(), serializer)
    }
}

impl<'de, Q: Quantity> Deserialize<'de> for Scalar<Q> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (value, unit) = deserialize_parts("Scalar", deserializer)?;
        Ok(Scalar::new(value, unit))
    }
}

impl<A: AbsoluteQuantity> Serialize for AbsoluteScalar<A> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_parts("AbsoluteScalar", self.value(), self.unit(), serializer)
    }
}

impl<'de, A: AbsoluteQuantity> Deserialize<'de> for AbsoluteScalar<A> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (value, unit) = deserialize_parts("AbsoluteScalar", deserializer)?;
        Ok(AbsoluteScalar::new(value, unit))
    }
}

/// Compact serde adapter: a scalar as its raw magnitude in the base unit.
///
/// The display unit is not preserved; deserialized values are shown in the base unit.
///
/// ```rust
/// use scalars_core::{pressure, Pressure, Scalar};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Reading {
///     #[serde(with = "scalars_core::serde_si")]
///     pressure: Scalar<Pressure>,
/// }
///
/// let json = serde_json::to_string(&Reading { pressure: Scalar::new(2.0, pressure::KILOPASCAL) }).unwrap();
/// assert_eq!(json, r#"{"pressure":2000.0}"#);
/// ```
pub mod serde_si {
    use crate::measure::Measure;
    use crate::unit::Quantity;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes the magnitude in the base unit.
    pub fn serialize<M, S>(measure: &M, serializer: S) -> Result<S::Ok, S::Error>
    where
        M: Measure,
        S: Serializer,
    {
        serializer.serialize_f64(measure.si())
    }

    /// Deserializes a magnitude in the base unit.
    pub fn deserialize<'de, M, D>(deserializer: D) -> Result<M, D::Error>
    where
        M: Measure,
        D: Deserializer<'de>,
    {
        let si = f64::deserialize(deserializer)?;
        Ok(M::instantiate(si, <M::Quantity as Quantity>::BASE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::absolute_temperature::{self, AbsoluteTemperature};
    use crate::dimensionless::{self, Dimensionless};
    use crate::length::{self, Length};
    use crate::pressure::{self, Pressure};
    use crate::{SiDimensions, SiScalar};
    use serde::{Deserialize, Serialize};

    // ─────────────────────────────────────────────────────────────────────────────
    // Value and unit
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn serialize_keeps_display_unit() {
        let p = Scalar::new(2.5, pressure::KILOPASCAL);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"value":2.5,"unit":"kPa"}"#);
    }

    #[test]
    fn deserialize_resolves_unit() {
        let p: Scalar<Pressure> = serde_json::from_str(r#"{"unit":"bar","value":1.5}"#).unwrap();
        assert_eq!(p.unit(), pressure::BAR);
        assert_eq!(p.si(), 150_000.0);
    }

    #[test]
    fn deserialize_alias() {
        let l: Scalar<Length> = serde_json::from_str(r#"{"value":3.0,"unit":"um"}"#).unwrap();
        assert_eq!(l.unit(), length::MICROMETER);
    }

    #[test]
    fn missing_unit_means_base() {
        let l: Scalar<Length> = serde_json::from_str(r#"{"value":4.0}"#).unwrap();
        assert_eq!(l.unit(), length::METER);
        assert_eq!(l.value(), 4.0);
    }

    #[test]
    fn dimensionless_round_trip() {
        let ratio = Scalar::new(0.25, dimensionless::UNITLESS);
        let json = serde_json::to_string(&ratio).unwrap();
        assert_eq!(json, r#"{"value":0.25,"unit":""}"#);
        let back: Scalar<Dimensionless> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ratio);
    }

    #[test]
    fn absolute_round_trip() {
        let t = AbsoluteScalar::new(21.5, absolute_temperature::DEGREE_CELSIUS);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#"{"value":21.5,"unit":"°C"}"#);
        let back: AbsoluteScalar<AbsoluteTemperature> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.unit(), absolute_temperature::DEGREE_CELSIUS);
        assert_eq!(back, t);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Errors
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn unknown_unit_is_rejected() {
        let err = serde_json::from_str::<Scalar<Pressure>>(r#"{"value":1.0,"unit":"furlong"}"#).unwrap_err();
        assert!(err.to_string().contains("furlong"));
    }

    #[test]
    fn missing_value_is_rejected() {
        let err = serde_json::from_str::<Scalar<Pressure>>(r#"{"unit":"Pa"}"#).unwrap_err();
        assert!(err.to_string().contains("value"));
    }

    #[test]
    fn duplicate_field_is_rejected() {
        assert!(serde_json::from_str::<Scalar<Pressure>>(r#"{"value":1.0,"value":2.0}"#).is_err());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Adapters and companion types
    // ─────────────────────────────────────────────────────────────────────────────

    #[derive(Serialize, Deserialize)]
    struct Sample {
        #[serde(with = "serde_si")]
        depth: Scalar<Length>,
        #[serde(with = "serde_si")]
        ambient: AbsoluteScalar<AbsoluteTemperature>,
    }

    #[test]
    fn serde_si_uses_base_magnitude() {
        let sample = Sample {
            depth: Scalar::new(150.0, length::CENTIMETER),
            ambient: AbsoluteScalar::new(0.0, absolute_temperature::DEGREE_CELSIUS),
        };
        let json = serde_json::to_string(&sample).unwrap();
        assert_eq!(json, r#"{"depth":1.5,"ambient":273.15}"#);
        let back: Sample = serde_json::from_str(&json).unwrap();
        assert_eq!(back.depth.unit(), length::METER);
        assert_eq!(back.depth.value(), 1.5);
        assert_eq!(back.ambient.unit(), absolute_temperature::KELVIN);
    }

    #[test]
    fn si_scalar_and_locale() {
        let s = SiScalar::new(9.81, "m.s-2".parse::<SiDimensions>().unwrap());
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, r#"{"si":9.81,"dimensions":"m.s-2"}"#);
        assert_eq!(serde_json::from_str::<SiScalar>(&json).unwrap(), s);

        let locale: Locale = serde_json::from_str(r#""nl-NL""#).unwrap();
        assert_eq!(locale.language(), "nl");
    }
}
