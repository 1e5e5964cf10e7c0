//! Per-quantity unit registry and locale handle.
//!
//! Every quantity owns exactly one [`UnitRegistry`], built from its unit table the first time it is needed and read-only
//! afterwards. Lookups never allocate on the hot path for the root locale.

use crate::unit::{Quantity, Unit};
use log::{debug, warn};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A BCP-47-like locale tag threaded explicitly into locale-aware parsing and formatting.
///
/// Only the language subtag (the part before the first `-` or `_`) selects localized abbreviations.
///
/// ```rust
/// use scalars_core::Locale;
///
/// assert_eq!(Locale::new("nl-NL").language(), "nl");
/// assert_eq!(Locale::ROOT.to_string(), "root");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Locale {
    tag: Cow<'static, str>,
}

impl Locale {
    /// The root locale: only default abbreviations and aliases are recognised.
    pub const ROOT: Locale = Locale {
        tag: Cow::Borrowed(""),
    };

    /// Creates a locale from a tag such as `"de"`, `"nl-NL"` or `"en_US"`.
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self { tag: tag.into() }
    }

    /// The full tag as given.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The language subtag.
    pub fn language(&self) -> &str {
        self.tag.split(['-', '_']).next().unwrap_or("")
    }

    /// Whether this is the root locale.
    pub fn is_root(&self) -> bool {
        self.tag.is_empty()
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.is_root() {
            f.write_str("root")
        } else {
            f.write_str(&self.tag)
        }
    }
}

/// Abbreviation lookup table for the units of quantity `Q`.
///
/// Built from `Q::UNITS`; when two units claim the same abbreviation the first registration wins and a warning is
/// logged.
#[derive(Debug)]
pub struct UnitRegistry<Q: Quantity> {
    units: &'static [Unit<Q>],
    by_abbreviation: HashMap<&'static str, Unit<Q>>,
    by_language: HashMap<String, HashMap<&'static str, Unit<Q>>>,
}

impl<Q: Quantity> UnitRegistry<Q> {
    /// Builds the registry for a unit table; the first unit is the base unit.
    pub fn new(units: &'static [Unit<Q>]) -> Self {
        debug!("building {} unit registry with {} units", Q::NAME, units.len());

        if let Some(base) = units.first() {
            if !base.is_base() {
                warn!(
                    "{} base unit `{}` has scale {} and offset {}",
                    Q::NAME,
                    base.abbreviation(),
                    base.scale(),
                    base.offset()
                );
            }
        }

        let mut by_abbreviation = HashMap::new();
        let mut by_language: HashMap<String, HashMap<&'static str, Unit<Q>>> = HashMap::new();

        for unit in units {
            for abbreviation in unit.abbreviations() {
                insert_first(&mut by_abbreviation, abbreviation, *unit, Q::NAME);
            }
            for &(language, abbreviation) in unit.localized_list() {
                let table = by_language.entry(language.to_ascii_lowercase()).or_default();
                insert_first(table, abbreviation, *unit, Q::NAME);
            }
        }

        Self {
            units,
            by_abbreviation,
            by_language,
        }
    }

    /// Resolves an abbreviation for `locale`.
    ///
    /// Surrounding whitespace is ignored and matching is case-sensitive. Blank text only resolves for quantities
    /// whose unit has an empty abbreviation (dimensionless). A localized abbreviation for the locale's
    /// language takes precedence over the default abbreviations and aliases.
    pub fn lookup(&self, text: &str, locale: &Locale) -> Option<Unit<Q>> {
        let text = text.trim();

        if !locale.is_root() {
            let language = locale.language().to_ascii_lowercase();
            if let Some(unit) = self
                .by_language
                .get(&language)
                .and_then(|table| table.get(text))
            {
                return Some(*unit);
            }
        }

        self.by_abbreviation.get(text).copied()
    }

    /// The registered units, base unit first.
    pub fn units(&self) -> &'static [Unit<Q>] {
        self.units
    }

    /// Number of abbreviations resolvable in the root locale.
    pub fn len(&self) -> usize {
        self.by_abbreviation.len()
    }

    /// Whether no abbreviation is registered.
    pub fn is_empty(&self) -> bool {
        self.by_abbreviation.is_empty()
    }
}

fn insert_first<Q: Quantity>(
    table: &mut HashMap<&'static str, Unit<Q>>,
    abbreviation: &'static str,
    unit: Unit<Q>,
    quantity: &str,
) {
    match table.get(abbreviation) {
        Some(existing) => warn!(
            "{} abbreviation `{}` of {} already registered for {}; keeping the first",
            quantity,
            abbreviation,
            unit.name(),
            existing.name()
        ),
        None => {
            table.insert(abbreviation, unit);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duration::{self, Duration};
    use crate::pressure::{self, Pressure};
    use crate::temperature::{self, Temperature};

    // ─────────────────────────────────────────────────────────────────────────────
    // Locale
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn locale_language_subtag() {
        assert_eq!(Locale::new("de").language(), "de");
        assert_eq!(Locale::new("en_US").language(), "en");
        assert_eq!(Locale::ROOT.language(), "");
    }

    #[test]
    fn locale_display() {
        assert_eq!(Locale::default().to_string(), "root");
        assert_eq!(Locale::new(String::from("nl-BE")).to_string(), "nl-BE");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Lookup
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn lookup_trims_whitespace() {
        let registry = Pressure::registry();
        assert_eq!(
            registry.lookup("  kPa\t", &Locale::ROOT),
            Some(pressure::KILOPASCAL)
        );
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let registry = Pressure::registry();
        assert_eq!(registry.lookup("kpa", &Locale::ROOT), None);
        assert_eq!(registry.lookup("PA", &Locale::ROOT), None);
    }

    #[test]
    fn lookup_empty_is_absent() {
        assert_eq!(Pressure::registry().lookup("   ", &Locale::ROOT), None);
    }

    #[test]
    fn lookup_alias() {
        let registry = Temperature::registry();
        assert_eq!(
            registry.lookup("degC", &Locale::ROOT),
            Some(temperature::DEGREE_CELSIUS)
        );
    }

    #[test]
    fn lookup_localized_before_default() {
        let registry = Duration::registry();
        let dutch = Locale::new("nl-NL");
        assert_eq!(registry.lookup("u", &dutch), Some(duration::HOUR));
        assert_eq!(registry.lookup("u", &Locale::ROOT), None);
        // default abbreviations stay valid in every locale
        assert_eq!(registry.lookup("h", &dutch), Some(duration::HOUR));
    }

    #[test]
    fn lookup_localized_language_is_case_insensitive() {
        let registry = Duration::registry();
        assert_eq!(registry.lookup("Tag", &Locale::new("DE-at")), Some(duration::DAY));
    }

    #[test]
    fn every_unit_resolves_to_itself() {
        let registry = Pressure::registry();
        for unit in Pressure::UNITS {
            assert_eq!(registry.lookup(unit.abbreviation(), &Locale::ROOT), Some(*unit));
        }
        assert!(registry.len() >= Pressure::UNITS.len());
        assert!(!registry.is_empty());
    }

    #[test]
    fn first_registration_wins() {
        static CLASHING: [Unit<Pressure>; 2] = [
            Unit::new("Pa", "pascal", 1.0),
            Unit::new("Pa", "impostor", 2.0),
        ];
        let registry = UnitRegistry::new(&CLASHING);
        let unit = registry.lookup("Pa", &Locale::ROOT).unwrap();
        assert_eq!(unit.name(), "pascal");
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.units().len(), 2);
    }
}
