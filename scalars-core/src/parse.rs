//! Text grammar shared by every scalar kind: `<number><optional whitespace><abbreviation>`.
//!
//! The numeric prefix follows floating-point literal rules: an optional sign, digits with an optional fractional part
//! (at least one digit overall) and an optional exponent. The literals `inf`, `infinity` and `nan` are accepted in any
//! case. An `e` that is not followed by exponent digits belongs to the unit, so `"5eV"` reads as five electronvolts.

use crate::error::{ScalarError, ScalarResult};
use crate::registry::Locale;
use crate::unit::{Quantity, Unit};
use log::trace;

const SPECIAL_LITERALS: [&str; 3] = ["infinity", "inf", "nan"];

/// Splits `text` into its leading number and the remaining (untrimmed) text.
///
/// Leading whitespace is skipped. Returns `None` when `text` does not start with a number.
///
/// ```rust
/// use scalars_core::parse::split_number;
///
/// assert_eq!(split_number("  -1.5e3 kPa"), Some((-1500.0, " kPa")));
/// assert_eq!(split_number("12K"), Some((12.0, "K")));
/// assert_eq!(split_number("K"), None);
/// ```
pub fn split_number(text: &str) -> Option<(f64, &str)> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    if let Some(len) = special_literal(&text[end..]) {
        end += len;
        return text[..end].parse().ok().map(|v| (v, &text[end..]));
    }

    let integer = count_digits(&bytes[end..]);
    end += integer;
    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = count_digits(&bytes[end + 1..]);
        if integer + fraction > 0 {
            end += 1 + fraction;
        }
    }
    if integer + fraction == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut cursor = end + 1;
        if matches!(bytes.get(cursor), Some(b'+' | b'-')) {
            cursor += 1;
        }
        let digits = count_digits(&bytes[cursor..]);
        if digits > 0 {
            end = cursor + digits;
        }
    }

    text[..end].parse().ok().map(|v| (v, &text[end..]))
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn special_literal(text: &str) -> Option<usize> {
    SPECIAL_LITERALS.iter().find_map(|literal| {
        let candidate = text.get(..literal.len())?;
        candidate
            .eq_ignore_ascii_case(literal)
            .then_some(literal.len())
    })
}

/// Parses `text` into a magnitude and the unit of `Q` it is expressed in.
///
/// # Errors
///
/// - [`ScalarError::EmptyText`] when `text` is empty or only whitespace.
/// - [`ScalarError::NoNumber`] when `text` does not start with a number.
/// - [`ScalarError::UnknownUnit`] when the remainder is not a registered abbreviation of `Q` for `locale`.
pub fn parse_scalar<Q: Quantity>(text: &str, locale: &Locale) -> ScalarResult<(f64, Unit<Q>)> {
    if text.trim().is_empty() {
        trace!("rejecting empty {} text", Q::NAME);
        return Err(ScalarError::EmptyText { quantity: Q::NAME });
    }

    let (value, rest) = split_number(text).ok_or_else(|| {
        trace!("no number in {} text {:?}", Q::NAME, text);
        ScalarError::NoNumber {
            text: text.to_string(),
            quantity: Q::NAME,
            locale: locale.to_string(),
        }
    })?;

    let unit = Q::registry().lookup(rest, locale).ok_or_else(|| {
        trace!("unknown {} unit {:?} in {:?}", Q::NAME, rest.trim(), text);
        ScalarError::UnknownUnit {
            text: text.to_string(),
            unit: rest.trim().to_string(),
            quantity: Q::NAME,
            locale: locale.to_string(),
        }
    })?;

    Ok((value, unit))
}

/// Resolves a unit abbreviation of `Q` for `locale`.
///
/// # Errors
///
/// - [`ScalarError::MissingArgument`] when `abbreviation` is `None`.
/// - [`ScalarError::EmptyUnit`] when it is empty or only whitespace.
/// - [`ScalarError::UnknownUnit`] when it is not registered.
pub fn resolve_unit<Q: Quantity>(abbreviation: Option<&str>, locale: &Locale) -> ScalarResult<Unit<Q>> {
    let abbreviation = abbreviation.ok_or(ScalarError::MissingArgument("unit"))?;
    if abbreviation.trim().is_empty() {
        return Err(ScalarError::EmptyUnit { quantity: Q::NAME });
    }

    Q::registry().lookup(abbreviation, locale).ok_or_else(|| {
        trace!("unknown {} unit {:?}", Q::NAME, abbreviation);
        ScalarError::UnknownUnit {
            text: abbreviation.to_string(),
            unit: abbreviation.trim().to_string(),
            quantity: Q::NAME,
            locale: locale.to_string(),
        }
    })
}
