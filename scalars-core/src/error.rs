//! Error types for scalar construction and parsing.

use thiserror::Error;

/// Result type for fallible scalar operations.
pub type ScalarResult<T> = Result<T, ScalarError>;

/// Coarse classification of a [`ScalarError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required argument was absent.
    NullArgument,
    /// An argument was present but malformed or out of range.
    InvalidArgument,
}

/// Error type for scalar construction and parsing.
///
/// Only the boundary operations fail: parsing text, resolving a unit abbreviation, checking an interpolation ratio
/// and narrowing an [`SiScalar`](crate::SiScalar) to a named quantity. Arithmetic on existing scalars never fails;
/// NaN and infinities propagate per IEEE-754.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ScalarError {
    /// A required argument was `None`.
    #[error("missing required argument `{0}`")]
    MissingArgument(&'static str),

    /// The text to parse was empty or whitespace.
    #[error("cannot parse an empty string as {quantity}")]
    EmptyText {
        /// Quantity being parsed.
        quantity: &'static str,
    },

    /// The unit abbreviation was empty or whitespace.
    #[error("empty unit abbreviation for {quantity}")]
    EmptyUnit {
        /// Quantity being constructed.
        quantity: &'static str,
    },

    /// The text does not start with a number.
    #[error("no numeric value at the start of \"{text}\" for {quantity} (locale {locale})")]
    NoNumber {
        /// The offending text.
        text: String,
        /// Quantity being parsed.
        quantity: &'static str,
        /// Locale active during the parse.
        locale: String,
    },

    /// The text after the number is not a registered abbreviation.
    #[error("unit \"{unit}\" is not a known {quantity} unit in \"{text}\" (locale {locale})")]
    UnknownUnit {
        /// The offending text.
        text: String,
        /// The unresolved abbreviation.
        unit: String,
        /// Quantity being parsed.
        quantity: &'static str,
        /// Locale active during the parse.
        locale: String,
    },

    /// An interpolation ratio outside `[0, 1]` for a family that does not extrapolate.
    #[error("interpolation ratio {ratio} is outside [0, 1]")]
    RatioOutOfRange {
        /// The rejected ratio.
        ratio: f64,
    },

    /// A dimension string could not be parsed.
    #[error("invalid SI dimensions \"{text}\"")]
    InvalidDimensions {
        /// The offending text.
        text: String,
    },

    /// An SI scalar was narrowed to a quantity with different dimensions.
    #[error("dimension mismatch: {quantity} needs [{expected}], found [{found}]")]
    DimensionMismatch {
        /// Target quantity.
        quantity: &'static str,
        /// Dimensions of the target quantity.
        expected: String,
        /// Dimensions of the scalar.
        found: String,
    },
}

impl ScalarError {
    /// Classifies this error as a null-argument or invalid-argument condition.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScalarError::MissingArgument(_) => ErrorKind::NullArgument,
            _ => ErrorKind::InvalidArgument,
        }
    }
}
