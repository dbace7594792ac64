//! Error taxonomy for input sanitization.
//!
//! Neither kind escapes record or ledger construction: callers that build
//! records always get defaulted fields back instead.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a date string could not be mapped onto a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormatFailure {
    /// Only letters and digits, nothing to split on.
    NoSeparator,
    /// More than one distinct separator character.
    MixedSeparators,
    /// Splitting on the separator did not give exactly three fields.
    FieldCount,
    /// A field used in a bound check is not an integer.
    NonNumericField,
    /// Neither day-first nor year-first passed its length/range checks.
    NoMatchingLayout,
    /// The layout was inferred but the string is not a real calendar date.
    Calendar,
}

impl fmt::Display for FormatFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FormatFailure::NoSeparator => "no separator",
            FormatFailure::MixedSeparators => "mixed separators",
            FormatFailure::FieldCount => "expected three fields",
            FormatFailure::NonNumericField => "non-numeric field",
            FormatFailure::NoMatchingLayout => "no matching layout",
            FormatFailure::Calendar => "not a calendar date",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid date format ({reason}): {input:?}")]
    InvalidFormat { input: String, reason: FormatFailure },
    #[error("not a number: {input}")]
    NonNumeric { input: String },
}

impl Error {
    pub(crate) fn invalid_format(input: &str, reason: FormatFailure) -> Self {
        Error::InvalidFormat {
            input: input.to_string(),
            reason,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
