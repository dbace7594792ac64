//! Date format inference for unlabeled date strings.
//!
//! Input like `08.11.2019`, `2019-11-08` or `11/08/2019` carries no hint about
//! its field order. We pick the separator (the one non-alphanumeric character
//! used), then try day-first before year-first using field lengths and loose
//! range checks. The bounds are `day < 32` and `month < 12`, so month 12 never
//! passes and day 0 only fails later, at calendar parsing.

use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, FormatFailure, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldOrder {
    /// `dd<sep>mm<sep>yyyy`
    DayFirst,
    /// `yyyy<sep>mm<sep>dd`
    YearFirst,
}

/// An inferred layout: field order plus the separator between fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateLayout {
    pub order: FieldOrder,
    pub separator: char,
}

impl DateLayout {
    /// chrono format string for this layout, e.g. `%d.%m.%Y`.
    pub fn chrono_format(&self) -> String {
        let sep = match self.separator {
            '%' => "%%".to_string(),
            c => c.to_string(),
        };
        match self.order {
            FieldOrder::DayFirst => format!("%d{sep}%m{sep}%Y"),
            FieldOrder::YearFirst => format!("%Y{sep}%m{sep}%d"),
        }
    }

    /// Parse `raw` (already trimmed) against this layout.
    pub fn parse(&self, raw: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(raw, &self.chrono_format())
            .map_err(|_| Error::invalid_format(raw, FormatFailure::Calendar))
    }
}

impl fmt::Display for DateLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.separator;
        match self.order {
            FieldOrder::DayFirst => write!(f, "dd{s}mm{s}yyyy"),
            FieldOrder::YearFirst => write!(f, "yyyy{s}mm{s}dd"),
        }
    }
}

fn int_field(raw: &str, field: &str) -> Result<i64> {
    field
        .parse::<i64>()
        .map_err(|_| Error::invalid_format(raw, FormatFailure::NonNumericField))
}

/// Work out which layout `raw` is written in, without parsing the date itself.
pub fn infer_layout(raw: &str) -> Result<DateLayout> {
    let date = raw.trim();

    let mut separators: BTreeSet<char> =
        date.chars().filter(|c| !c.is_ascii_alphanumeric()).collect();
    if separators.len() > 1 {
        return Err(Error::invalid_format(date, FormatFailure::MixedSeparators));
    }
    let Some(separator) = separators.pop_first() else {
        return Err(Error::invalid_format(date, FormatFailure::NoSeparator));
    };

    let fields: Vec<&str> = date.split(separator).collect();
    let [first, middle, last] = fields[..] else {
        return Err(Error::invalid_format(date, FormatFailure::FieldCount));
    };

    let month = int_field(date, middle)?;

    if last.len() == 4 && int_field(date, first)? < 32 && month < 12 {
        return Ok(DateLayout {
            order: FieldOrder::DayFirst,
            separator,
        });
    }
    if first.len() == 4 && int_field(date, last)? < 32 && month < 12 {
        return Ok(DateLayout {
            order: FieldOrder::YearFirst,
            separator,
        });
    }

    Err(Error::invalid_format(date, FormatFailure::NoMatchingLayout))
}

/// Resolve an unlabeled date string to a calendar date.
pub fn resolve(raw: &str) -> Result<NaiveDate> {
    let layout = infer_layout(raw)?;
    layout.parse(raw.trim())
}
