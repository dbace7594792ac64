//! Transaction records: one dated amount with a comment.

use std::fmt::Display;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coerce::{RawValue, coerce};
use crate::date_format::resolve;

/// A single spend (money or kcal). Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    amount: f64,
    comment: String,
    date: NaiveDate,
}

impl TransactionRecord {
    /// Build a record from raw inputs.
    ///
    /// `amount` is coerced (non-numeric becomes `0.0`). `date` is resolved if it
    /// is text; a missing, non-text or unparseable date becomes `today`.
    pub fn new(
        amount: impl Into<RawValue>,
        comment: impl Display,
        date: impl Into<RawValue>,
        today: NaiveDate,
    ) -> Self {
        let date = date.into();
        let resolved = match date.as_text() {
            Some(raw) => match resolve(raw) {
                Ok(d) => d,
                Err(e) => {
                    debug!(error = %e, %today, "date falls back to today");
                    today
                }
            },
            None => today,
        };

        Self {
            amount: coerce(amount),
            comment: comment.to_string(),
            date: resolved,
        }
    }

    /// Build a record whose date is already known.
    pub fn dated(amount: impl Into<RawValue>, comment: impl Display, date: NaiveDate) -> Self {
        Self {
            amount: coerce(amount),
            comment: comment.to_string(),
            date,
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 18).unwrap()
    }

    #[test]
    fn test_record_with_date() {
        let r = TransactionRecord::new(3000, "bar", "08.11.2019", today());
        assert_eq!(r.amount(), 3000.0);
        assert_eq!(r.comment(), "bar");
        assert_eq!(r.date(), NaiveDate::from_ymd_opt(2019, 11, 8).unwrap());
    }

    #[test]
    fn test_missing_date_is_today() {
        let r = TransactionRecord::new(145, "coffee", None::<&str>, today());
        assert_eq!(r.date(), today());
    }

    #[test]
    fn test_bad_date_is_today() {
        let r = TransactionRecord::new(145, "coffee", "not-a-date", today());
        assert_eq!(r.date(), today());
        let r = TransactionRecord::new(145, "coffee", "08.12.2019", today());
        assert_eq!(r.date(), today());
    }

    #[test]
    fn test_non_text_date_is_today() {
        let r = TransactionRecord::new(145, "coffee", 20191108, today());
        assert_eq!(r.date(), today());
    }

    #[test]
    fn test_non_numeric_amount_is_zero() {
        let r = TransactionRecord::new("lots", "lunch", "2019-11-08", today());
        assert_eq!(r.amount(), 0.0);
        assert_eq!(r.date(), NaiveDate::from_ymd_opt(2019, 11, 8).unwrap());
    }

    #[test]
    fn test_comment_is_stringified() {
        let r = TransactionRecord::new(1, 42, None::<&str>, today());
        assert_eq!(r.comment(), "42");
    }

    #[test]
    fn test_same_inputs_same_record() {
        let a = TransactionRecord::new("900", "lunch", "11/08/2019", today());
        let b = TransactionRecord::new("900", "lunch", "11/08/2019", today());
        assert_eq!(a, b);
    }

    #[test]
    fn test_serde_roundtrip() {
        let r = TransactionRecord::new(145.5, "coffee", "2019.11.08", today());
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"date\":\"2019-11-08\""));
        let back: TransactionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, r);
    }
}
