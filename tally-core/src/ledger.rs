//! Ledger: a budget limit plus the records spent against it.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::coerce::{RawValue, coerce};
use crate::record::TransactionRecord;

/// Length of the trailing window used by [`Ledger::week_total`], today included.
pub const WEEK_DAYS: u64 = 7;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    limit: f64,
    records: Vec<TransactionRecord>,
}

impl Ledger {
    /// Create an empty ledger. A non-numeric `limit` becomes `0.0`.
    pub fn new(limit: impl Into<RawValue>) -> Self {
        Self {
            limit: coerce(limit),
            records: Vec::new(),
        }
    }

    pub fn add_record(&mut self, record: TransactionRecord) {
        self.records.push(record);
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of amounts dated `today`.
    pub fn today_total(&self, today: NaiveDate) -> f64 {
        self.sum_between(today, today)
    }

    /// Sum of amounts dated within the last seven days, `today` included.
    pub fn week_total(&self, today: NaiveDate) -> f64 {
        let first = today
            .checked_sub_days(Days::new(WEEK_DAYS - 1))
            .unwrap_or(NaiveDate::MIN);
        self.sum_between(first, today)
    }

    /// `limit - today_total(today)`. Negative once the limit is exceeded.
    pub fn remaining(&self, today: NaiveDate) -> f64 {
        self.limit - self.today_total(today)
    }

    fn sum_between(&self, first: NaiveDate, last: NaiveDate) -> f64 {
        self.records
            .iter()
            .filter(|r| (first..=last).contains(&r.date()))
            .map(TransactionRecord::amount)
            .sum()
    }
}

impl Extend<TransactionRecord> for Ledger {
    fn extend<I: IntoIterator<Item = TransactionRecord>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}
