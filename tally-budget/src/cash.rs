//! Cash budget messages with currency conversion.
//!
//! The remaining amount is converted into the requested currency and shown
//! with two decimals. An unknown code, or a zero rate, shows the unconverted
//! signed amount instead.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tally_core::Ledger;
use tracing::debug;

use crate::currency::CurrencyTable;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CashStatus {
    Remaining(String),
    Debt(String),
    Exhausted,
}

impl fmt::Display for CashStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CashStatus::Remaining(phrase) => write!(f, "today you have {phrase} remaining"),
            CashStatus::Debt(phrase) => write!(f, "no money left, hang in there: your debt is {phrase}"),
            CashStatus::Exhausted => f.write_str("no money left, hang in there"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CashFormatter {
    currencies: CurrencyTable,
}

impl CashFormatter {
    pub fn new(currencies: CurrencyTable) -> Self {
        Self { currencies }
    }

    pub fn currencies(&self) -> &CurrencyTable {
        &self.currencies
    }

    /// Render `amount` in `currency`, e.g. `0.64 Euro`.
    pub fn phrase(&self, amount: f64, currency: &str) -> String {
        match self.currencies.get(currency) {
            Some(c) if c.rate != 0.0 => format!("{:.2} {}", (amount / c.rate).abs(), c.symbol),
            found => {
                debug!(currency, known = found.is_some(), "showing unconverted amount");
                format!("{amount:?}")
            }
        }
    }

    pub fn status(&self, ledger: &Ledger, currency: &str, today: NaiveDate) -> CashStatus {
        let left = ledger.remaining(today);
        if left > 0.0 {
            CashStatus::Remaining(self.phrase(left, currency))
        } else if left < 0.0 {
            CashStatus::Debt(self.phrase(left, currency))
        } else {
            CashStatus::Exhausted
        }
    }

    /// Today's cash message for `ledger`, converted to `currency`.
    pub fn remaining(&self, ledger: &Ledger, currency: &str, today: NaiveDate) -> String {
        self.status(ledger, currency, today).to_string()
    }
}
