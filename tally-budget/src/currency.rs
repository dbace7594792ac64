//! Currency rate table used by the cash formatter.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const USD_RATE: f64 = 60.00;
pub const EURO_RATE: f64 = 70.00;

/// One currency: how many base units one unit of it costs, and its label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Currency {
    pub rate: f64,
    pub symbol: String,
}

impl Currency {
    pub fn new(rate: f64, symbol: impl Into<String>) -> Self {
        Self {
            rate,
            symbol: symbol.into(),
        }
    }
}

/// Lowercase currency code -> rate and symbol. Lookups are case-sensitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyTable {
    rates: BTreeMap<String, Currency>,
}

impl Default for CurrencyTable {
    fn default() -> Self {
        Self::empty()
            .with("rub", Currency::new(1.0, "руб"))
            .with("usd", Currency::new(USD_RATE, "USD"))
            .with("eur", Currency::new(EURO_RATE, "Euro"))
    }
}

impl CurrencyTable {
    pub fn empty() -> Self {
        Self {
            rates: BTreeMap::new(),
        }
    }

    pub fn with(mut self, code: impl Into<String>, currency: Currency) -> Self {
        self.insert(code, currency);
        self
    }

    /// Add or replace a currency.
    pub fn insert(&mut self, code: impl Into<String>, currency: Currency) {
        self.rates.insert(code.into(), currency);
    }

    pub fn get(&self, code: &str) -> Option<&Currency> {
        self.rates.get(code)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }

    /// Overlay `other` on top of this table; entries in `other` win.
    pub fn merged(mut self, other: CurrencyTable) -> Self {
        self.rates.extend(other.rates);
        self
    }
}
