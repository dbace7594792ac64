//! Calorie budget messages.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tally_core::Ledger;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CaloriesStatus {
    /// Still under the limit by `kcal`.
    CanEat { kcal: f64 },
    Stop,
}

impl fmt::Display for CaloriesStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaloriesStatus::CanEat { kcal } => write!(f, "you may eat more, up to {kcal:.0} kcal"),
            CaloriesStatus::Stop => f.write_str("stop eating"),
        }
    }
}

pub struct CaloriesFormatter;

impl CaloriesFormatter {
    pub fn status(ledger: &Ledger, today: NaiveDate) -> CaloriesStatus {
        let left = ledger.remaining(today);
        if left > 0.0 {
            CaloriesStatus::CanEat { kcal: left }
        } else {
            CaloriesStatus::Stop
        }
    }

    /// Today's calorie message for `ledger`.
    pub fn remaining(ledger: &Ledger, today: NaiveDate) -> String {
        Self::status(ledger, today).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::TransactionRecord;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 18).unwrap()
    }

    #[test]
    fn test_can_eat_rounds_to_whole_kcal() {
        let mut ledger = Ledger::new(2000);
        ledger.add_record(TransactionRecord::dated(1200.3, "lunch", today()));
        assert_eq!(
            CaloriesFormatter::remaining(&ledger, today()),
            "you may eat more, up to 800 kcal"
        );
    }

    #[test]
    fn test_stop_at_limit() {
        let mut ledger = Ledger::new(2000);
        ledger.add_record(TransactionRecord::dated(2000, "feast", today()));
        assert_eq!(CaloriesFormatter::status(&ledger, today()), CaloriesStatus::Stop);
        assert_eq!(CaloriesFormatter::remaining(&ledger, today()), "stop eating");
    }

    #[test]
    fn test_other_days_ignored() {
        let mut ledger = Ledger::new(1500);
        ledger.add_record(TransactionRecord::new(5000, "yesterday", "2026-02-17", today()));
        assert_eq!(
            CaloriesFormatter::status(&ledger, today()),
            CaloriesStatus::CanEat { kcal: 1500.0 }
        );
    }
}
