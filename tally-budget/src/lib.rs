//! tally-budget: calorie and cash budget messages built on a ledger

pub mod calories;
pub mod cash;
pub mod currency;

pub use calories::{CaloriesFormatter, CaloriesStatus};
pub use cash::{CashFormatter, CashStatus};
pub use currency::{Currency, CurrencyTable};
