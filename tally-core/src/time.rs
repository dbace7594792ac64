//! Wall-clock access. Library code takes `today` as a parameter; only the
//! binary asks the clock.

use chrono::{Local, NaiveDate};

/// The current local calendar date.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
