//! tally-core: records, date inference and the ledger they are summed in

pub mod coerce;
pub mod date_format;
pub mod error;
pub mod ledger;
pub mod record;
pub mod time;

pub use coerce::{RawValue, coerce, try_coerce};
pub use date_format::{DateLayout, FieldOrder, infer_layout, resolve};
pub use error::{Error, FormatFailure, Result};
pub use ledger::Ledger;
pub use record::TransactionRecord;
