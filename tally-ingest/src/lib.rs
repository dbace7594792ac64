//! tally-ingest: raw record rows (CSV files, inline specs) turned into records

pub mod rows;

pub use rows::{RawRow, parse_record_spec, read_records_csv, read_rows};
