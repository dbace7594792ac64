//! Raw record rows: CSV files and inline `amount;comment;date` specs.
//!
//! Every cell stays raw text here. Coercion and date inference happen when
//! the row is turned into a [`TransactionRecord`].

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use tally_core::TransactionRecord;

/// A record as written by a user, before any sanitization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    pub amount: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub date: Option<String>,
}

impl RawRow {
    pub fn into_record(self, today: NaiveDate) -> TransactionRecord {
        let date = self.date.filter(|d| !d.trim().is_empty());
        TransactionRecord::new(self.amount, self.comment, date, today)
    }
}

/// Parse `amount;comment;date`. The date part is optional; a comment may not
/// contain `;` unless a date follows it.
pub fn parse_record_spec(spec: &str) -> RawRow {
    let mut parts = spec.splitn(3, ';');
    let amount = parts.next().unwrap_or("").trim().to_string();
    let comment = parts.next().unwrap_or("").trim().to_string();
    let date = parts.next().map(|d| d.trim().to_string());
    RawRow {
        amount,
        comment,
        date,
    }
}

/// Read rows from CSV with an `amount,comment,date` header. The date column
/// may be missing or empty.
pub fn read_rows(reader: impl Read) -> Result<Vec<RawRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for (i, result) in rdr.deserialize::<RawRow>().enumerate() {
        // header is line 1
        let row = result.with_context(|| format!("row {}", i + 2))?;
        rows.push(row);
    }
    tracing::debug!(count = rows.len(), "read record rows");
    Ok(rows)
}

/// Read a CSV file of rows and build records from them.
pub fn read_records_csv(path: impl AsRef<Path>, today: NaiveDate) -> Result<Vec<TransactionRecord>> {
    let file = std::fs::File::open(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;
    let rows = read_rows(file).with_context(|| format!("parsing {}", path.as_ref().display()))?;
    Ok(rows.into_iter().map(|r| r.into_record(today)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 18).unwrap()
    }

    #[test]
    fn test_parse_spec_with_date() {
        let row = parse_record_spec("3000; bar ;08.11.2019");
        assert_eq!(row.amount, "3000");
        assert_eq!(row.comment, "bar");
        assert_eq!(row.date.as_deref(), Some("08.11.2019"));

        let rec = row.into_record(today());
        assert_eq!(rec.date(), NaiveDate::from_ymd_opt(2019, 11, 8).unwrap());
    }

    #[test]
    fn test_parse_spec_without_date() {
        let row = parse_record_spec("145;coffee");
        assert_eq!(row.date, None);
        assert_eq!(row.into_record(today()).date(), today());
    }

    #[test]
    fn test_parse_spec_amount_only() {
        let rec = parse_record_spec("abc").into_record(today());
        assert_eq!(rec.amount(), 0.0);
        assert_eq!(rec.comment(), "");
    }

    #[test]
    fn test_read_rows() {
        let data = "\
amount,comment,date
145,coffee,
900,lunch
3000,bar,2019-11-08
oops,broken amount,11/08/2019
";
        let rows = read_rows(data.as_bytes()).unwrap();
        assert_eq!(rows.len(), 4);

        let records: Vec<_> = rows.into_iter().map(|r| r.into_record(today())).collect();
        assert_eq!(records[0].date(), today());
        assert_eq!(records[1].date(), today());
        assert_eq!(records[1].comment(), "lunch");
        assert_eq!(records[2].date(), NaiveDate::from_ymd_opt(2019, 11, 8).unwrap());
        assert_eq!(records[3].amount(), 0.0);
        assert_eq!(records[3].date(), NaiveDate::from_ymd_opt(2019, 8, 11).unwrap());
    }

    #[test]
    fn test_read_rows_missing_amount_column() {
        let data = "comment,date\ncoffee,2019-11-08\n";
        assert!(read_rows(data.as_bytes()).is_err());
    }
}
