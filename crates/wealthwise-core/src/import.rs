//! CSV transaction ingestion
//!
//! Reads any CSV export that carries description, amount and date columns.
//! Header names are matched case-insensitively; row-level problems never fail
//! the import, they surface later as skipped or undated rows.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::{Error, Result};
use crate::models::TransactionRecord;

/// Column positions resolved from the header row
#[derive(Debug, Clone, Copy, Default)]
struct Columns {
    description: Option<usize>,
    amount: Option<usize>,
    date: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };
        Self {
            description: find("description"),
            amount: find("amount"),
            date: find("date"),
        }
    }
}

fn field(record: &StringRecord, idx: Option<usize>) -> &str {
    idx.and_then(|i| record.get(i)).unwrap_or("").trim()
}

/// Parse a CSV stream into raw transaction records
pub fn parse_transactions<R: Read>(reader: R) -> Result<Vec<TransactionRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let columns = Columns::from_headers(rdr.headers()?);
    if columns.description.is_none() && columns.amount.is_none() {
        return Err(Error::InvalidData(
            "CSV needs at least a Description or Amount column".into(),
        ));
    }

    let mut records = Vec::new();
    for result in rdr.records() {
        let record = result?;
        records.push(TransactionRecord {
            description: field(&record, columns.description).to_string(),
            amount: parse_amount(field(&record, columns.amount)),
            date: field(&record, columns.date).to_string(),
        });
    }

    debug!("Parsed {} transaction rows", records.len());
    Ok(records)
}

/// Parse a bank-style amount (`$1,234.56`, `(100.00)`); `None` when not numeric
pub fn parse_amount(s: &str) -> Option<f64> {
    let cleaned: String = s
        .trim()
        .replace(['$', ',', ' '], "")
        .replace('(', "-")
        .replace(')', "");

    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}
