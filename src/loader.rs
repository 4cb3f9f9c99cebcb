//! Loading bid records from the monthly sales CSV export.
//!
//! The file has a header row followed by one bid per row. Only four columns are used:
//!
//! | column | field    |
//! |--------|----------|
//! | 0      | title    |
//! | 1      | bid id   |
//! | 4      | amount   |
//! | 8      | fund     |
//!
//! Rows may carry any number of extra columns.

use crate::core::Bid;
use crate::errors::{BidError, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};
use std::fs::File;
use std::io::Read;
use std::path::Path;

const TITLE_COLUMN: usize = 0;
const BID_ID_COLUMN: usize = 1;
const AMOUNT_COLUMN: usize = 4;
const FUND_COLUMN: usize = 8;

/// Loads every bid from the CSV file at `path`.
///
/// # Errors
///
/// Returns [`BidError::Io`] if the file cannot be opened, and the errors of
/// [`load_bids_from_reader`] for malformed content.
pub fn load_bids(path: impl AsRef<Path>) -> Result<Vec<Bid>> {
    let path = path.as_ref();
    info!("Loading CSV file {}", path.display());

    let file = File::open(path).map_err(|source| BidError::Io { path: path.to_path_buf(), source })?;
    let bids = load_bids_from_reader(file)?;

    info!("{} bids read from {}", bids.len(), path.display());
    Ok(bids)
}

/// Loads every bid from CSV data with a header row.
///
/// # Errors
///
/// - [`BidError::Csv`] if the data is not valid CSV.
/// - [`BidError::MissingColumn`] if a row is shorter than the fund column.
/// - [`BidError::InvalidAmount`] if an amount is not a non-negative decimal.
pub fn load_bids_from_reader<R: Read>(reader: R) -> Result<Vec<Bid>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut bids = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        bids.push(parse_row(&record?, i + 1)?);
    }

    debug!("Parsed {} rows", bids.len());
    Ok(bids)
}

fn parse_row(record: &StringRecord, row: usize) -> Result<Bid> {
    let field = |index: usize, column: &'static str| {
        record.get(index).ok_or(BidError::MissingColumn { row, column, index })
    };

    let title = field(TITLE_COLUMN, "title")?;
    let bid_id = field(BID_ID_COLUMN, "bid id")?;
    let raw_amount = field(AMOUNT_COLUMN, "amount")?;
    let fund = field(FUND_COLUMN, "fund")?;

    let amount = parse_amount(raw_amount)
        .ok_or_else(|| BidError::InvalidAmount { row, value: raw_amount.to_string() })?;

    Ok(Bid::new(bid_id, title, fund, amount))
}

/// Converts a currency string such as `"$1,250.00"` into a number.
///
/// Dollar signs, thousands separators and surrounding whitespace are dropped. Empty text is
/// `0.0`. Returns `None` for anything that is not a finite, non-negative decimal.
///
/// # Examples
///
/// ```
/// use bidsort::loader::parse_amount;
///
/// assert_eq!(parse_amount("$1,250.50"), Some(1250.5));
/// assert_eq!(parse_amount(""), Some(0.0));
/// assert_eq!(parse_amount("-$5"), None);
/// ```
#[must_use]
pub fn parse_amount(text: &str) -> Option<f64> {
    let cleaned: String = text.chars().filter(|c| !matches!(c, '$' | ',')).collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Some(0.0);
    }

    cleaned
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount >= 0.0)
}
