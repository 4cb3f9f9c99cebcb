//! Error types for loading bid records.
//!
//! The sorting routines in [`algo`](crate::algo) never fail; everything here comes from
//! reading and parsing the input file.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bidsort operations
pub type Result<T> = std::result::Result<T, BidError>;

/// Error type for bidsort operations
#[derive(Error, Debug)]
pub enum BidError {
    /// The input file could not be opened or read
    #[error("Failed to read '{path}': {source}")]
    Io {
        /// Path to the file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The delimited data itself is malformed
    #[error("Malformed CSV data: {0}")]
    Csv(#[from] csv::Error),

    /// A row is too short to hold a required column
    #[error("Row {row} has no '{column}' column (index {index})")]
    MissingColumn {
        /// 1-based data row number (header excluded)
        row: usize,
        /// Name of the missing column
        column: &'static str,
        /// 0-based column index that was expected
        index: usize,
    },

    /// The amount column is not a non-negative decimal
    #[error("Row {row} has invalid amount '{value}'")]
    InvalidAmount {
        /// 1-based data row number (header excluded)
        row: usize,
        /// The raw text of the amount column
        value: String,
    },
}
