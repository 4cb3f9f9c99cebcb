//! Display and timing helpers for the console front end.

use crate::core::Bid;
use log::info;
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Formats one bid as `"{id}: {title} | {amount} | {fund}"`.
///
/// # Examples
///
/// ```
/// use bidsort::{Bid, report::format_bid};
///
/// let bid = Bid::new("98109", "Vista Grande", "General Fund", 15.5);
/// assert_eq!(format_bid(&bid), "98109: Vista Grande | 15.5 | General Fund");
/// ```
#[must_use]
pub fn format_bid(bid: &Bid) -> String {
    format!("{}: {} | {} | {}", bid.bid_id, bid.title, bid.amount, bid.fund)
}

/// Writes every bid on its own line, followed by a blank line.
///
/// # Errors
///
/// Propagates any error from `out`.
pub fn write_bids<W: Write>(out: &mut W, bids: &[Bid]) -> io::Result<()> {
    for bid in bids {
        writeln!(out, "{}", format_bid(bid))?;
    }
    writeln!(out)
}

/// Measures the wall-clock time of a load or sort.
///
/// ```
/// use bidsort::report::SortTimer;
///
/// let timer = SortTimer::new("Sorting bids");
/// // ... do work ...
/// let mut out = Vec::new();
/// timer.report(&mut out, 4, "sorted").unwrap();
/// assert!(String::from_utf8(out).unwrap().starts_with("4 bids sorted\n"));
/// ```
pub struct SortTimer {
    operation: String,
    start_time: Instant,
}

impl SortTimer {
    /// Starts the timer and logs the operation at `info`.
    #[must_use]
    pub fn new(operation: &str) -> Self {
        info!("{operation} ...");
        Self { operation: operation.to_string(), start_time: Instant::now() }
    }

    /// Time since the timer was started.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Prints the record count and elapsed time to `out` and logs the same.
    ///
    /// # Errors
    ///
    /// Propagates any error from `out`.
    pub fn report<W: Write>(&self, out: &mut W, count: usize, verb: &str) -> io::Result<()> {
        let elapsed = self.elapsed();
        info!("{} completed: {count} bids in {elapsed:?}", self.operation);

        writeln!(out, "{count} bids {verb}")?;
        writeln!(out, "time: {} microseconds", elapsed.as_micros())?;
        writeln!(out, "time: {} seconds", elapsed.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bid_whole_amount() {
        let bid = Bid::new("1", "Barn", "Enterprise", 15000.0);
        assert_eq!(format_bid(&bid), "1: Barn | 15000 | Enterprise");
    }

    #[test]
    fn test_write_bids() {
        let bids = vec![Bid::new("1", "Apple", "A", 1.0), Bid::new("2", "Barn", "B", 2.25)];
        let mut out = Vec::new();
        write_bids(&mut out, &bids).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1: Apple | 1 | A\n2: Barn | 2.25 | B\n\n");
    }

    #[test]
    fn test_timer_report_lines() {
        let timer = SortTimer::new("Test");
        let mut out = Vec::new();
        timer.report(&mut out, 12, "read").unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "12 bids read");
        assert!(lines[1].starts_with("time: ") && lines[1].ends_with(" microseconds"));
        assert!(lines[2].starts_with("time: ") && lines[2].ends_with(" seconds"));
    }
}
