//! Interactive console menu.
//!
//! The menu reads one numeric choice per line:
//!
//! | choice | action                  |
//! |--------|-------------------------|
//! | 1      | Load bids from the CSV  |
//! | 2      | Display all bids        |
//! | 3      | Selection sort all bids |
//! | 4      | Quick sort all bids     |
//! | 9      | Exit                    |
//!
//! Input and output are generic so the loop can be driven from tests.

use crate::algo::SortAlgorithm;
use crate::core::Bid;
use crate::loader::load_bids;
use crate::report::{SortTimer, write_bids};
use log::{debug, error};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Sorts `bids` with `algorithm` and prints the count and elapsed time.
///
/// # Errors
///
/// Propagates any error from `out`.
pub fn sort_and_report<W: Write>(
    bids: &mut [Bid],
    algorithm: SortAlgorithm,
    out: &mut W,
) -> io::Result<()> {
    let timer = SortTimer::new(&format!("Running {algorithm}"));
    algorithm.sort(bids);
    timer.report(out, bids.len(), "sorted")
}

/// Menu state: where to load from and the bids currently in memory.
#[derive(Debug)]
pub struct Menu {
    csv_path: PathBuf,
    bids: Vec<Bid>,
}

impl Menu {
    pub fn new(csv_path: impl Into<PathBuf>) -> Self {
        Self { csv_path: csv_path.into(), bids: Vec::new() }
    }

    /// The bids currently held by the menu.
    pub fn bids(&self) -> &[Bid] {
        &self.bids
    }

    /// Runs the menu until the user picks 9 or `input` is exhausted.
    ///
    /// Load failures are reported on `out` and leave the current bids untouched.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading `input` or writing `out` fails.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> io::Result<()> {
        let mut line = String::new();

        loop {
            write_prompt(out)?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(out)?;
                break;
            }

            let choice = match line.trim().parse::<u32>() {
                Ok(choice) => choice,
                Err(_) => {
                    writeln!(out, "Invalid choice '{}'", line.trim())?;
                    continue;
                }
            };
            debug!("Menu choice {choice}");

            match choice {
                1 => self.load(out)?,
                2 => write_bids(out, &self.bids)?,
                3 => self.sort(SortAlgorithm::Selection, out)?,
                4 => self.sort(SortAlgorithm::Quick, out)?,
                9 => break,
                other => writeln!(out, "Unknown choice {other}")?,
            }
        }

        writeln!(out, "Good bye.")
    }

    fn load<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let timer = SortTimer::new("Loading bids");
        match load_bids(&self.csv_path) {
            Ok(bids) => {
                self.bids = bids;
                timer.report(out, self.bids.len(), "read")
            }
            Err(e) => {
                error!("{e}");
                writeln!(out, "Error: {e}")
            }
        }
    }

    fn sort<W: Write>(&mut self, algorithm: SortAlgorithm, out: &mut W) -> io::Result<()> {
        sort_and_report(&mut self.bids, algorithm, out)?;
        write_bids(out, &self.bids)
    }
}

fn write_prompt<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Menu:")?;
    writeln!(out, "  1. Load Bids")?;
    writeln!(out, "  2. Display All Bids")?;
    writeln!(out, "  3. Selection Sort All Bids")?;
    writeln!(out, "  4. Quick Sort All Bids")?;
    writeln!(out, "  9. Exit")?;
    write!(out, "Enter choice: ")?;
    out.flush()
}
