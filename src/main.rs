#![deny(unsafe_code)]

use anyhow::{Context, Result};
use bidsort::SortAlgorithm;
use bidsort::loader::load_bids;
use bidsort::menu::{Menu, sort_and_report};
use bidsort::report::{SortTimer, write_bids};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::info;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Sort algorithm selectable from the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortAlgorithmArg {
    /// O(n²) selection sort
    Selection,
    /// Midpoint-pivot quicksort
    Quick,
}

impl From<SortAlgorithmArg> for SortAlgorithm {
    fn from(arg: SortAlgorithmArg) -> Self {
        match arg {
            SortAlgorithmArg::Selection => SortAlgorithm::Selection,
            SortAlgorithmArg::Quick => SortAlgorithm::Quick,
        }
    }
}

/// Load bids from a CSV file and sort them by title.
///
/// Without `--sort` an interactive menu is shown on the console.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// CSV file of bids to load.
    #[arg(default_value = "eBid_Monthly_Sales_Dec_2016.csv")]
    csv_path: PathBuf,

    /// Load, sort once with this algorithm, print, and exit.
    #[arg(short, long, value_enum)]
    sort: Option<SortAlgorithmArg>,

    /// Do not print the sorted bids in `--sort` mode.
    #[arg(short, long, requires = "sort")]
    quiet: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    info!("Running bidsort version {}", env!("CARGO_PKG_VERSION"));

    match args.sort {
        Some(algorithm) => run_once(&args.csv_path, algorithm.into(), args.quiet),
        None => {
            let stdin = io::stdin();
            let mut stdout = io::stdout();
            Menu::new(args.csv_path).run(stdin.lock(), &mut stdout)?;
            Ok(())
        }
    }
}

fn run_once(csv_path: &Path, algorithm: SortAlgorithm, quiet: bool) -> Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());

    let timer = SortTimer::new("Loading bids");
    let mut bids =
        load_bids(csv_path).with_context(|| format!("loading {}", csv_path.display()))?;
    timer.report(&mut out, bids.len(), "read")?;

    sort_and_report(&mut bids, algorithm, &mut out)?;
    if !quiet {
        write_bids(&mut out, &bids)?;
    }

    out.flush()?;
    Ok(())
}
