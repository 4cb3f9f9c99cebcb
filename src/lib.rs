//! # Bidsort
//!
//! `bidsort` loads bid records from a monthly sales CSV export and sorts them in memory by
//! title, using one of two classic comparison sorts.
//!
//! ## Key Features
//!
//! - **Selection Sort**: [`selection_sort`] repeatedly moves the minimum of the unsorted tail
//!   into place. Always O(n²).
//! - **Quicksort**: [`quick_sort`] partitions an inclusive index range around its midpoint
//!   element and sorts both halves. O(n log n) on average, O(n²) in the worst case.
//! - **Generic keys**: Both sorts work on any `&mut [T]` where `T` implements [`SortKey`], so
//!   [`Bid`] records, `String`s and `&str`s are all handled the same way.
//! - **In-Place Mutation**: The caller owns the store; sorts only swap elements within it.
//!
//! Neither sort is stable: records with equal titles may come out in any relative order.
//!
//! ## Usage
//!
//! ```rust
//! use bidsort::prelude::*;
//!
//! let mut bids = vec![
//!     Bid::new("98109", "Pennsylvania Ave Properties", "General Fund", 350.0),
//!     Bid::new("98110", "Vista Grande", "Enterprise", 15.0),
//!     Bid::new("98111", "Huntington Place", "General Fund", 2500.0),
//!     Bid::new("98112", "Iowa Grain Co", "General Fund", 90.0),
//! ];
//!
//! let end = bids.len() - 1;
//! quick_sort(&mut bids, 0, end);
//!
//! let titles: Vec<&str> = bids.iter().map(|b| b.title.as_str()).collect();
//! assert_eq!(
//!     titles,
//!     vec!["Huntington Place", "Iowa Grain Co", "Pennsylvania Ave Properties", "Vista Grande"]
//! );
//! ```
//!
//! The [`loader`] module reads records from CSV, [`report`] formats and times them, and
//! [`menu`] drives the interactive console used by the `bidsort` binary.

pub mod algo;
pub mod core;
pub mod errors;
pub mod loader;
pub mod menu;
pub mod report;

pub use algo::{SortAlgorithm, is_sorted_by_key, partition, quick_sort, quick_sort_all, selection_sort};
pub use core::{Bid, SortKey};
pub use errors::{BidError, Result};

pub mod prelude {
    pub use crate::algo::{SortAlgorithm, quick_sort, quick_sort_all, selection_sort};
    pub use crate::core::{Bid, SortKey};
}
