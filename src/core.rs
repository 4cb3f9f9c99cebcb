//! Core traits and types for bidsort.
//!
//! This module defines:
//! - [`Bid`]: One bid record loaded from the monthly sales file.
//! - [`SortKey`]: The trait the sorts use to read the text key of an element.

/// A single bid entry.
///
/// Records are plain value data with no identity beyond field equality.
/// `amount` is non-negative once the loader has accepted the row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bid {
    pub bid_id: String,
    pub title: String,
    pub fund: String,
    pub amount: f64,
}

impl Bid {
    pub fn new(
        bid_id: impl Into<String>,
        title: impl Into<String>,
        fund: impl Into<String>,
        amount: f64,
    ) -> Self {
        Self {
            bid_id: bid_id.into(),
            title: title.into(),
            fund: fund.into(),
            amount,
        }
    }
}

/// A trait for reading the text key of an element without copying.
///
/// Both [`selection_sort`](crate::algo::selection_sort) and
/// [`quick_sort`](crate::algo::quick_sort) order elements by the value returned
/// here, using plain lexicographic `str` comparison.
///
/// # Examples
///
/// ```
/// use bidsort::core::SortKey;
///
/// struct Lot {
///     name: String,
/// }
///
/// impl SortKey for Lot {
///     fn sort_key(&self) -> &str {
///         &self.name
///     }
/// }
/// ```
pub trait SortKey {
    /// Returns the key this element is ordered by.
    fn sort_key(&self) -> &str;
}

impl SortKey for Bid {
    fn sort_key(&self) -> &str {
        &self.title
    }
}

impl SortKey for str {
    fn sort_key(&self) -> &str {
        self
    }
}

impl SortKey for String {
    fn sort_key(&self) -> &str {
        self.as_str()
    }
}

// Lets `&[&str]`, `Vec<&Bid>` and friends be sorted directly.
impl<T: SortKey + ?Sized> SortKey for &T {
    fn sort_key(&self) -> &str {
        (**self).sort_key()
    }
}

impl<T: SortKey + ?Sized> SortKey for Box<T> {
    fn sort_key(&self) -> &str {
        (**self).sort_key()
    }
}
