//! In-place comparison sorts over a mutable record store.
//!
//! Two independent algorithms order any `&mut [T]` where `T: SortKey` by
//! non-decreasing key:
//! - **Selection sort**: repeatedly selects the minimum of the unsorted tail and swaps it
//!   into position. O(n²) comparisons in every case.
//! - **Quicksort**: Hoare-style partitioning around the midpoint element, recursing on both
//!   halves. O(n log n) on average, O(n²) on adversarial or duplicate-heavy input.
//!
//! Neither algorithm is stable. Both mutate the caller's slice in place and never
//! allocate a replacement store.

use crate::core::SortKey;
use log::debug;
use std::fmt;

/// Which algorithm to run on a store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortAlgorithm {
    Selection,
    Quick,
}

impl SortAlgorithm {
    /// Sorts the whole store in place with this algorithm.
    pub fn sort<T: SortKey>(self, store: &mut [T]) {
        match self {
            SortAlgorithm::Selection => selection_sort(store),
            SortAlgorithm::Quick => quick_sort_all(store),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortAlgorithm::Selection => f.write_str("selection sort"),
            SortAlgorithm::Quick => f.write_str("quick sort"),
        }
    }
}

/// Sorts the store in place with selection sort.
///
/// For each position `pos`, the tail `pos + 1 .. len` is scanned for the element with the
/// smallest key, starting from `pos` itself as the candidate. Ties keep the first minimum
/// found. The scan runs all the way to the last element, so a minimum sitting at the very
/// end is always considered.
///
/// Empty and single-element stores are left untouched.
///
/// # Examples
///
/// ```
/// use bidsort::selection_sort;
///
/// let mut titles = vec!["Vista Grande", "Huntington Place", "Iowa Grain Co"];
/// selection_sort(&mut titles);
///
/// assert_eq!(titles, vec!["Huntington Place", "Iowa Grain Co", "Vista Grande"]);
/// ```
pub fn selection_sort<T: SortKey>(store: &mut [T]) {
    let len = store.len();
    debug!("Selection sort over {len} records");

    for pos in 0..len {
        let mut min = pos;
        for i in pos + 1..len {
            if store[i].sort_key() < store[min].sort_key() {
                min = i;
            }
        }

        if min != pos {
            store.swap(pos, min);
        }
    }
}

/// Partitions `store[begin..=end]` around the key of its midpoint element.
///
/// The pivot key is copied out of `store[begin + (end - begin) / 2]` before any swap and every
/// comparison uses that frozen value, so moving the pivot element itself cannot skew later
/// comparisons.
///
/// A low cursor advances while its key is below the pivot and a high cursor retreats while its
/// key is above it. Elements equal to the pivot stop both cursors. Out-of-place pairs are
/// swapped until the cursors meet.
///
/// Returns the split boundary `b` with `begin <= b < end` whenever `begin < end`: every key in
/// `store[begin..=b]` is `<=` every key in `store[b + 1..=end]`.
///
/// # Panics
///
/// Panics if `begin > end` or `end >= store.len()`.
pub fn partition<T: SortKey>(store: &mut [T], begin: usize, end: usize) -> usize {
    assert!(begin <= end, "partition range {begin}..={end} is inverted");

    let mut low = begin;
    let mut high = end;
    let pivot = store[begin + (end - begin) / 2].sort_key().to_owned();

    loop {
        while store[low].sort_key() < pivot.as_str() {
            low += 1;
        }
        while pivot.as_str() < store[high].sort_key() {
            high -= 1;
        }

        if low >= high {
            break;
        }

        store.swap(low, high);
        low += 1;
        high -= 1;
    }

    high
}

/// Sorts the inclusive range `store[begin..=end]` in place with quicksort.
///
/// A range of length one or less (`begin >= end`) is already sorted. `end` is clamped to the
/// last valid index, so passing `usize::MAX` sorts through the end of the store, and an empty
/// store is a no-op.
///
/// Only the smaller side of each split is sorted recursively; the larger side is handled by
/// the loop. This keeps stack depth logarithmic even when the midpoint pivot degrades.
///
/// # Examples
///
/// ```
/// use bidsort::quick_sort;
///
/// let mut titles = vec!["Barn", "Apple", "Apple", "Cart"];
/// let end = titles.len() - 1;
/// quick_sort(&mut titles, 0, end);
///
/// assert_eq!(titles, vec!["Apple", "Apple", "Barn", "Cart"]);
/// ```
pub fn quick_sort<T: SortKey>(store: &mut [T], begin: usize, end: usize) {
    let Some(last) = store.len().checked_sub(1) else {
        return;
    };
    let end = end.min(last);
    debug!("Quick sort over records {begin}..={end}");

    sort_range(store, begin, end);
}

/// Sorts the whole store in place with quicksort.
///
/// Equivalent to `quick_sort(store, 0, store.len() - 1)` without the underflow on an empty
/// store.
pub fn quick_sort_all<T: SortKey>(store: &mut [T]) {
    quick_sort(store, 0, usize::MAX);
}

fn sort_range<T: SortKey>(store: &mut [T], mut begin: usize, mut end: usize) {
    while begin < end {
        let mid = partition(store, begin, end);

        // Left side is begin..=mid, right side is mid+1..=end.
        if mid - begin < end - mid {
            sort_range(store, begin, mid);
            begin = mid + 1;
        } else {
            sort_range(store, mid + 1, end);
            end = mid;
        }
    }
}

/// Returns `true` if every adjacent pair of keys is in non-decreasing order.
pub fn is_sorted_by_key<T: SortKey>(store: &[T]) -> bool {
    store
        .windows(2)
        .all(|pair| pair[0].sort_key() <= pair[1].sort_key())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_boundary_inside_range() {
        let mut data = vec!["m", "c", "x", "a", "q", "b", "z", "k", "e", "r"];
        let end = data.len() - 1;
        let boundary = partition(&mut data, 0, end);

        assert!(boundary < end);
        let max_low = data[..=boundary].iter().max().copied();
        let min_high = data[boundary + 1..].iter().min().copied();
        assert!(max_low <= min_high);
    }

    #[test]
    fn test_partition_needs_several_swap_passes() {
        // Pivot "e" at index 4; four out-of-place pairs around it.
        let mut data = vec!["h", "g", "f", "i", "e", "a", "d", "c", "b"];
        let boundary = partition(&mut data, 0, 8);

        assert!(data[..=boundary].iter().all(|&k| k <= "e"));
        assert!(data[boundary + 1..].iter().all(|&k| k >= "e"));
        assert!(boundary < 8);
    }

    #[test]
    fn test_partition_all_equal_terminates() {
        let mut data = vec!["same"; 16];
        let boundary = partition(&mut data, 0, 15);
        assert!(boundary < 15);
    }

    #[test]
    fn test_partition_single_element() {
        let mut data = vec!["only"];
        assert_eq!(partition(&mut data, 0, 0), 0);
    }

    #[test]
    fn test_partition_pivot_element_moves() {
        // The midpoint "a" is swapped away on the first pass.
        let mut data = vec!["c", "a", "b"];
        let boundary = partition(&mut data, 0, 2);
        assert!(data[..=boundary].iter().all(|&k| k <= "a"));
        assert!(data[boundary + 1..].iter().all(|&k| k >= "a"));
    }

    #[test]
    fn test_quick_sort_clamps_end() {
        let mut data = vec!["c", "b", "a"];
        quick_sort(&mut data, 0, 100);
        assert_eq!(data, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_quick_sort_subrange_only() {
        let mut data = vec!["z", "c", "b", "a", "y"];
        quick_sort(&mut data, 1, 3);
        assert_eq!(data, vec!["z", "a", "b", "c", "y"]);
    }

    #[test]
    fn test_quick_sort_begin_past_end_is_noop() {
        let mut data = vec!["b", "a"];
        quick_sort(&mut data, 5, 1);
        assert_eq!(data, vec!["b", "a"]);
    }

    #[test]
    fn test_selection_sort_minimum_is_last() {
        let mut data = vec!["d", "c", "b", "a"];
        selection_sort(&mut data);
        assert_eq!(data, vec!["a", "b", "c", "d"]);

        let mut data = vec!["b", "c", "a"];
        selection_sort(&mut data);
        assert_eq!(data, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_is_sorted_by_key() {
        assert!(is_sorted_by_key::<&str>(&[]));
        assert!(is_sorted_by_key(&["a"]));
        assert!(is_sorted_by_key(&["a", "a", "b"]));
        assert!(!is_sorted_by_key(&["b", "a"]));
    }

    #[test]
    fn test_algorithm_display() {
        assert_eq!(SortAlgorithm::Selection.to_string(), "selection sort");
        assert_eq!(SortAlgorithm::Quick.to_string(), "quick sort");
    }
}
