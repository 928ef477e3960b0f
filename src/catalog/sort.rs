//! Ordering of the search results.

use crate::model::{Listing, SortOption};

/// Returns a sorted copy of `results`.
///
/// The sort is stable and ascending. [`SortOption::Unordered`] returns the
/// listings in their input order. The input slice is never modified.
pub fn sort(results: &[Listing], option: SortOption) -> Vec<Listing> {
    let mut sorted = results.to_vec();
    match option {
        SortOption::Price => sorted.sort_by(|x, y| x.price.total_cmp(&y.price)),
        SortOption::Size => sorted.sort_by(|x, y| x.size.total_cmp(&y.size)),
        SortOption::Unordered => {}
    }
    sorted
}
