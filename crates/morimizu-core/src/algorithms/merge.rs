//! Top-down merge sort with an in-place, rotation-based merge.
//!
//! When the head of the right run must come first it is rotated left into
//! position, shifting the remaining left run one place right. The array
//! never holds a duplicated or missing value mid-merge, and ties always
//! take the left element first, so the sort is stable.

use morimizu_types::SortOrder;

use super::rotate_into;
use crate::sink::{SortKey, StepSink};

/// Sort `data` in place, recording each rotation.
pub fn sort<T, S>(data: &mut [T], order: SortOrder, sink: &mut S)
where
    T: SortKey,
    S: StepSink<T>,
{
    sort_range(data, 0, data.len(), order, sink);
}

fn sort_range<T, S>(data: &mut [T], lo: usize, hi: usize, order: SortOrder, sink: &mut S)
where
    T: SortKey,
    S: StepSink<T>,
{
    if hi - lo < 2 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    sort_range(data, lo, mid, order, sink);
    sort_range(data, mid, hi, order, sink);
    merge(data, lo, mid, hi, order, sink);
}

/// Merge the sorted runs `data[lo..mid]` and `data[mid..hi]`.
fn merge<T, S>(data: &mut [T], lo: usize, mid: usize, hi: usize, order: SortOrder, sink: &mut S)
where
    T: SortKey,
    S: StepSink<T>,
{
    // The unmerged left run is always data[left..right].
    let mut left = lo;
    let mut right = mid;
    while left < right && right < hi {
        if order.precedes(data[right].key(), data[left].key()) {
            rotate_into(data, left, right, sink);
            right += 1;
        }
        left += 1;
    }
}
