//! Bubble sort: repeated passes of adjacent compare-and-swap.
//!
//! Stable. A pass with no swaps ends the sort early, which does not change
//! the recorded trace since only swaps are recorded.

use morimizu_types::SortOrder;

use super::swap;
use crate::sink::{SortKey, StepSink};

/// Sort `data` in place, recording each adjacent swap.
pub fn sort<T, S>(data: &mut [T], order: SortOrder, sink: &mut S)
where
    T: SortKey,
    S: StepSink<T>,
{
    let n = data.len();
    for pass in 0..n.saturating_sub(1) {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            if order.precedes(data[j + 1].key(), data[j].key()) {
                swap(data, j, j + 1, sink);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}
