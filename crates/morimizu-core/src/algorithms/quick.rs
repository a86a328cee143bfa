//! Quick sort with Lomuto partitioning.
//!
//! The pivot is always the last element of the range, so a trace is fully
//! determined by its input. Ranges are kept on an explicit stack and the
//! left range is always finished before the right one, which reproduces
//! the visiting order of the textbook recursive version. Not stable.

use morimizu_types::SortOrder;

use super::swap;
use crate::sink::{SortKey, StepSink};

/// Sort `data` in place, recording each partition swap.
pub fn sort<T, S>(data: &mut [T], order: SortOrder, sink: &mut S)
where
    T: SortKey,
    S: StepSink<T>,
{
    let Some(last) = data.len().checked_sub(1) else {
        return;
    };

    let mut pending = vec![(0_usize, last)];
    while let Some((low, high)) = pending.pop() {
        if low >= high {
            continue;
        }
        let pivot = partition(data, low, high, order, sink);
        // Pushed right first so the left range is popped first.
        if pivot + 1 < high {
            pending.push((pivot + 1, high));
        }
        if pivot > low + 1 {
            pending.push((low, pivot - 1));
        }
    }
}

/// Partition `data[low..=high]` around `data[high]` and return the pivot's
/// final position.
fn partition<T, S>(data: &mut [T], low: usize, high: usize, order: SortOrder, sink: &mut S) -> usize
where
    T: SortKey,
    S: StepSink<T>,
{
    let pivot = data[high].key();
    let mut store = low;
    for j in low..high {
        if order.precedes(data[j].key(), pivot) {
            if store != j {
                swap(data, store, j, sink);
            }
            store += 1;
        }
    }
    if store != high {
        swap(data, store, high, sink);
    }
    store
}
