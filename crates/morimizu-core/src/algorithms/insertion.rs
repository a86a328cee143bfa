//! Insertion sort by adjacent swaps.
//!
//! Each new element sinks left one swap at a time and stops at the first
//! element it does not strictly precede, so the sort is stable.

use core::ops::Range;

use morimizu_types::SortOrder;

use super::swap;
use crate::sink::{SortKey, StepSink};

/// Sort `data` in place, recording each adjacent swap.
pub fn sort<T, S>(data: &mut [T], order: SortOrder, sink: &mut S)
where
    T: SortKey,
    S: StepSink<T>,
{
    sort_range(data, 0..data.len(), order, sink);
}

/// Insertion-sort only `range`, recording swaps with absolute indices.
pub(super) fn sort_range<T, S>(data: &mut [T], range: Range<usize>, order: SortOrder, sink: &mut S)
where
    T: SortKey,
    S: StepSink<T>,
{
    let start = range.start;
    for i in range.start.saturating_add(1)..range.end {
        let mut j = i;
        while j > start && order.precedes(data[j].key(), data[j - 1].key()) {
            swap(data, j - 1, j, sink);
            j -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use morimizu_types::{Algorithm, SortOrder};

    use super::sort_range;
    use crate::algorithms::test_support::{assert_sorts_all_cases, assert_stable, record, tag};
    use crate::sink::{SortKey, Silent};

    #[test]
    fn sorts_every_case() {
        assert_sorts_all_cases(Algorithm::InsertionSort);
    }

    #[test]
    fn is_stable() {
        assert_stable(Algorithm::InsertionSort);
    }

    #[test]
    fn equal_fours_keep_input_order() {
        let mut data = tag(&[4, 4, 2]);
        super::sort(&mut data, SortOrder::Ascending, &mut Silent);
        let values: Vec<i32> = data.iter().map(SortKey::key).collect();
        let origins: Vec<usize> = data.iter().map(|t| t.origin).collect();
        assert_eq!(values, vec![2, 4, 4]);
        assert_eq!(origins, vec![2, 0, 1]);
    }

    #[test]
    fn element_sinks_one_swap_at_a_time() {
        let snapshots = record(Algorithm::InsertionSort, &[2, 3, 1], SortOrder::Ascending);
        assert_eq!(snapshots.len(), 3);
        assert_eq!(snapshots[1].array, vec![2, 1, 3]);
        assert_eq!(snapshots[1].comparing_indices, vec![1, 2]);
        assert_eq!(snapshots[2].array, vec![1, 2, 3]);
        assert_eq!(snapshots[2].comparing_indices, vec![0, 1]);
    }

    #[test]
    fn sort_range_leaves_the_outside_alone() {
        let mut data = vec![9, 3, 2, 1, 0];
        sort_range(&mut data, 1..4, SortOrder::Ascending, &mut Silent);
        assert_eq!(data, vec![9, 1, 2, 3, 0]);
    }
}
