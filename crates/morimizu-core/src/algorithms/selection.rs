//! Selection sort: move the extreme of the unsorted suffix to its front.
//!
//! Not stable: the long-range swap can carry an element past its equals.

use morimizu_types::SortOrder;

use super::swap;
use crate::sink::{SortKey, StepSink};

/// Sort `data` in place, recording each swap of a selected element.
pub fn sort<T, S>(data: &mut [T], order: SortOrder, sink: &mut S)
where
    T: SortKey,
    S: StepSink<T>,
{
    let n = data.len();
    for i in 0..n.saturating_sub(1) {
        let mut best = i;
        for j in i + 1..n {
            if order.precedes(data[j].key(), data[best].key()) {
                best = j;
            }
        }
        if best != i {
            swap(data, i, best, sink);
        }
    }
}

#[cfg(test)]
mod tests {
    use morimizu_types::{Algorithm, SortOrder};

    use crate::algorithms::test_support::{assert_sorts_all_cases, record};

    #[test]
    fn sorts_every_case() {
        assert_sorts_all_cases(Algorithm::SelectionSort);
    }

    #[test]
    fn records_at_most_one_swap_per_position() {
        let snapshots = record(Algorithm::SelectionSort, &[4, 3, 2, 1], SortOrder::Ascending);
        // 4<->1 fixes both ends, 3<->2 fixes the middle.
        assert_eq!(snapshots.len(), 3);
        assert_eq!(snapshots[1].comparing_indices, vec![0, 3]);
        assert_eq!(snapshots[2].comparing_indices, vec![1, 2]);
    }

    #[test]
    fn descending_selects_the_maximum() {
        let snapshots = record(Algorithm::SelectionSort, &[1, 9, 5], SortOrder::Descending);
        assert_eq!(snapshots[1].array, vec![9, 1, 5]);
        assert_eq!(snapshots[snapshots.len() - 1].array, vec![9, 5, 1]);
    }
}
