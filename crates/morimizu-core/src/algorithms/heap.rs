//! Heap sort.
//!
//! Builds a max-heap (ascending) or min-heap (descending) bottom-up, then
//! repeatedly swaps the root behind the shrinking heap and sifts the new
//! root down. Every exchange is a swap. Not stable.

use morimizu_types::SortOrder;

use super::swap;
use crate::sink::{SortKey, StepSink};

/// Sort `data` in place, recording each heap swap.
pub fn sort<T, S>(data: &mut [T], order: SortOrder, sink: &mut S)
where
    T: SortKey,
    S: StepSink<T>,
{
    let n = data.len();
    for root in (0..n / 2).rev() {
        sift_down(data, root, n, order, sink);
    }
    for end in (1..n).rev() {
        swap(data, 0, end, sink);
        sift_down(data, 0, end, order, sink);
    }
}

/// Restore the heap property below `root` within `data[..end]`.
fn sift_down<T, S>(data: &mut [T], mut root: usize, end: usize, order: SortOrder, sink: &mut S)
where
    T: SortKey,
    S: StepSink<T>,
{
    loop {
        let left = 2 * root + 1;
        if left >= end {
            return;
        }
        // The heap keeps the element that belongs last at its root.
        let mut target = root;
        if order.precedes(data[target].key(), data[left].key()) {
            target = left;
        }
        let right = left + 1;
        if right < end && order.precedes(data[target].key(), data[right].key()) {
            target = right;
        }
        if target == root {
            return;
        }
        swap(data, root, target, sink);
        root = target;
    }
}

#[cfg(test)]
mod tests {
    use morimizu_types::{Algorithm, SortOrder};

    use super::sift_down;
    use crate::algorithms::test_support::{assert_sorts_all_cases, record};
    use crate::sink::Silent;

    #[test]
    fn sorts_every_case() {
        assert_sorts_all_cases(Algorithm::HeapSort);
    }

    #[test]
    fn sift_down_promotes_the_larger_child() {
        let mut data = vec![1, 5, 9, 2, 3];
        sift_down(&mut data, 0, 5, SortOrder::Ascending, &mut Silent);
        assert_eq!(data, vec![9, 5, 1, 2, 3]);
    }

    #[test]
    fn descending_builds_a_min_heap() {
        let mut data = vec![5, 1, 9];
        sift_down(&mut data, 0, 3, SortOrder::Descending, &mut Silent);
        assert_eq!(data[0], 1);
    }

    #[test]
    fn extraction_swaps_root_with_heap_end() {
        // [3, 1, 2] is already a max-heap, so the first step is 0 <-> 2.
        let snapshots = record(Algorithm::HeapSort, &[3, 1, 2], SortOrder::Ascending);
        assert_eq!(snapshots[1].comparing_indices, vec![0, 2]);
        assert_eq!(snapshots[1].array, vec![2, 1, 3]);
    }
}
