//! Shell sort: gapped insertion sort with gaps n/2, n/4, ..., 1.
//!
//! Elements move by swaps across the current gap. Not stable.

use morimizu_types::SortOrder;

use super::swap;
use crate::sink::{SortKey, StepSink};

/// Sort `data` in place, recording each gapped swap.
pub fn sort<T, S>(data: &mut [T], order: SortOrder, sink: &mut S)
where
    T: SortKey,
    S: StepSink<T>,
{
    let n = data.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let mut j = i;
            while j >= gap && order.precedes(data[j].key(), data[j - gap].key()) {
                swap(data, j - gap, j, sink);
                j -= gap;
            }
        }
        gap /= 2;
    }
}

#[cfg(test)]
mod tests {
    use morimizu_types::{Algorithm, SortOrder};

    use crate::algorithms::test_support::{assert_sorts_all_cases, record};

    #[test]
    fn sorts_every_case() {
        assert_sorts_all_cases(Algorithm::ShellSort);
    }

    #[test]
    fn first_pass_swaps_across_half_the_length() {
        let snapshots = record(Algorithm::ShellSort, &[4, 3, 2, 1], SortOrder::Ascending);
        assert_eq!(snapshots[1].comparing_indices, vec![0, 2]);
        assert_eq!(snapshots[1].array, vec![2, 3, 4, 1]);
        assert_eq!(snapshots[2].comparing_indices, vec![1, 3]);
        assert_eq!(snapshots[2].array, vec![2, 1, 4, 3]);
    }
}
