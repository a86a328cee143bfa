//! Bucket sort over equal-width value ranges.
//!
//! `ceil(sqrt(n))` buckets split `[min, max]`. A stable distribution pass
//! groups the elements by bucket (in reverse bucket order for descending
//! sorts), then each bucket is insertion-sorted in place. Both phases are
//! stable, so the sort is stable.

use morimizu_types::SortOrder;

use super::insertion::sort_range;
use super::{distribute, key_bounds};
use crate::sink::{SortKey, StepSink};

/// Sort `data` in place, recording distribution rotations and the
/// per-bucket insertion swaps.
pub fn sort<T, S>(data: &mut [T], order: SortOrder, sink: &mut S)
where
    T: SortKey,
    S: StepSink<T>,
{
    let n = data.len();
    let Some((min, max)) = key_bounds(data) else {
        return;
    };
    if n < 2 || min == max {
        return;
    }

    let buckets = Buckets::new(min, max, bucket_count(n));
    let rank = |key: i32| buckets.rank(key, order);

    distribute(data, rank, sink);

    let mut start = 0;
    while start < n {
        let current = rank(data[start].key());
        let mut end = start + 1;
        while end < n && rank(data[end].key()) == current {
            end += 1;
        }
        sort_range(data, start..end, order, sink);
        start = end;
    }
}

/// Smallest `b` with `b * b >= n`, at least one.
const fn bucket_count(n: usize) -> usize {
    let mut b = 1_usize;
    while b.saturating_mul(b) < n {
        b += 1;
    }
    b
}

/// Maps keys onto equal-width buckets spanning `[min, max]`.
#[derive(Debug, Clone, Copy)]
struct Buckets {
    min: i32,
    width: u64,
    count: usize,
}

impl Buckets {
    fn new(min: i32, max: i32, count: usize) -> Self {
        Self {
            min,
            // Number of distinct values in the range; never zero.
            width: u64::from(max.abs_diff(min)) + 1,
            count,
        }
    }

    /// Bucket of `key`, in `0..count`, non-decreasing in `key`.
    fn index(&self, key: i32) -> usize {
        let offset = u64::from(key.abs_diff(self.min));
        let count = u64::try_from(self.count).unwrap_or(u64::MAX);
        let raw = offset.saturating_mul(count) / self.width;
        usize::try_from(raw).map_or(self.count - 1, |i| i.min(self.count - 1))
    }

    /// Distribution rank: bucket order for ascending, reversed for
    /// descending.
    fn rank(&self, key: i32, order: SortOrder) -> usize {
        let index = self.index(key);
        match order {
            SortOrder::Ascending => index,
            SortOrder::Descending => self.count - 1 - index,
        }
    }
}

#[cfg(test)]
mod tests {
    use morimizu_types::{Algorithm, SortOrder};

    use super::{Buckets, bucket_count};
    use crate::algorithms::test_support::{assert_sorts_all_cases, assert_stable, record};

    #[test]
    fn sorts_every_case() {
        assert_sorts_all_cases(Algorithm::BucketSort);
    }

    #[test]
    fn is_stable() {
        assert_stable(Algorithm::BucketSort);
    }

    #[test]
    fn bucket_count_is_ceiling_square_root() {
        assert_eq!(bucket_count(1), 1);
        assert_eq!(bucket_count(4), 2);
        assert_eq!(bucket_count(5), 3);
        assert_eq!(bucket_count(100), 10);
    }

    #[test]
    fn buckets_cover_the_full_i32_range() {
        let buckets = Buckets::new(i32::MIN, i32::MAX, 4);
        assert_eq!(buckets.index(i32::MIN), 0);
        assert_eq!(buckets.index(-1), 1);
        assert_eq!(buckets.index(0), 2);
        assert_eq!(buckets.index(i32::MAX), 3);
        assert_eq!(buckets.rank(i32::MAX, SortOrder::Descending), 0);
    }

    #[test]
    fn distribution_happens_before_bucket_sorting() {
        // Buckets of width 5 over [1, 10]: {1, 4} and {6, 10}.
        let snapshots = record(Algorithm::BucketSort, &[10, 4, 6, 1], SortOrder::Ascending);
        assert_eq!(snapshots[1].array, vec![4, 10, 6, 1]);
        assert_eq!(snapshots[1].comparing_indices, vec![0, 1]);
        assert_eq!(snapshots[2].array, vec![4, 1, 10, 6]);
        assert_eq!(snapshots[2].comparing_indices, vec![1, 3]);
        assert_eq!(snapshots[snapshots.len() - 1].array, vec![1, 4, 6, 10]);
    }
}
