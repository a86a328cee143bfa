//! The nine instrumented sorting algorithms.
//!
//! Each algorithm mutates the working slice only through [`swap`] or
//! [`rotate_into`], both of which permute elements and then notify the
//! sink. A recorded trace therefore holds the same multiset of values in
//! every snapshot, and one snapshot corresponds to one mutation:
//!
//! | Algorithm | Step recorded | Indices |
//! |-----------|---------------|---------|
//! | bubble, selection, quick, heap | one swap | the two swapped positions |
//! | insertion, shell | one adjacent (or gapped) swap | the two swapped positions |
//! | merge, bucket, radix | one element rotated left into place | `[destination, source]` |
//!
//! Comparisons that leave the array unchanged are not recorded.

// Every index below is derived from loop bounds that stay inside
// `data.len()`, and every subtraction is guarded by the loop condition.
#![allow(clippy::indexing_slicing, clippy::arithmetic_side_effects)]

pub mod bubble;
pub mod bucket;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;
pub mod shell;

use morimizu_types::{Algorithm, SortOrder};

use crate::sink::{SortKey, StepSink};

/// Sort `data` in place with `algorithm`, reporting every step to `sink`.
pub fn run<T, S>(algorithm: Algorithm, data: &mut [T], order: SortOrder, sink: &mut S)
where
    T: SortKey,
    S: StepSink<T>,
{
    match algorithm {
        Algorithm::BubbleSort => bubble::sort(data, order, sink),
        Algorithm::SelectionSort => selection::sort(data, order, sink),
        Algorithm::InsertionSort => insertion::sort(data, order, sink),
        Algorithm::QuickSort => quick::sort(data, order, sink),
        Algorithm::MergeSort => merge::sort(data, order, sink),
        Algorithm::HeapSort => heap::sort(data, order, sink),
        Algorithm::ShellSort => shell::sort(data, order, sink),
        Algorithm::BucketSort => bucket::sort(data, order, sink),
        Algorithm::RadixSort => radix::sort(data, order, sink),
    }
}

/// Exchange two positions and record the step.
fn swap<T, S>(data: &mut [T], a: usize, b: usize, sink: &mut S)
where
    T: SortKey,
    S: StepSink<T>,
{
    data.swap(a, b);
    sink.record(data, &[a, b]);
}

/// Move the element at `src` left to `dest`, shifting `dest..src` one
/// place right, and record the step. Requires `dest <= src`.
fn rotate_into<T, S>(data: &mut [T], dest: usize, src: usize, sink: &mut S)
where
    T: SortKey,
    S: StepSink<T>,
{
    data[dest..=src].rotate_right(1);
    sink.record(data, &[dest, src]);
}

/// Stable distribution pass shared by bucket and radix sort.
///
/// Reorders `data` so that `rank` is non-decreasing while elements of
/// equal rank keep their relative order. Position by position, the first
/// remaining element with the lowest rank is rotated into place.
fn distribute<T, S, F>(data: &mut [T], rank: F, sink: &mut S)
where
    T: SortKey,
    S: StepSink<T>,
    F: Fn(i32) -> usize,
{
    for dest in 0..data.len() {
        let mut best = dest;
        let mut best_rank = rank(data[dest].key());
        for src in dest + 1..data.len() {
            let r = rank(data[src].key());
            if r < best_rank {
                best = src;
                best_rank = r;
            }
        }
        if best != dest {
            rotate_into(data, dest, best, sink);
        }
    }
}

/// Smallest and largest key in `data`, or `None` when empty.
fn key_bounds<T: SortKey>(data: &[T]) -> Option<(i32, i32)> {
    let mut keys = data.iter().map(SortKey::key);
    let first = keys.next()?;
    Some(keys.fold((first, first), |(lo, hi), k| (lo.min(k), hi.max(k))))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::TraceRecorder;

    #[test]
    fn rotate_into_shifts_the_gap_right() {
        let mut data = vec![1, 2, 3, 4, 5];
        let mut recorder = TraceRecorder::new(&data);
        rotate_into(&mut data, 1, 3, &mut recorder);
        assert_eq!(data, vec![1, 4, 2, 3, 5]);
        let snapshots = recorder.into_snapshots();
        assert_eq!(snapshots[1].comparing_indices, vec![1, 3]);
    }

    #[test]
    fn distribute_orders_by_rank_and_keeps_ties() {
        let mut data = vec![21, 12, 31, 11, 22];
        distribute(&mut data, |k| usize::try_from(k % 10).unwrap_or(0), &mut crate::sink::Silent);
        assert_eq!(data, vec![21, 31, 11, 12, 22]);
    }

    #[test]
    fn key_bounds_of_empty_is_none() {
        assert_eq!(key_bounds::<i32>(&[]), None);
        assert_eq!(key_bounds(&[3, -4, 9, 0]), Some((-4, 9)));
    }

    #[test]
    fn run_dispatches_every_algorithm() {
        for algorithm in Algorithm::ALL {
            let mut data = vec![3, 1, 2];
            run(algorithm, &mut data, SortOrder::Ascending, &mut crate::sink::Silent);
            assert_eq!(data, vec![1, 2, 3], "{algorithm}");
        }
    }
}
