//! Least-significant-digit radix sort in base 10.
//!
//! Keys are shifted by the minimum so negative values sort correctly.
//! Each digit pass is a stable distribution by that digit, visiting
//! buckets 0 to 9 for ascending sorts and 9 to 0 for descending ones.
//! Every pass is stable, so the sort is stable.

use morimizu_types::SortOrder;

use super::{distribute, key_bounds};
use crate::sink::{SortKey, StepSink};

const RADIX: u64 = 10;

/// Sort `data` in place, recording each rotation of every digit pass.
pub fn sort<T, S>(data: &mut [T], order: SortOrder, sink: &mut S)
where
    T: SortKey,
    S: StepSink<T>,
{
    let Some((min, max)) = key_bounds(data) else {
        return;
    };
    let largest = u64::from(max.abs_diff(min));

    let mut divisor = 1_u64;
    while divisor <= largest {
        let rank = |key: i32| {
            let d = digit(key, min, divisor);
            match order {
                SortOrder::Ascending => d,
                SortOrder::Descending => 9 - d,
            }
        };
        distribute(data, rank, sink);

        let Some(next) = divisor.checked_mul(RADIX) else {
            break;
        };
        divisor = next;
    }
}

/// Base-10 digit of `key - min` at place `divisor`.
fn digit(key: i32, min: i32, divisor: u64) -> usize {
    let offset = u64::from(key.abs_diff(min));
    // A base-10 digit always fits.
    usize::try_from((offset / divisor) % RADIX).unwrap_or(0)
}
