//! Sample dataset generation for the input panel.
//!
//! Gives learners ready-made inputs that exercise the interesting cases:
//! already sorted, reversed, heavy on ties, negative, nearly sorted. With a
//! seed the output is reproducible; without one it is drawn from the OS.

use morimizu_types::DatasetKind;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::TraceError;

/// Default number of elements.
pub const DEFAULT_SIZE: usize = 20;
/// Default smallest value.
pub const DEFAULT_MIN: i32 = 1;
/// Default largest value.
pub const DEFAULT_MAX: i32 = 100;

/// Parameters for [`generate_dataset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetSpec {
    /// Shape of the data.
    pub kind: DatasetKind,
    /// Number of elements (ignored for [`DatasetKind::Empty`]).
    pub size: usize,
    /// Smallest value, inclusive.
    pub min: i32,
    /// Largest value, inclusive.
    pub max: i32,
    /// Seed for reproducible output.
    pub seed: Option<u64>,
}

impl Default for DatasetSpec {
    fn default() -> Self {
        Self {
            kind: DatasetKind::Random,
            size: DEFAULT_SIZE,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            seed: None,
        }
    }
}

/// Generate a dataset described by `spec`.
///
/// # Errors
///
/// Returns [`TraceError::InvalidInput`] if `min > max` or if `size`
/// exceeds `max_len`.
pub fn generate_dataset(spec: &DatasetSpec, max_len: usize) -> Result<Vec<i32>, TraceError> {
    if spec.min > spec.max {
        return Err(TraceError::InvalidInput(format!(
            "min {} is greater than max {}",
            spec.min, spec.max
        )));
    }
    if spec.size > max_len {
        return Err(TraceError::InvalidInput(format!(
            "size {} exceeds the limit of {max_len}",
            spec.size
        )));
    }

    let mut rng = spec
        .seed
        .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let (size, min, max) = (spec.size, spec.min, spec.max);

    let values = match spec.kind {
        DatasetKind::Random => uniform(&mut rng, size, min, max),
        DatasetKind::Sorted => evenly_spaced(size, min, max),
        DatasetKind::Reversed => {
            let mut values = evenly_spaced(size, min, max);
            values.reverse();
            values
        }
        DatasetKind::Duplicates => {
            let pool = uniform(&mut rng, (size / 4).max(1), min, max);
            (0..size)
                .filter_map(|_| pool.get(rng.random_range(0..pool.len())).copied())
                .collect()
        }
        DatasetKind::Negative => {
            let bound = min.unsigned_abs().max(max.unsigned_abs());
            let bound = i32::try_from(bound).unwrap_or(i32::MAX);
            uniform(&mut rng, size, -bound, bound)
        }
        DatasetKind::Identical => {
            let value = rng.random_range(min..=max);
            vec![value; size]
        }
        DatasetKind::NearlySorted => {
            let mut values = evenly_spaced(size, min, max);
            if size >= 2 {
                for _ in 0..(size / 10).max(1) {
                    let a = rng.random_range(0..size);
                    let b = rng.random_range(0..size);
                    values.swap(a, b);
                }
            }
            values
        }
        DatasetKind::Empty => Vec::new(),
    };

    debug!(kind = spec.kind.key(), len = values.len(), seed = ?spec.seed, "Dataset generated");
    Ok(values)
}

fn uniform(rng: &mut StdRng, size: usize, min: i32, max: i32) -> Vec<i32> {
    (0..size).map(|_| rng.random_range(min..=max)).collect()
}

/// `size` non-decreasing values from `min` to `max`, both ends included.
fn evenly_spaced(size: usize, min: i32, max: i32) -> Vec<i32> {
    let span = i64::from(max) - i64::from(min);
    let steps = i64::try_from(size.saturating_sub(1)).unwrap_or(i64::MAX).max(1);
    (0..size)
        .map(|i| {
            let i = i64::try_from(i).unwrap_or(i64::MAX);
            let value = i64::from(min).saturating_add(span.saturating_mul(i) / steps);
            i32::try_from(value).unwrap_or(max)
        })
        .collect()
}
