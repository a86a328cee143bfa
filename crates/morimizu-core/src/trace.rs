//! Trace generation: the one operation the front end animates.
//!
//! [`generate_trace`] runs an algorithm over a copy of the input through a
//! [`TraceRecorder`] and returns the recorded [`Trace`]. The same input,
//! algorithm, and order always produce the same trace.

use morimizu_types::{Algorithm, Snapshot, SortOrder};
use serde::Serialize;
use tracing::debug;

use crate::algorithms;
use crate::error::TraceError;
use crate::sink::{Silent, TraceRecorder};

/// The ordered snapshots of one sort run.
///
/// Serializes as a bare JSON array of snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trace(Vec<Snapshot>);

/// A broken trace invariant, reported by [`Trace::check`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraceViolation {
    /// The trace holds no snapshots at all.
    #[error("trace is empty")]
    Empty,
    /// The first snapshot differs from the input.
    #[error("first snapshot does not match the input")]
    FirstNotInput,
    /// A snapshot changed the array length.
    #[error("snapshot {0} changed the array length")]
    LengthChanged(usize),
    /// A snapshot highlights too many or out-of-range positions.
    #[error("snapshot {0} has invalid comparing indices")]
    BadIndices(usize),
    /// A snapshot does not hold the input's values.
    #[error("snapshot {0} is not a permutation of the input")]
    NotPermutation(usize),
    /// The final array is not ordered.
    #[error("final snapshot is not sorted")]
    NotSorted,
}

impl Trace {
    /// Every snapshot, first to last.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.0
    }

    /// Number of snapshots.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the trace holds no snapshots. Generated traces never are.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The array before any step.
    pub fn initial(&self) -> Option<&[i32]> {
        self.0.first().map(|s| s.array.as_slice())
    }

    /// The array after the last step.
    pub fn terminal(&self) -> Option<&[i32]> {
        self.0.last().map(|s| s.array.as_slice())
    }

    /// Consume the trace and return its snapshots.
    pub fn into_snapshots(self) -> Vec<Snapshot> {
        self.0
    }

    /// Verify this trace against the invariants every generated trace
    /// upholds for `input` sorted in `order`.
    pub fn check(&self, input: &[i32], order: SortOrder) -> Result<(), TraceViolation> {
        if self.initial().ok_or(TraceViolation::Empty)? != input {
            return Err(TraceViolation::FirstNotInput);
        }

        let mut expected = input.to_vec();
        expected.sort_unstable();

        for (i, snapshot) in self.0.iter().enumerate() {
            if snapshot.array.len() != input.len() {
                return Err(TraceViolation::LengthChanged(i));
            }
            if snapshot.comparing_indices.len() > 2
                || snapshot.comparing_indices.iter().any(|&idx| idx >= input.len())
            {
                return Err(TraceViolation::BadIndices(i));
            }
            let mut values = snapshot.array.clone();
            values.sort_unstable();
            if values != expected {
                return Err(TraceViolation::NotPermutation(i));
            }
        }

        match self.terminal() {
            Some(last) if order.is_sorted(last) => Ok(()),
            _ => Err(TraceViolation::NotSorted),
        }
    }
}

impl From<Trace> for Vec<Snapshot> {
    fn from(trace: Trace) -> Self {
        trace.0
    }
}

/// Record every step of `algorithm` sorting `array` into `order`.
///
/// The first snapshot is the unmodified input and the last one is sorted.
/// An empty or single-element input produces a single snapshot.
pub fn generate_trace(array: &[i32], algorithm: Algorithm, order: SortOrder) -> Trace {
    let mut work = array.to_vec();
    let mut recorder = TraceRecorder::new(&work);
    algorithms::run(algorithm, &mut work, order, &mut recorder);

    let trace = Trace(recorder.into_snapshots());
    debug!(
        algorithm = %algorithm,
        order = %order,
        len = array.len(),
        snapshots = trace.len(),
        "Trace generated"
    );
    debug_assert!(trace.check(array, order).is_ok());
    trace
}

/// [`generate_trace`] with the algorithm and order given by wire name.
///
/// # Errors
///
/// Returns [`TraceError::UnsupportedAlgorithm`] for an unknown algorithm
/// key and [`TraceError::InvalidInput`] for an unknown order. Nothing is
/// generated in either case.
pub fn generate_trace_by_name(
    array: &[i32],
    algorithm: &str,
    order: &str,
) -> Result<Trace, TraceError> {
    let algorithm: Algorithm = algorithm.parse()?;
    let order: SortOrder = order.parse()?;
    Ok(generate_trace(array, algorithm, order))
}

/// Sort a copy of `array` without recording any steps.
///
/// Runs exactly the same code path as [`generate_trace`], so the result
/// always equals that trace's terminal array.
pub fn sort_terminal(array: &[i32], algorithm: Algorithm, order: SortOrder) -> Vec<i32> {
    let mut work = array.to_vec();
    algorithms::run(algorithm, &mut work, order, &mut Silent);
    work
}
