//! The seam between an algorithm and whoever is watching it.
//!
//! Every algorithm in [`crate::algorithms`] is written once, generic over
//! the element type and over a [`StepSink`]. The sink is told about each
//! mutation of the working array together with the positions involved.
//! [`TraceRecorder`] turns those notifications into [`Snapshot`]s;
//! [`Silent`] ignores them for terminal-only sorts.

use morimizu_types::Snapshot;

/// An element the algorithms can sort.
///
/// Algorithms only ever compare keys, so a type carrying extra payload
/// (such as the origin index used to check stability) sorts exactly like
/// its key would.
pub trait SortKey: Copy {
    /// The integer the element is ordered by.
    fn key(&self) -> i32;
}

impl SortKey for i32 {
    fn key(&self) -> i32 {
        *self
    }
}

/// Receives one notification per mutation of the working array.
pub trait StepSink<T> {
    /// Called after `data` changed, naming the positions that moved.
    fn record(&mut self, data: &[T], indices: &[usize]);
}

/// Collects a [`Snapshot`] for every recorded step.
#[derive(Debug, Clone, Default)]
pub struct TraceRecorder {
    snapshots: Vec<Snapshot>,
}

impl TraceRecorder {
    /// Start a recording whose first snapshot is `initial`, unhighlighted.
    pub fn new<T: SortKey>(initial: &[T]) -> Self {
        Self {
            snapshots: vec![Snapshot::plain(keys(initial))],
        }
    }

    /// Number of snapshots recorded so far, including the initial one.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Whether nothing has been recorded. Never true after [`Self::new`].
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Consume the recorder and return its snapshots in order.
    pub fn into_snapshots(self) -> Vec<Snapshot> {
        self.snapshots
    }
}

impl<T: SortKey> StepSink<T> for TraceRecorder {
    fn record(&mut self, data: &[T], indices: &[usize]) {
        self.snapshots.push(Snapshot {
            array: keys(data),
            comparing_indices: indices.to_vec(),
        });
    }
}

/// A sink that drops every step.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl<T> StepSink<T> for Silent {
    #[inline]
    fn record(&mut self, _data: &[T], _indices: &[usize]) {}
}

fn keys<T: SortKey>(data: &[T]) -> Vec<i32> {
    data.iter().map(SortKey::key).collect()
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn recorder_starts_with_unhighlighted_input() {
        let recorder = TraceRecorder::new(&[4, 2, 9]);
        assert_eq!(recorder.len(), 1);
        let snapshots = recorder.into_snapshots();
        assert_eq!(snapshots[0].array, vec![4, 2, 9]);
        assert!(snapshots[0].comparing_indices.is_empty());
    }

    #[test]
    fn recorder_appends_keys_and_indices() {
        let mut recorder = TraceRecorder::new(&[2, 1]);
        recorder.record(&[1, 2], &[0, 1]);
        let snapshots = recorder.into_snapshots();
        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[1].array, vec![1, 2]);
        assert_eq!(snapshots[1].comparing_indices, vec![0, 1]);
    }

    #[test]
    fn silent_sink_accepts_anything() {
        let mut sink = Silent;
        sink.record(&[1_i32, 2, 3], &[0, 2]);
    }
}
