//! Enumeration types for the Morimizu sorting visualizer.
//!
//! The wire names match the keys the front end sends: algorithms use the
//! camelCase function names (`bubbleSort`, `quickSort`, ...) and the sort
//! order uses `asc` / `desc`.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Error returned when a wire string does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {value:?}")]
pub struct ParseEnumError {
    /// Which enumeration was being parsed (e.g. `"algorithm"`).
    pub kind: &'static str,
    /// The rejected input.
    pub value: String,
}

// ---------------------------------------------------------------------------
// Algorithm
// ---------------------------------------------------------------------------

/// A sorting algorithm the trace generator can instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub enum Algorithm {
    /// Adjacent compare-and-swap passes.
    BubbleSort,
    /// Repeatedly select the extreme of the unsorted suffix.
    SelectionSort,
    /// Grow a sorted prefix by sinking each new element into place.
    InsertionSort,
    /// Lomuto partitioning around the last element of each range.
    QuickSort,
    /// Top-down merge of recursively sorted halves.
    MergeSort,
    /// Heap construction followed by repeated root extraction.
    HeapSort,
    /// Gapped insertion sort with gaps n/2, n/4, ..., 1.
    ShellSort,
    /// Scatter into value-range buckets, then sort each bucket.
    BucketSort,
    /// Least-significant-digit base-10 distribution passes.
    RadixSort,
}

impl Algorithm {
    /// Every supported algorithm, in menu order.
    pub const ALL: [Self; 9] = [
        Self::BubbleSort,
        Self::SelectionSort,
        Self::InsertionSort,
        Self::QuickSort,
        Self::MergeSort,
        Self::HeapSort,
        Self::ShellSort,
        Self::BucketSort,
        Self::RadixSort,
    ];

    /// The wire key for this algorithm (e.g. `"bubbleSort"`).
    pub const fn key(self) -> &'static str {
        match self {
            Self::BubbleSort => "bubbleSort",
            Self::SelectionSort => "selectionSort",
            Self::InsertionSort => "insertionSort",
            Self::QuickSort => "quickSort",
            Self::MergeSort => "mergeSort",
            Self::HeapSort => "heapSort",
            Self::ShellSort => "shellSort",
            Self::BucketSort => "bucketSort",
            Self::RadixSort => "radixSort",
        }
    }

    /// Human-readable name for menus and logs.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::BubbleSort => "Bubble sort",
            Self::SelectionSort => "Selection sort",
            Self::InsertionSort => "Insertion sort",
            Self::QuickSort => "Quick sort",
            Self::MergeSort => "Merge sort",
            Self::HeapSort => "Heap sort",
            Self::ShellSort => "Shell sort",
            Self::BucketSort => "Bucket sort",
            Self::RadixSort => "Radix sort",
        }
    }

    /// Whether equal elements keep their input relative order.
    pub const fn is_stable(self) -> bool {
        matches!(
            self,
            Self::BubbleSort
                | Self::InsertionSort
                | Self::MergeSort
                | Self::BucketSort
                | Self::RadixSort
        )
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Algorithm {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.key() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "algorithm",
                value: s.to_owned(),
            })
    }
}

// ---------------------------------------------------------------------------
// Sort Order
// ---------------------------------------------------------------------------

/// Requested direction of the final array.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum SortOrder {
    /// Non-decreasing.
    #[default]
    #[serde(rename = "asc", alias = "ascending")]
    Ascending,
    /// Non-increasing.
    #[serde(rename = "desc", alias = "descending")]
    Descending,
}

impl SortOrder {
    /// The short wire form (`"asc"` or `"desc"`).
    pub const fn key(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// Whether `a` must be placed strictly before `b` under this order.
    ///
    /// Equal keys never precede each other, which is what lets the stable
    /// algorithms leave ties where they found them.
    pub const fn precedes(self, a: i32, b: i32) -> bool {
        match self {
            Self::Ascending => a < b,
            Self::Descending => a > b,
        }
    }

    /// Whether every adjacent pair of `values` satisfies this order.
    pub fn is_sorted(self, values: &[i32]) -> bool {
        values
            .windows(2)
            .all(|pair| matches!(pair, [a, b] if !self.precedes(*b, *a)))
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortOrder {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            other => Err(ParseEnumError {
                kind: "sort order",
                value: other.to_owned(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset Kind
// ---------------------------------------------------------------------------

/// Shape of a generated sample dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub enum DatasetKind {
    /// Uniformly random values in the requested range.
    #[default]
    Random,
    /// Evenly spaced ascending values.
    Sorted,
    /// Evenly spaced descending values.
    Reversed,
    /// Random values drawn from a small pool so ties are common.
    Duplicates,
    /// Random values centred on zero.
    Negative,
    /// Every element equal.
    Identical,
    /// Ascending values with a handful of random swaps.
    NearlySorted,
    /// No elements.
    Empty,
}

impl DatasetKind {
    /// Every dataset kind.
    pub const ALL: [Self; 8] = [
        Self::Random,
        Self::Sorted,
        Self::Reversed,
        Self::Duplicates,
        Self::Negative,
        Self::Identical,
        Self::NearlySorted,
        Self::Empty,
    ];

    /// The wire key for this kind (e.g. `"nearlySorted"`).
    pub const fn key(self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Sorted => "sorted",
            Self::Reversed => "reversed",
            Self::Duplicates => "duplicates",
            Self::Negative => "negative",
            Self::Identical => "identical",
            Self::NearlySorted => "nearlySorted",
            Self::Empty => "empty",
        }
    }
}

impl FromStr for DatasetKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| ParseEnumError {
                kind: "dataset kind",
                value: s.to_owned(),
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn algorithm_keys_round_trip_through_from_str() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.key().parse::<Algorithm>(), Ok(algorithm));
        }
    }

    #[test]
    fn unknown_algorithm_is_rejected() {
        let err = "nonexistentSort".parse::<Algorithm>().unwrap_err();
        assert_eq!(err.kind, "algorithm");
        assert_eq!(err.value, "nonexistentSort");
    }

    #[test]
    fn algorithm_serializes_as_camel_case_key() {
        let json = serde_json::to_string(&Algorithm::QuickSort).unwrap();
        assert_eq!(json, "\"quickSort\"");
        let back: Algorithm = serde_json::from_str("\"radixSort\"").unwrap();
        assert_eq!(back, Algorithm::RadixSort);
    }

    #[test]
    fn stable_set_matches_documented_algorithms() {
        let stable: Vec<Algorithm> = Algorithm::ALL
            .into_iter()
            .filter(|a| a.is_stable())
            .collect();
        assert_eq!(
            stable,
            vec![
                Algorithm::BubbleSort,
                Algorithm::InsertionSort,
                Algorithm::MergeSort,
                Algorithm::BucketSort,
                Algorithm::RadixSort,
            ]
        );
    }

    #[test]
    fn sort_order_accepts_short_and_long_forms() {
        assert_eq!("asc".parse::<SortOrder>(), Ok(SortOrder::Ascending));
        assert_eq!("ascending".parse::<SortOrder>(), Ok(SortOrder::Ascending));
        assert_eq!("desc".parse::<SortOrder>(), Ok(SortOrder::Descending));
        assert_eq!("descending".parse::<SortOrder>(), Ok(SortOrder::Descending));
        assert!("sideways".parse::<SortOrder>().is_err());

        let long: SortOrder = serde_json::from_str("\"descending\"").unwrap();
        assert_eq!(long, SortOrder::Descending);
        assert_eq!(serde_json::to_string(&long).unwrap(), "\"desc\"");
    }

    #[test]
    fn precedes_is_strict() {
        assert!(SortOrder::Ascending.precedes(1, 2));
        assert!(!SortOrder::Ascending.precedes(2, 2));
        assert!(SortOrder::Descending.precedes(3, 2));
        assert!(!SortOrder::Descending.precedes(2, 2));
    }

    #[test]
    fn is_sorted_allows_ties() {
        assert!(SortOrder::Ascending.is_sorted(&[1, 1, 2, 5]));
        assert!(!SortOrder::Ascending.is_sorted(&[2, 1]));
        assert!(SortOrder::Descending.is_sorted(&[9, 4, 4, -1]));
        assert!(SortOrder::Descending.is_sorted(&[]));
    }

    #[test]
    fn dataset_kind_parses_camel_case() {
        assert_eq!(
            "nearlySorted".parse::<DatasetKind>(),
            Ok(DatasetKind::NearlySorted)
        );
        assert!("chaotic".parse::<DatasetKind>().is_err());
    }
}
