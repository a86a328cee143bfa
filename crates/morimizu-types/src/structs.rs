//! Snapshot and request/response structs exchanged with the front end.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{Algorithm, DatasetKind};

// ---------------------------------------------------------------------------
// Snapshot
// ---------------------------------------------------------------------------

/// One recorded state of the array during a sort run.
///
/// `array` has the same length in every snapshot of a run and
/// `comparing_indices` (zero, one, or two entries) always indexes into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Snapshot {
    /// The array after the step.
    pub array: Vec<i32>,
    /// Positions touched by the step, highlighted by the chart.
    pub comparing_indices: Vec<usize>,
}

impl Snapshot {
    /// A snapshot with nothing highlighted.
    pub const fn plain(array: Vec<i32>) -> Self {
        Self {
            array,
            comparing_indices: Vec::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Body of `POST /api/sort`.
///
/// `algorithm` and `order` stay strings here so that an unknown name is
/// reported as a domain error rather than a body decode failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SortRequest {
    /// Input values, in the order entered by the user.
    pub array: Vec<i32>,
    /// Algorithm key, e.g. `"mergeSort"`.
    pub algorithm: String,
    /// `"asc"` or `"desc"`.
    pub order: String,
}

/// Body of `POST /api/compare`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CompareRequest {
    /// Input values shared by every algorithm.
    pub array: Vec<i32>,
    /// Algorithm keys to run.
    pub algorithms: Vec<String>,
    /// `"asc"` or `"desc"`; ascending when absent.
    #[serde(default)]
    #[ts(optional)]
    pub order: Option<String>,
}

/// Body of `POST /api/parse`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ParseRequest {
    /// Raw text typed by the user, e.g. `"5 3 8 1"`.
    pub text: String,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Terminal arrays for each compared algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Comparison {
    /// Sorted output keyed by algorithm.
    pub results: BTreeMap<Algorithm, Vec<i32>>,
    /// Whether every algorithm produced the same array.
    pub all_same: bool,
}

/// One entry of `GET /api/algorithms`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct AlgorithmInfo {
    /// Wire key.
    pub key: Algorithm,
    /// Display name.
    pub name: String,
    /// Whether the algorithm is stable.
    pub stable: bool,
}

impl From<Algorithm> for AlgorithmInfo {
    fn from(algorithm: Algorithm) -> Self {
        Self {
            key: algorithm,
            name: algorithm.display_name().to_owned(),
            stable: algorithm.is_stable(),
        }
    }
}

/// Response of `GET /api/dataset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DatasetResponse {
    /// The kind that was generated.
    pub kind: DatasetKind,
    /// Generated values.
    pub array: Vec<i32>,
}

/// Response of `GET /api/config`: settings the front end needs up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct ClientConfig {
    /// Delay between auto-play steps, in milliseconds.
    #[ts(type = "number")]
    pub playback_interval_ms: u64,
    /// Longest accepted input sequence.
    pub max_array_len: usize,
    /// Most algorithms accepted in one comparison.
    pub max_compare_algorithms: usize,
}

/// Response of `POST /api/parse`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ParsedArray {
    /// Parsed values.
    pub array: Vec<i32>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_uses_camel_case_field_names() {
        let snapshot = Snapshot {
            array: vec![3, 5],
            comparing_indices: vec![0, 1],
        };
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "array": [3, 5], "comparingIndices": [0, 1] })
        );
    }

    #[test]
    fn compare_request_order_is_optional() {
        let req: CompareRequest =
            serde_json::from_str(r#"{"array":[2,1],"algorithms":["bubbleSort"]}"#).unwrap();
        assert_eq!(req.order, None);
        assert_eq!(req.algorithms, vec!["bubbleSort".to_owned()]);
    }

    #[test]
    fn comparison_serializes_all_same_in_camel_case() {
        let mut results = BTreeMap::new();
        results.insert(Algorithm::HeapSort, vec![1, 2]);
        let cmp = Comparison {
            results,
            all_same: true,
        };
        let json = serde_json::to_value(&cmp).unwrap();
        assert_eq!(json["allSame"], true);
        assert_eq!(json["results"]["heapSort"], serde_json::json!([1, 2]));
    }

    #[test]
    fn algorithm_info_carries_stability() {
        let info = AlgorithmInfo::from(Algorithm::MergeSort);
        assert_eq!(info.name, "Merge sort");
        assert!(info.stable);
        assert!(!AlgorithmInfo::from(Algorithm::QuickSort).stable);
    }

    #[test]
    fn client_config_uses_camel_case_field_names() {
        let config = ClientConfig {
            playback_interval_ms: 1000,
            max_array_len: 100,
            max_compare_algorithms: 9,
        };
        let json = serde_json::to_value(config).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "playbackIntervalMs": 1000,
                "maxArrayLen": 100,
                "maxCompareAlgorithms": 9,
            })
        );
    }
}
