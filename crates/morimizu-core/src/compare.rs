//! Batch comparison of several algorithms on one input.
//!
//! Only the terminal array of each algorithm is computed. Since every
//! algorithm sorts the same multiset into the same order, `all_same` is
//! expected to be `true`; a `false` would point at a broken algorithm.

use std::collections::BTreeMap;

use morimizu_types::{Algorithm, Comparison, SortOrder};
use tracing::{debug, warn};

use crate::error::TraceError;
use crate::trace::sort_terminal;

/// Sort `array` with each of `algorithms` and report whether they agree.
///
/// Duplicate algorithms collapse into one result.
///
/// # Errors
///
/// Returns [`TraceError::InvalidInput`] if `algorithms` is empty.
pub fn compare_algorithms(
    array: &[i32],
    algorithms: &[Algorithm],
    order: SortOrder,
) -> Result<Comparison, TraceError> {
    if algorithms.is_empty() {
        return Err(TraceError::InvalidInput(
            "at least one algorithm must be selected".to_owned(),
        ));
    }

    let results: BTreeMap<Algorithm, Vec<i32>> = algorithms
        .iter()
        .map(|&algorithm| (algorithm, sort_terminal(array, algorithm, order)))
        .collect();

    let mut outputs = results.values();
    let all_same = outputs
        .next()
        .is_none_or(|first| outputs.all(|other| other == first));

    if all_same {
        debug!(algorithms = results.len(), len = array.len(), "Comparison agreed");
    } else {
        warn!(algorithms = results.len(), len = array.len(), "Comparison disagreed");
    }

    Ok(Comparison { results, all_same })
}

/// [`compare_algorithms`] with algorithms and order given by wire name.
///
/// `order` defaults to ascending when absent.
///
/// # Errors
///
/// Returns [`TraceError::UnsupportedAlgorithm`] naming the first unknown
/// key, or [`TraceError::InvalidInput`] for an unknown order or an empty
/// selection.
pub fn compare_algorithms_by_name(
    array: &[i32],
    algorithms: &[String],
    order: Option<&str>,
) -> Result<Comparison, TraceError> {
    let parsed = algorithms
        .iter()
        .map(|name| name.parse::<Algorithm>())
        .collect::<Result<Vec<_>, _>>()?;
    let order = order.map_or(Ok(SortOrder::Ascending), str::parse)?;
    compare_algorithms(array, &parsed, order)
}
