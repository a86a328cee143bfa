//! REST API endpoint handlers for the visualizer.
//!
//! Every handler validates its input against the limits in the shared
//! [`AppState`] before calling into `morimizu-core`. Bodies and queries
//! that fail to decode are reported as [`ApiError::InvalidInput`].
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `POST` | `/api/sort` | Full snapshot trace for one algorithm |
//! | `POST` | `/api/compare` | Terminal arrays for several algorithms |
//! | `GET` | `/api/algorithms` | Supported algorithms |
//! | `GET` | `/api/dataset` | Generate a sample input |
//! | `POST` | `/api/parse` | Parse typed text into an array |
//! | `GET` | `/api/config` | Playback interval and input limits |
//! | `GET` | `/api/health` | Liveness and request count |

use std::collections::BTreeSet;
use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse};
use morimizu_core::dataset::{self, DatasetSpec};
use morimizu_core::input::{parse_array_input, validate_array};
use morimizu_core::{TraceError, compare_algorithms_by_name, generate_trace_by_name};
use morimizu_types::{
    Algorithm, AlgorithmInfo, ClientConfig, CompareRequest, Comparison, DatasetKind,
    DatasetResponse, ParseRequest, ParsedArray, Snapshot, SortRequest,
};
use serde::Deserialize;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameter structs
// ---------------------------------------------------------------------------

/// Query parameters for the `GET /api/dataset` endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct DatasetQuery {
    /// Dataset kind key (default `random`).
    pub kind: Option<String>,
    /// Number of elements.
    pub size: Option<usize>,
    /// Smallest value, inclusive.
    pub min: Option<i32>,
    /// Largest value, inclusive.
    pub max: Option<i32>,
    /// Seed for a reproducible dataset.
    pub seed: Option<u64>,
}

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page showing server status and API links.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let requests = state.requests_served();
    let max_len = state.limits.max_array_len;
    let algorithm_count = Algorithm::ALL.len();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>Morimizu</title>
    <style>
        body {{
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }}
        h1 {{ color: #58a6ff; margin-bottom: 0.25rem; }}
        .subtitle {{ color: #8b949e; margin-top: 0; }}
        .metric {{
            display: inline-block;
            background: #161b22;
            border: 1px solid #30363d;
            border-radius: 6px;
            padding: 1rem 1.5rem;
            margin: 0.5rem 0.5rem 0.5rem 0;
            min-width: 120px;
        }}
        .metric .label {{ color: #8b949e; font-size: 0.85rem; }}
        .metric .value {{ color: #58a6ff; font-size: 1.5rem; font-weight: bold; }}
        a {{ color: #58a6ff; text-decoration: none; }}
        ul {{ list-style: none; padding: 0; }}
        li {{ padding: 0.3rem 0; }}
        .status {{ color: #3fb950; font-weight: bold; }}
    </style>
</head>
<body>
    <h1>Morimizu</h1>
    <p class="subtitle">Sorting algorithm trace server</p>

    <p>Status: <span class="status">RUNNING</span></p>

    <div>
        <div class="metric">
            <div class="label">Requests</div>
            <div class="value">{requests}</div>
        </div>
        <div class="metric">
            <div class="label">Algorithms</div>
            <div class="value">{algorithm_count}</div>
        </div>
        <div class="metric">
            <div class="label">Max length</div>
            <div class="value">{max_len}</div>
        </div>
    </div>

    <h2>API Endpoints</h2>
    <ul>
        <li>POST /api/sort -- Snapshot trace for one algorithm</li>
        <li>POST /api/compare -- Terminal arrays for several algorithms</li>
        <li>GET <a href="/api/algorithms">/api/algorithms</a> -- Supported algorithms</li>
        <li>GET <a href="/api/dataset">/api/dataset</a> -- Sample input (?kind=&amp;size=&amp;min=&amp;max=&amp;seed=)</li>
        <li>POST /api/parse -- Parse typed text into an array</li>
        <li>GET <a href="/api/config">/api/config</a> -- Playback interval and limits</li>
        <li>GET <a href="/api/health">/api/health</a> -- Liveness</li>
    </ul>
</body>
</html>"#
    ))
}

// ---------------------------------------------------------------------------
// POST /api/sort -- full trace
// ---------------------------------------------------------------------------

/// Run one algorithm and return every recorded snapshot.
///
/// The first snapshot is the input as given, the last is fully sorted.
pub async fn sort(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SortRequest>, JsonRejection>,
) -> Result<Json<Vec<Snapshot>>, ApiError> {
    state.record_request();
    let Json(request) = payload?;
    validate_array(&request.array, state.limits.max_array_len)?;

    let trace = generate_trace_by_name(&request.array, &request.algorithm, &request.order)?;
    info!(
        algorithm = %request.algorithm,
        order = %request.order,
        len = request.array.len(),
        snapshots = trace.len(),
        "Trace served"
    );
    Ok(Json(trace.into_snapshots()))
}

// ---------------------------------------------------------------------------
// POST /api/compare -- terminal arrays
// ---------------------------------------------------------------------------

/// Sort one input with several algorithms and report whether they agree.
///
/// The algorithm limit counts distinct names, since repeats collapse into
/// one result.
pub async fn compare(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CompareRequest>, JsonRejection>,
) -> Result<Json<Comparison>, ApiError> {
    state.record_request();
    let Json(request) = payload?;
    validate_array(&request.array, state.limits.max_array_len)?;

    let max = state.limits.max_compare_algorithms;
    let distinct = request.algorithms.iter().collect::<BTreeSet<_>>().len();
    if distinct > max {
        return Err(ApiError::InvalidInput(format!(
            "{distinct} algorithms requested, the limit is {max}"
        )));
    }

    let comparison = compare_algorithms_by_name(
        &request.array,
        &request.algorithms,
        request.order.as_deref(),
    )?;
    info!(
        algorithms = comparison.results.len(),
        len = request.array.len(),
        all_same = comparison.all_same,
        "Comparison served"
    );
    Ok(Json(comparison))
}

// ---------------------------------------------------------------------------
// GET /api/algorithms -- catalogue
// ---------------------------------------------------------------------------

/// List every supported algorithm with its display name and stability.
pub async fn list_algorithms(State(state): State<Arc<AppState>>) -> Json<Vec<AlgorithmInfo>> {
    state.record_request();
    Json(Algorithm::ALL.into_iter().map(AlgorithmInfo::from).collect())
}

// ---------------------------------------------------------------------------
// GET /api/dataset -- sample input
// ---------------------------------------------------------------------------

/// Generate a sample input for the input panel.
///
/// # Query Parameters
///
/// - `kind`: dataset kind key (default: `random`)
/// - `size`, `min`, `max`: shape of the data (default: 20 values in 1..=100)
/// - `seed`: reproduce a previous dataset
pub async fn get_dataset(
    State(state): State<Arc<AppState>>,
    query: Result<Query<DatasetQuery>, QueryRejection>,
) -> Result<Json<DatasetResponse>, ApiError> {
    state.record_request();
    let Query(query) = query?;

    let kind = query
        .kind
        .as_deref()
        .map_or(Ok(DatasetKind::Random), str::parse)
        .map_err(TraceError::from)?;
    let spec = DatasetSpec {
        kind,
        size: query.size.unwrap_or(dataset::DEFAULT_SIZE),
        min: query.min.unwrap_or(dataset::DEFAULT_MIN),
        max: query.max.unwrap_or(dataset::DEFAULT_MAX),
        seed: query.seed,
    };

    let array = dataset::generate_dataset(&spec, state.limits.max_array_len)?;
    Ok(Json(DatasetResponse { kind, array }))
}

// ---------------------------------------------------------------------------
// POST /api/parse -- text input
// ---------------------------------------------------------------------------

/// Parse user-typed text into an array, applying the length limit.
pub async fn parse(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> Result<Json<ParsedArray>, ApiError> {
    state.record_request();
    let Json(request) = payload?;
    let array = parse_array_input(&request.text)?;
    validate_array(&array, state.limits.max_array_len)?;
    Ok(Json(ParsedArray { array }))
}

// ---------------------------------------------------------------------------
// GET /api/config -- front-end settings
// ---------------------------------------------------------------------------

/// Report the auto-play interval and the input limits the front end should
/// enforce before sending a request.
pub async fn get_config(State(state): State<Arc<AppState>>) -> Json<ClientConfig> {
    state.record_request();
    Json(state.client_config())
}

// ---------------------------------------------------------------------------
// GET /api/health
// ---------------------------------------------------------------------------

/// Liveness check and request count.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "requests_served": state.requests_served(),
    }))
}
