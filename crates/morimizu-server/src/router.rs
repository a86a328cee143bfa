//! Axum router construction for the visualizer API.
//!
//! Assembles all routes into a single [`Router`] with CORS, a request
//! timeout, and HTTP tracing.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Timeout used by [`build_router`].
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Build the complete Axum router with the default request timeout.
///
/// The router includes:
/// - `GET /` -- minimal HTML status page
/// - `POST /api/sort` -- snapshot trace for one algorithm
/// - `POST /api/compare` -- terminal arrays for several algorithms
/// - `GET /api/algorithms` -- supported algorithms
/// - `GET /api/dataset` -- sample input
/// - `POST /api/parse` -- parse typed text
/// - `GET /api/config` -- playback interval and limits
/// - `GET /api/health` -- liveness
///
/// CORS allows any origin so the front end can be served from elsewhere.
pub fn build_router(state: Arc<AppState>) -> Router {
    build_router_with_timeout(state, DEFAULT_REQUEST_TIMEOUT)
}

/// [`build_router`] with an explicit request timeout.
pub fn build_router_with_timeout(state: Arc<AppState>, timeout: Duration) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Status page
        .route("/", get(handlers::index))
        // Trace generation
        .route("/api/sort", post(handlers::sort))
        .route("/api/compare", post(handlers::compare))
        // Input panel helpers
        .route("/api/algorithms", get(handlers::list_algorithms))
        .route("/api/dataset", get(handlers::get_dataset))
        .route("/api/parse", post(handlers::parse))
        .route("/api/config", get(handlers::get_config))
        .route("/api/health", get(handlers::health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(TimeoutLayer::new(timeout)),
        )
        .with_state(state)
}
