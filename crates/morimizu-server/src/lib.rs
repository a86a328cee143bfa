//! HTTP API server for the Morimizu sorting visualizer.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Trace endpoint** (`POST /api/sort`) returning every snapshot of one
//!   algorithm run for the chart to replay
//! - **Comparison endpoint** (`POST /api/compare`) returning only the
//!   terminal array of each selected algorithm
//! - **Helper endpoints** for the input panel: the algorithm catalogue,
//!   sample datasets, and text parsing
//! - **Minimal HTML status page** (`GET /`) listing the endpoints
//!
//! # Architecture
//!
//! Every request is independent. Handlers validate the body against the
//! configured [`LimitsConfig`], call into `morimizu-core`, and serialize
//! the result. The only shared mutable state is a request counter.
//!
//! [`LimitsConfig`]: morimizu_core::config::LimitsConfig

pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
