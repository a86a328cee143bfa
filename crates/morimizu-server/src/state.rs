//! Shared application state for the visualizer API.
//!
//! Trace generation is a pure function of the request, so [`AppState`]
//! only carries the configured limits, the playback settings handed to the
//! front end, and a request counter.

use std::sync::atomic::{AtomicU64, Ordering};

use morimizu_core::config::{LimitsConfig, MorimizuConfig, PlaybackConfig};
use morimizu_types::ClientConfig;

/// Shared state passed to every handler.
#[derive(Debug, Default)]
pub struct AppState {
    /// Input limits enforced on every request.
    pub limits: LimitsConfig,
    /// Playback settings served by `GET /api/config`.
    pub playback: PlaybackConfig,
    requests_served: AtomicU64,
}

impl AppState {
    /// State with the default limits.
    pub fn new() -> Self {
        Self::default()
    }

    /// State with the given limits and default playback settings.
    pub fn with_limits(limits: LimitsConfig) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    /// State built from the loaded configuration.
    pub fn from_config(config: &MorimizuConfig) -> Self {
        Self {
            limits: config.limits,
            playback: config.playback,
            ..Self::default()
        }
    }

    /// The settings the front end reads before its first request.
    pub const fn client_config(&self) -> ClientConfig {
        ClientConfig {
            playback_interval_ms: self.playback.interval_ms,
            max_array_len: self.limits.max_array_len,
            max_compare_algorithms: self.limits.max_compare_algorithms,
        }
    }

    /// Count one API request and return the new total.
    pub fn record_request(&self) -> u64 {
        self.requests_served
            .fetch_add(1, Ordering::Relaxed)
            .saturating_add(1)
    }

    /// Number of API requests handled so far.
    pub fn requests_served(&self) -> u64 {
        self.requests_served.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn counter_starts_at_zero_and_increments() {
        let state = AppState::new();
        assert_eq!(state.requests_served(), 0);
        assert_eq!(state.record_request(), 1);
        assert_eq!(state.record_request(), 2);
        assert_eq!(state.requests_served(), 2);
    }

    #[test]
    fn custom_limits_are_kept() {
        let limits = LimitsConfig {
            max_array_len: 5,
            max_compare_algorithms: 2,
        };
        assert_eq!(AppState::with_limits(limits).limits, limits);
    }

    #[test]
    fn client_config_reflects_loaded_settings() {
        let config = MorimizuConfig::parse(
            "playback:\n  interval_ms: 250\nlimits:\n  max_array_len: 40\n",
        )
        .unwrap();
        let client = AppState::from_config(&config).client_config();
        assert_eq!(client.playback_interval_ms, 250);
        assert_eq!(client.max_array_len, 40);
        assert_eq!(client.max_compare_algorithms, 9);
    }
}
