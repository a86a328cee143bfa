//! Morimizu server binary.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `morimizu-config.yaml` (or `$MORIMIZU_CONFIG`)
//!    under a temporary `RUST_LOG` subscriber, so load warnings are visible
//! 2. Initialize structured logging (tracing) from the loaded config
//! 3. Build shared state from the configured limits and playback settings
//! 4. Serve the API until terminated

use std::path::PathBuf;
use std::sync::Arc;

use morimizu_core::config::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH, LoggingConfig, MorimizuConfig};
use morimizu_server::{AppState, ServerConfig, start_server};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Application entry point for the visualizer API.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the server fails
/// to bind or serve.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config_path = std::env::var(CONFIG_PATH_ENV)
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
    let config = {
        let _guard = tracing::subscriber::set_default(bootstrap_subscriber());
        MorimizuConfig::load_or_default(&config_path)?
    };

    // 2. Initialize structured logging.
    init_tracing(&config.logging);
    info!("morimizu-server starting");
    info!(
        path = %config_path.display(),
        host = %config.server.host,
        port = config.server.port,
        request_timeout_ms = config.server.request_timeout_ms,
        max_array_len = config.limits.max_array_len,
        max_compare_algorithms = config.limits.max_compare_algorithms,
        playback_interval_ms = config.playback.interval_ms,
        "Configuration resolved"
    );

    // 3. Shared state.
    let state = Arc::new(AppState::from_config(&config));

    // 4. Serve.
    let server_config = ServerConfig::from(&config.server);
    start_server(&server_config, state).await?;

    info!("morimizu-server stopped");
    Ok(())
}

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    if logging.json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .init();
    }
}

/// Subscriber active while the config file is read, before the configured
/// logging settings are known.
fn bootstrap_subscriber() -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .finish()
}
