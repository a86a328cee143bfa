//! Configuration loading and typed config structures for the visualizer.
//!
//! The configuration lives in `morimizu-config.yaml`. Every section and
//! field has a default, so an empty or missing file yields a working
//! service on `0.0.0.0:8080` with the 100-element input limit.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

/// Environment variable naming the config file path.
pub const CONFIG_PATH_ENV: &str = "MORIMIZU_CONFIG";

/// Config file used when [`CONFIG_PATH_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "morimizu-config.yaml";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level visualizer configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MorimizuConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerSection,

    /// Input size limits.
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Front-end playback settings.
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl MorimizuConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override the file:
    /// - `MORIMIZU_HOST` overrides `server.host`
    /// - `MORIMIZU_PORT` overrides `server.port`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.apply_overrides(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Load from `path`, falling back to defaults if the file is absent.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the file exists but is invalid,
    /// or [`ConfigError::Io`] for read failures other than not-found.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match Self::from_file(path) {
            Err(ConfigError::Io { source }) if source.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "Config file not found, using defaults");
                let mut config = Self::default();
                config.apply_overrides(|name| std::env::var(name).ok());
                Ok(config)
            }
            other => other,
        }
    }

    /// Parse configuration from a YAML string.
    ///
    /// An empty document yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Apply `MORIMIZU_HOST` / `MORIMIZU_PORT` as returned by `lookup`.
    ///
    /// An unparseable port is ignored with a warning.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("MORIMIZU_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("MORIMIZU_PORT") {
            match port.parse() {
                Ok(port) => self.server.port = port,
                Err(e) => warn!(value = %port, error = %e, "Ignoring invalid MORIMIZU_PORT"),
            }
        }
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerSection {
    /// Address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Requests taking longer than this are aborted with 408.
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
}

impl ServerSection {
    /// [`Self::request_timeout_ms`] as a [`Duration`].
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}

/// Limits applied to every request before it reaches the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct LimitsConfig {
    /// Longest accepted input sequence.
    #[serde(default = "default_max_array_len")]
    pub max_array_len: usize,

    /// Most algorithms accepted in one comparison.
    #[serde(default = "default_max_compare_algorithms")]
    pub max_compare_algorithms: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_array_len: default_max_array_len(),
            max_compare_algorithms: default_max_compare_algorithms(),
        }
    }
}

/// Playback settings served to the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PlaybackConfig {
    /// Delay between auto-play steps.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl PlaybackConfig {
    /// [`Self::interval_ms`] as a [`Duration`].
    pub const fn interval(self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

fn default_host() -> String {
    String::from("0.0.0.0")
}

const fn default_port() -> u16 {
    8080
}

const fn default_request_timeout_ms() -> u64 {
    5000
}

const fn default_max_array_len() -> usize {
    100
}

const fn default_max_compare_algorithms() -> usize {
    9
}

const fn default_interval_ms() -> u64 {
    1000
}

fn default_log_level() -> String {
    String::from("info")
}
