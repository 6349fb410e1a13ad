//! # Structured Logging
//!
//! Every ferrule crate logs through `tracing`. This module installs a
//! `tracing-subscriber` pipeline for applications that do not bring their
//! own: an `EnvFilter` (honouring `RUST_LOG` first) in front of a plain,
//! pretty or JSON formatter.

use ferrule_config::{Config, ConfigResult};
use std::io;
use tracing_subscriber::{
    fmt,
    layer::{Layered, SubscriberExt},
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Config key for the log level or filter directive
pub const LOG_LEVEL_KEY: &str = "LOG_LEVEL";
/// Config key for the output format: `json`, `pretty` or `plain`
pub const LOG_FORMAT_KEY: &str = "LOG_FORMAT";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "warn")
    pub level: String,
    /// Enable JSON structured logging (vs plain text)
    pub json_format: bool,
    /// Enable pretty printing for development
    pub pretty_print: bool,
    /// Include file and line number information
    pub include_location: bool,
    /// Include timestamp in logs
    pub include_timestamp: bool,
    /// Environment filter (e.g. "ferrule=debug,ferrule_validation=trace")
    pub env_filter: Option<String>,
    /// Service name reported when logging starts
    pub service_name: Option<String>,
    /// Service version reported when logging starts
    pub service_version: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            pretty_print: true,
            include_location: false,
            include_timestamp: true,
            env_filter: None,
            service_name: None,
            service_version: None,
        }
    }
}

impl LoggingConfig {
    /// Create production logging configuration
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            json_format: true,
            pretty_print: false,
            include_location: false,
            include_timestamp: true,
            env_filter: Some("ferrule=info".to_string()),
            service_name: None,
            service_version: None,
        }
    }

    /// Create development logging configuration
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            json_format: false,
            pretty_print: true,
            include_location: true,
            include_timestamp: true,
            env_filter: Some("ferrule=debug".to_string()),
            service_name: None,
            service_version: None,
        }
    }

    /// Create test logging configuration (minimal output)
    pub fn test() -> Self {
        Self {
            level: "error".to_string(),
            json_format: false,
            pretty_print: false,
            include_location: false,
            include_timestamp: false,
            env_filter: Some("ferrule=error".to_string()),
            service_name: None,
            service_version: None,
        }
    }

    /// Read `LOG_LEVEL` and `LOG_FORMAT` on top of the defaults.
    ///
    /// An unknown format is an error rather than a silent fallback.
    pub fn from_config(config: &Config) -> ConfigResult<Self> {
        let mut logging = Self::default();

        if config.has(LOG_LEVEL_KEY) {
            logging.level = config.get(LOG_LEVEL_KEY).to_string();
        }

        match config.get(LOG_FORMAT_KEY) {
            "" | "pretty" => {}
            "json" => {
                logging.json_format = true;
                logging.pretty_print = false;
            }
            "plain" => logging.pretty_print = false,
            other => {
                return Err(ferrule_config::ConfigError::invalid_value(
                    LOG_FORMAT_KEY,
                    other,
                    "json, pretty, or plain",
                ))
            }
        }

        Ok(logging)
    }

    /// Set service name and version
    pub fn with_service(mut self, name: &str, version: &str) -> Self {
        self.service_name = Some(name.to_string());
        self.service_version = Some(version.to_string());
        self
    }

    /// Set environment filter
    pub fn with_env_filter<S: Into<String>>(mut self, filter: S) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Filter directive used when `RUST_LOG` is not set
    pub fn filter_directive(&self) -> &str {
        self.env_filter.as_deref().unwrap_or(&self.level)
    }

    fn format_name(&self) -> &'static str {
        if self.json_format {
            "json"
        } else if self.pretty_print {
            "pretty"
        } else {
            "plain"
        }
    }
}

type FilteredRegistry = Layered<EnvFilter, Registry>;

fn format_layer(config: &LoggingConfig) -> Box<dyn Layer<FilteredRegistry> + Send + Sync> {
    let layer = fmt::layer()
        .with_writer(io::stdout)
        .with_file(config.include_location)
        .with_line_number(config.include_location);

    match (config.json_format, config.pretty_print, config.include_timestamp) {
        (true, _, true) => layer.json().boxed(),
        (true, _, false) => layer.json().without_time().boxed(),
        (false, true, true) => layer.pretty().boxed(),
        (false, true, false) => layer.pretty().without_time().boxed(),
        (false, false, true) => layer.boxed(),
        (false, false, false) => layer.without_time().boxed(),
    }
}

/// Install the global `tracing` subscriber.
///
/// Fails when the filter directive is invalid or a global subscriber is
/// already installed.
pub fn init_logging(config: LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.filter_directive()))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(format_layer(&config))
        .try_init()?;

    tracing::info!(
        target: "ferrule::logging",
        level = %config.level,
        format = config.format_name(),
        service_name = ?config.service_name,
        service_version = ?config.service_version,
        "Structured logging initialized"
    );

    Ok(())
}
