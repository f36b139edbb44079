//! Structured logging for the road network service.
//!
//! - [`LoggingConfig`]: configuration read from the environment
//! - [`init_logging`]: install a JSON or text `tracing` subscriber
//!
//! # Environment Variables
//!
//! - `LOG_FORMAT`: Output format, either `json` (default) or `text`
//! - `RUST_LOG`: Log level filter (default: `info`)
//! - `SERVICE_NAME`: Name stamped on the startup event
//!
//! # Example
//!
//! ```no_run
//! use roadnet_service_shared::logging::{LoggingConfig, init_logging};
//!
//! let config = LoggingConfig::from_env();
//! init_logging(&config);
//! ```

use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON structured logging (default, production).
    #[default]
    Json,
    /// Human-readable text logging (development).
    Text,
}

impl LogFormat {
    /// Parse a log format name.
    ///
    /// Accepts "json", "text", or "pretty" (alias for text).
    /// Returns `Json` for any other value.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => LogFormat::Text,
            _ => LogFormat::Json,
        }
    }
}

/// Configuration for the logging system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: LogFormat,
    /// Filter directive used when `RUST_LOG` is unset or invalid.
    pub level: String,
    pub service: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Json,
            level: "info".to_string(),
            service: None,
        }
    }
}

impl LoggingConfig {
    /// Create configuration from `LOG_FORMAT`, `RUST_LOG`, and `SERVICE_NAME`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let format = lookup("LOG_FORMAT")
            .map(|v| LogFormat::parse(&v))
            .unwrap_or_default();
        let level = lookup("RUST_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| "info".to_string());
        let service = lookup("SERVICE_NAME").filter(|v| !v.trim().is_empty());

        Self {
            format,
            level,
            service,
        }
    }

    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }
}

/// Install the global tracing subscriber.
///
/// Call once at startup. A second call leaves the first subscriber in place
/// and returns `false`.
///
/// # JSON Format (default)
///
/// ```json
/// {"timestamp":"2026-01-10T10:00:00Z","level":"INFO","fields":{"message":"road network loaded successfully","vertices":9},"target":"roadnet_service_shared::state"}
/// ```
///
/// # Text Format (development)
///
/// ```text
/// 2026-01-10T10:00:00Z  INFO roadnet_service_shared::state: road network loaded successfully
/// ```
pub fn init_logging(config: &LoggingConfig) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let registry = tracing_subscriber::registry().with(filter);

    let installed = match config.format {
        LogFormat::Text => registry.with(fmt::layer().pretty()).try_init().is_ok(),
        LogFormat::Json => {
            let json_layer = fmt::layer()
                .json()
                .with_current_span(false)
                .with_span_list(false);
            registry.with(json_layer).try_init().is_ok()
        }
    };

    if installed {
        tracing::info!(
            service = config.service.as_deref().unwrap_or("roadnet-service"),
            format = ?config.format,
            "logging initialized"
        );
    }
    installed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("TEXT"), LogFormat::Text);
        assert_eq!(LogFormat::parse(" pretty "), LogFormat::Text);
        assert_eq!(LogFormat::parse("unknown"), LogFormat::Json);
    }

    #[test]
    fn test_logging_config_default() {
        let config = LoggingConfig::default();
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, "info");
        assert!(config.service.is_none());
    }

    #[test]
    fn test_logging_config_from_lookup() {
        let config = LoggingConfig::from_lookup(lookup(&[
            ("LOG_FORMAT", "text"),
            ("RUST_LOG", "roadnet_lib=debug"),
            ("SERVICE_NAME", "roadnet"),
        ]));
        assert_eq!(config.format, LogFormat::Text);
        assert_eq!(config.level, "roadnet_lib=debug");
        assert_eq!(config.service.as_deref(), Some("roadnet"));
    }

    #[test]
    fn test_logging_config_blank_values_fall_back() {
        let config = LoggingConfig::from_lookup(lookup(&[("RUST_LOG", " "), ("SERVICE_NAME", "")]));
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.level, "info");
        assert!(config.service.is_none());
    }

    #[test]
    fn test_logging_config_with_service() {
        let config = LoggingConfig::default().with_service("roadnet");
        assert_eq!(config.service, Some("roadnet".to_string()));
    }
}
