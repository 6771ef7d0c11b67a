//! Tracing subscriber setup.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

use crate::{config, Error, Result};

// Crates whose events are shown at the configured level.
const MODULE_WHITELIST: &[&str] = &["station_labeling"];

#[derive(Debug, Default, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub enum LogLevel {
    /// The "off" level.
    #[serde(rename = "off")]
    Off,
    /// The "trace" level.
    #[serde(rename = "trace")]
    Trace,
    /// The "debug" level.
    #[serde(rename = "debug")]
    Debug,
    /// The "info" level.
    #[serde(rename = "info")]
    #[default]
    Info,
    /// The "warn" level.
    #[serde(rename = "warn")]
    Warn,
    /// The "error" level.
    #[serde(rename = "error")]
    Error,
}

#[derive(Debug, Default, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub enum Format {
    #[serde(rename = "compact")]
    #[default]
    Compact,
    #[serde(rename = "pretty")]
    Pretty,
    #[serde(rename = "json")]
    Json,
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Off => "off",
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        })
    }
}

/// Builds the filter directives: `RUST_LOG` wins, then the configured
/// override, then the configured level applied to whitelisted crates.
fn filter_directives(config: &config::Logger) -> String {
    std::env::var(EnvFilter::DEFAULT_ENV)
        .ok()
        .or_else(|| config.override_filter.clone())
        .unwrap_or_else(|| {
            MODULE_WHITELIST
                .iter()
                .map(|module| format!("{module}={}", config.level))
                .collect::<Vec<_>>()
                .join(",")
        })
}

/// Installs the global tracing subscriber.
///
/// Does nothing when logging is disabled.
///
/// # Errors
///
/// Fails when the filter directives are invalid or a global subscriber is
/// already installed.
pub fn init(config: &config::Logger) -> Result<()> {
    if !config.enable {
        return Ok(());
    }

    let filter = EnvFilter::try_new(filter_directives(config))
        .map_err(|err| Error::Logger(err.to_string()))?;

    let mut layers: Vec<Box<dyn Layer<Registry> + Sync + Send>> = Vec::new();
    match config.format {
        Format::Compact => layers.push(fmt::layer().compact().with_ansi(true).boxed()),
        Format::Pretty => layers.push(fmt::layer().pretty().with_ansi(true).boxed()),
        Format::Json => layers.push(fmt::layer().json().boxed()),
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|err| Error::Logger(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_render_lowercase() {
        assert_eq!(LogLevel::Warn.to_string(), "warn");
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn override_filter_replaces_level_directives() {
        if std::env::var(EnvFilter::DEFAULT_ENV).is_ok() {
            return;
        }
        let mut config = config::Logger::default();
        assert_eq!(filter_directives(&config), "station_labeling=info");
        config.override_filter = Some("trace".into());
        assert_eq!(filter_directives(&config), "trace");
    }

    #[test]
    fn disabled_logger_installs_nothing() {
        let config = config::Logger {
            enable: false,
            ..config::Logger::default()
        };
        assert!(init(&config).is_ok());
    }
}
