//! Log subscriber for the scoring service and CLI.
//!
//! Scored requests are logged at `debug` and rejected inputs at `warn`, so the default `info`
//! filter keeps per-request noise out of production logs.

use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    EnvFilter { value: String, source: ParseError },
    Subscriber(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::EnvFilter { value, .. } => {
                write!(f, "invalid APP_LOG_LEVEL filter '{value}'")
            }
            TelemetryError::Subscriber(err) => write!(f, "unable to install subscriber: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::EnvFilter { source, .. } => Some(source),
            TelemetryError::Subscriber(err) => Some(&**err),
        }
    }
}

/// Where the active filter directives came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterSource {
    RustLog,
    AppLogLevel,
}

impl FilterSource {
    pub fn label(&self) -> &'static str {
        match self {
            FilterSource::RustLog => "RUST_LOG",
            FilterSource::AppLogLevel => "APP_LOG_LEVEL",
        }
    }
}

/// Installs the global subscriber. A usable `RUST_LOG` wins over the configured `APP_LOG_LEVEL`.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let (env_filter, source) = select_filter(rust_log.as_deref(), &config.log_level)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Subscriber)?;

    tracing::debug!(source = source.label(), "credit scoring telemetry installed");
    Ok(())
}

/// Blank or unparsable `RUST_LOG` falls back to the configured level, which must parse.
fn select_filter(
    rust_log: Option<&str>,
    configured: &str,
) -> Result<(EnvFilter, FilterSource), TelemetryError> {
    if let Some(directives) = rust_log.filter(|value| !value.trim().is_empty()) {
        if let Ok(filter) = parse_filter(directives) {
            return Ok((filter, FilterSource::RustLog));
        }
    }

    parse_filter(configured).map(|filter| (filter, FilterSource::AppLogLevel))
}

fn parse_filter(directives: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(directives).map_err(|source| TelemetryError::EnvFilter {
        value: directives.to_string(),
        source,
    })
}
