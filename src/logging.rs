//! Tracing setup
//!
//! Diagnostics go to standard error; standard output is reserved for the
//! bulletin report.

use crate::config::LoggingConfig;
use crate::{BulletinError, Result};
use tracing_subscriber::EnvFilter;

/// Build the level filter from the configured level string
pub fn level_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    EnvFilter::try_new(&config.level).map_err(|e| {
        BulletinError::config(format!("Invalid log level '{}': {e}", config.level))
    })
}

/// Event layout on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line, one field per line
    Pretty,
    /// One line per event
    Compact,
}

/// Map the configured format name to a [`LogFormat`]
pub fn log_format(config: &LoggingConfig) -> Result<LogFormat> {
    match config.format.as_str() {
        "pretty" => Ok(LogFormat::Pretty),
        "compact" => Ok(LogFormat::Compact),
        other => Err(BulletinError::config(format!("Invalid log format '{other}'"))),
    }
}

/// Install the global subscriber. Call once, before the first event.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(level_filter(config)?)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = match log_format(config)? {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    installed.map_err(|e| BulletinError::config(format!("Failed to initialise logging: {e}")))
}
