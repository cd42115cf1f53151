//! Logging bootstrap
//!
//! The engine crates only emit `tracing` events and spans: allocation shapes,
//! transpose permutations, and `sum`/`dot` spans at `debug` level. Nothing
//! is printed until an application installs a subscriber, which this module
//! does when the `tracing` feature is enabled.
//!
//! # Example
//!
//! ```no_run
//! use minarray::logging::{init_logging, LogConfig, LogFormat};
//!
//! init_logging(LogConfig {
//!     format: LogFormat::Compact,
//!     filter: "minarray_core=debug,info".to_string(),
//!     ..LogConfig::default()
//! })?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter directive (default `minarray=info,warn`)
//! - `MINARRAY_LOG_FORMAT`: `pretty`, `compact` or `json` (default `pretty`)

use anyhow::Result;
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable selecting the output format.
pub const FORMAT_ENV: &str = "MINARRAY_LOG_FORMAT";

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "minarray=info,warn";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Multi-line human-readable output
    Pretty,
    /// One JSON object per event
    Json,
    /// One line per event
    Compact,
}

impl LogFormat {
    /// Parse a format name; anything unrecognized is `Pretty`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => LogFormat::Json,
            "compact" => LogFormat::Compact,
            _ => LogFormat::Pretty,
        }
    }
}

/// Subscriber configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Output format
    pub format: LogFormat,
    /// `EnvFilter` directive, e.g. `minarray_core=debug`
    pub filter: String,
    /// Enable ANSI colors (ignored for JSON)
    pub with_ansi: bool,
    /// Show target module paths
    pub with_target: bool,
    /// Show thread IDs
    pub with_thread_ids: bool,
    /// Show source file and line
    pub with_location: bool,
}

impl LogConfig {
    /// Build a configuration from explicit format and filter values,
    /// falling back to the defaults for whichever is `None`.
    pub fn from_values(format: Option<&str>, filter: Option<String>) -> Self {
        Self {
            format: format.map(LogFormat::parse).unwrap_or(LogFormat::Pretty),
            filter: filter.unwrap_or_else(|| DEFAULT_FILTER.to_string()),
            with_ansi: true,
            with_target: true,
            with_thread_ids: false,
            with_location: false,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        let format = std::env::var(FORMAT_ENV).ok();
        let filter = std::env::var("RUST_LOG").ok();
        Self::from_values(format.as_deref(), filter)
    }
}

/// Install a global subscriber for `config`.
///
/// Call once at application startup.
///
/// # Errors
///
/// Fails if the filter directive does not parse or a global subscriber is
/// already installed.
#[cfg(feature = "tracing")]
pub fn init_logging(config: LogConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.filter)?;

    match config.format {
        LogFormat::Pretty => {
            let layer = fmt::layer()
                .pretty()
                .with_ansi(config.with_ansi)
                .with_target(config.with_target)
                .with_thread_ids(config.with_thread_ids)
                .with_file(config.with_location)
                .with_line_number(config.with_location)
                .with_filter(filter);
            tracing_subscriber::registry().with(layer).try_init()?;
        }
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_target(config.with_target)
                .with_thread_ids(config.with_thread_ids)
                .with_file(config.with_location)
                .with_line_number(config.with_location)
                .with_filter(filter);
            tracing_subscriber::registry().with(layer).try_init()?;
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_ansi(config.with_ansi)
                .with_target(config.with_target)
                .with_thread_ids(config.with_thread_ids)
                .with_file(config.with_location)
                .with_line_number(config.with_location)
                .with_filter(filter);
            tracing_subscriber::registry().with(layer).try_init()?;
        }
    }

    tracing::debug!(format = ?config.format, filter = %config.filter, "logging initialized");
    Ok(())
}

/// No-op when the `tracing` feature is disabled
#[cfg(not(feature = "tracing"))]
pub fn init_logging(_config: LogConfig) -> Result<()> {
    Ok(())
}
