//! Logging setup
//!
//! jrpc emits `tracing` events (decode failures, discrimination outcomes,
//! transport activity) but never installs a subscriber on its own. Binaries
//! that want the output call [`init_logging`] once at startup.
//!
//! ```rust,no_run
//! use jrpc_core::LogConfig;
//!
//! let config = LogConfig::default()
//!     .with_level("jrpc_core=debug,info")
//!     .with_json(true);
//! jrpc_core::init_logging(config).expect("Failed to init logging");
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter directives; takes precedence over the configured level

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output configuration
///
/// # Defaults
///
/// - Level: `$RUST_LOG` or "info"
/// - Plain text output with targets, without line numbers
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter directives, e.g. "info" or "jrpc_client=debug,warn"
    pub level: String,
    /// Write one JSON object per event instead of plain text
    pub json: bool,
    /// Include the module path of each event
    pub with_target: bool,
    /// Include the source line number of each event
    pub with_line_number: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            json: false,
            with_target: true,
            with_line_number: false,
        }
    }
}

impl LogConfig {
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn with_target(mut self, enable: bool) -> Self {
        self.with_target = enable;
        self
    }

    pub fn with_line_number(mut self, enable: bool) -> Self {
        self.with_line_number = enable;
        self
    }
}

/// Install a global `tracing` subscriber
///
/// # Errors
///
/// Fails if the filter directives are invalid or a global subscriber is
/// already installed.
pub fn init_logging(config: LogConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&config.level))?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(config.with_target)
        .with_line_number(config.with_line_number);

    // The two layer types differ, so each branch builds its own registry
    if config.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.json())
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    tracing::debug!(level = %config.level, json = config.json, "Logging initialized");
    Ok(())
}
