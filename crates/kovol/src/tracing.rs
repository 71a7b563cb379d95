//! Logging setup and segment prefixes for Kovol binaries.
//!
//! Output goes to stderr so stdout stays clean for JSON.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

/// Build the filter: RUST_LOG when set, otherwise `level`.
///
/// `level` accepts anything `EnvFilter` does, e.g. `debug` or
/// `kovol_core=trace,info`.
pub fn filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level).map_err(|e| Error::Config(format!("log level '{}': {}", level, e)))
}

/// Install the global subscriber with a compact stderr layer.
pub fn init_with_filter(level: &str) -> Result<()> {
    tracing_subscriber::registry()
        .with(filter(level)?)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| Error::Config(format!("logging already initialised: {}", e)))
}

/// Kovol segment prefixes for logging.
pub mod prefix {
    /// Paradigm prediction prefix
    pub const PREDICT: &str = "⊢";
    /// Cross-check against attested data prefix
    pub const CHECK: &str = "≟";
    /// Data loading prefix
    pub const LOAD: &str = "⊔";
}
