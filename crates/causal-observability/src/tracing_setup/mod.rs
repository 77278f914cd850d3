//! Tracing setup: structured logging with span definitions and event types.

pub mod events;
pub mod spans;

use tracing_subscriber::EnvFilter;

use causal_core::config::ObservabilityConfig;
use causal_core::errors::{CausalMemoryError, CausalMemoryResult};

/// Environment variable consulted for the log filter before the configured level.
pub const LOG_ENV: &str = "CAUSAL_MEMORY_LOG";

/// Filter from `CAUSAL_MEMORY_LOG`, falling back to the configured level.
pub fn build_filter(config: &ObservabilityConfig) -> CausalMemoryResult<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.log_level).map_err(|e| {
        CausalMemoryError::ConfigError(format!(
            "invalid log level {:?}: {e}",
            config.log_level
        ))
    })
}

/// Install the global subscriber. Logs go to stderr so command output stays clean.
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> CausalMemoryResult<()> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let result = if config.json {
        builder
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .try_init()
    } else {
        builder.compact().try_init()
    };
    result.map_err(|e| CausalMemoryError::ConfigError(format!("tracing already initialized: {e}")))
}
