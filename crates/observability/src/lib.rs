//! Tracing/logging setup and its configuration.

pub use config::{LogFormat, ObservabilityConfig, ParseLogFormatError};

/// Initialize process-wide tracing from the environment (`RUST_LOG`,
/// `HEARTH_LOG_FORMAT`).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    init_with(&ObservabilityConfig::from_env());
}

/// Initialize process-wide tracing from an explicit configuration.
pub fn init_with(config: &ObservabilityConfig) {
    tracing::init(config);
}

/// Environment-driven settings.
pub mod config;

/// Subscriber installation (filters, formats).
pub mod tracing;
