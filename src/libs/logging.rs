//! Installs a `tracing` subscriber for hosts that do not bring their own.
//!
//! The directory itself only emits events; wiring up an output is left to
//! whoever embeds the library.

use crate::libs::settings::DirectorySettings;
use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Failed to initialise logging: {0}")]
    InitializationFailed(String),
}

/// Options for the fmt subscriber
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset, e.g. `info`
    pub level: String,
    /// Whether to print the event target
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            with_target: true,
        }
    }
}

impl LogConfig {
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            ..Default::default()
        }
    }

    pub fn from_settings(settings: &DirectorySettings) -> Self {
        Self::new(settings.log_level.clone())
    }

    pub fn with_target(mut self, enabled: bool) -> Self {
        self.with_target = enabled;
        self
    }
}

/// Initialise the global subscriber.
///
/// Fails instead of panicking when a subscriber is already installed.
pub fn init_logging(config: LogConfig) -> Result<(), LoggingError> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(config.with_target))
        .try_init()
        .map_err(|e| LoggingError::InitializationFailed(e.to_string()))
}
