//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the PLAIS client.

use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::{PlaisError, Result};

/// Initialize logging based on configuration
///
/// The returned guard flushes the log file on drop and must be kept alive
/// for as long as file logging is wanted.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| PlaisError::Logging(e.to_string()))?;

    let (file_layer, guard) = match config.file_path {
        Some(ref dir) => {
            let file_appender = tracing_appender::rolling::daily(dir, "plais-client.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(file_layer)
        .try_init()
        .map_err(|e| PlaisError::Logging(e.to_string()))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a completed backend call
pub fn log_api_call(method: &str, url: &str, status: Option<u16>, duration_ms: u64) {
    match status {
        Some(code) if (200..300).contains(&code) => debug!(
            method = method,
            url = url,
            status = code,
            duration_ms = duration_ms,
            "API call completed"
        ),
        Some(code) => warn!(
            method = method,
            url = url,
            status = code,
            duration_ms = duration_ms,
            "API call returned error status"
        ),
        None => warn!(
            method = method,
            url = url,
            duration_ms = duration_ms,
            "API call failed before a response arrived"
        ),
    }
}

/// Log API errors with context
pub fn log_api_error(api: &str, error: &str, context: Option<&str>) {
    error!(
        api = api,
        error = error,
        context = context,
        "API error occurred"
    );
}

/// Log maintenance actions run against the backend
pub fn log_maintenance_action(action: &str, details: Option<&str>) {
    info!(
        action = action,
        details = details,
        "Maintenance action performed"
    );
}
