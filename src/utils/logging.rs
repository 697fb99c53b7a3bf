//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging
//! utilities for the ResidenceHub application.

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
///
/// The returned guard must be held for the lifetime of the process so the
/// rolling file writer keeps flushing.
pub fn init_logging(config: &LoggingConfig) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "residencehub.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log authentication attempts with structured data
pub fn log_auth_event(username: &str, action: &str, success: bool) {
    if success {
        info!(username = username, action = action, "Authorization granted");
    } else {
        warn!(username = username, action = action, "Authorization refused");
    }
}

/// Log admin actions against registration requests
pub fn log_admin_action(action: &str, ids: &[i64]) {
    warn!(action = action, ids = ?ids, "Admin action performed");
}
