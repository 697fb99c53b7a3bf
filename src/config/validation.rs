//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use super::Settings;
use crate::utils::errors::{AppError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_database_config(&settings.database)?;
    validate_admin_config(&settings.admin)?;
    validate_payment_config(&settings.payment)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate HTTP server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(AppError::Config("Server host is required".to_string()));
    }

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(AppError::Config("Database URL is required".to_string()));
    }

    if config.max_connections == 0 {
        return Err(AppError::Config(
            "Max connections must be greater than 0".to_string(),
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(AppError::Config(
            "Min connections cannot be greater than max connections".to_string(),
        ));
    }

    if config.page_size <= 0 {
        return Err(AppError::Config(
            "Page size must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate administrator account configuration
fn validate_admin_config(config: &super::AdminConfig) -> Result<()> {
    if config.username.is_empty() {
        return Err(AppError::Config("Admin username is required".to_string()));
    }

    if config.hashed_password.is_empty() {
        return Err(AppError::Config(
            "Admin password hash is required".to_string(),
        ));
    }

    Ok(())
}

/// Validate payment gateway configuration
fn validate_payment_config(config: &super::PaymentConfig) -> Result<()> {
    if config.base_url.is_empty() {
        return Err(AppError::Config(
            "Payment gateway base URL is required".to_string(),
        ));
    }

    if config.tmn_code.is_empty() {
        return Err(AppError::Config(
            "Payment terminal code is required".to_string(),
        ));
    }

    if config.secret_key.is_empty() {
        return Err(AppError::Config(
            "Payment secret key is required".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(AppError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(AppError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}
