//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub admin: AdminConfig,
    pub payment: PaymentConfig,
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Fixed page size used by every paginated query
    pub page_size: i64,
}

/// Administrator account configuration
///
/// The admin account is not stored in the database; credentials supplied in
/// request headers are checked against this username and Argon2 hash.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AdminConfig {
    pub username: String,
    pub hashed_password: String,
}

/// Payment gateway configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentConfig {
    pub base_url: String,
    pub tmn_code: String,
    pub secret_key: String,
    pub return_url: String,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("RESIDENCEHUB"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::AppError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            database: DatabaseConfig {
                url: "postgresql://localhost/residencehub".to_string(),
                max_connections: 10,
                min_connections: 1,
                page_size: 50,
            },
            admin: AdminConfig {
                username: String::new(),
                hashed_password: String::new(),
            },
            payment: PaymentConfig {
                base_url: "https://sandbox.vnpayment.vn/paymentv2/vpcpay.html".to_string(),
                tmn_code: String::new(),
                secret_key: String::new(),
                return_url: "https://example.com".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "/var/log/residencehub".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.database.page_size, 50);
        assert_eq!(settings.server.port, 8080);
        assert!(settings.database.url.contains("postgresql://"));
        assert!(settings.payment.base_url.contains("vnpayment"));
    }
}
