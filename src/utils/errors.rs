//! Error handling for ResidenceHub
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy, including the mapping of
//! each error to an HTTP response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Main error type for the ResidenceHub application
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    #[error("Fee not found: {fee_id}")]
    FeeNotFound { fee_id: i64 },

    #[error("Room not found: {room}")]
    RoomNotFound { room: i32 },

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias for ResidenceHub operations
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// HTTP status code this error maps to
    pub const fn status_code(&self) -> StatusCode {
        match self {
            AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::InvalidInput(_) | AppError::UsernameTaken(_) => StatusCode::BAD_REQUEST,
            AppError::FeeNotFound { .. } | AppError::RoomNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Database(_)
            | AppError::Migration(_)
            | AppError::Config(_)
            | AppError::PasswordHash(_)
            | AppError::Serialization(_)
            | AppError::Io(_)
            | AppError::UrlParse(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Whether this error should be logged at error level
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_server_error() {
            tracing::error!(error = %self, "Server error occurred");
        } else {
            tracing::debug!(error = %self, "Client error occurred");
        }

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_errors_map_to_401_and_403() {
        assert_eq!(AppError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::Forbidden("resident account".to_string()).status_code(),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_business_rule_violations_map_to_400() {
        assert_eq!(
            AppError::UsernameTaken("alice".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidInput("amount out of range".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_missing_entities_map_to_404() {
        assert_eq!(
            AppError::FeeNotFound { fee_id: 1 }.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::RoomNotFound { room: 101 }.status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_unexpected_errors_are_server_errors() {
        let err = AppError::Config("missing".to_string());
        assert!(err.is_server_error());
    }
}
