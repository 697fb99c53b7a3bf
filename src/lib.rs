//! ResidenceHub backend
//!
//! An HTTP backend for residential-building management. This library provides
//! modular components for resident registration, room and fee administration,
//! admin authorization and fee payment through an external gateway.

#![allow(non_snake_case)]

pub mod config;
pub mod database;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{AppError, Result};

// Re-export main components for easy access
pub use database::DatabaseService;
pub use state::AppState;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
