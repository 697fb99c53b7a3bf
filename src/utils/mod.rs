//! Utility modules
//!
//! Error types and logging helpers shared across the application

pub mod errors;
pub mod logging;

pub use errors::{AppError, Result};
