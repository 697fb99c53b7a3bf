//! Health check endpoint

use axum::{extract::State, routing::get, Router};

use crate::database;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Probe the database pool
async fn health(State(state): State<AppState>) -> Result<&'static str, AppError> {
    database::health_check(&state.pool).await?;
    Ok("ok")
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
