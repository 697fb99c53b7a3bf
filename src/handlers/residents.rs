//! Admin endpoints for resident records

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::Deserialize;

use crate::models::{Credentials, Resident};
use crate::state::AppState;
use crate::utils::errors::AppError;

#[derive(Debug, Deserialize)]
struct PageParams {
    #[serde(default)]
    offset: i64,
}

/// Page of residents, most recent first
async fn list(
    State(state): State<AppState>,
    credentials: Credentials,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<Resident>>, AppError> {
    state.auth.authorize_admin(&credentials).await?;

    let residents = state.db.residents.query(params.offset).await?;
    Ok(Json(residents))
}

/// Number of residents
async fn count(
    State(state): State<AppState>,
    credentials: Credentials,
) -> Result<Json<i64>, AppError> {
    state.auth.authorize_admin(&credentials).await?;

    let count = state.db.residents.count().await?;
    Ok(Json(count))
}

/// Remove a resident record
async fn remove(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(resident_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.auth.authorize_admin(&credentials).await?;

    state.db.residents.delete(resident_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list))
        .route("/count", get(count))
        .route("/{resident_id}", delete(remove))
}
