//! Admin endpoints for the registration queue

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::models::{Credentials, RegisterRequest, Resident};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::logging::log_admin_action;

#[derive(Debug, Deserialize)]
struct PageParams {
    #[serde(default)]
    offset: i64,
}

/// Page of pending registration requests, most recent first
async fn list(
    State(state): State<AppState>,
    credentials: Credentials,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<RegisterRequest>>, AppError> {
    state.auth.authorize_admin(&credentials).await?;

    let requests = state.db.register_requests.query(params.offset).await?;
    Ok(Json(requests))
}

/// Number of pending registration requests
async fn count(
    State(state): State<AppState>,
    credentials: Credentials,
) -> Result<Json<i64>, AppError> {
    state.auth.authorize_admin(&credentials).await?;

    let count = state.db.register_requests.count().await?;
    Ok(Json(count))
}

/// Accept one or more registration requests
///
/// Ids that were already accepted or rejected are skipped; the response
/// carries the residents actually created.
async fn accept(
    State(state): State<AppState>,
    credentials: Credentials,
    Json(ids): Json<Vec<i64>>,
) -> Result<Json<Vec<Resident>>, AppError> {
    state.auth.authorize_admin(&credentials).await?;
    log_admin_action("accept", &ids);

    let residents = state.db.accept_registrations(&ids).await?;
    Ok(Json(residents))
}

/// Reject one or more registration requests
async fn reject(
    State(state): State<AppState>,
    credentials: Credentials,
    Json(ids): Json<Vec<i64>>,
) -> Result<StatusCode, AppError> {
    state.auth.authorize_admin(&credentials).await?;
    log_admin_action("reject", &ids);

    state.db.register_requests.reject_many(&ids).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Decline a single registration request
///
/// Declining an id that no longer exists is a silent no-op.
async fn decline(
    State(state): State<AppState>,
    credentials: Credentials,
    Path(request_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.auth.authorize_admin(&credentials).await?;
    log_admin_action("decline", &[request_id]);

    state.db.register_requests.decline(request_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list))
        .route("/count", get(count))
        .route("/accept", post(accept))
        .route("/reject", post(reject))
        .route("/{request_id}", delete(decline))
}
