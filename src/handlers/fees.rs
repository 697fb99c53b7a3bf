//! Admin endpoints for fee management

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::models::{CreateFeeRequest, Credentials, Fee};
use crate::state::AppState;
use crate::utils::errors::AppError;

#[derive(Debug, Deserialize)]
struct PageParams {
    #[serde(default)]
    offset: i64,
}

/// Page of fees, most recent first
async fn list(
    State(state): State<AppState>,
    credentials: Credentials,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<Fee>>, AppError> {
    state.auth.authorize_admin(&credentials).await?;

    let fees = state.db.fees.query(params.offset).await?;
    Ok(Json(fees))
}

/// Number of fees
async fn count(
    State(state): State<AppState>,
    credentials: Credentials,
) -> Result<Json<i64>, AppError> {
    state.auth.authorize_admin(&credentials).await?;

    let count = state.db.fees.count().await?;
    Ok(Json(count))
}

/// Define a new fee
async fn create(
    State(state): State<AppState>,
    credentials: Credentials,
    Json(request): Json<CreateFeeRequest>,
) -> Result<Json<Fee>, AppError> {
    state.auth.authorize_admin(&credentials).await?;

    if request.lower > request.upper {
        return Err(AppError::InvalidInput(
            "fee lower bound exceeds upper bound".to_string(),
        ));
    }

    let fee = state.db.fees.create(request).await?;
    Ok(Json(fee))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list).post(create))
        .route("/count", get(count))
}
