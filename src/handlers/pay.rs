//! Fee payment endpoint
//!
//! Validates the requested amount against the fee's allowed range for the
//! room, then redirects to the payment gateway with a signed URL.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use chrono::Utc;
use serde::Deserialize;

use crate::services::payment;
use crate::state::AppState;
use crate::utils::errors::AppError;

#[derive(Debug, Deserialize)]
struct PayParams {
    room: i32,
    fee_id: i64,
    amount: f64,
}

/// Perform a payment for a fee
async fn pay(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PayParams>,
) -> Result<impl IntoResponse, AppError> {
    let fee = state
        .db
        .fees
        .find_by_id(params.fee_id)
        .await?
        .ok_or(AppError::FeeNotFound {
            fee_id: params.fee_id,
        })?;

    let room = state
        .db
        .rooms
        .find_by_number(params.room)
        .await?
        .ok_or(AppError::RoomNotFound { room: params.room })?;

    let (lower, upper) = payment::amount_range(&fee, &room)
        .ok_or_else(|| AppError::InvalidInput("room data is incomplete".to_string()))?;

    if !payment::amount_within(params.amount, lower, upper) {
        return Err(AppError::InvalidInput(format!(
            "amount must be within [{lower}, {upper}]"
        )));
    }

    // Client address forwarded by the reverse proxy
    let client_ip = headers
        .get("x-client-ip")
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::InvalidInput("missing x-client-ip header".to_string()))?;

    let now = Utc::now().with_timezone(&payment::gateway_timezone());
    let url = state
        .payment
        .build_redirect_url(room.room, fee.fee_id, params.amount, client_ip, now)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, url.to_string())]))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/residents/pay", get(pay))
}
