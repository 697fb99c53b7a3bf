//! Admin endpoints for room information

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::models::{Credentials, Room};
use crate::state::AppState;
use crate::utils::errors::AppError;

#[derive(Debug, Deserialize)]
struct RoomParams {
    #[serde(default)]
    offset: i64,
    room: Option<i32>,
    floor: Option<i32>,
}

/// Page of rooms, optionally filtered by number or floor
async fn list(
    State(state): State<AppState>,
    credentials: Credentials,
    Query(params): Query<RoomParams>,
) -> Result<Json<Vec<Room>>, AppError> {
    state.auth.authorize_admin(&credentials).await?;

    let rooms = state
        .db
        .rooms
        .query(params.offset, params.room, params.floor)
        .await?;
    Ok(Json(rooms))
}

/// Number of rooms matching the filters
async fn count(
    State(state): State<AppState>,
    credentials: Credentials,
    Query(params): Query<RoomParams>,
) -> Result<Json<i64>, AppError> {
    state.auth.authorize_admin(&credentials).await?;

    let count = state.db.rooms.count(params.room, params.floor).await?;
    Ok(Json(count))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list))
        .route("/count", get(count))
}
