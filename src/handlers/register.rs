//! Public registration endpoint

use axum::{extract::State, routing::post, Json, Router};

use crate::models::{CreateRegisterRequest, NewRegisterRequest, RegisterRequest};
use crate::services::auth;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Submit a registration request
///
/// The password is hashed before anything is stored; a taken username is a
/// 400 refusal carried by the error type, never a server fault.
async fn register(
    State(state): State<AppState>,
    Json(request): Json<CreateRegisterRequest>,
) -> Result<Json<RegisterRequest>, AppError> {
    let hashed_password = auth::hash_password(&request.password)?;

    let created = state
        .db
        .submit_registration(NewRegisterRequest {
            name: request.name,
            room: request.room,
            birthday: request.birthday,
            phone: request.phone,
            email: request.email,
            username: request.username,
            hashed_password,
        })
        .await?;

    Ok(Json(created))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/register", post(register))
}
