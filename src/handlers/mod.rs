//! HTTP route handlers
//!
//! One handler per endpoint: parse and validate the request, run exactly one
//! record-type operation, translate the outcome to a response.

pub mod extractors;

mod fees;
mod health;
mod pay;
mod reg_requests;
mod register;
mod residents;
mod rooms;

use axum::Router;

use crate::state::AppState;

/// Create the application router
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest(
            "/api",
            Router::new()
                .merge(register::router())
                .merge(pay::router())
                .nest("/admin/reg-requests", reg_requests::router())
                .nest("/admin/rooms", rooms::router())
                .nest("/admin/fees", fees::router())
                .nest("/admin/residents", residents::router()),
        )
}
