//! Fee model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A billing rule
///
/// The payable amount for a room is `[lower, upper]` shifted by extras that
/// scale linearly with the room's area and vehicle counts.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Fee {
    pub fee_id: i64,
    pub name: String,
    pub lower: f64,
    pub upper: f64,
    pub per_area: f64,
    pub per_motorbike: f64,
    pub per_car: f64,
    pub created_at: DateTime<Utc>,
}

/// Payload for defining a new fee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFeeRequest {
    pub name: String,
    pub lower: f64,
    pub upper: f64,
    pub per_area: f64,
    pub per_motorbike: f64,
    pub per_car: f64,
}
