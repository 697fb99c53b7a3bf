//! Resident model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An accepted occupant
///
/// Created only by accepting a registration request; carries the same
/// public fields plus a freshly assigned resident id.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Resident {
    pub resident_id: i64,
    pub name: String,
    pub room: i32,
    pub birthday: Option<NaiveDate>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub username: String,
    #[serde(skip_serializing)]
    pub hashed_password: String,
}
