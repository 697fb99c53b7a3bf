//! Room model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A room in the building
///
/// Area and vehicle counts are nullable, meaning "unset"; a fee cannot be
/// computed for a room with unset data.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Room {
    pub room: i32,
    pub area: Option<f64>,
    pub motorbike: Option<i32>,
    pub car: Option<i32>,
}

impl Room {
    /// Floor number, derived from the room number (rooms are numbered
    /// floor * 100 + n)
    pub fn floor(&self) -> i32 {
        self.room / 100
    }
}
