//! Registration request model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A pending application to become a resident
///
/// A row exists only between creation and a terminal transition (accept or
/// reject); it is never updated in place.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RegisterRequest {
    pub request_id: i64,
    pub name: String,
    pub room: i32,
    pub birthday: Option<NaiveDate>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub username: String,
    #[serde(skip_serializing)]
    pub hashed_password: String,
}

/// Public registration payload, carrying the plain-text password
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRegisterRequest {
    pub name: String,
    pub room: i32,
    pub birthday: Option<NaiveDate>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub username: String,
    pub password: String,
}

/// Registration data after password hashing, ready for insertion
#[derive(Debug, Clone)]
pub struct NewRegisterRequest {
    pub name: String,
    pub room: i32,
    pub birthday: Option<NaiveDate>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub username: String,
    pub hashed_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashed_password_never_serialized() {
        let request = RegisterRequest {
            request_id: 1,
            name: "Alice".to_string(),
            room: 101,
            birthday: None,
            phone: None,
            email: None,
            username: "alice".to_string(),
            hashed_password: "$argon2id$...".to_string(),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("hashed_password"));
        assert!(!json.contains("argon2id"));
    }
}
