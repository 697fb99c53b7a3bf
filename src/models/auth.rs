//! Authorization credential model

use serde::{Deserialize, Serialize};

/// Header-carried username/password pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}
