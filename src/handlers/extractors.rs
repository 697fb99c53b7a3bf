//! Request extractors

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::models::Credentials;
use crate::utils::errors::AppError;

/// Header names carrying the credential pair
const USERNAME_HEADER: &str = "username";
const PASSWORD_HEADER: &str = "password";

impl<S> FromRequestParts<S> for Credentials
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let username = header_value(parts, USERNAME_HEADER)?;
        let password = header_value(parts, PASSWORD_HEADER)?;

        Ok(Self { username, password })
    }
}

/// Missing or non-UTF-8 credential headers are malformed, not unauthorized
fn header_value(parts: &Parts, name: &str) -> Result<String, AppError> {
    parts
        .headers
        .get(name)
        .ok_or_else(|| AppError::InvalidInput(format!("missing {name} header")))?
        .to_str()
        .map(ToOwned::to_owned)
        .map_err(|_| AppError::InvalidInput(format!("malformed {name} header")))
}
