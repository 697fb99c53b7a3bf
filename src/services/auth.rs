//! Authorization service implementation
//!
//! This service verifies header-carried credentials against stored Argon2
//! hashes. The outcome is tri-state: authorized, unauthorized (unknown
//! identity or wrong password, HTTP 401) or forbidden (valid identity,
//! insufficient role, HTTP 403). Malformed headers are rejected before they
//! reach this service.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use tracing::debug;

use crate::config::AdminConfig;
use crate::database::ResidentRepository;
use crate::models::{Credentials, Resident};
use crate::utils::errors::{AppError, Result};
use crate::utils::logging::log_auth_event;

/// Hash a password for storage
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Verify a password against a stored hash
///
/// A malformed stored hash verifies as false rather than erroring; it can
/// only mean the stored credential is unusable.
pub fn verify_password(password: &str, hashed: &str) -> bool {
    match PasswordHash::new(hashed) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// Authorization service for admin and resident endpoints
#[derive(Debug, Clone)]
pub struct AuthService {
    admin: AdminConfig,
    residents: ResidentRepository,
}

impl AuthService {
    pub fn new(admin: AdminConfig, residents: ResidentRepository) -> Self {
        Self { admin, residents }
    }

    /// Authorize the configured admin account
    ///
    /// A resident presenting valid credentials of their own is forbidden,
    /// not unauthorized; anything else is unauthorized.
    pub async fn authorize_admin(&self, credentials: &Credentials) -> Result<()> {
        if credentials.username == self.admin.username
            && verify_password(&credentials.password, &self.admin.hashed_password)
        {
            debug!(username = %credentials.username, "Admin authorization successful");
            return Ok(());
        }

        if let Some(resident) = self.residents.find_by_username(&credentials.username).await? {
            if verify_password(&credentials.password, &resident.hashed_password) {
                log_auth_event(&credentials.username, "admin", false);
                return Err(AppError::Forbidden(
                    "Admin privileges required".to_string(),
                ));
            }
        }

        log_auth_event(&credentials.username, "admin", false);
        Err(AppError::Unauthorized)
    }

    /// Authorize a resident account, returning the resident on success
    pub async fn authorize_resident(&self, credentials: &Credentials) -> Result<Resident> {
        let resident = self
            .residents
            .find_by_username(&credentials.username)
            .await?;

        match resident {
            Some(resident) if verify_password(&credentials.password, &resident.hashed_password) => {
                debug!(username = %credentials.username, "Resident authorization successful");
                Ok(resident)
            }
            _ => {
                log_auth_event(&credentials.username, "resident", false);
                Err(AppError::Unauthorized)
            }
        }
    }
}
