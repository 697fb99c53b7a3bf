//! Database service layer
//!
//! This module provides a high-level interface to database operations

use crate::database::{
    DatabasePool, FeeRepository, RegisterRequestRepository, ResidentRepository, RoomRepository,
};
use crate::models::{NewRegisterRequest, RegisterRequest, Resident};
use crate::utils::errors::AppError;

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub register_requests: RegisterRequestRepository,
    pub residents: ResidentRepository,
    pub rooms: RoomRepository,
    pub fees: FeeRepository,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool, page_size: i64) -> Self {
        Self {
            register_requests: RegisterRequestRepository::new(pool.clone(), page_size),
            residents: ResidentRepository::new(pool.clone(), page_size),
            rooms: RoomRepository::new(pool.clone(), page_size),
            fees: FeeRepository::new(pool, page_size),
        }
    }

    /// Submit a registration request
    ///
    /// A refused username is a typed error, not a server fault; the caller
    /// maps it to a 400 response.
    pub async fn submit_registration(
        &self,
        request: NewRegisterRequest,
    ) -> Result<RegisterRequest, AppError> {
        let username = request.username.clone();

        match self.register_requests.create(request).await? {
            Some(created) => {
                tracing::info!(
                    request_id = created.request_id,
                    username = %created.username,
                    "Registration request created"
                );
                Ok(created)
            }
            None => {
                tracing::info!(username = %username, "Registration refused: username taken");
                Err(AppError::UsernameTaken(username))
            }
        }
    }

    /// Accept a batch of registration requests
    ///
    /// Each id is accepted independently within its own transaction; ids
    /// that no longer exist are skipped. Returns the created residents.
    pub async fn accept_registrations(
        &self,
        request_ids: &[i64],
    ) -> Result<Vec<Resident>, AppError> {
        let mut residents = Vec::with_capacity(request_ids.len());

        for &request_id in request_ids {
            if let Some(resident) = self.register_requests.accept(request_id).await? {
                tracing::info!(
                    request_id = request_id,
                    resident_id = resident.resident_id,
                    "Registration request accepted"
                );
                residents.push(resident);
            }
        }

        Ok(residents)
    }
}
