//! Registration request repository implementation
//!
//! Owns the registration-request lifecycle: conditional creation, paging,
//! and the two terminal transitions (accept, decline).

use sqlx::PgPool;

use crate::models::{NewRegisterRequest, RegisterRequest, Resident};
use crate::utils::errors::AppError;

#[derive(Debug, Clone)]
pub struct RegisterRequestRepository {
    pool: PgPool,
    page_size: i64,
}

impl RegisterRequestRepository {
    pub fn new(pool: PgPool, page_size: i64) -> Self {
        Self { pool, page_size }
    }

    /// Create a new registration request
    ///
    /// The insert is conditional on no resident already holding the
    /// username; the unique index on the queue's username column rejects a
    /// concurrent duplicate registration. Condition and insert are one
    /// atomic statement so that two registrations of the same username
    /// cannot both pass a separate check. Returns `None` when the username
    /// is taken.
    pub async fn create(
        &self,
        request: NewRegisterRequest,
    ) -> Result<Option<RegisterRequest>, AppError> {
        let created = sqlx::query_as::<_, RegisterRequest>(
            r#"
            INSERT INTO register_queue (name, room, birthday, phone, email, username, hashed_password)
            SELECT $1, $2, $3, $4, $5, $6, $7
            WHERE NOT EXISTS (SELECT 1 FROM residents WHERE username = $6)
            ON CONFLICT (username) DO NOTHING
            RETURNING request_id, name, room, birthday, phone, email, username, hashed_password
            "#,
        )
        .bind(request.name)
        .bind(request.room)
        .bind(request.birthday)
        .bind(request.phone)
        .bind(request.email)
        .bind(request.username)
        .bind(request.hashed_password)
        .fetch_optional(&self.pool)
        .await?;

        Ok(created)
    }

    /// Accept a registration request, converting it into a resident
    ///
    /// Within one transaction: insert a resident row copying the request
    /// fields, then delete the request row. The delete only runs if the
    /// insert returned a row, so an unknown id leaves the database
    /// untouched and yields `None`.
    pub async fn accept(&self, request_id: i64) -> Result<Option<Resident>, AppError> {
        let mut tx = self.pool.begin().await?;

        let resident = sqlx::query_as::<_, Resident>(
            r#"
            INSERT INTO residents (name, room, birthday, phone, email, username, hashed_password)
            SELECT name, room, birthday, phone, email, username, hashed_password
            FROM register_queue
            WHERE request_id = $1
            RETURNING resident_id, name, room, birthday, phone, email, username, hashed_password
            "#,
        )
        .bind(request_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(resident) = resident else {
            return Ok(None);
        };

        sqlx::query("DELETE FROM register_queue WHERE request_id = $1")
            .bind(request_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Some(resident))
    }

    /// Decline a registration request
    ///
    /// Deleting an id that no longer exists affects zero rows and is not an
    /// error.
    pub async fn decline(&self, request_id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM register_queue WHERE request_id = $1")
            .bind(request_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Reject a batch of registration requests
    pub async fn reject_many(&self, request_ids: &[i64]) -> Result<(), AppError> {
        sqlx::query("DELETE FROM register_queue WHERE request_id = ANY($1)")
            .bind(request_ids)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Page of pending requests, most recent first
    pub async fn query(&self, offset: i64) -> Result<Vec<RegisterRequest>, AppError> {
        let requests = sqlx::query_as::<_, RegisterRequest>(
            r#"
            SELECT request_id, name, room, birthday, phone, email, username, hashed_password
            FROM register_queue
            ORDER BY request_id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(self.page_size)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(requests)
    }

    /// Count pending requests
    pub async fn count(&self) -> Result<i64, AppError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM register_queue")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_repository_creation() {
        // Exercising the queries requires a live database; this only checks
        // construction against a pool handle
        let pool = PgPool::connect("postgresql://test").await;
        if let Ok(pool) = pool {
            let repo = RegisterRequestRepository::new(pool, 50);
            assert_eq!(repo.page_size, 50);
        }
    }
}
