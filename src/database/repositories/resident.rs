//! Resident repository implementation

use sqlx::PgPool;

use crate::models::Resident;
use crate::utils::errors::AppError;

#[derive(Debug, Clone)]
pub struct ResidentRepository {
    pool: PgPool,
    page_size: i64,
}

impl ResidentRepository {
    pub fn new(pool: PgPool, page_size: i64) -> Self {
        Self { pool, page_size }
    }

    /// Find a resident by username
    pub async fn find_by_username(&self, username: &str) -> Result<Option<Resident>, AppError> {
        let resident = sqlx::query_as::<_, Resident>(
            r#"
            SELECT resident_id, name, room, birthday, phone, email, username, hashed_password
            FROM residents
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(resident)
    }

    /// Page of residents, most recent first
    pub async fn query(&self, offset: i64) -> Result<Vec<Resident>, AppError> {
        let residents = sqlx::query_as::<_, Resident>(
            r#"
            SELECT resident_id, name, room, birthday, phone, email, username, hashed_password
            FROM residents
            ORDER BY resident_id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(self.page_size)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(residents)
    }

    /// Count residents
    pub async fn count(&self) -> Result<i64, AppError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM residents")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    /// Delete a resident
    pub async fn delete(&self, resident_id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM residents WHERE resident_id = $1")
            .bind(resident_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
