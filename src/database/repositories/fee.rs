//! Fee repository implementation

use chrono::Utc;
use sqlx::PgPool;

use crate::models::{CreateFeeRequest, Fee};
use crate::utils::errors::AppError;

#[derive(Debug, Clone)]
pub struct FeeRepository {
    pool: PgPool,
    page_size: i64,
}

impl FeeRepository {
    pub fn new(pool: PgPool, page_size: i64) -> Self {
        Self { pool, page_size }
    }

    /// Define a new fee
    pub async fn create(&self, request: CreateFeeRequest) -> Result<Fee, AppError> {
        let fee = sqlx::query_as::<_, Fee>(
            r#"
            INSERT INTO fees (name, lower, upper, per_area, per_motorbike, per_car, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING fee_id, name, lower, upper, per_area, per_motorbike, per_car, created_at
            "#,
        )
        .bind(request.name)
        .bind(request.lower)
        .bind(request.upper)
        .bind(request.per_area)
        .bind(request.per_motorbike)
        .bind(request.per_car)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(fee)
    }

    /// Find a single fee by id
    pub async fn find_by_id(&self, fee_id: i64) -> Result<Option<Fee>, AppError> {
        let fee = sqlx::query_as::<_, Fee>(
            r#"
            SELECT fee_id, name, lower, upper, per_area, per_motorbike, per_car, created_at
            FROM fees
            WHERE fee_id = $1
            "#,
        )
        .bind(fee_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(fee)
    }

    /// Page of fees, most recent first
    pub async fn query(&self, offset: i64) -> Result<Vec<Fee>, AppError> {
        let fees = sqlx::query_as::<_, Fee>(
            r#"
            SELECT fee_id, name, lower, upper, per_area, per_motorbike, per_car, created_at
            FROM fees
            ORDER BY fee_id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(self.page_size)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(fees)
    }

    /// Count fees
    pub async fn count(&self) -> Result<i64, AppError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM fees")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
