//! Room repository implementation

use sqlx::PgPool;

use crate::models::Room;
use crate::utils::errors::AppError;

#[derive(Debug, Clone)]
pub struct RoomRepository {
    pool: PgPool,
    page_size: i64,
}

impl RoomRepository {
    pub fn new(pool: PgPool, page_size: i64) -> Self {
        Self { pool, page_size }
    }

    /// Find a single room by number
    pub async fn find_by_number(&self, room: i32) -> Result<Option<Room>, AppError> {
        let found = sqlx::query_as::<_, Room>(
            "SELECT room, area, motorbike, car FROM rooms WHERE room = $1",
        )
        .bind(room)
        .fetch_optional(&self.pool)
        .await?;

        Ok(found)
    }

    /// Page of rooms with optional number and floor filters
    ///
    /// Floor is derived from the room number (floor * 100 + n), so the
    /// filter compares `room / 100`.
    pub async fn query(
        &self,
        offset: i64,
        room: Option<i32>,
        floor: Option<i32>,
    ) -> Result<Vec<Room>, AppError> {
        let rooms = sqlx::query_as::<_, Room>(
            r#"
            SELECT room, area, motorbike, car
            FROM rooms
            WHERE ($1::INT IS NULL OR room = $1)
              AND ($2::INT IS NULL OR room / 100 = $2)
            ORDER BY room
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(room)
        .bind(floor)
        .bind(self.page_size)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rooms)
    }

    /// Count rooms matching the optional filters
    pub async fn count(&self, room: Option<i32>, floor: Option<i32>) -> Result<i64, AppError> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)
            FROM rooms
            WHERE ($1::INT IS NULL OR room = $1)
              AND ($2::INT IS NULL OR room / 100 = $2)
            "#,
        )
        .bind(room)
        .bind(floor)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }
}
