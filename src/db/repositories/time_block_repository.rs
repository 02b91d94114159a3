use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::db::models::{NewTimeBlock, TimeBlock, TimeBlockType};

pub struct TimeBlockRepository;

impl TimeBlockRepository {
    /// Blocks that intersect the optional `[date_from, date_to]` range,
    /// optionally narrowed by type. A block intersects the range when it
    /// ends after the range starts and starts before the range ends.
    pub async fn list(
        pool: &PgPool,
        date_from: Option<OffsetDateTime>,
        date_to: Option<OffsetDateTime>,
        block_type: Option<TimeBlockType>,
    ) -> Result<Vec<TimeBlock>, sqlx::Error> {
        sqlx::query_as::<_, TimeBlock>(
            r#"
            SELECT id, block_type, start_date_time, end_date_time, description, created_at
            FROM time_blocks
            WHERE ($1::timestamptz IS NULL OR end_date_time >= $1)
              AND ($2::timestamptz IS NULL OR start_date_time <= $2)
              AND ($3::time_block_type IS NULL OR block_type = $3)
            ORDER BY start_date_time ASC
            "#,
        )
        .bind(date_from)
        .bind(date_to)
        .bind(block_type)
        .fetch_all(pool)
        .await
    }

    /// Blocks overlapping the half-open `[start, end)` interval.
    pub async fn overlapping(
        pool: &PgPool,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> Result<Vec<TimeBlock>, sqlx::Error> {
        sqlx::query_as::<_, TimeBlock>(
            r#"
            SELECT id, block_type, start_date_time, end_date_time, description, created_at
            FROM time_blocks
            WHERE start_date_time < $2
              AND end_date_time > $1
            ORDER BY start_date_time ASC
            "#,
        )
        .bind(start)
        .bind(end)
        .fetch_all(pool)
        .await
    }

    pub async fn insert(pool: &PgPool, data: &NewTimeBlock) -> Result<TimeBlock, sqlx::Error> {
        sqlx::query_as::<_, TimeBlock>(
            r#"
            INSERT INTO time_blocks (block_type, start_date_time, end_date_time, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, block_type, start_date_time, end_date_time, description, created_at
            "#,
        )
        .bind(data.block_type)
        .bind(data.start_date_time)
        .bind(data.end_date_time)
        .bind(&data.description)
        .fetch_one(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        data: &NewTimeBlock,
    ) -> Result<Option<TimeBlock>, sqlx::Error> {
        sqlx::query_as::<_, TimeBlock>(
            r#"
            UPDATE time_blocks
            SET block_type = $1, start_date_time = $2, end_date_time = $3, description = $4
            WHERE id = $5
            RETURNING id, block_type, start_date_time, end_date_time, description, created_at
            "#,
        )
        .bind(data.block_type)
        .bind(data.start_date_time)
        .bind(data.end_date_time)
        .bind(&data.description)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM time_blocks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
