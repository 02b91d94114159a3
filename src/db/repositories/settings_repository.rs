use sqlx::PgPool;

use crate::db::models::{
    Settings, UpdateSettings, DEFAULT_TIME_SLOT_INTERVAL_MINUTES, DEFAULT_WORK_END_HOUR,
    DEFAULT_WORK_START_HOUR,
};

pub struct SettingsRepository;

impl SettingsRepository {
    /// The singleton settings row; inserted with the built-in defaults
    /// on first read.
    pub async fn get_or_create(pool: &PgPool) -> Result<Settings, sqlx::Error> {
        let existing = sqlx::query_as::<_, Settings>(
            r#"
            SELECT id, work_start_hour, work_end_hour, time_slot_interval_minutes, updated_at
            FROM settings
            LIMIT 1
            "#,
        )
        .fetch_optional(pool)
        .await?;

        if let Some(settings) = existing {
            return Ok(settings);
        }

        sqlx::query_as::<_, Settings>(
            r#"
            INSERT INTO settings (work_start_hour, work_end_hour, time_slot_interval_minutes)
            VALUES ($1, $2, $3)
            RETURNING id, work_start_hour, work_end_hour, time_slot_interval_minutes, updated_at
            "#,
        )
        .bind(DEFAULT_WORK_START_HOUR)
        .bind(DEFAULT_WORK_END_HOUR)
        .bind(DEFAULT_TIME_SLOT_INTERVAL_MINUTES)
        .fetch_one(pool)
        .await
    }

    pub async fn update(pool: &PgPool, data: &UpdateSettings) -> Result<Settings, sqlx::Error> {
        let current = Self::get_or_create(pool).await?;

        sqlx::query_as::<_, Settings>(
            r#"
            UPDATE settings
            SET work_start_hour = $1, work_end_hour = $2, time_slot_interval_minutes = $3,
                updated_at = NOW()
            WHERE id = $4
            RETURNING id, work_start_hour, work_end_hour, time_slot_interval_minutes, updated_at
            "#,
        )
        .bind(data.work_start_hour)
        .bind(data.work_end_hour)
        .bind(data.time_slot_interval_minutes)
        .bind(current.id)
        .fetch_one(pool)
        .await
    }
}
