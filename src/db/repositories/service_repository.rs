use sqlx::PgPool;
use uuid::Uuid;

use crate::db::models::{NewService, Service, UpdateService};

pub struct ServiceRepository;

impl ServiceRepository {
    pub async fn list(pool: &PgPool) -> Result<Vec<Service>, sqlx::Error> {
        sqlx::query_as::<_, Service>(
            r#"
            SELECT id, name, description, price, duration_minutes, is_active, created_at, updated_at
            FROM services
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Service>, sqlx::Error> {
        sqlx::query_as::<_, Service>(
            r#"
            SELECT id, name, description, price, duration_minutes, is_active, created_at, updated_at
            FROM services
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn insert(pool: &PgPool, data: &NewService) -> Result<Service, sqlx::Error> {
        sqlx::query_as::<_, Service>(
            r#"
            INSERT INTO services (name, description, price, duration_minutes, is_active)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, description, price, duration_minutes, is_active, created_at, updated_at
            "#,
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.price)
        .bind(data.duration_minutes)
        .bind(data.is_active)
        .fetch_one(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        data: &UpdateService,
    ) -> Result<Option<Service>, sqlx::Error> {
        sqlx::query_as::<_, Service>(
            r#"
            UPDATE services
            SET
                name = $1,
                description = $2,
                price = $3,
                duration_minutes = $4,
                is_active = COALESCE($5, is_active),
                updated_at = NOW()
            WHERE id = $6
            RETURNING id, name, description, price, duration_minutes, is_active, created_at, updated_at
            "#,
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.price)
        .bind(data.duration_minutes)
        .bind(data.is_active)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
