use sqlx::PgPool;

use crate::db::models::User;

pub struct UserRepository;

impl UserRepository {
    /// Find-or-create by phone, refreshing the stored name. The booking
    /// flow treats the submitted name as the freshest one.
    pub async fn upsert_for_booking(
        pool: &PgPool,
        phone: &str,
        name: &str,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (phone, name)
            VALUES ($1, $2)
            ON CONFLICT (phone) DO UPDATE SET name = EXCLUDED.name
            RETURNING id, phone, name, created_at
            "#,
        )
        .bind(phone)
        .bind(name)
        .fetch_one(pool)
        .await
    }

    /// Find-or-create by phone without touching an existing name; the
    /// admin edit flow keeps the appointment's own client name instead.
    /// The no-op assignment makes RETURNING yield the row on conflict.
    pub async fn ensure_exists(
        pool: &PgPool,
        phone: &str,
        fallback_name: &str,
    ) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (phone, name)
            VALUES ($1, $2)
            ON CONFLICT (phone) DO UPDATE SET phone = EXCLUDED.phone
            RETURNING id, phone, name, created_at
            "#,
        )
        .bind(phone)
        .bind(fallback_name)
        .fetch_one(pool)
        .await
    }
}
