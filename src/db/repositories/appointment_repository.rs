use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::db::models::{
    Appointment, AppointmentDetailsRow, AppointmentStatus, OccupiedSlot,
};

// Join used by every details query; column aliases line up with
// AppointmentDetailsRow.
const DETAILS_SELECT: &str = r#"
    SELECT a.id, a.date, a.status, a.client_name, a.created_at, a.updated_at,
           s.id AS service_id, s.name AS service_name, s.price AS service_price,
           s.duration_minutes AS service_duration_minutes,
           u.id AS user_id, u.name AS user_name, u.phone AS user_phone
    FROM appointments a
    JOIN services s ON s.id = a.service_id
    JOIN users u ON u.id = a.user_id
"#;

pub struct AppointmentRepository;

impl AppointmentRepository {
    pub async fn list(
        pool: &PgPool,
        date_from: Option<OffsetDateTime>,
        date_to: Option<OffsetDateTime>,
        status: Option<AppointmentStatus>,
        service_id: Option<Uuid>,
    ) -> Result<Vec<AppointmentDetailsRow>, sqlx::Error> {
        let sql = format!(
            r#"{DETAILS_SELECT}
            WHERE ($1::timestamptz IS NULL OR a.date >= $1)
              AND ($2::timestamptz IS NULL OR a.date < $2)
              AND ($3::appointment_status IS NULL OR a.status = $3)
              AND ($4::uuid IS NULL OR a.service_id = $4)
            ORDER BY a.date ASC
            "#
        );

        sqlx::query_as::<_, AppointmentDetailsRow>(&sql)
            .bind(date_from)
            .bind(date_to)
            .bind(status)
            .bind(service_id)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: Uuid,
    ) -> Result<Option<Appointment>, sqlx::Error> {
        sqlx::query_as::<_, Appointment>(
            r#"
            SELECT id, date, status, service_id, user_id, client_name, created_at, updated_at
            FROM appointments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn find_details(
        pool: &PgPool,
        id: Uuid,
    ) -> Result<Option<AppointmentDetailsRow>, sqlx::Error> {
        let sql = format!("{DETAILS_SELECT} WHERE a.id = $1");

        sqlx::query_as::<_, AppointmentDetailsRow>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Non-canceled appointments whose start falls inside `[day_start,
    /// day_end)`, with their service durations. Canceled records never
    /// occupy time.
    pub async fn occupied_for_day(
        pool: &PgPool,
        day_start: OffsetDateTime,
        day_end: OffsetDateTime,
    ) -> Result<Vec<OccupiedSlot>, sqlx::Error> {
        sqlx::query_as::<_, OccupiedSlot>(
            r#"
            SELECT a.id, a.date, s.duration_minutes
            FROM appointments a
            JOIN services s ON s.id = a.service_id
            WHERE a.date >= $1
              AND a.date < $2
              AND a.status <> 'CANCELED'
            ORDER BY a.date ASC
            "#,
        )
        .bind(day_start)
        .bind(day_end)
        .fetch_all(pool)
        .await
    }

    pub async fn insert(
        pool: &PgPool,
        date: OffsetDateTime,
        service_id: Uuid,
        user_id: Uuid,
        client_name: Option<&str>,
    ) -> Result<Appointment, sqlx::Error> {
        sqlx::query_as::<_, Appointment>(
            r#"
            INSERT INTO appointments (date, service_id, user_id, client_name)
            VALUES ($1, $2, $3, $4)
            RETURNING id, date, status, service_id, user_id, client_name, created_at, updated_at
            "#,
        )
        .bind(date)
        .bind(service_id)
        .bind(user_id)
        .bind(client_name)
        .fetch_one(pool)
        .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        service_id: Option<Uuid>,
        date: Option<OffsetDateTime>,
        status: Option<AppointmentStatus>,
        client_name: Option<&str>,
        user_id: Option<Uuid>,
    ) -> Result<Option<Appointment>, sqlx::Error> {
        sqlx::query_as::<_, Appointment>(
            r#"
            UPDATE appointments
            SET
                service_id = COALESCE($1, service_id),
                date = COALESCE($2, date),
                status = COALESCE($3::appointment_status, status),
                client_name = COALESCE($4, client_name),
                user_id = COALESCE($5, user_id),
                updated_at = NOW()
            WHERE id = $6
            RETURNING id, date, status, service_id, user_id, client_name, created_at, updated_at
            "#,
        )
        .bind(service_id)
        .bind(date)
        .bind(status)
        .bind(client_name)
        .bind(user_id)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn set_status(
        pool: &PgPool,
        id: Uuid,
        status: AppointmentStatus,
    ) -> Result<Option<Appointment>, sqlx::Error> {
        sqlx::query_as::<_, Appointment>(
            r#"
            UPDATE appointments
            SET status = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING id, date, status, service_id, user_id, client_name, created_at, updated_at
            "#,
        )
        .bind(status)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
