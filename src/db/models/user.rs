use serde::Serialize;
use sqlx::types::Uuid;
use time::OffsetDateTime;

/// Client record, keyed by the `+7XXXXXXXXXX` phone form. Booking
/// upserts by phone; there is no separate registration flow.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub phone: String,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
