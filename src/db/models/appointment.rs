use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use std::str::FromStr;
use time::{Duration, OffsetDateTime};
use validator::Validate;

use crate::scheduling::Interval;

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "appointment_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Canceled,
}

impl FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(AppointmentStatus::Pending),
            "CONFIRMED" => Ok(AppointmentStatus::Confirmed),
            "CANCELED" => Ok(AppointmentStatus::Canceled),
            _ => Err(format!("Unknown appointment status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub status: AppointmentStatus,
    pub service_id: Uuid,
    pub user_id: Uuid,
    pub client_name: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Projection the scheduling core works with: when a non-canceled
/// appointment starts and how long its service runs.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OccupiedSlot {
    pub id: Uuid,
    pub date: OffsetDateTime,
    pub duration_minutes: i32,
}

impl OccupiedSlot {
    pub fn interval(&self) -> Interval {
        Interval::new(
            self.date,
            self.date + Duration::minutes(self.duration_minutes as i64),
        )
    }
}

/// Flat join row behind [`AppointmentDetails`].
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AppointmentDetailsRow {
    pub id: Uuid,
    pub date: OffsetDateTime,
    pub status: AppointmentStatus,
    pub client_name: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
    pub service_id: Uuid,
    pub service_name: String,
    pub service_price: f64,
    pub service_duration_minutes: i32,
    pub user_id: Uuid,
    pub user_name: String,
    pub user_phone: String,
}

/// What the API returns for an appointment: the record plus its resolved
/// service and client.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDetails {
    pub id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    pub status: AppointmentStatus,
    pub client_name: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    pub service: ServiceSummary,
    pub user: UserSummary,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSummary {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub duration_minutes: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
}

impl From<AppointmentDetailsRow> for AppointmentDetails {
    fn from(row: AppointmentDetailsRow) -> Self {
        AppointmentDetails {
            id: row.id,
            date: row.date,
            status: row.status,
            client_name: row.client_name,
            created_at: row.created_at,
            updated_at: row.updated_at,
            service: ServiceSummary {
                id: row.service_id,
                name: row.service_name,
                price: row.service_price,
                duration_minutes: row.service_duration_minutes,
            },
            user: UserSummary {
                id: row.user_id,
                name: row.user_name,
                phone: row.user_phone,
            },
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointmentRequest {
    pub service_id: String,
    /// `YYYY-MM-DD`, interpreted verbatim as a UTC calendar day.
    pub date: String,
    /// `HH:MM`, interpreted verbatim as the UTC wall clock.
    pub time: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentRequest {
    pub service_id: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub status: Option<String>,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}
