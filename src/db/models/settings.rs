use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use time::OffsetDateTime;
use validator::Validate;

use crate::scheduling::WorkingHours;

// Built-in working window, used when no settings row exists yet.
// Persisted settings always take precedence.
pub const DEFAULT_WORK_START_HOUR: i32 = 10;
pub const DEFAULT_WORK_END_HOUR: i32 = 18;
pub const DEFAULT_TIME_SLOT_INTERVAL_MINUTES: i32 = 30;

/// Singleton working-hours configuration. At most one logical row.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub id: Uuid,
    pub work_start_hour: i32,
    pub work_end_hour: i32,
    pub time_slot_interval_minutes: i32,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl Settings {
    pub fn working_hours(&self) -> WorkingHours {
        WorkingHours {
            start_hour: self.work_start_hour,
            end_hour: self.work_end_hour,
            slot_interval_minutes: self.time_slot_interval_minutes,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettings {
    #[validate(range(min = 0, max = 23, message = "Start hour must be between 0 and 23"))]
    pub work_start_hour: i32,
    #[validate(range(min = 0, max = 23, message = "End hour must be between 0 and 23"))]
    pub work_end_hour: i32,
    #[validate(range(min = 1, message = "Slot interval must be a positive number of minutes"))]
    pub time_slot_interval_minutes: i32,
}
