use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use std::str::FromStr;
use time::OffsetDateTime;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "time_block_type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeBlockType {
    DayOff,
    Vacation,
    Break,
}

impl FromStr for TimeBlockType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DAY_OFF" => Ok(TimeBlockType::DayOff),
            "VACATION" => Ok(TimeBlockType::Vacation),
            "BREAK" => Ok(TimeBlockType::Break),
            _ => Err(format!("Unknown time block type: {}", s)),
        }
    }
}

/// Blackout window during which nothing may be booked. End is strictly
/// after start; both instants follow the verbatim-UTC convention.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBlock {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub block_type: TimeBlockType,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_date_time: OffsetDateTime,
    pub description: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewTimeBlock {
    #[serde(rename = "type")]
    pub block_type: TimeBlockType,
    #[serde(with = "time::serde::rfc3339")]
    pub start_date_time: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub end_date_time: OffsetDateTime,
    pub description: Option<String>,
}
