use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use time::OffsetDateTime;
use uuid::Uuid;
use validator::Validate;

use crate::app_state::AppState;
use crate::db::models::{NewTimeBlock, TimeBlock, TimeBlockType};
use crate::db::TimeBlockRepository;
use crate::error::{AppError, AppResult};
use crate::scheduling;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeBlockListQuery {
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    #[serde(rename = "type")]
    pub block_type: Option<String>,
}

fn parse_id(value: &str) -> AppResult<Uuid> {
    Uuid::parse_str(value).map_err(|_| AppError::Validation("Invalid time block id".into()))
}

fn parse_day_bound(value: &str, field: &str) -> AppResult<time::Date> {
    scheduling::parse_date(value)
        .ok_or_else(|| AppError::Validation(format!("Invalid {} format (YYYY-MM-DD)", field)))
}

fn require_ordered(data: &NewTimeBlock) -> AppResult<()> {
    if data.end_date_time <= data.start_date_time {
        return Err(AppError::Validation("End must be after start".into()));
    }
    Ok(())
}

/// GET /api/time-blocks
pub async fn list_time_blocks(
    State(state): State<AppState>,
    Query(query): Query<TimeBlockListQuery>,
) -> AppResult<Json<Vec<TimeBlock>>> {
    let date_from: Option<OffsetDateTime> = query
        .date_from
        .as_deref()
        .map(|d| parse_day_bound(d, "dateFrom"))
        .transpose()?
        .map(|day| scheduling::day_bounds(day).0);
    let date_to: Option<OffsetDateTime> = query
        .date_to
        .as_deref()
        .map(|d| parse_day_bound(d, "dateTo"))
        .transpose()?
        .map(|day| scheduling::day_bounds(day).1);
    let block_type: Option<TimeBlockType> = query
        .block_type
        .as_deref()
        .map(|t| {
            t.parse()
                .map_err(|_| AppError::Validation("Unknown time block type".into()))
        })
        .transpose()?;

    let blocks = TimeBlockRepository::list(&state.db, date_from, date_to, block_type).await?;
    Ok(Json(blocks))
}

/// POST /api/time-blocks
pub async fn create_time_block(
    State(state): State<AppState>,
    Json(payload): Json<NewTimeBlock>,
) -> AppResult<(StatusCode, Json<TimeBlock>)> {
    payload.validate()?;
    require_ordered(&payload)?;

    let block = TimeBlockRepository::insert(&state.db, &payload).await?;

    tracing::info!(
        block_id = %block.id,
        from = %block.start_date_time,
        to = %block.end_date_time,
        "time block created"
    );

    Ok((StatusCode::CREATED, Json(block)))
}

/// PUT /api/time-blocks/:id
pub async fn update_time_block(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<NewTimeBlock>,
) -> AppResult<Json<TimeBlock>> {
    payload.validate()?;
    require_ordered(&payload)?;
    let id = parse_id(&id)?;

    let block = TimeBlockRepository::update(&state.db, id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Time block not found".into()))?;
    Ok(Json(block))
}

/// DELETE /api/time-blocks/:id
pub async fn delete_time_block(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let id = parse_id(&id)?;

    if !TimeBlockRepository::delete(&state.db, id).await? {
        return Err(AppError::NotFound("Time block not found".into()));
    }

    Ok(Json(json!({ "success": true })))
}
