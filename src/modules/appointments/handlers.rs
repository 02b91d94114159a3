use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use sqlx::PgPool;
use time::{Date, Duration, OffsetDateTime, Time};
use uuid::Uuid;
use validator::Validate;

use crate::app_state::AppState;
use crate::db::models::{
    AppointmentDetails, AppointmentStatus, NewAppointmentRequest, OccupiedSlot,
    UpdateAppointmentRequest, UpdateStatusRequest,
};
use crate::db::{
    AppointmentRepository, ServiceRepository, SettingsRepository, TimeBlockRepository,
    UserRepository,
};
use crate::error::{AppError, AppResult};
use crate::phone::{normalize_phone, to_database_phone};
use crate::scheduling::{self, available_slots, check_slot, parse_hhmm, Interval};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableSlotsQuery {
    pub service_id: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableSlotsResponse {
    pub date: String,
    pub service_id: Uuid,
    pub available_slots: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentListQuery {
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub status: Option<String>,
    pub service_id: Option<String>,
}

fn parse_uuid(value: &str, what: &str) -> AppResult<Uuid> {
    Uuid::parse_str(value).map_err(|_| AppError::Validation(format!("Invalid {} id", what)))
}

fn parse_day(value: &str, field: &str) -> AppResult<Date> {
    scheduling::parse_date(value)
        .ok_or_else(|| AppError::Validation(format!("Invalid {} format (YYYY-MM-DD)", field)))
}

fn parse_slot_time(value: &str) -> AppResult<Time> {
    parse_hhmm(value).ok_or_else(|| AppError::Validation("Invalid time format (HH:MM)".into()))
}

fn parse_status(value: &str) -> AppResult<AppointmentStatus> {
    value
        .parse()
        .map_err(|_| AppError::Validation("Unknown appointment status".into()))
}

fn normalized_phone(value: &str) -> AppResult<String> {
    normalize_phone(value)
        .map(|digits| to_database_phone(&digits))
        .ok_or_else(|| AppError::Validation("Invalid phone format. Expected 10 digits".into()))
}

/// The day's conflict inputs: occupied intervals of non-canceled
/// appointments (with their ids, for self-exclusion on update) and the
/// spans of overlapping time blocks.
async fn day_schedule(
    pool: &PgPool,
    day: Date,
) -> AppResult<(Vec<(Uuid, Interval)>, Vec<Interval>)> {
    let (day_start, day_end) = scheduling::day_bounds(day);

    let occupied = AppointmentRepository::occupied_for_day(pool, day_start, day_end).await?;
    let blocks = TimeBlockRepository::overlapping(pool, day_start, day_end).await?;

    let busy = occupied
        .iter()
        .map(|slot: &OccupiedSlot| (slot.id, slot.interval()))
        .collect();
    let spans = blocks
        .iter()
        .map(|block| Interval::new(block.start_date_time, block.end_date_time))
        .collect();

    Ok((busy, spans))
}

/// GET /api/appointments/available-slots?serviceId=...&date=YYYY-MM-DD
///
/// Advisory slot list for the booking UI. The authoritative decision is
/// re-made by the conflict check when the booking is submitted.
pub async fn list_available_slots(
    State(state): State<AppState>,
    Query(query): Query<AvailableSlotsQuery>,
) -> AppResult<Json<AvailableSlotsResponse>> {
    let (Some(service_id), Some(date)) = (query.service_id.as_deref(), query.date.as_deref())
    else {
        return Err(AppError::Validation(
            "serviceId and date query parameters are required".into(),
        ));
    };

    let service_id = parse_uuid(service_id, "service")?;
    let day = parse_day(date, "date")?;

    let service = ServiceRepository::find_by_id(&state.db, service_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Service not found".into()))?;
    if !service.is_active {
        return Err(AppError::InactiveService);
    }

    if day < OffsetDateTime::now_utc().date() {
        return Err(AppError::PastDate);
    }

    let settings = SettingsRepository::get_or_create(&state.db).await?;
    let (busy, blocks) = day_schedule(&state.db, day).await?;
    let busy_spans: Vec<Interval> = busy.iter().map(|(_, span)| *span).collect();

    let slots = available_slots(
        service.duration_minutes,
        day,
        settings.working_hours(),
        &busy_spans,
        &blocks,
    );

    Ok(Json(AvailableSlotsResponse {
        date: date.to_string(),
        service_id,
        available_slots: slots,
    }))
}

/// POST /api/appointments
pub async fn create_appointment(
    State(state): State<AppState>,
    Json(payload): Json<NewAppointmentRequest>,
) -> AppResult<(StatusCode, Json<AppointmentDetails>)> {
    payload.validate()?;

    let service_id = parse_uuid(&payload.service_id, "service")?;
    let day = parse_day(&payload.date, "date")?;
    let slot_time = parse_slot_time(&payload.time)?;
    let phone = normalized_phone(&payload.phone)?;

    let service = ServiceRepository::find_by_id(&state.db, service_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Service not found".into()))?;
    if !service.is_active {
        return Err(AppError::InactiveService);
    }

    let start = scheduling::slot_start(day, slot_time);
    if start < OffsetDateTime::now_utc() {
        return Err(AppError::PastDate);
    }
    let proposed = Interval::new(
        start,
        start + Duration::minutes(service.duration_minutes as i64),
    );

    let (busy, blocks) = day_schedule(&state.db, day).await?;
    check_slot(&proposed, &busy, &blocks, None)?;

    let user = UserRepository::upsert_for_booking(&state.db, &phone, &payload.name).await?;
    let appointment =
        AppointmentRepository::insert(&state.db, start, service.id, user.id, Some(&payload.name))
            .await?;

    tracing::info!(
        appointment_id = %appointment.id,
        service = %service.name,
        start = %start,
        "appointment booked"
    );

    let details = AppointmentRepository::find_details(&state.db, appointment.id)
        .await?
        .ok_or_else(|| AppError::Internal("Created appointment could not be loaded".into()))?;

    Ok((StatusCode::CREATED, Json(details.into())))
}

/// GET /api/appointments
pub async fn list_appointments(
    State(state): State<AppState>,
    Query(query): Query<AppointmentListQuery>,
) -> AppResult<Json<Vec<AppointmentDetails>>> {
    let date_from = query
        .date_from
        .as_deref()
        .map(|d| parse_day(d, "dateFrom"))
        .transpose()?
        .map(|day| scheduling::day_bounds(day).0);
    let date_to = query
        .date_to
        .as_deref()
        .map(|d| parse_day(d, "dateTo"))
        .transpose()?
        .map(|day| scheduling::day_bounds(day).1);
    let status = query.status.as_deref().map(parse_status).transpose()?;
    let service_id = query
        .service_id
        .as_deref()
        .map(|s| parse_uuid(s, "service"))
        .transpose()?;

    let rows =
        AppointmentRepository::list(&state.db, date_from, date_to, status, service_id).await?;

    Ok(Json(rows.into_iter().map(AppointmentDetails::from).collect()))
}

/// PUT /api/appointments/:id
///
/// Admin edit. When the date, time or service moves, the new slot is
/// re-validated against the whole day, excluding this record: a record
/// never conflicts with itself.
pub async fn update_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateAppointmentRequest>,
) -> AppResult<Json<AppointmentDetails>> {
    payload.validate()?;
    let id = parse_uuid(&id, "appointment")?;

    let current = AppointmentRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Appointment not found".into()))?;

    if payload.service_id.is_none()
        && payload.date.is_none()
        && payload.time.is_none()
        && payload.status.is_none()
        && payload.name.is_none()
        && payload.phone.is_none()
    {
        return Err(AppError::BadRequest("Nothing to update".into()));
    }

    let target_service_id = match payload.service_id.as_deref() {
        Some(raw) => parse_uuid(raw, "service")?,
        None => current.service_id,
    };
    let status = payload.status.as_deref().map(parse_status).transpose()?;

    let mut new_date: Option<OffsetDateTime> = None;
    if payload.date.is_some() || payload.time.is_some() || payload.service_id.is_some() {
        let day = match payload.date.as_deref() {
            Some(raw) => parse_day(raw, "date")?,
            None => current.date.date(),
        };
        let slot_time = match payload.time.as_deref() {
            Some(raw) => parse_slot_time(raw)?,
            None => current.date.time(),
        };

        let service = ServiceRepository::find_by_id(&state.db, target_service_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Service not found".into()))?;
        if !service.is_active {
            return Err(AppError::InactiveService);
        }

        let start = scheduling::slot_start(day, slot_time);
        let proposed = Interval::new(
            start,
            start + Duration::minutes(service.duration_minutes as i64),
        );

        let (busy, blocks) = day_schedule(&state.db, day).await?;
        check_slot(&proposed, &busy, &blocks, Some(id))?;

        new_date = Some(start);
    }

    let mut new_user_id: Option<Uuid> = None;
    if let Some(raw_phone) = payload.phone.as_deref() {
        let phone = normalized_phone(raw_phone)?;
        let fallback_name = payload
            .name
            .clone()
            .or_else(|| current.client_name.clone())
            .unwrap_or_default();
        let user = UserRepository::ensure_exists(&state.db, &phone, &fallback_name).await?;
        if user.id != current.user_id {
            new_user_id = Some(user.id);
        }
    }

    let updated = AppointmentRepository::update(
        &state.db,
        id,
        payload.service_id.is_some().then_some(target_service_id),
        new_date,
        status,
        payload.name.as_deref(),
        new_user_id,
    )
    .await?
    .ok_or_else(|| AppError::NotFound("Appointment not found".into()))?;

    let details = AppointmentRepository::find_details(&state.db, updated.id)
        .await?
        .ok_or_else(|| AppError::Internal("Updated appointment could not be loaded".into()))?;

    Ok(Json(details.into()))
}

/// PATCH /api/appointments/:id/status
///
/// PENDING confirms or cancels; CONFIRMED may still cancel. Canceling
/// frees the occupied interval for good: slot listings and conflict
/// checks skip CANCELED records.
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateStatusRequest>,
) -> AppResult<Json<AppointmentDetails>> {
    let id = parse_uuid(&id, "appointment")?;
    let status = parse_status(&payload.status)?;

    let updated = AppointmentRepository::set_status(&state.db, id, status)
        .await?
        .ok_or_else(|| AppError::NotFound("Appointment not found".into()))?;

    let details = AppointmentRepository::find_details(&state.db, updated.id)
        .await?
        .ok_or_else(|| AppError::Internal("Updated appointment could not be loaded".into()))?;

    Ok(Json(details.into()))
}

/// DELETE /api/appointments/:id
pub async fn delete_appointment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let id = parse_uuid(&id, "appointment")?;

    if !AppointmentRepository::delete(&state.db, id).await? {
        return Err(AppError::NotFound("Appointment not found".into()));
    }

    Ok(Json(json!({ "success": true })))
}
