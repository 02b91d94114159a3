use axum::extract::State;
use axum::Json;
use validator::Validate;

use crate::app_state::AppState;
use crate::db::models::{Settings, UpdateSettings};
use crate::db::SettingsRepository;
use crate::error::{AppError, AppResult};

/// GET /api/settings
///
/// Reads the singleton row, creating it with the built-in defaults when
/// the table is still empty.
pub async fn get_settings(State(state): State<AppState>) -> AppResult<Json<Settings>> {
    let settings = SettingsRepository::get_or_create(&state.db).await?;
    Ok(Json(settings))
}

/// PUT /api/settings
pub async fn update_settings(
    State(state): State<AppState>,
    Json(payload): Json<UpdateSettings>,
) -> AppResult<Json<Settings>> {
    payload.validate()?;
    if payload.work_start_hour >= payload.work_end_hour {
        return Err(AppError::Validation(
            "Start hour must be before end hour".into(),
        ));
    }

    let settings = SettingsRepository::update(&state.db, &payload).await?;

    tracing::info!(
        start = settings.work_start_hour,
        end = settings.work_end_hour,
        interval = settings.time_slot_interval_minutes,
        "working hours updated"
    );

    Ok(Json(settings))
}
