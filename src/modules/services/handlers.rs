use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::app_state::AppState;
use crate::db::models::{NewService, Service, UpdateService};
use crate::db::ServiceRepository;
use crate::error::{AppError, AppResult};

fn parse_id(value: &str) -> AppResult<Uuid> {
    Uuid::parse_str(value).map_err(|_| AppError::Validation("Invalid service id".into()))
}

/// GET /api/services
pub async fn list_services(State(state): State<AppState>) -> AppResult<Json<Vec<Service>>> {
    let services = ServiceRepository::list(&state.db).await?;
    Ok(Json(services))
}

/// POST /api/services
pub async fn create_service(
    State(state): State<AppState>,
    Json(payload): Json<NewService>,
) -> AppResult<(StatusCode, Json<Service>)> {
    payload.validate()?;

    let service = ServiceRepository::insert(&state.db, &payload).await?;
    Ok((StatusCode::CREATED, Json(service)))
}

/// GET /api/services/:id
pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Service>> {
    let id = parse_id(&id)?;

    let service = ServiceRepository::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound("Service not found".into()))?;
    Ok(Json(service))
}

/// PUT /api/services/:id
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateService>,
) -> AppResult<Json<Service>> {
    payload.validate()?;
    let id = parse_id(&id)?;

    let service = ServiceRepository::update(&state.db, id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound("Service not found".into()))?;
    Ok(Json(service))
}

/// DELETE /api/services/:id
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<serde_json::Value>> {
    let id = parse_id(&id)?;

    if !ServiceRepository::delete(&state.db, id).await? {
        return Err(AppError::NotFound("Service not found".into()));
    }

    Ok(Json(json!({ "success": true })))
}
