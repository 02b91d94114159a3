use axum::{
    routing::{get, patch, put},
    Router,
};

use super::handlers::{
    create_appointment, delete_appointment, list_appointments, list_available_slots,
    update_appointment, update_status,
};
use crate::app_state::AppState;

pub fn appointment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_appointments).post(create_appointment))
        .route("/available-slots", get(list_available_slots))
        .route("/:id", put(update_appointment).delete(delete_appointment))
        .route("/:id/status", patch(update_status))
}
