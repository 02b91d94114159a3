use axum::{routing::get, Router};

use super::handlers::{create_service, delete_service, get_service, list_services, update_service};
use crate::app_state::AppState;

pub fn service_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_services).post(create_service))
        .route(
            "/:id",
            get(get_service).put(update_service).delete(delete_service),
        )
}
