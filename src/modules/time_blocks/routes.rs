use axum::{
    routing::{get, put},
    Router,
};

use super::handlers::{
    create_time_block, delete_time_block, list_time_blocks, update_time_block,
};
use crate::app_state::AppState;

pub fn time_block_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_time_blocks).post(create_time_block))
        .route("/:id", put(update_time_block).delete(delete_time_block))
}
