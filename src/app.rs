use crate::handlers;
use crate::state::AppState;
use crate::units::data_items::DATA_ITEMS_PATH;
use axum::{routing::get, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route(DATA_ITEMS_PATH, get(handlers::current_data))
        .route("/api/elements/:id", get(handlers::get_element))
        .with_state(state)
}
