//! Mission order handlers

mod handler;
pub mod request;
pub mod response;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Company-wide routes, mounted at `/companies/{company_id}/mission-orders`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_mission_orders))
        .route("/", post(handler::issue_mission_order))
        .route("/{id}", get(handler::get_mission_order))
        .route("/{id}", put(handler::update_mission_order))
        .route("/{id}", delete(handler::delete_mission_order))
        .route("/{id}/status", put(handler::decide_mission_order))
}

/// Per-user routes, mounted at `/companies/{company_id}/users/{user_id}/mission-orders`
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_user_mission_orders))
        .route("/", post(handler::file_mission_order))
}
