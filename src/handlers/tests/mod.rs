//! Skill test handlers

mod handler;
pub mod request;
pub mod response;

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

/// Test routes, mounted at `/companies/{company_id}/tests`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_tests))
        .route("/", post(handler::generate_test))
        .route("/{id}", get(handler::get_test))
        .route("/{id}", delete(handler::delete_test))
        .route("/{id}/submit", post(handler::submit_test))
}
