//! Training request handlers

mod handler;
pub mod request;
pub mod response;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Company-wide routes, mounted at `/companies/{company_id}/training-requests`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_training_requests))
        .route("/", post(handler::issue_training_request))
        .route("/{id}", get(handler::get_training_request))
        .route("/{id}", put(handler::update_training_request))
        .route("/{id}", delete(handler::delete_training_request))
        .route("/{id}/status", put(handler::decide_training_request))
}

/// Per-user routes, mounted at `/companies/{company_id}/users/{user_id}/training-requests`
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_user_training_requests))
        .route("/", post(handler::file_training_request))
}
