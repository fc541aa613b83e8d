//! User experience handlers

mod handler;
pub mod request;
pub mod response;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Mounted at `/companies/{company_id}/users/{user_id}/experiences`
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_experiences))
        .route("/", post(handler::create_experience))
        .route("/{id}", put(handler::update_experience))
        .route("/{id}", delete(handler::delete_experience))
}
