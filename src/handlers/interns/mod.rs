//! Intern handlers

mod handler;
pub mod request;
pub mod response;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Intern routes, mounted at `/companies/{company_id}/interns`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_interns))
        .route("/", post(handler::create_intern))
        .route("/{id}", get(handler::get_intern))
        .route("/{id}", put(handler::update_intern))
        .route("/{id}", delete(handler::delete_intern))
        .route("/{id}/project", put(handler::assign_project))
}
