//! Project handlers

mod handler;
pub mod request;
pub mod response;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Project routes, mounted at `/companies/{company_id}/projects`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_projects))
        .route("/", post(handler::create_project))
        .route("/{id}", get(handler::get_project))
        .route("/{id}", put(handler::update_project))
        .route("/{id}", delete(handler::delete_project))
        .route("/{id}/interns", get(handler::list_project_interns))
}
