//! Condidat handlers

mod handler;
pub mod request;
pub mod response;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Condidat routes, mounted at `/companies/{company_id}/condidats`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_condidats))
        .route("/", post(handler::create_condidat))
        .route("/{id}", get(handler::get_condidat))
        .route("/{id}", put(handler::update_condidat))
        .route("/{id}", delete(handler::delete_condidat))
        .route("/{id}/status", put(handler::update_status))
        .route("/{id}/tests", get(handler::list_condidat_tests))
}
