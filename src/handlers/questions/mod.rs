//! Question bank handlers

mod handler;
pub mod request;
pub mod response;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Question routes, mounted at `/companies/{company_id}/questions`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_questions))
        .route("/", post(handler::create_question))
        .route("/technologies", get(handler::list_technologies))
        .route("/{id}", get(handler::get_question))
        .route("/{id}", put(handler::update_question))
        .route("/{id}", delete(handler::delete_question))
}
