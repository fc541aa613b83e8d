//! Presence handlers

mod handler;
pub mod request;
pub mod response;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Company-wide presence routes, mounted at `/companies/{company_id}/presences`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_presences))
        .route("/", post(handler::create_presence))
        .route("/{id}", get(handler::get_presence))
        .route("/{id}", put(handler::update_presence))
        .route("/{id}", delete(handler::delete_presence))
}

/// Per-user routes, mounted at `/companies/{company_id}/users/{user_id}/presences`
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_user_presences))
        .route("/summary", get(handler::user_summary))
}
