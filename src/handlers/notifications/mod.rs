//! Notification handlers

mod handler;
pub mod request;
pub mod response;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Sending, mounted at `/companies/{company_id}/notifications`
pub fn routes() -> Router<AppState> {
    Router::new().route("/", post(handler::send_notification))
}

/// Inbox, mounted at `/companies/{company_id}/users/{user_id}/notifications`
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_notifications))
        .route("/unseen-count", get(handler::unseen_count))
        .route("/seen", put(handler::mark_all_seen))
        .route("/{id}/seen", put(handler::mark_seen))
        .route("/{id}", delete(handler::delete_notification))
}
