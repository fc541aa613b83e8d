//! Role and permission handlers

mod handler;
pub mod request;
pub mod response;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Role routes, mounted at `/companies/{company_id}/roles`
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_roles))
        .route("/", post(handler::create_role))
        .route("/{id}", get(handler::get_role))
        .route("/{id}", put(handler::update_role))
        .route("/{id}", delete(handler::delete_role))
        // Permission table
        .route("/{id}/permissions", get(handler::get_permissions))
        .route("/{id}/permissions", put(handler::update_permissions))
}

/// `GET /features`
pub fn feature_routes() -> Router<AppState> {
    Router::new().route("/features", get(handler::list_features))
}
