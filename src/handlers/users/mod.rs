//! User management handlers

mod handler;
pub mod request;
pub mod response;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// User routes, mounted at `/companies/{company_id}/users`
pub fn routes() -> Router<AppState> {
    Router::new()
        // User CRUD
        .route("/", get(handler::list_users))
        .route("/", post(handler::create_user))
        .route("/{user_id}", get(handler::get_user))
        .route("/{user_id}", put(handler::update_user))
        .route("/{user_id}", delete(handler::delete_user))
        // Own account
        .route("/{user_id}/password", put(handler::change_password))
        // Role assignments
        .route("/{user_id}/roles", get(handler::list_user_roles))
        .route("/{user_id}/roles", post(handler::assign_role))
        .route("/{user_id}/roles/{id}", delete(handler::unassign_role))
        .route("/{user_id}/permissions", get(handler::user_permissions))
}
