//! Company management handlers

mod handler;
pub mod request;
pub mod response;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::state::AppState;

/// Company routes, mounted at `/companies`
pub fn routes() -> Router<AppState> {
    Router::new()
        // Root administration
        .route("/", get(handler::list_companies))
        .route("/", post(handler::create_company))
        // Tenant
        .route("/{company_id}", get(handler::get_company))
        .route("/{company_id}", put(handler::update_company))
        .route("/{company_id}", delete(handler::delete_company))
        .route("/{company_id}/stats", get(handler::get_stats))
}
