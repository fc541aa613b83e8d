//! Authentication handlers

mod handler;
pub mod request;
pub mod response;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Public authentication routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(handler::login))
}

/// Routes that need a valid session
pub fn session_routes() -> Router<AppState> {
    Router::new().route("/auth/me", get(handler::me))
}
