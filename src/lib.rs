//! hrdesk - Multi-tenant HR and recruitment API
//!
//! Companies manage their employees, roles and per-feature permissions,
//! recruit condidats through generated skill tests, supervise interns and
//! projects, and handle day-to-day requests (presences, mission orders,
//! training requests) with in-app notifications.
//!
//! # Layout
//!
//! Requests flow through tenancy scopes (`extract`) into thin handlers,
//! which call services for permission checks and business rules. Services
//! talk to Postgres only through `db::repositories`; `models` holds rows
//! and pure helpers such as scoring and decision rules.

pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod response;
pub mod services;
pub mod state;
pub mod utils;

use axum::{Router, middleware as axum_middleware};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};

pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;

/// Build the full application router with its middleware stack
pub fn create_router(state: AppState) -> Router {
    let max_body_bytes = state.config().server.max_body_bytes;

    Router::new()
        .nest(constants::API_BASE_PATH, handlers::routes(state.clone()))
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
