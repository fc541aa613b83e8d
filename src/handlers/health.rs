//! Liveness and readiness checks

use axum::{Router, extract::State, routing::get};
use serde::Serialize;

use crate::{
    db,
    response::{ApiResponse, ApiResult},
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

impl HealthResponse {
    fn new(status: &'static str) -> Self {
        Self {
            status,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

async fn liveness() -> ApiResponse<HealthResponse> {
    ApiResponse::ok("OK", HealthResponse::new("healthy"))
}

/// Ready once the database answers
async fn readiness(State(state): State<AppState>) -> ApiResult<HealthResponse> {
    db::test_connection(state.db()).await?;
    Ok(ApiResponse::ok("OK", HealthResponse::new("ready")))
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(liveness))
        .route("/health/ready", get(readiness))
}
