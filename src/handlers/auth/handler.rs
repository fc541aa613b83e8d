//! Authentication handler implementations

use axum::extract::State;

use crate::{
    extract::ValidJson,
    middleware::AuthenticatedUser,
    response::{ApiResponse, ApiResult},
    services::AuthService,
    state::AppState,
};

use super::{
    request::LoginRequest,
    response::{LoginResponse, MeResponse},
};

/// Exchange credentials for an access token
pub async fn login(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let response = AuthService::login(state.db(), state.keys(), payload).await?;
    Ok(ApiResponse::ok("Login successful", response))
}

/// Current user, company and effective permissions
pub async fn me(State(state): State<AppState>, user: AuthenticatedUser) -> ApiResult<MeResponse> {
    let response = AuthService::me(state.db(), &user).await?;
    Ok(ApiResponse::ok("OK", response))
}
