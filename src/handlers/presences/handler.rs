//! Presence handler implementations

use axum::extract::State;

use crate::{
    extract::{ApiQuery, IdPath, ValidJson},
    middleware::{CompanyScope, EmployeeScope},
    models::PresenceSummary,
    response::{ApiResponse, ApiResult},
    services::PresenceService,
    state::AppState,
    utils::Page,
};

use super::{
    request::{
        CreatePresenceRequest, ListPresencesQuery, PresenceRangeQuery, UpdatePresenceRequest,
    },
    response::PresenceResponse,
};

pub async fn list_presences(
    State(state): State<AppState>,
    scope: CompanyScope,
    ApiQuery(query): ApiQuery<ListPresencesQuery>,
) -> ApiResult<Page<PresenceResponse>> {
    let page =
        PresenceService::list_presences(state.db(), &scope.user, &scope.company_id, query).await?;
    Ok(ApiResponse::ok("OK", page))
}

pub async fn create_presence(
    State(state): State<AppState>,
    scope: CompanyScope,
    ValidJson(payload): ValidJson<CreatePresenceRequest>,
) -> ApiResult<PresenceResponse> {
    let presence =
        PresenceService::create_presence(state.db(), &scope.user, &scope.company_id, payload)
            .await?;
    Ok(ApiResponse::created("Presence recorded", presence))
}

pub async fn get_presence(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
) -> ApiResult<PresenceResponse> {
    let presence =
        PresenceService::get_presence(state.db(), &scope.user, &scope.company_id, &id).await?;
    Ok(ApiResponse::ok("OK", presence))
}

pub async fn update_presence(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
    ValidJson(payload): ValidJson<UpdatePresenceRequest>,
) -> ApiResult<PresenceResponse> {
    let presence =
        PresenceService::update_presence(state.db(), &scope.user, &scope.company_id, &id, payload)
            .await?;
    Ok(ApiResponse::ok("Presence updated", presence))
}

pub async fn delete_presence(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
) -> ApiResult<()> {
    PresenceService::delete_presence(state.db(), &scope.user, &scope.company_id, &id).await?;
    Ok(ApiResponse::message("Presence deleted"))
}

pub async fn list_user_presences(
    State(state): State<AppState>,
    scope: EmployeeScope,
    ApiQuery(query): ApiQuery<PresenceRangeQuery>,
) -> ApiResult<Page<PresenceResponse>> {
    let page = PresenceService::list_user_presences(
        state.db(),
        &scope.user,
        &scope.company_id,
        &scope.user_id,
        query,
    )
    .await?;
    Ok(ApiResponse::ok("OK", page))
}

/// Attendance counters of a user over an optional period
pub async fn user_summary(
    State(state): State<AppState>,
    scope: EmployeeScope,
    ApiQuery(query): ApiQuery<PresenceRangeQuery>,
) -> ApiResult<PresenceSummary> {
    let summary = PresenceService::user_summary(
        state.db(),
        &scope.user,
        &scope.company_id,
        &scope.user_id,
        query,
    )
    .await?;
    Ok(ApiResponse::ok("OK", summary))
}
