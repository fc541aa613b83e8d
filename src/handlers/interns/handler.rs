//! Intern handler implementations

use axum::extract::State;

use crate::{
    extract::{ApiQuery, IdPath, ValidJson},
    middleware::CompanyScope,
    response::{ApiResponse, ApiResult},
    services::InternService,
    state::AppState,
    utils::Page,
};

use super::{
    request::{AssignProjectRequest, CreateInternRequest, ListInternsQuery, UpdateInternRequest},
    response::InternResponse,
};

pub async fn list_interns(
    State(state): State<AppState>,
    scope: CompanyScope,
    ApiQuery(query): ApiQuery<ListInternsQuery>,
) -> ApiResult<Page<InternResponse>> {
    let page = InternService::list_interns(state.db(), &scope.user, &scope.company_id, query).await?;
    Ok(ApiResponse::ok("OK", page))
}

pub async fn create_intern(
    State(state): State<AppState>,
    scope: CompanyScope,
    ValidJson(payload): ValidJson<CreateInternRequest>,
) -> ApiResult<InternResponse> {
    let intern =
        InternService::create_intern(state.db(), &scope.user, &scope.company_id, payload).await?;
    Ok(ApiResponse::created("Intern created", intern))
}

pub async fn get_intern(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
) -> ApiResult<InternResponse> {
    let intern = InternService::get_intern(state.db(), &scope.user, &scope.company_id, &id).await?;
    Ok(ApiResponse::ok("OK", intern))
}

pub async fn update_intern(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
    ValidJson(payload): ValidJson<UpdateInternRequest>,
) -> ApiResult<InternResponse> {
    let intern =
        InternService::update_intern(state.db(), &scope.user, &scope.company_id, &id, payload)
            .await?;
    Ok(ApiResponse::ok("Intern updated", intern))
}

/// Put an intern on a project, or take them off with `null`
pub async fn assign_project(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
    ValidJson(payload): ValidJson<AssignProjectRequest>,
) -> ApiResult<InternResponse> {
    let intern =
        InternService::assign_project(state.db(), &scope.user, &scope.company_id, &id, payload)
            .await?;
    Ok(ApiResponse::ok("Intern project updated", intern))
}

pub async fn delete_intern(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
) -> ApiResult<()> {
    InternService::delete_intern(state.db(), &scope.user, &scope.company_id, &id).await?;
    Ok(ApiResponse::message("Intern deleted"))
}
