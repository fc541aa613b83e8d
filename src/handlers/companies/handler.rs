//! Company handler implementations

use axum::extract::State;

use crate::{
    extract::{ApiQuery, ValidJson},
    middleware::{AuthenticatedUser, CompanyScope},
    models::CompanyStats,
    response::{ApiResponse, ApiResult},
    services::CompanyService,
    state::AppState,
    utils::Page,
};

use super::{
    request::{CreateCompanyRequest, ListCompaniesQuery, UpdateCompanyRequest},
    response::{CompanyResponse, CreatedCompanyResponse},
};

/// List all companies (root only)
pub async fn list_companies(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ApiQuery(query): ApiQuery<ListCompaniesQuery>,
) -> ApiResult<Page<CompanyResponse>> {
    let page = CompanyService::list_companies(state.db(), &user, query).await?;
    Ok(ApiResponse::ok("OK", page))
}

/// Create a company with its admin role and first user (root only)
pub async fn create_company(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ValidJson(payload): ValidJson<CreateCompanyRequest>,
) -> ApiResult<CreatedCompanyResponse> {
    let created = CompanyService::create_company(state.db(), &user, payload).await?;
    Ok(ApiResponse::created("Company created", created))
}

pub async fn get_company(
    State(state): State<AppState>,
    scope: CompanyScope,
) -> ApiResult<CompanyResponse> {
    let company = CompanyService::get_company(state.db(), &scope.company_id).await?;
    Ok(ApiResponse::ok("OK", company))
}

pub async fn update_company(
    State(state): State<AppState>,
    scope: CompanyScope,
    ValidJson(payload): ValidJson<UpdateCompanyRequest>,
) -> ApiResult<CompanyResponse> {
    let company =
        CompanyService::update_company(state.db(), &scope.user, &scope.company_id, payload).await?;
    Ok(ApiResponse::ok("Company updated", company))
}

/// Delete a company and everything it owns (root only)
pub async fn delete_company(
    State(state): State<AppState>,
    scope: CompanyScope,
) -> ApiResult<()> {
    CompanyService::delete_company(state.db(), &scope.user, &scope.company_id).await?;
    Ok(ApiResponse::message("Company deleted"))
}

/// Dashboard counters
pub async fn get_stats(
    State(state): State<AppState>,
    scope: CompanyScope,
) -> ApiResult<CompanyStats> {
    let stats = CompanyService::get_stats(state.db(), &scope.company_id).await?;
    Ok(ApiResponse::ok("OK", stats))
}
