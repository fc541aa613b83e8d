//! Project handler implementations

use axum::extract::State;

use crate::{
    extract::{ApiQuery, IdPath, ValidJson},
    handlers::interns::response::InternResponse,
    middleware::CompanyScope,
    response::{ApiResponse, ApiResult},
    services::ProjectService,
    state::AppState,
    utils::Page,
};

use super::{
    request::{CreateProjectRequest, ListProjectsQuery, UpdateProjectRequest},
    response::ProjectResponse,
};

pub async fn list_projects(
    State(state): State<AppState>,
    scope: CompanyScope,
    ApiQuery(query): ApiQuery<ListProjectsQuery>,
) -> ApiResult<Page<ProjectResponse>> {
    let page =
        ProjectService::list_projects(state.db(), &scope.user, &scope.company_id, query).await?;
    Ok(ApiResponse::ok("OK", page))
}

pub async fn create_project(
    State(state): State<AppState>,
    scope: CompanyScope,
    ValidJson(payload): ValidJson<CreateProjectRequest>,
) -> ApiResult<ProjectResponse> {
    let project =
        ProjectService::create_project(state.db(), &scope.user, &scope.company_id, payload).await?;
    Ok(ApiResponse::created("Project created", project))
}

pub async fn get_project(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
) -> ApiResult<ProjectResponse> {
    let project =
        ProjectService::get_project(state.db(), &scope.user, &scope.company_id, &id).await?;
    Ok(ApiResponse::ok("OK", project))
}

pub async fn update_project(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
    ValidJson(payload): ValidJson<UpdateProjectRequest>,
) -> ApiResult<ProjectResponse> {
    let project =
        ProjectService::update_project(state.db(), &scope.user, &scope.company_id, &id, payload)
            .await?;
    Ok(ApiResponse::ok("Project updated", project))
}

pub async fn delete_project(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
) -> ApiResult<()> {
    ProjectService::delete_project(state.db(), &scope.user, &scope.company_id, &id).await?;
    Ok(ApiResponse::message("Project deleted"))
}

/// Interns working on a project
pub async fn list_project_interns(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
) -> ApiResult<Vec<InternResponse>> {
    let interns =
        ProjectService::list_project_interns(state.db(), &scope.user, &scope.company_id, &id)
            .await?;
    Ok(ApiResponse::ok("OK", interns))
}
