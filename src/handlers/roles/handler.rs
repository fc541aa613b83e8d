//! Role handler implementations

use axum::extract::State;

use crate::{
    constants::features,
    extract::{ApiQuery, IdPath, ValidJson},
    middleware::{AuthenticatedUser, CompanyScope},
    response::{ApiResponse, ApiResult},
    services::RoleService,
    state::AppState,
    utils::Page,
};

use super::{
    request::{CreateRoleRequest, ListRolesQuery, UpdatePermissionsRequest, UpdateRoleRequest},
    response::{FeaturesResponse, PermissionResponse, RoleDetailResponse, RoleResponse},
};

/// Features a role can be granted permissions on
pub async fn list_features(_user: AuthenticatedUser) -> ApiResult<FeaturesResponse> {
    Ok(ApiResponse::ok(
        "OK",
        FeaturesResponse {
            features: features::ALL.to_vec(),
        },
    ))
}

pub async fn list_roles(
    State(state): State<AppState>,
    scope: CompanyScope,
    ApiQuery(query): ApiQuery<ListRolesQuery>,
) -> ApiResult<Page<RoleResponse>> {
    let page = RoleService::list_roles(state.db(), &scope.user, &scope.company_id, query).await?;
    Ok(ApiResponse::ok("OK", page))
}

/// Create a role with no permissions
pub async fn create_role(
    State(state): State<AppState>,
    scope: CompanyScope,
    ValidJson(payload): ValidJson<CreateRoleRequest>,
) -> ApiResult<RoleDetailResponse> {
    let role = RoleService::create_role(state.db(), &scope.user, &scope.company_id, payload).await?;
    Ok(ApiResponse::created("Role created", role))
}

pub async fn get_role(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
) -> ApiResult<RoleDetailResponse> {
    let role = RoleService::get_role(state.db(), &scope.user, &scope.company_id, &id).await?;
    Ok(ApiResponse::ok("OK", role))
}

pub async fn update_role(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
    ValidJson(payload): ValidJson<UpdateRoleRequest>,
) -> ApiResult<RoleResponse> {
    let role =
        RoleService::update_role(state.db(), &scope.user, &scope.company_id, &id, payload).await?;
    Ok(ApiResponse::ok("Role updated", role))
}

pub async fn delete_role(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
) -> ApiResult<()> {
    RoleService::delete_role(state.db(), &scope.user, &scope.company_id, &id).await?;
    Ok(ApiResponse::message("Role deleted"))
}

pub async fn get_permissions(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
) -> ApiResult<Vec<PermissionResponse>> {
    let permissions =
        RoleService::get_permissions(state.db(), &scope.user, &scope.company_id, &id).await?;
    Ok(ApiResponse::ok("OK", permissions))
}

/// Upsert the supplied features' permission bits
pub async fn update_permissions(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
    ValidJson(payload): ValidJson<UpdatePermissionsRequest>,
) -> ApiResult<Vec<PermissionResponse>> {
    let permissions =
        RoleService::update_permissions(state.db(), &scope.user, &scope.company_id, &id, payload)
            .await?;
    Ok(ApiResponse::ok("Permissions updated", permissions))
}
