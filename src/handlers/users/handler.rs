//! User handler implementations

use axum::extract::State;

use crate::{
    extract::{ApiQuery, IdPath, ValidJson},
    handlers::roles::response::RoleResponse,
    middleware::{CompanyScope, EmployeeScope, SessionScope},
    models::FeaturePermission,
    response::{ApiResponse, ApiResult},
    services::UserService,
    state::AppState,
    utils::Page,
};

use super::{
    request::{
        AssignRoleRequest, ChangePasswordRequest, CreateUserRequest, ListUsersQuery,
        UpdateUserRequest,
    },
    response::UserResponse,
};

/// List users of a company
pub async fn list_users(
    State(state): State<AppState>,
    scope: CompanyScope,
    ApiQuery(query): ApiQuery<ListUsersQuery>,
) -> ApiResult<Page<UserResponse>> {
    let page = UserService::list_users(state.db(), &scope.user, &scope.company_id, query).await?;
    Ok(ApiResponse::ok("OK", page))
}

/// Create a user, optionally with roles
pub async fn create_user(
    State(state): State<AppState>,
    scope: CompanyScope,
    ValidJson(payload): ValidJson<CreateUserRequest>,
) -> ApiResult<UserResponse> {
    let user = UserService::create_user(state.db(), &scope.user, &scope.company_id, payload).await?;
    Ok(ApiResponse::created("User created", user))
}

pub async fn get_user(
    State(state): State<AppState>,
    scope: EmployeeScope,
) -> ApiResult<UserResponse> {
    let user =
        UserService::get_user(state.db(), &scope.user, &scope.company_id, &scope.user_id).await?;
    Ok(ApiResponse::ok("OK", user))
}

pub async fn update_user(
    State(state): State<AppState>,
    scope: EmployeeScope,
    ValidJson(payload): ValidJson<UpdateUserRequest>,
) -> ApiResult<UserResponse> {
    let user = UserService::update_user(
        state.db(),
        &scope.user,
        &scope.company_id,
        &scope.user_id,
        payload,
    )
    .await?;
    Ok(ApiResponse::ok("User updated", user))
}

pub async fn delete_user(State(state): State<AppState>, scope: EmployeeScope) -> ApiResult<()> {
    UserService::delete_user(state.db(), &scope.user, &scope.company_id, &scope.user_id).await?;
    Ok(ApiResponse::message("User deleted"))
}

/// Change the caller's own password
pub async fn change_password(
    State(state): State<AppState>,
    scope: SessionScope,
    ValidJson(payload): ValidJson<ChangePasswordRequest>,
) -> ApiResult<()> {
    UserService::change_password(state.db(), &scope.company_id, &scope.user_id, payload).await?;
    Ok(ApiResponse::message("Password changed"))
}

pub async fn list_user_roles(
    State(state): State<AppState>,
    scope: EmployeeScope,
) -> ApiResult<Vec<RoleResponse>> {
    let roles =
        UserService::list_user_roles(state.db(), &scope.user, &scope.company_id, &scope.user_id)
            .await?;
    Ok(ApiResponse::ok("OK", roles))
}

pub async fn assign_role(
    State(state): State<AppState>,
    scope: EmployeeScope,
    ValidJson(payload): ValidJson<AssignRoleRequest>,
) -> ApiResult<Vec<RoleResponse>> {
    let roles = UserService::assign_role(
        state.db(),
        &scope.user,
        &scope.company_id,
        &scope.user_id,
        payload,
    )
    .await?;
    Ok(ApiResponse::ok("Role assigned", roles))
}

pub async fn unassign_role(
    State(state): State<AppState>,
    scope: EmployeeScope,
    IdPath(role_id): IdPath,
) -> ApiResult<()> {
    UserService::unassign_role(
        state.db(),
        &scope.user,
        &scope.company_id,
        &scope.user_id,
        &role_id,
    )
    .await?;
    Ok(ApiResponse::message("Role unassigned"))
}

/// Effective permissions of a user, one entry per feature
pub async fn user_permissions(
    State(state): State<AppState>,
    scope: EmployeeScope,
) -> ApiResult<Vec<FeaturePermission>> {
    let permissions =
        UserService::user_permissions(state.db(), &scope.user, &scope.company_id, &scope.user_id)
            .await?;
    Ok(ApiResponse::ok("OK", permissions))
}
