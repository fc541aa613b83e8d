//! Mission order handler implementations

use axum::extract::State;

use crate::{
    extract::{ApiQuery, IdPath, ValidJson},
    middleware::{CompanyScope, EmployeeScope, SessionScope},
    response::{ApiResponse, ApiResult},
    services::MissionOrderService,
    state::AppState,
    utils::Page,
};

use super::{
    request::{
        CreateMissionOrderRequest, DecisionRequest, ListMissionOrdersQuery,
        UpdateMissionOrderRequest,
    },
    response::MissionOrderResponse,
};

pub async fn list_mission_orders(
    State(state): State<AppState>,
    scope: CompanyScope,
    ApiQuery(query): ApiQuery<ListMissionOrdersQuery>,
) -> ApiResult<Page<MissionOrderResponse>> {
    let page =
        MissionOrderService::list_mission_orders(state.db(), &scope.user, &scope.company_id, query)
            .await?;
    Ok(ApiResponse::ok("OK", page))
}

/// Issue a mission order for a user of the company
pub async fn issue_mission_order(
    State(state): State<AppState>,
    scope: CompanyScope,
    ValidJson(payload): ValidJson<CreateMissionOrderRequest>,
) -> ApiResult<MissionOrderResponse> {
    let order =
        MissionOrderService::issue(state.db(), &scope.user, &scope.company_id, payload).await?;
    Ok(ApiResponse::created("Mission order created", order))
}

pub async fn get_mission_order(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
) -> ApiResult<MissionOrderResponse> {
    let order =
        MissionOrderService::get_mission_order(state.db(), &scope.user, &scope.company_id, &id)
            .await?;
    Ok(ApiResponse::ok("OK", order))
}

pub async fn update_mission_order(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
    ValidJson(payload): ValidJson<UpdateMissionOrderRequest>,
) -> ApiResult<MissionOrderResponse> {
    let order = MissionOrderService::update_mission_order(
        state.db(),
        &scope.user,
        &scope.company_id,
        &id,
        payload,
    )
    .await?;
    Ok(ApiResponse::ok("Mission order updated", order))
}

pub async fn delete_mission_order(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
) -> ApiResult<()> {
    MissionOrderService::delete_mission_order(state.db(), &scope.user, &scope.company_id, &id)
        .await?;
    Ok(ApiResponse::message("Mission order deleted"))
}

/// Accept or reject a pending mission order
pub async fn decide_mission_order(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
    ValidJson(payload): ValidJson<DecisionRequest>,
) -> ApiResult<MissionOrderResponse> {
    let order =
        MissionOrderService::decide(state.db(), &scope.user, &scope.company_id, &id, payload)
            .await?;
    Ok(ApiResponse::ok("Mission order decided", order))
}

pub async fn list_user_mission_orders(
    State(state): State<AppState>,
    scope: EmployeeScope,
    ApiQuery(query): ApiQuery<ListMissionOrdersQuery>,
) -> ApiResult<Page<MissionOrderResponse>> {
    let page = MissionOrderService::list_user_mission_orders(
        state.db(),
        &scope.user,
        &scope.company_id,
        &scope.user_id,
        query,
    )
    .await?;
    Ok(ApiResponse::ok("OK", page))
}

/// File a mission order for oneself
pub async fn file_mission_order(
    State(state): State<AppState>,
    scope: SessionScope,
    ValidJson(payload): ValidJson<CreateMissionOrderRequest>,
) -> ApiResult<MissionOrderResponse> {
    let order =
        MissionOrderService::file_own(state.db(), &scope.company_id, &scope.user_id, payload)
            .await?;
    Ok(ApiResponse::created("Mission order created", order))
}
