//! Training request handler implementations

use axum::extract::State;

use crate::{
    extract::{ApiQuery, IdPath, ValidJson},
    handlers::mission_orders::request::DecisionRequest,
    middleware::{CompanyScope, EmployeeScope, SessionScope},
    response::{ApiResponse, ApiResult},
    services::TrainingRequestService,
    state::AppState,
    utils::Page,
};

use super::{
    request::{
        CreateTrainingRequestRequest, ListTrainingRequestsQuery, UpdateTrainingRequestRequest,
    },
    response::TrainingRequestResponse,
};

pub async fn list_training_requests(
    State(state): State<AppState>,
    scope: CompanyScope,
    ApiQuery(query): ApiQuery<ListTrainingRequestsQuery>,
) -> ApiResult<Page<TrainingRequestResponse>> {
    let page = TrainingRequestService::list_training_requests(
        state.db(),
        &scope.user,
        &scope.company_id,
        query,
    )
    .await?;
    Ok(ApiResponse::ok("OK", page))
}

pub async fn issue_training_request(
    State(state): State<AppState>,
    scope: CompanyScope,
    ValidJson(payload): ValidJson<CreateTrainingRequestRequest>,
) -> ApiResult<TrainingRequestResponse> {
    let request =
        TrainingRequestService::issue(state.db(), &scope.user, &scope.company_id, payload).await?;
    Ok(ApiResponse::created("Training request created", request))
}

pub async fn get_training_request(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
) -> ApiResult<TrainingRequestResponse> {
    let request = TrainingRequestService::get_training_request(
        state.db(),
        &scope.user,
        &scope.company_id,
        &id,
    )
    .await?;
    Ok(ApiResponse::ok("OK", request))
}

pub async fn update_training_request(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
    ValidJson(payload): ValidJson<UpdateTrainingRequestRequest>,
) -> ApiResult<TrainingRequestResponse> {
    let request = TrainingRequestService::update_training_request(
        state.db(),
        &scope.user,
        &scope.company_id,
        &id,
        payload,
    )
    .await?;
    Ok(ApiResponse::ok("Training request updated", request))
}

pub async fn delete_training_request(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
) -> ApiResult<()> {
    TrainingRequestService::delete_training_request(
        state.db(),
        &scope.user,
        &scope.company_id,
        &id,
    )
    .await?;
    Ok(ApiResponse::message("Training request deleted"))
}

pub async fn decide_training_request(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
    ValidJson(payload): ValidJson<DecisionRequest>,
) -> ApiResult<TrainingRequestResponse> {
    let request =
        TrainingRequestService::decide(state.db(), &scope.user, &scope.company_id, &id, payload)
            .await?;
    Ok(ApiResponse::ok("Training request decided", request))
}

pub async fn list_user_training_requests(
    State(state): State<AppState>,
    scope: EmployeeScope,
    ApiQuery(query): ApiQuery<ListTrainingRequestsQuery>,
) -> ApiResult<Page<TrainingRequestResponse>> {
    let page = TrainingRequestService::list_user_training_requests(
        state.db(),
        &scope.user,
        &scope.company_id,
        &scope.user_id,
        query,
    )
    .await?;
    Ok(ApiResponse::ok("OK", page))
}

/// Ask for a training for oneself
pub async fn file_training_request(
    State(state): State<AppState>,
    scope: SessionScope,
    ValidJson(payload): ValidJson<CreateTrainingRequestRequest>,
) -> ApiResult<TrainingRequestResponse> {
    let request =
        TrainingRequestService::file_own(state.db(), &scope.company_id, &scope.user_id, payload)
            .await?;
    Ok(ApiResponse::created("Training request created", request))
}
