//! Skill test handler implementations

use axum::extract::State;

use crate::{
    extract::{ApiQuery, IdPath, ValidJson},
    middleware::CompanyScope,
    response::{ApiResponse, ApiResult},
    services::TestService,
    state::AppState,
    utils::Page,
};

use super::{
    request::{GenerateTestRequest, ListTestsQuery, SubmitTestRequest},
    response::{TestDetailResponse, TestResponse, TestResultResponse},
};

pub async fn list_tests(
    State(state): State<AppState>,
    scope: CompanyScope,
    ApiQuery(query): ApiQuery<ListTestsQuery>,
) -> ApiResult<Page<TestResponse>> {
    let page = TestService::list_tests(state.db(), &scope.user, &scope.company_id, query).await?;
    Ok(ApiResponse::ok("OK", page))
}

/// Sample a test for a condidat from the question bank
pub async fn generate_test(
    State(state): State<AppState>,
    scope: CompanyScope,
    ValidJson(payload): ValidJson<GenerateTestRequest>,
) -> ApiResult<TestDetailResponse> {
    let test =
        TestService::generate_test(state.db(), &scope.user, &scope.company_id, payload).await?;
    Ok(ApiResponse::created("Test generated", test))
}

/// Test with its questions; answers are revealed once completed
pub async fn get_test(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
) -> ApiResult<TestDetailResponse> {
    let test = TestService::get_test(state.db(), &scope.user, &scope.company_id, &id).await?;
    Ok(ApiResponse::ok("OK", test))
}

pub async fn submit_test(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
    ValidJson(payload): ValidJson<SubmitTestRequest>,
) -> ApiResult<TestResultResponse> {
    let result =
        TestService::submit_test(state.db(), &scope.user, &scope.company_id, &id, payload).await?;
    Ok(ApiResponse::ok("Test submitted", result))
}

pub async fn delete_test(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
) -> ApiResult<()> {
    TestService::delete_test(state.db(), &scope.user, &scope.company_id, &id).await?;
    Ok(ApiResponse::message("Test deleted"))
}
