//! Condidat handler implementations

use axum::extract::State;

use crate::{
    extract::{ApiQuery, IdPath, ValidJson},
    handlers::tests::response::TestResponse,
    middleware::CompanyScope,
    response::{ApiResponse, ApiResult},
    services::CondidatService,
    state::AppState,
    utils::Page,
};

use super::{
    request::{
        CreateCondidatRequest, ListCondidatsQuery, UpdateCondidatRequest,
        UpdateCondidatStatusRequest,
    },
    response::CondidatResponse,
};

/// List condidats with search and status filter
pub async fn list_condidats(
    State(state): State<AppState>,
    scope: CompanyScope,
    ApiQuery(query): ApiQuery<ListCondidatsQuery>,
) -> ApiResult<Page<CondidatResponse>> {
    let page =
        CondidatService::list_condidats(state.db(), &scope.user, &scope.company_id, query).await?;
    Ok(ApiResponse::ok("OK", page))
}

pub async fn create_condidat(
    State(state): State<AppState>,
    scope: CompanyScope,
    ValidJson(payload): ValidJson<CreateCondidatRequest>,
) -> ApiResult<CondidatResponse> {
    let condidat =
        CondidatService::create_condidat(state.db(), &scope.user, &scope.company_id, payload)
            .await?;
    Ok(ApiResponse::created("Condidat created", condidat))
}

pub async fn get_condidat(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
) -> ApiResult<CondidatResponse> {
    let condidat =
        CondidatService::get_condidat(state.db(), &scope.user, &scope.company_id, &id).await?;
    Ok(ApiResponse::ok("OK", condidat))
}

pub async fn update_condidat(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
    ValidJson(payload): ValidJson<UpdateCondidatRequest>,
) -> ApiResult<CondidatResponse> {
    let condidat =
        CondidatService::update_condidat(state.db(), &scope.user, &scope.company_id, &id, payload)
            .await?;
    Ok(ApiResponse::ok("Condidat updated", condidat))
}

/// Move a condidat through the recruitment pipeline
pub async fn update_status(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
    ValidJson(payload): ValidJson<UpdateCondidatStatusRequest>,
) -> ApiResult<CondidatResponse> {
    let condidat =
        CondidatService::update_status(state.db(), &scope.user, &scope.company_id, &id, payload)
            .await?;
    Ok(ApiResponse::ok("Condidat status updated", condidat))
}

pub async fn delete_condidat(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
) -> ApiResult<()> {
    CondidatService::delete_condidat(state.db(), &scope.user, &scope.company_id, &id).await?;
    Ok(ApiResponse::message("Condidat deleted"))
}

pub async fn list_condidat_tests(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
) -> ApiResult<Vec<TestResponse>> {
    let tests =
        CondidatService::list_condidat_tests(state.db(), &scope.user, &scope.company_id, &id)
            .await?;
    Ok(ApiResponse::ok("OK", tests))
}
