//! User experience handler implementations

use axum::extract::State;

use crate::{
    extract::{IdPath, ValidJson},
    middleware::{EmployeeScope, SessionScope},
    response::{ApiResponse, ApiResult},
    services::ExperienceService,
    state::AppState,
};

use super::{
    request::{CreateExperienceRequest, UpdateExperienceRequest},
    response::ExperienceResponse,
};

/// Work history of a user, visible to the whole company
pub async fn list_experiences(
    State(state): State<AppState>,
    scope: EmployeeScope,
) -> ApiResult<Vec<ExperienceResponse>> {
    let experiences =
        ExperienceService::list_experiences(state.db(), &scope.company_id, &scope.user_id).await?;
    Ok(ApiResponse::ok("OK", experiences))
}

pub async fn create_experience(
    State(state): State<AppState>,
    scope: SessionScope,
    ValidJson(payload): ValidJson<CreateExperienceRequest>,
) -> ApiResult<ExperienceResponse> {
    let experience =
        ExperienceService::create_experience(state.db(), &scope.company_id, &scope.user_id, payload)
            .await?;
    Ok(ApiResponse::created("Experience created", experience))
}

pub async fn update_experience(
    State(state): State<AppState>,
    scope: SessionScope,
    IdPath(id): IdPath,
    ValidJson(payload): ValidJson<UpdateExperienceRequest>,
) -> ApiResult<ExperienceResponse> {
    let experience = ExperienceService::update_experience(
        state.db(),
        &scope.company_id,
        &scope.user_id,
        &id,
        payload,
    )
    .await?;
    Ok(ApiResponse::ok("Experience updated", experience))
}

pub async fn delete_experience(
    State(state): State<AppState>,
    scope: SessionScope,
    IdPath(id): IdPath,
) -> ApiResult<()> {
    ExperienceService::delete_experience(state.db(), &scope.company_id, &scope.user_id, &id)
        .await?;
    Ok(ApiResponse::message("Experience deleted"))
}
