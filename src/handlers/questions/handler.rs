//! Question handler implementations

use axum::extract::State;

use crate::{
    extract::{ApiQuery, IdPath, ValidJson},
    middleware::CompanyScope,
    response::{ApiResponse, ApiResult},
    services::QuestionService,
    state::AppState,
    utils::Page,
};

use super::{
    request::{CreateQuestionRequest, ListQuestionsQuery, UpdateQuestionRequest},
    response::{QuestionResponse, TechnologyResponse},
};

pub async fn list_questions(
    State(state): State<AppState>,
    scope: CompanyScope,
    ApiQuery(query): ApiQuery<ListQuestionsQuery>,
) -> ApiResult<Page<QuestionResponse>> {
    let page =
        QuestionService::list_questions(state.db(), &scope.user, &scope.company_id, query).await?;
    Ok(ApiResponse::ok("OK", page))
}

pub async fn create_question(
    State(state): State<AppState>,
    scope: CompanyScope,
    ValidJson(payload): ValidJson<CreateQuestionRequest>,
) -> ApiResult<QuestionResponse> {
    let question =
        QuestionService::create_question(state.db(), &scope.user, &scope.company_id, payload)
            .await?;
    Ok(ApiResponse::created("Question created", question))
}

/// Technologies of the question bank with their question counts
pub async fn list_technologies(
    State(state): State<AppState>,
    scope: CompanyScope,
) -> ApiResult<Vec<TechnologyResponse>> {
    let technologies =
        QuestionService::list_technologies(state.db(), &scope.user, &scope.company_id).await?;
    Ok(ApiResponse::ok("OK", technologies))
}

pub async fn get_question(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
) -> ApiResult<QuestionResponse> {
    let question =
        QuestionService::get_question(state.db(), &scope.user, &scope.company_id, &id).await?;
    Ok(ApiResponse::ok("OK", question))
}

pub async fn update_question(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
    ValidJson(payload): ValidJson<UpdateQuestionRequest>,
) -> ApiResult<QuestionResponse> {
    let question =
        QuestionService::update_question(state.db(), &scope.user, &scope.company_id, &id, payload)
            .await?;
    Ok(ApiResponse::ok("Question updated", question))
}

pub async fn delete_question(
    State(state): State<AppState>,
    scope: CompanyScope,
    IdPath(id): IdPath,
) -> ApiResult<()> {
    QuestionService::delete_question(state.db(), &scope.user, &scope.company_id, &id).await?;
    Ok(ApiResponse::message("Question deleted"))
}
