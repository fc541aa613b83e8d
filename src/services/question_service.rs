//! Question bank service

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    constants::{MIN_QUESTION_OPTIONS, features, question_levels},
    db::repositories::{NewQuestion, QuestionChanges, QuestionRepository},
    error::{AppError, AppResult},
    handlers::questions::{
        request::{CreateQuestionRequest, ListQuestionsQuery, UpdateQuestionRequest},
        response::{QuestionResponse, TechnologyResponse},
    },
    middleware::AuthenticatedUser,
    models::{Action, Question, normalize_technology},
    services::PermissionService,
    utils::{Page, PageQuery},
};

/// Question service for business logic
pub struct QuestionService;

impl QuestionService {
    /// List questions of a company
    pub async fn list_questions(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        query: ListQuestionsQuery,
    ) -> AppResult<Page<QuestionResponse>> {
        PermissionService::require(pool, session, features::QUESTIONS, Action::Read).await?;

        if let Some(level) = query.level.as_deref() {
            validate_level(level)?;
        }
        let technology = query.technology.as_deref().map(normalize_technology);

        let page = PageQuery::new(query.page, query.page_size);
        let (questions, total) = QuestionRepository::list(
            pool,
            company_id,
            technology.as_deref(),
            query.level.as_deref(),
            page.offset(),
            page.limit(),
        )
        .await?;

        Ok(Page::new(questions, &page, total).map(Into::into))
    }

    /// Add a question to the bank
    pub async fn create_question(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        payload: CreateQuestionRequest,
    ) -> AppResult<QuestionResponse> {
        PermissionService::require(pool, session, features::QUESTIONS, Action::Create).await?;

        let technology = checked_technology(&payload.technology)?;
        let level = payload.level.as_deref().unwrap_or(question_levels::MEDIUM);
        validate_level(level)?;
        validate_options(&payload.options, payload.correct_option)?;

        let question = QuestionRepository::create(
            pool,
            company_id,
            &NewQuestion {
                technology: &technology,
                content: payload.content.trim(),
                options: &payload.options,
                correct_option: payload.correct_option,
                level,
            },
        )
        .await?;

        info!(question_id = %question.id, technology = %question.technology, "Question created");
        Ok(question.into())
    }

    /// Get a question
    pub async fn get_question(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<QuestionResponse> {
        PermissionService::require(pool, session, features::QUESTIONS, Action::Read).await?;
        Ok(Self::find_question(pool, company_id, id).await?.into())
    }

    /// Update a question; the answer key is checked against the resulting options
    pub async fn update_question(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
        payload: UpdateQuestionRequest,
    ) -> AppResult<QuestionResponse> {
        PermissionService::require(pool, session, features::QUESTIONS, Action::Update).await?;

        if let Some(level) = payload.level.as_deref() {
            validate_level(level)?;
        }
        let technology = payload
            .technology
            .as_deref()
            .map(checked_technology)
            .transpose()?;

        let current = Self::find_question(pool, company_id, id).await?;
        validate_options(
            payload.options.as_deref().unwrap_or(&current.options),
            payload.correct_option.unwrap_or(current.correct_option),
        )?;

        let changes = QuestionChanges {
            technology: technology.as_deref(),
            content: payload.content.as_deref().map(str::trim),
            options: payload.options.as_deref(),
            correct_option: payload.correct_option,
            level: payload.level.as_deref(),
        };

        let question = QuestionRepository::update(pool, company_id, id, &changes)
            .await?
            .ok_or_else(|| AppError::not_found("Question"))?;

        info!(question_id = %question.id, updated_by = %session.id, "Question updated");
        Ok(question.into())
    }

    /// Delete a question that no test uses
    pub async fn delete_question(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<()> {
        PermissionService::require(pool, session, features::QUESTIONS, Action::Delete).await?;

        if !QuestionRepository::delete(pool, company_id, id).await? {
            return Err(AppError::not_found("Question"));
        }

        info!(question_id = %id, deleted_by = %session.id, "Question deleted");
        Ok(())
    }

    /// Technologies of the bank with their question counts
    pub async fn list_technologies(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
    ) -> AppResult<Vec<TechnologyResponse>> {
        PermissionService::require(pool, session, features::QUESTIONS, Action::Read).await?;

        let counts = QuestionRepository::count_by_technology(pool, company_id).await?;
        Ok(counts.into_iter().map(Into::into).collect())
    }

    async fn find_question(pool: &PgPool, company_id: &Uuid, id: &Uuid) -> AppResult<Question> {
        QuestionRepository::find_by_id(pool, company_id, id)
            .await?
            .ok_or_else(|| AppError::not_found("Question"))
    }
}

fn validate_level(level: &str) -> AppResult<()> {
    if question_levels::ALL.contains(&level) {
        return Ok(());
    }
    Err(AppError::Validation(format!(
        "Invalid level '{}'. Valid values: {}",
        level,
        question_levels::ALL.join(", ")
    )))
}

fn checked_technology(technology: &str) -> AppResult<String> {
    let technology = normalize_technology(technology);
    if technology.is_empty() {
        return Err(AppError::Validation(
            "Technology must not be blank".to_string(),
        ));
    }
    Ok(technology)
}

/// At least two non-blank options and an answer key pointing at one of them
fn validate_options(options: &[String], correct_option: i32) -> AppResult<()> {
    if options.len() < MIN_QUESTION_OPTIONS {
        return Err(AppError::Validation(format!(
            "A question needs at least {} options",
            MIN_QUESTION_OPTIONS
        )));
    }
    if options.iter().any(|o| o.trim().is_empty()) {
        return Err(AppError::Validation("Options must not be blank".to_string()));
    }
    if correct_option < 0 || correct_option as usize >= options.len() {
        return Err(AppError::Validation(format!(
            "correct_option must be between 0 and {}",
            options.len() - 1
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("option {}", i)).collect()
    }

    #[test]
    fn test_answer_key_must_index_options() {
        assert!(validate_options(&options(4), 0).is_ok());
        assert!(validate_options(&options(4), 3).is_ok());
        assert!(validate_options(&options(4), 4).is_err());
        assert!(validate_options(&options(4), -1).is_err());
    }

    #[test]
    fn test_too_few_or_blank_options() {
        assert!(validate_options(&options(1), 0).is_err());
        assert!(validate_options(&["a".to_string(), "  ".to_string()], 0).is_err());
    }

    #[test]
    fn test_levels() {
        assert!(validate_level("hard").is_ok());
        assert!(validate_level("expert").is_err());
    }

    #[test]
    fn test_blank_technology() {
        assert_eq!(checked_technology(" Go ").unwrap(), "go");
        assert!(checked_technology("   ").is_err());
    }
}
