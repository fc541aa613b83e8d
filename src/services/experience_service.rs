//! User experience service

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    db::repositories::{ExperienceRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::experiences::{
        request::{CreateExperienceRequest, UpdateExperienceRequest},
        response::ExperienceResponse,
    },
    utils::validate_date_range,
};

pub struct ExperienceService;

impl ExperienceService {
    /// Work history of a user
    pub async fn list_experiences(
        pool: &PgPool,
        company_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<Vec<ExperienceResponse>> {
        if !UserRepository::exists_in_company(pool, company_id, user_id).await? {
            return Err(AppError::not_found("User"));
        }

        let experiences = ExperienceRepository::list_for_user(pool, company_id, user_id).await?;
        Ok(experiences.into_iter().map(Into::into).collect())
    }

    pub async fn create_experience(
        pool: &PgPool,
        company_id: &Uuid,
        user_id: &Uuid,
        payload: CreateExperienceRequest,
    ) -> AppResult<ExperienceResponse> {
        validate_date_range(payload.start_date, payload.end_date)?;

        let experience = ExperienceRepository::create(pool, company_id, user_id, &payload).await?;

        info!(experience_id = %experience.id, user_id = %user_id, "Experience added");
        Ok(experience.into())
    }

    pub async fn update_experience(
        pool: &PgPool,
        company_id: &Uuid,
        user_id: &Uuid,
        id: &Uuid,
        payload: UpdateExperienceRequest,
    ) -> AppResult<ExperienceResponse> {
        let current = ExperienceRepository::find_by_id(pool, company_id, user_id, id)
            .await?
            .ok_or_else(|| AppError::not_found("Experience"))?;
        validate_date_range(
            payload.start_date.unwrap_or(current.start_date),
            payload.end_date.or(current.end_date),
        )?;

        let experience = ExperienceRepository::update(pool, company_id, user_id, id, &payload)
            .await?
            .ok_or_else(|| AppError::not_found("Experience"))?;

        info!(experience_id = %experience.id, user_id = %user_id, "Experience updated");
        Ok(experience.into())
    }

    pub async fn delete_experience(
        pool: &PgPool,
        company_id: &Uuid,
        user_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<()> {
        if !ExperienceRepository::delete(pool, company_id, user_id, id).await? {
            return Err(AppError::not_found("Experience"));
        }

        info!(experience_id = %id, user_id = %user_id, "Experience deleted");
        Ok(())
    }
}
