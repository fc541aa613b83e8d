//! User experience repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    handlers::experiences::request::{CreateExperienceRequest, UpdateExperienceRequest},
    models::Experience,
};

/// Repository for experience database operations
pub struct ExperienceRepository;

impl ExperienceRepository {
    pub async fn create(
        pool: &PgPool,
        company_id: &Uuid,
        user_id: &Uuid,
        input: &CreateExperienceRequest,
    ) -> AppResult<Experience> {
        let experience = sqlx::query_as::<_, Experience>(
            r#"
            INSERT INTO experiences (company_id, user_id, title, employer, description, start_date, end_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(company_id)
        .bind(user_id)
        .bind(&input.title)
        .bind(&input.employer)
        .bind(&input.description)
        .bind(input.start_date)
        .bind(input.end_date)
        .fetch_one(pool)
        .await?;

        Ok(experience)
    }

    /// Find one of a user's experiences
    pub async fn find_by_id(
        pool: &PgPool,
        company_id: &Uuid,
        user_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<Option<Experience>> {
        let experience = sqlx::query_as::<_, Experience>(
            r#"SELECT * FROM experiences WHERE id = $1 AND company_id = $2 AND user_id = $3"#,
        )
        .bind(id)
        .bind(company_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(experience)
    }

    /// A user's experiences, most recent first
    pub async fn list_for_user(
        pool: &PgPool,
        company_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<Vec<Experience>> {
        let experiences = sqlx::query_as::<_, Experience>(
            r#"
            SELECT * FROM experiences
            WHERE company_id = $1 AND user_id = $2
            ORDER BY start_date DESC
            "#,
        )
        .bind(company_id)
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(experiences)
    }

    pub async fn update(
        pool: &PgPool,
        company_id: &Uuid,
        user_id: &Uuid,
        id: &Uuid,
        input: &UpdateExperienceRequest,
    ) -> AppResult<Option<Experience>> {
        let experience = sqlx::query_as::<_, Experience>(
            r#"
            UPDATE experiences
            SET
                title = COALESCE($4, title),
                employer = COALESCE($5, employer),
                description = COALESCE($6, description),
                start_date = COALESCE($7, start_date),
                end_date = COALESCE($8, end_date),
                updated_at = NOW()
            WHERE id = $1 AND company_id = $2 AND user_id = $3
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(company_id)
        .bind(user_id)
        .bind(&input.title)
        .bind(&input.employer)
        .bind(&input.description)
        .bind(input.start_date)
        .bind(input.end_date)
        .fetch_optional(pool)
        .await?;

        Ok(experience)
    }

    pub async fn delete(
        pool: &PgPool,
        company_id: &Uuid,
        user_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            r#"DELETE FROM experiences WHERE id = $1 AND company_id = $2 AND user_id = $3"#,
        )
        .bind(id)
        .bind(company_id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
