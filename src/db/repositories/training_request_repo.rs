//! Training request repository

use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::{
    constants::request_statuses,
    error::AppResult,
    handlers::training_requests::request::{
        CreateTrainingRequestRequest, UpdateTrainingRequestRequest,
    },
    models::TrainingRequest,
};

/// Repository for training request database operations
pub struct TrainingRequestRepository;

impl TrainingRequestRepository {
    /// File a training request for `user_id`
    pub async fn create(
        pool: &PgPool,
        company_id: &Uuid,
        user_id: &Uuid,
        input: &CreateTrainingRequestRequest,
    ) -> AppResult<TrainingRequest> {
        let request = sqlx::query_as::<_, TrainingRequest>(
            r#"
            INSERT INTO training_requests (company_id, user_id, title, description, organization, start_date, end_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(company_id)
        .bind(user_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.organization)
        .bind(input.start_date)
        .bind(input.end_date)
        .fetch_one(pool)
        .await?;

        Ok(request)
    }

    /// Find a training request of a company by ID
    pub async fn find_by_id(
        pool: &PgPool,
        company_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<Option<TrainingRequest>> {
        let request = sqlx::query_as::<_, TrainingRequest>(
            r#"SELECT * FROM training_requests WHERE id = $1 AND company_id = $2"#,
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(pool)
        .await?;

        Ok(request)
    }

    /// List training requests with pagination
    pub async fn list(
        pool: &PgPool,
        company_id: &Uuid,
        user_id: Option<&Uuid>,
        status: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<TrainingRequest>, i64)> {
        let requests = sqlx::query_as::<_, TrainingRequest>(
            r#"
            SELECT * FROM training_requests
            WHERE company_id = $1
                AND ($2::uuid IS NULL OR user_id = $2)
                AND ($3::text IS NULL OR status = $3)
            ORDER BY created_at DESC
            OFFSET $4 LIMIT $5
            "#,
        )
        .bind(company_id)
        .bind(user_id)
        .bind(status)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM training_requests
            WHERE company_id = $1
                AND ($2::uuid IS NULL OR user_id = $2)
                AND ($3::text IS NULL OR status = $3)
            "#,
        )
        .bind(company_id)
        .bind(user_id)
        .bind(status)
        .fetch_one(pool)
        .await?;

        Ok((requests, count))
    }

    /// Update training request
    pub async fn update(
        pool: &PgPool,
        company_id: &Uuid,
        id: &Uuid,
        input: &UpdateTrainingRequestRequest,
        required_status: Option<&str>,
    ) -> AppResult<Option<TrainingRequest>> {
        let request = sqlx::query_as::<_, TrainingRequest>(
            r#"
            UPDATE training_requests
            SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                organization = COALESCE($5, organization),
                start_date = COALESCE($6, start_date),
                end_date = COALESCE($7, end_date),
                updated_at = NOW()
            WHERE id = $1 AND company_id = $2 AND ($8::text IS NULL OR status = $8)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(company_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.organization)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(required_status)
        .fetch_optional(pool)
        .await?;

        Ok(request)
    }

    /// Record a decision; returns `None` when the request is no longer pending
    pub async fn decide<'e, E>(
        executor: E,
        company_id: &Uuid,
        id: &Uuid,
        status: &str,
        decided_by: &Uuid,
    ) -> AppResult<Option<TrainingRequest>>
    where
        E: PgExecutor<'e>,
    {
        let request = sqlx::query_as::<_, TrainingRequest>(
            r#"
            UPDATE training_requests
            SET status = $3, decided_by = $4, decided_at = NOW(), updated_at = NOW()
            WHERE id = $1 AND company_id = $2 AND status = $5
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(company_id)
        .bind(status)
        .bind(decided_by)
        .bind(request_statuses::PENDING)
        .fetch_optional(executor)
        .await?;

        Ok(request)
    }

    /// Delete training request
    pub async fn delete(
        pool: &PgPool,
        company_id: &Uuid,
        id: &Uuid,
        required_status: Option<&str>,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM training_requests
            WHERE id = $1 AND company_id = $2 AND ($3::text IS NULL OR status = $3)
            "#,
        )
        .bind(id)
        .bind(company_id)
        .bind(required_status)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
