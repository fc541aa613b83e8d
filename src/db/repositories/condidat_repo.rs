//! Condidat repository

use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::{
    error::AppResult,
    handlers::condidats::request::{CreateCondidatRequest, UpdateCondidatRequest},
    models::Condidat,
};

/// Repository for condidat database operations
pub struct CondidatRepository;

impl CondidatRepository {
    /// Create a new condidat
    pub async fn create(
        pool: &PgPool,
        company_id: &Uuid,
        input: &CreateCondidatRequest,
    ) -> AppResult<Condidat> {
        let condidat = sqlx::query_as::<_, Condidat>(
            r#"
            INSERT INTO condidats (
                company_id, first_name, last_name, email, phone,
                education_level, speciality, experience_years, cv_url
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(company_id)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.education_level)
        .bind(&input.speciality)
        .bind(input.experience_years)
        .bind(&input.cv_url)
        .fetch_one(pool)
        .await?;

        Ok(condidat)
    }

    /// Find a condidat of a company by ID
    pub async fn find_by_id(
        pool: &PgPool,
        company_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<Option<Condidat>> {
        let condidat = sqlx::query_as::<_, Condidat>(
            r#"SELECT * FROM condidats WHERE id = $1 AND company_id = $2"#,
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(pool)
        .await?;

        Ok(condidat)
    }

    /// List condidats with pagination
    pub async fn list(
        pool: &PgPool,
        company_id: &Uuid,
        search: Option<&str>,
        status: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Condidat>, i64)> {
        let search_pattern = search.map(|s| format!("%{}%", s));

        let condidats = sqlx::query_as::<_, Condidat>(
            r#"
            SELECT * FROM condidats
            WHERE company_id = $1
                AND ($2::text IS NULL OR first_name ILIKE $2 OR last_name ILIKE $2
                     OR email ILIKE $2 OR speciality ILIKE $2)
                AND ($3::text IS NULL OR status = $3)
            ORDER BY created_at DESC
            OFFSET $4 LIMIT $5
            "#,
        )
        .bind(company_id)
        .bind(&search_pattern)
        .bind(status)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM condidats
            WHERE company_id = $1
                AND ($2::text IS NULL OR first_name ILIKE $2 OR last_name ILIKE $2
                     OR email ILIKE $2 OR speciality ILIKE $2)
                AND ($3::text IS NULL OR status = $3)
            "#,
        )
        .bind(company_id)
        .bind(&search_pattern)
        .bind(status)
        .fetch_one(pool)
        .await?;

        Ok((condidats, count))
    }

    /// Update condidat
    pub async fn update(
        pool: &PgPool,
        company_id: &Uuid,
        id: &Uuid,
        input: &UpdateCondidatRequest,
    ) -> AppResult<Option<Condidat>> {
        let condidat = sqlx::query_as::<_, Condidat>(
            r#"
            UPDATE condidats
            SET
                first_name = COALESCE($3, first_name),
                last_name = COALESCE($4, last_name),
                email = COALESCE($5, email),
                phone = COALESCE($6, phone),
                education_level = COALESCE($7, education_level),
                speciality = COALESCE($8, speciality),
                experience_years = COALESCE($9, experience_years),
                cv_url = COALESCE($10, cv_url),
                updated_at = NOW()
            WHERE id = $1 AND company_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(company_id)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.education_level)
        .bind(&input.speciality)
        .bind(input.experience_years)
        .bind(&input.cv_url)
        .fetch_optional(pool)
        .await?;

        Ok(condidat)
    }

    /// Set the pipeline status
    pub async fn update_status<'e, E>(
        executor: E,
        company_id: &Uuid,
        id: &Uuid,
        status: &str,
    ) -> AppResult<Option<Condidat>>
    where
        E: PgExecutor<'e>,
    {
        let condidat = sqlx::query_as::<_, Condidat>(
            r#"
            UPDATE condidats
            SET status = $3, updated_at = NOW()
            WHERE id = $1 AND company_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(company_id)
        .bind(status)
        .fetch_optional(executor)
        .await?;

        Ok(condidat)
    }

    /// Record the score of the latest completed test
    pub async fn update_score<'e, E>(executor: E, id: &Uuid, score: f64) -> AppResult<()>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query(r#"UPDATE condidats SET score = $2, updated_at = NOW() WHERE id = $1"#)
            .bind(id)
            .bind(score)
            .execute(executor)
            .await?;

        Ok(())
    }

    /// Delete condidat
    pub async fn delete(pool: &PgPool, company_id: &Uuid, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM condidats WHERE id = $1 AND company_id = $2"#)
            .bind(id)
            .bind(company_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
