//! Intern repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    handlers::interns::request::{CreateInternRequest, UpdateInternRequest},
    models::Intern,
};

/// Repository for intern database operations
pub struct InternRepository;

impl InternRepository {
    /// Create a new intern
    pub async fn create(
        pool: &PgPool,
        company_id: &Uuid,
        input: &CreateInternRequest,
    ) -> AppResult<Intern> {
        let intern = sqlx::query_as::<_, Intern>(
            r#"
            INSERT INTO interns (
                company_id, first_name, last_name, email, phone, school, speciality,
                start_date, end_date, supervisor_id, project_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(company_id)
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.school)
        .bind(&input.speciality)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(input.supervisor_id)
        .bind(input.project_id)
        .fetch_one(pool)
        .await?;

        Ok(intern)
    }

    /// Find an intern of a company by ID
    pub async fn find_by_id(pool: &PgPool, company_id: &Uuid, id: &Uuid) -> AppResult<Option<Intern>> {
        let intern = sqlx::query_as::<_, Intern>(
            r#"SELECT * FROM interns WHERE id = $1 AND company_id = $2"#,
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(pool)
        .await?;

        Ok(intern)
    }

    /// List interns with pagination
    pub async fn list(
        pool: &PgPool,
        company_id: &Uuid,
        search: Option<&str>,
        status: Option<&str>,
        project_id: Option<&Uuid>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Intern>, i64)> {
        let search_pattern = search.map(|s| format!("%{}%", s));

        let interns = sqlx::query_as::<_, Intern>(
            r#"
            SELECT * FROM interns
            WHERE company_id = $1
                AND ($2::text IS NULL OR first_name ILIKE $2 OR last_name ILIKE $2
                     OR email ILIKE $2 OR school ILIKE $2)
                AND ($3::text IS NULL OR status = $3)
                AND ($4::uuid IS NULL OR project_id = $4)
            ORDER BY start_date DESC, created_at DESC
            OFFSET $5 LIMIT $6
            "#,
        )
        .bind(company_id)
        .bind(&search_pattern)
        .bind(status)
        .bind(project_id)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM interns
            WHERE company_id = $1
                AND ($2::text IS NULL OR first_name ILIKE $2 OR last_name ILIKE $2
                     OR email ILIKE $2 OR school ILIKE $2)
                AND ($3::text IS NULL OR status = $3)
                AND ($4::uuid IS NULL OR project_id = $4)
            "#,
        )
        .bind(company_id)
        .bind(&search_pattern)
        .bind(status)
        .bind(project_id)
        .fetch_one(pool)
        .await?;

        Ok((interns, count))
    }

    /// Interns working on a project
    pub async fn list_by_project(
        pool: &PgPool,
        company_id: &Uuid,
        project_id: &Uuid,
    ) -> AppResult<Vec<Intern>> {
        let interns = sqlx::query_as::<_, Intern>(
            r#"
            SELECT * FROM interns
            WHERE company_id = $1 AND project_id = $2
            ORDER BY last_name, first_name
            "#,
        )
        .bind(company_id)
        .bind(project_id)
        .fetch_all(pool)
        .await?;

        Ok(interns)
    }

    /// Update intern
    pub async fn update(
        pool: &PgPool,
        company_id: &Uuid,
        id: &Uuid,
        input: &UpdateInternRequest,
    ) -> AppResult<Option<Intern>> {
        let intern = sqlx::query_as::<_, Intern>(
            r#"
            UPDATE interns
            SET
                first_name = COALESCE($3, first_name),
                last_name = COALESCE($4, last_name),
                email = COALESCE($5, email),
                phone = COALESCE($6, phone),
                school = COALESCE($7, school),
                speciality = COALESCE($8, speciality),
                start_date = COALESCE($9, start_date),
                end_date = COALESCE($10, end_date),
                supervisor_id = COALESCE($11, supervisor_id),
                status = COALESCE($12, status),
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
        .bind(&input.school)
        .bind(&input.speciality)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(input.supervisor_id)
        .bind(&input.status)
        .fetch_optional(pool)
        .await?;

        Ok(intern)
    }

    /// Set or clear the intern's project
    pub async fn set_project(
        pool: &PgPool,
        company_id: &Uuid,
        id: &Uuid,
        project_id: Option<&Uuid>,
    ) -> AppResult<Option<Intern>> {
        let intern = sqlx::query_as::<_, Intern>(
            r#"
            UPDATE interns
            SET project_id = $3, updated_at = NOW()
            WHERE id = $1 AND company_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(company_id)
        .bind(project_id)
        .fetch_optional(pool)
        .await?;

        Ok(intern)
    }

    /// Delete intern
    pub async fn delete(pool: &PgPool, company_id: &Uuid, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM interns WHERE id = $1 AND company_id = $2"#)
            .bind(id)
            .bind(company_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
