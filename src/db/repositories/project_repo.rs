//! Project repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    handlers::projects::request::{CreateProjectRequest, UpdateProjectRequest},
    models::Project,
};

/// Repository for project database operations
pub struct ProjectRepository;

impl ProjectRepository {
    /// Create a new project
    pub async fn create(
        pool: &PgPool,
        company_id: &Uuid,
        input: &CreateProjectRequest,
        technologies: &[String],
        status: &str,
    ) -> AppResult<Project> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (
                company_id, title, description, technologies, start_date, end_date, status, progress
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(company_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(technologies)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(status)
        .bind(input.progress.unwrap_or(0))
        .fetch_one(pool)
        .await?;

        Ok(project)
    }

    /// Find a project of a company by ID
    pub async fn find_by_id(pool: &PgPool, company_id: &Uuid, id: &Uuid) -> AppResult<Option<Project>> {
        let project = sqlx::query_as::<_, Project>(
            r#"SELECT * FROM projects WHERE id = $1 AND company_id = $2"#,
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(pool)
        .await?;

        Ok(project)
    }

    /// List projects with pagination
    pub async fn list(
        pool: &PgPool,
        company_id: &Uuid,
        search: Option<&str>,
        status: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Project>, i64)> {
        let search_pattern = search.map(|s| format!("%{}%", s));

        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT * FROM projects
            WHERE company_id = $1
                AND ($2::text IS NULL OR title ILIKE $2 OR description ILIKE $2)
                AND ($3::text IS NULL OR status = $3)
            ORDER BY start_date DESC, created_at DESC
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
            SELECT COUNT(*) FROM projects
            WHERE company_id = $1
                AND ($2::text IS NULL OR title ILIKE $2 OR description ILIKE $2)
                AND ($3::text IS NULL OR status = $3)
            "#,
        )
        .bind(company_id)
        .bind(&search_pattern)
        .bind(status)
        .fetch_one(pool)
        .await?;

        Ok((projects, count))
    }

    /// Update project
    pub async fn update(
        pool: &PgPool,
        company_id: &Uuid,
        id: &Uuid,
        input: &UpdateProjectRequest,
        technologies: Option<&[String]>,
    ) -> AppResult<Option<Project>> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects
            SET
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                technologies = COALESCE($5, technologies),
                start_date = COALESCE($6, start_date),
                end_date = COALESCE($7, end_date),
                status = COALESCE($8, status),
                progress = COALESCE($9, progress),
                updated_at = NOW()
            WHERE id = $1 AND company_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(company_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(technologies)
        .bind(input.start_date)
        .bind(input.end_date)
        .bind(&input.status)
        .bind(input.progress)
        .fetch_optional(pool)
        .await?;

        Ok(project)
    }

    /// Whether a project belongs to a company
    pub async fn exists_in_company(pool: &PgPool, company_id: &Uuid, id: &Uuid) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"SELECT EXISTS(SELECT 1 FROM projects WHERE id = $1 AND company_id = $2)"#,
        )
        .bind(id)
        .bind(company_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Delete project (interns keep existing, unassigned)
    pub async fn delete(pool: &PgPool, company_id: &Uuid, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM projects WHERE id = $1 AND company_id = $2"#)
            .bind(id)
            .bind(company_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
