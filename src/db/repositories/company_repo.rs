//! Company repository

use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::{
    constants::{request_statuses, test_statuses},
    error::AppResult,
    models::{Company, CompanyStats},
};

/// Repository for company database operations
pub struct CompanyRepository;

impl CompanyRepository {
    /// Create a new company
    pub async fn create<'e, E>(
        executor: E,
        name: &str,
        email: &str,
        phone: Option<&str>,
        address: Option<&str>,
        is_root: bool,
    ) -> AppResult<Company>
    where
        E: PgExecutor<'e>,
    {
        let company = sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO companies (name, email, phone, address, is_root)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(address)
        .bind(is_root)
        .fetch_one(executor)
        .await?;

        Ok(company)
    }

    /// Find company by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Company>> {
        let company = sqlx::query_as::<_, Company>(r#"SELECT * FROM companies WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(company)
    }

    /// Find the seeded root company
    pub async fn find_root(pool: &PgPool) -> AppResult<Option<Company>> {
        let company = sqlx::query_as::<_, Company>(r#"SELECT * FROM companies WHERE is_root"#)
            .fetch_optional(pool)
            .await?;

        Ok(company)
    }

    /// List companies with pagination
    pub async fn list(
        pool: &PgPool,
        search: Option<&str>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Company>, i64)> {
        let search_pattern = search.map(|s| format!("%{}%", s));

        let companies = sqlx::query_as::<_, Company>(
            r#"
            SELECT * FROM companies
            WHERE ($1::text IS NULL OR name ILIKE $1 OR email ILIKE $1)
            ORDER BY created_at DESC
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(&search_pattern)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM companies
            WHERE ($1::text IS NULL OR name ILIKE $1 OR email ILIKE $1)
            "#,
        )
        .bind(&search_pattern)
        .fetch_one(pool)
        .await?;

        Ok((companies, count))
    }

    /// Update company
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        name: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
        address: Option<&str>,
    ) -> AppResult<Option<Company>> {
        let company = sqlx::query_as::<_, Company>(
            r#"
            UPDATE companies
            SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                address = COALESCE($5, address),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .bind(phone)
        .bind(address)
        .fetch_optional(pool)
        .await?;

        Ok(company)
    }

    /// Delete company (cascades to every company-owned row)
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM companies WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Dashboard totals for one company
    pub async fn stats(pool: &PgPool, id: &Uuid) -> AppResult<CompanyStats> {
        let stats = sqlx::query_as::<_, CompanyStats>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM users WHERE company_id = $1) AS users,
                (SELECT COUNT(*) FROM condidats WHERE company_id = $1) AS condidats,
                (SELECT COUNT(*) FROM interns WHERE company_id = $1) AS interns,
                (SELECT COUNT(*) FROM projects WHERE company_id = $1) AS projects,
                (SELECT COUNT(*) FROM questions WHERE company_id = $1) AS questions,
                (SELECT COUNT(*) FROM tests WHERE company_id = $1 AND status = $2) AS pending_tests,
                (SELECT COUNT(*) FROM tests WHERE company_id = $1 AND status = $3) AS completed_tests,
                (SELECT COUNT(*) FROM mission_orders WHERE company_id = $1 AND status = $4) AS pending_mission_orders,
                (SELECT COUNT(*) FROM training_requests WHERE company_id = $1 AND status = $4) AS pending_training_requests,
                (SELECT AVG(score) FROM tests WHERE company_id = $1 AND status = $3) AS average_test_score
            "#,
        )
        .bind(id)
        .bind(test_statuses::PENDING)
        .bind(test_statuses::COMPLETED)
        .bind(request_statuses::PENDING)
        .fetch_one(pool)
        .await?;

        Ok(stats)
    }
}
