//! User repository

use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::{error::AppResult, models::User};

/// Fields written when creating a user
pub struct NewUser<'a> {
    pub company_id: Uuid,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
    pub phone: Option<&'a str>,
    pub job_title: Option<&'a str>,
}

/// Partial update of a user's profile
#[derive(Default)]
pub struct UserChanges<'a> {
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub job_title: Option<&'a str>,
    pub is_active: Option<bool>,
}

/// Repository for user database operations
pub struct UserRepository;

impl UserRepository {
    /// Create a new user
    pub async fn create<'e, E>(executor: E, user: &NewUser<'_>) -> AppResult<User>
    where
        E: PgExecutor<'e>,
    {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (company_id, first_name, last_name, email, password_hash, phone, job_title)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(user.company_id)
        .bind(user.first_name)
        .bind(user.last_name)
        .bind(user.email)
        .bind(user.password_hash)
        .bind(user.phone)
        .bind(user.job_title)
        .fetch_one(executor)
        .await?;

        Ok(user)
    }

    /// Find a user of a company by ID
    pub async fn find_by_id(pool: &PgPool, company_id: &Uuid, id: &Uuid) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"SELECT * FROM users WHERE id = $1 AND company_id = $2"#,
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Find user by email (emails are unique across companies)
    pub async fn find_by_email(pool: &PgPool, email: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE LOWER(email) = LOWER($1)"#)
            .bind(email)
            .fetch_optional(pool)
            .await?;

        Ok(user)
    }

    /// List users of a company with pagination
    pub async fn list(
        pool: &PgPool,
        company_id: &Uuid,
        search: Option<&str>,
        is_active: Option<bool>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<User>, i64)> {
        let search_pattern = search.map(|s| format!("%{}%", s));

        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT * FROM users
            WHERE company_id = $1
                AND ($2::text IS NULL OR first_name ILIKE $2 OR last_name ILIKE $2 OR email ILIKE $2)
                AND ($3::boolean IS NULL OR is_active = $3)
            ORDER BY created_at DESC
            OFFSET $4 LIMIT $5
            "#,
        )
        .bind(company_id)
        .bind(&search_pattern)
        .bind(is_active)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM users
            WHERE company_id = $1
                AND ($2::text IS NULL OR first_name ILIKE $2 OR last_name ILIKE $2 OR email ILIKE $2)
                AND ($3::boolean IS NULL OR is_active = $3)
            "#,
        )
        .bind(company_id)
        .bind(&search_pattern)
        .bind(is_active)
        .fetch_one(pool)
        .await?;

        Ok((users, count))
    }

    /// IDs of every active user of a company
    pub async fn active_ids(pool: &PgPool, company_id: &Uuid) -> AppResult<Vec<Uuid>> {
        let ids = sqlx::query_scalar(
            r#"SELECT id FROM users WHERE company_id = $1 AND is_active ORDER BY created_at"#,
        )
        .bind(company_id)
        .fetch_all(pool)
        .await?;

        Ok(ids)
    }

    /// Whether a user belongs to a company
    pub async fn exists_in_company(pool: &PgPool, company_id: &Uuid, id: &Uuid) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"SELECT EXISTS(SELECT 1 FROM users WHERE id = $1 AND company_id = $2)"#,
        )
        .bind(id)
        .bind(company_id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Update user profile
    pub async fn update(
        pool: &PgPool,
        company_id: &Uuid,
        id: &Uuid,
        changes: &UserChanges<'_>,
    ) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET
                first_name = COALESCE($3, first_name),
                last_name = COALESCE($4, last_name),
                email = COALESCE($5, email),
                phone = COALESCE($6, phone),
                job_title = COALESCE($7, job_title),
                is_active = COALESCE($8, is_active),
                updated_at = NOW()
            WHERE id = $1 AND company_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(company_id)
        .bind(changes.first_name)
        .bind(changes.last_name)
        .bind(changes.email)
        .bind(changes.phone)
        .bind(changes.job_title)
        .bind(changes.is_active)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Replace the password hash
    pub async fn update_password(pool: &PgPool, id: &Uuid, password_hash: &str) -> AppResult<()> {
        sqlx::query(r#"UPDATE users SET password_hash = $2, updated_at = NOW() WHERE id = $1"#)
            .bind(id)
            .bind(password_hash)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Update last login time
    pub async fn update_last_login(pool: &PgPool, id: &Uuid) -> AppResult<()> {
        sqlx::query(r#"UPDATE users SET last_login_at = NOW() WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Delete a user of a company
    pub async fn delete(pool: &PgPool, company_id: &Uuid, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM users WHERE id = $1 AND company_id = $2"#)
            .bind(id)
            .bind(company_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
