//! Role repository

use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::{error::AppResult, models::Role};

/// Repository for role database operations
pub struct RoleRepository;

impl RoleRepository {
    /// Create a new role
    pub async fn create<'e, E>(
        executor: E,
        company_id: &Uuid,
        name: &str,
        description: Option<&str>,
    ) -> AppResult<Role>
    where
        E: PgExecutor<'e>,
    {
        let role = sqlx::query_as::<_, Role>(
            r#"
            INSERT INTO roles (company_id, name, description)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(company_id)
        .bind(name)
        .bind(description)
        .fetch_one(executor)
        .await?;

        Ok(role)
    }

    /// Find a role of a company by ID
    pub async fn find_by_id(pool: &PgPool, company_id: &Uuid, id: &Uuid) -> AppResult<Option<Role>> {
        let role = sqlx::query_as::<_, Role>(
            r#"SELECT * FROM roles WHERE id = $1 AND company_id = $2"#,
        )
        .bind(id)
        .bind(company_id)
        .fetch_optional(pool)
        .await?;

        Ok(role)
    }

    /// List roles of a company with pagination
    pub async fn list(
        pool: &PgPool,
        company_id: &Uuid,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Role>, i64)> {
        let roles = sqlx::query_as::<_, Role>(
            r#"
            SELECT * FROM roles
            WHERE company_id = $1
            ORDER BY name
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(company_id)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM roles WHERE company_id = $1"#)
            .bind(company_id)
            .fetch_one(pool)
            .await?;

        Ok((roles, count))
    }

    /// Update role
    pub async fn update(
        pool: &PgPool,
        company_id: &Uuid,
        id: &Uuid,
        name: Option<&str>,
        description: Option<&str>,
    ) -> AppResult<Option<Role>> {
        let role = sqlx::query_as::<_, Role>(
            r#"
            UPDATE roles
            SET
                name = COALESCE($3, name),
                description = COALESCE($4, description),
                updated_at = NOW()
            WHERE id = $1 AND company_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(company_id)
        .bind(name)
        .bind(description)
        .fetch_optional(pool)
        .await?;

        Ok(role)
    }

    /// Delete role (permissions and assignments cascade)
    pub async fn delete(pool: &PgPool, company_id: &Uuid, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM roles WHERE id = $1 AND company_id = $2"#)
            .bind(id)
            .bind(company_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Assign a role to a user; assigning twice is a no-op
    pub async fn assign<'e, E>(executor: E, user_id: &Uuid, role_id: &Uuid) -> AppResult<()>
    where
        E: PgExecutor<'e>,
    {
        sqlx::query(
            r#"
            INSERT INTO user_roles (user_id, role_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, role_id) DO NOTHING
            "#,
        )
        .bind(user_id)
        .bind(role_id)
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Remove a role from a user
    pub async fn unassign(pool: &PgPool, user_id: &Uuid, role_id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM user_roles WHERE user_id = $1 AND role_id = $2"#)
            .bind(user_id)
            .bind(role_id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Roles assigned to a user
    pub async fn list_for_user(pool: &PgPool, user_id: &Uuid) -> AppResult<Vec<Role>> {
        let roles = sqlx::query_as::<_, Role>(
            r#"
            SELECT r.* FROM roles r
            JOIN user_roles ur ON ur.role_id = r.id
            WHERE ur.user_id = $1
            ORDER BY r.name
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(roles)
    }

    /// Count the roles among `ids` that belong to a company
    pub async fn count_in_company(pool: &PgPool, company_id: &Uuid, ids: &[Uuid]) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM roles WHERE company_id = $1 AND id = ANY($2)"#,
        )
        .bind(company_id)
        .bind(ids)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }
}
