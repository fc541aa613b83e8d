//! Permission repository

use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::{
    constants::features,
    error::AppResult,
    models::{FeaturePermission, Permission, PermissionSet},
};

/// Repository for permission database operations
pub struct PermissionRepository;

impl PermissionRepository {
    /// Insert one row per feature for a new role, all set to `bits`
    pub async fn create_for_all_features<'e, E>(
        executor: E,
        role_id: &Uuid,
        bits: PermissionSet,
    ) -> AppResult<()>
    where
        E: PgExecutor<'e>,
    {
        let feature_names: Vec<String> = features::ALL.iter().map(|f| f.to_string()).collect();

        sqlx::query(
            r#"
            INSERT INTO permissions (role_id, feature, can_create, can_read, can_update, can_delete)
            SELECT $1, feature, $3, $4, $5, $6 FROM UNNEST($2::text[]) AS feature
            ON CONFLICT (role_id, feature) DO NOTHING
            "#,
        )
        .bind(role_id)
        .bind(&feature_names)
        .bind(bits.can_create)
        .bind(bits.can_read)
        .bind(bits.can_update)
        .bind(bits.can_delete)
        .execute(executor)
        .await?;

        Ok(())
    }

    /// Permission rows of a role
    pub async fn list_for_role(pool: &PgPool, role_id: &Uuid) -> AppResult<Vec<Permission>> {
        let permissions = sqlx::query_as::<_, Permission>(
            r#"SELECT * FROM permissions WHERE role_id = $1 ORDER BY feature"#,
        )
        .bind(role_id)
        .fetch_all(pool)
        .await?;

        Ok(permissions)
    }

    /// Insert or replace the bits of a role on one feature
    pub async fn upsert<'e, E>(
        executor: E,
        role_id: &Uuid,
        feature: &str,
        bits: PermissionSet,
    ) -> AppResult<Permission>
    where
        E: PgExecutor<'e>,
    {
        let permission = sqlx::query_as::<_, Permission>(
            r#"
            INSERT INTO permissions (role_id, feature, can_create, can_read, can_update, can_delete)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (role_id, feature) DO UPDATE
            SET
                can_create = EXCLUDED.can_create,
                can_read = EXCLUDED.can_read,
                can_update = EXCLUDED.can_update,
                can_delete = EXCLUDED.can_delete
            RETURNING *
            "#,
        )
        .bind(role_id)
        .bind(feature)
        .bind(bits.can_create)
        .bind(bits.can_read)
        .bind(bits.can_update)
        .bind(bits.can_delete)
        .fetch_one(executor)
        .await?;

        Ok(permission)
    }

    /// Bits of a user on one feature, OR-ed across the user's roles
    pub async fn effective_for_feature(
        pool: &PgPool,
        user_id: &Uuid,
        feature: &str,
    ) -> AppResult<PermissionSet> {
        let set = sqlx::query_as::<_, PermissionSet>(
            r#"
            SELECT
                COALESCE(BOOL_OR(p.can_create), FALSE) AS can_create,
                COALESCE(BOOL_OR(p.can_read), FALSE) AS can_read,
                COALESCE(BOOL_OR(p.can_update), FALSE) AS can_update,
                COALESCE(BOOL_OR(p.can_delete), FALSE) AS can_delete
            FROM permissions p
            JOIN user_roles ur ON ur.role_id = p.role_id
            WHERE ur.user_id = $1 AND p.feature = $2
            "#,
        )
        .bind(user_id)
        .bind(feature)
        .fetch_one(pool)
        .await?;

        Ok(set)
    }

    /// Bits of a user on every feature they have at least one row for
    pub async fn effective_for_user(pool: &PgPool, user_id: &Uuid) -> AppResult<Vec<FeaturePermission>> {
        let rows = sqlx::query_as::<_, FeaturePermission>(
            r#"
            SELECT
                p.feature,
                BOOL_OR(p.can_create) AS can_create,
                BOOL_OR(p.can_read) AS can_read,
                BOOL_OR(p.can_update) AS can_update,
                BOOL_OR(p.can_delete) AS can_delete
            FROM permissions p
            JOIN user_roles ur ON ur.role_id = p.role_id
            WHERE ur.user_id = $1
            GROUP BY p.feature
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}
