//! Role and permission service

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    constants::features,
    db::repositories::{PermissionRepository, RoleRepository},
    error::{AppError, AppResult},
    handlers::roles::{
        request::{CreateRoleRequest, ListRolesQuery, UpdatePermissionsRequest, UpdateRoleRequest},
        response::{PermissionResponse, RoleDetailResponse, RoleResponse},
    },
    middleware::AuthenticatedUser,
    models::{Action, PermissionSet, Role, is_known_feature},
    services::PermissionService,
    utils::{Page, PageQuery},
};

/// Role service for business logic
pub struct RoleService;

impl RoleService {
    /// List roles of a company
    pub async fn list_roles(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        query: ListRolesQuery,
    ) -> AppResult<Page<RoleResponse>> {
        PermissionService::require(pool, session, features::ROLES, Action::Read).await?;

        let page = PageQuery::new(query.page, query.page_size);
        let (roles, total) =
            RoleRepository::list(pool, company_id, page.offset(), page.limit()).await?;

        Ok(Page::new(roles, &page, total).map(Into::into))
    }

    /// Create a role with every permission bit cleared
    pub async fn create_role(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        payload: CreateRoleRequest,
    ) -> AppResult<RoleDetailResponse> {
        PermissionService::require(pool, session, features::ROLES, Action::Create).await?;

        let mut tx = pool.begin().await?;
        let role = RoleRepository::create(
            &mut *tx,
            company_id,
            payload.name.trim(),
            payload.description.as_deref(),
        )
        .await?;
        PermissionRepository::create_for_all_features(&mut *tx, &role.id, PermissionSet::NONE)
            .await?;
        tx.commit().await?;

        info!(role_id = %role.id, company_id = %company_id, name = %role.name, "Role created");
        Self::to_detail(pool, role).await
    }

    /// Get a role with its permissions
    pub async fn get_role(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<RoleDetailResponse> {
        PermissionService::require(pool, session, features::ROLES, Action::Read).await?;

        let role = Self::find_role(pool, company_id, id).await?;
        Self::to_detail(pool, role).await
    }

    /// Rename or describe a role
    pub async fn update_role(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
        payload: UpdateRoleRequest,
    ) -> AppResult<RoleResponse> {
        PermissionService::require(pool, session, features::ROLES, Action::Update).await?;

        let role = RoleRepository::update(
            pool,
            company_id,
            id,
            payload.name.as_deref().map(str::trim),
            payload.description.as_deref(),
        )
        .await?
        .ok_or_else(|| AppError::not_found("Role"))?;

        info!(role_id = %role.id, updated_by = %session.id, "Role updated");
        Ok(role.into())
    }

    /// Delete a role; its permissions and assignments go with it
    pub async fn delete_role(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<()> {
        PermissionService::require(pool, session, features::ROLES, Action::Delete).await?;

        if !RoleRepository::delete(pool, company_id, id).await? {
            return Err(AppError::not_found("Role"));
        }

        info!(role_id = %id, deleted_by = %session.id, "Role deleted");
        Ok(())
    }

    /// Permission table of a role
    pub async fn get_permissions(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<Vec<PermissionResponse>> {
        PermissionService::require(pool, session, features::ROLES, Action::Read).await?;

        let role = Self::find_role(pool, company_id, id).await?;
        let permissions = PermissionRepository::list_for_role(pool, &role.id).await?;
        Ok(permissions.into_iter().map(Into::into).collect())
    }

    /// Upsert the bits of the listed features, leaving the others untouched
    pub async fn update_permissions(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
        payload: UpdatePermissionsRequest,
    ) -> AppResult<Vec<PermissionResponse>> {
        PermissionService::require(pool, session, features::ROLES, Action::Update).await?;

        if let Some(unknown) = payload
            .permissions
            .iter()
            .find(|p| !is_known_feature(&p.feature))
        {
            return Err(AppError::Validation(format!(
                "Unknown feature '{}'. Valid values: {}",
                unknown.feature,
                features::ALL.join(", ")
            )));
        }

        let role = Self::find_role(pool, company_id, id).await?;

        let mut tx = pool.begin().await?;
        for entry in &payload.permissions {
            PermissionRepository::upsert(&mut *tx, &role.id, &entry.feature, entry.bits()).await?;
        }
        tx.commit().await?;

        info!(
            role_id = %role.id,
            features = payload.permissions.len(),
            updated_by = %session.id,
            "Role permissions updated"
        );

        let permissions = PermissionRepository::list_for_role(pool, &role.id).await?;
        Ok(permissions.into_iter().map(Into::into).collect())
    }

    async fn find_role(pool: &PgPool, company_id: &Uuid, id: &Uuid) -> AppResult<Role> {
        RoleRepository::find_by_id(pool, company_id, id)
            .await?
            .ok_or_else(|| AppError::not_found("Role"))
    }

    async fn to_detail(pool: &PgPool, role: Role) -> AppResult<RoleDetailResponse> {
        let permissions = PermissionRepository::list_for_role(pool, &role.id).await?;
        Ok(RoleDetailResponse {
            role: role.into(),
            permissions: permissions.into_iter().map(Into::into).collect(),
        })
    }
}
