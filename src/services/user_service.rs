//! User service

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    constants::features,
    db::repositories::{NewUser, PermissionRepository, RoleRepository, UserChanges, UserRepository},
    error::{AppError, AppResult},
    handlers::{
        roles::response::RoleResponse,
        users::{
            request::{
                AssignRoleRequest, ChangePasswordRequest, CreateUserRequest, ListUsersQuery,
                UpdateUserRequest,
            },
            response::UserResponse,
        },
    },
    middleware::AuthenticatedUser,
    models::{Action, FeaturePermission, User, complete_feature_permissions},
    services::PermissionService,
    utils::{Page, PageQuery, check_phone, hash_password, verify_password},
};

/// User service for business logic
pub struct UserService;

impl UserService {
    /// List employees of a company
    pub async fn list_users(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        query: ListUsersQuery,
    ) -> AppResult<Page<UserResponse>> {
        PermissionService::require(pool, session, features::USERS, Action::Read).await?;

        let page = PageQuery::new(query.page, query.page_size);
        let (users, total) = UserRepository::list(
            pool,
            company_id,
            query.search.as_deref(),
            query.is_active,
            page.offset(),
            page.limit(),
        )
        .await?;

        Ok(Page::new(users, &page, total).map(Into::into))
    }

    /// Create an employee, optionally with roles
    pub async fn create_user(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        payload: CreateUserRequest,
    ) -> AppResult<UserResponse> {
        PermissionService::require(pool, session, features::USERS, Action::Create).await?;
        check_phone(payload.phone.as_deref())?;

        let mut role_ids = payload.role_ids.clone();
        role_ids.sort();
        role_ids.dedup();
        if !role_ids.is_empty() {
            let found = RoleRepository::count_in_company(pool, company_id, &role_ids).await?;
            if found != role_ids.len() as i64 {
                return Err(AppError::InvalidInput(
                    "Every role must belong to the company".to_string(),
                ));
            }
        }

        let password_hash = hash_password(&payload.password)?;

        let mut tx = pool.begin().await?;
        let user = UserRepository::create(
            &mut *tx,
            &NewUser {
                company_id: *company_id,
                first_name: &payload.first_name,
                last_name: &payload.last_name,
                email: &payload.email,
                password_hash: &password_hash,
                phone: payload.phone.as_deref(),
                job_title: payload.job_title.as_deref(),
            },
        )
        .await?;
        for role_id in &role_ids {
            RoleRepository::assign(&mut *tx, &user.id, role_id).await?;
        }
        tx.commit().await?;

        info!(user_id = %user.id, company_id = %company_id, roles = role_ids.len(), "User created");
        Ok(user.into())
    }

    /// Get an employee
    pub async fn get_user(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<UserResponse> {
        PermissionService::require_self_or(pool, session, user_id, features::USERS, Action::Read)
            .await?;

        Ok(Self::find_user(pool, company_id, user_id).await?.into())
    }

    /// Update a profile; activation needs `users.update` even on one's own account
    pub async fn update_user(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        user_id: &Uuid,
        payload: UpdateUserRequest,
    ) -> AppResult<UserResponse> {
        PermissionService::require_self_or(pool, session, user_id, features::USERS, Action::Update)
            .await?;
        if payload.is_active.is_some() {
            PermissionService::require(pool, session, features::USERS, Action::Update).await?;
        }
        check_phone(payload.phone.as_deref())?;

        let changes = UserChanges {
            first_name: payload.first_name.as_deref(),
            last_name: payload.last_name.as_deref(),
            email: payload.email.as_deref(),
            phone: payload.phone.as_deref(),
            job_title: payload.job_title.as_deref(),
            is_active: payload.is_active,
        };

        let user = UserRepository::update(pool, company_id, user_id, &changes)
            .await?
            .ok_or_else(|| AppError::not_found("User"))?;

        info!(user_id = %user.id, updated_by = %session.id, "User updated");
        Ok(user.into())
    }

    /// Delete an employee
    pub async fn delete_user(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<()> {
        PermissionService::require(pool, session, features::USERS, Action::Delete).await?;

        if session.id == *user_id {
            return Err(AppError::InvalidInput(
                "You cannot delete your own account".to_string(),
            ));
        }

        if !UserRepository::delete(pool, company_id, user_id).await? {
            return Err(AppError::not_found("User"));
        }

        info!(user_id = %user_id, deleted_by = %session.id, "User deleted");
        Ok(())
    }

    /// Change one's own password
    pub async fn change_password(
        pool: &PgPool,
        company_id: &Uuid,
        user_id: &Uuid,
        payload: ChangePasswordRequest,
    ) -> AppResult<()> {
        let user = Self::find_user(pool, company_id, user_id).await?;

        if !verify_password(&payload.current_password, &user.password_hash)? {
            return Err(AppError::InvalidCredentials);
        }

        let password_hash = hash_password(&payload.new_password)?;
        UserRepository::update_password(pool, user_id, &password_hash).await?;

        info!(user_id = %user_id, "Password changed");
        Ok(())
    }

    /// Roles held by an employee
    pub async fn list_user_roles(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<Vec<RoleResponse>> {
        PermissionService::require_self_or(pool, session, user_id, features::ROLES, Action::Read)
            .await?;
        Self::find_user(pool, company_id, user_id).await?;

        let roles = RoleRepository::list_for_user(pool, user_id).await?;
        Ok(roles.into_iter().map(Into::into).collect())
    }

    /// Give an employee a role of the same company; assigning twice is a no-op
    pub async fn assign_role(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        user_id: &Uuid,
        payload: AssignRoleRequest,
    ) -> AppResult<Vec<RoleResponse>> {
        PermissionService::require(pool, session, features::ROLES, Action::Update).await?;
        Self::find_user(pool, company_id, user_id).await?;

        RoleRepository::find_by_id(pool, company_id, &payload.role_id)
            .await?
            .ok_or_else(|| AppError::not_found("Role"))?;

        RoleRepository::assign(pool, user_id, &payload.role_id).await?;
        info!(user_id = %user_id, role_id = %payload.role_id, assigned_by = %session.id, "Role assigned");

        let roles = RoleRepository::list_for_user(pool, user_id).await?;
        Ok(roles.into_iter().map(Into::into).collect())
    }

    /// Take a role away from an employee
    pub async fn unassign_role(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        user_id: &Uuid,
        role_id: &Uuid,
    ) -> AppResult<()> {
        PermissionService::require(pool, session, features::ROLES, Action::Update).await?;
        Self::find_user(pool, company_id, user_id).await?;

        RoleRepository::find_by_id(pool, company_id, role_id)
            .await?
            .ok_or_else(|| AppError::not_found("Role"))?;

        if !RoleRepository::unassign(pool, user_id, role_id).await? {
            return Err(AppError::NotFound(
                "The user does not hold this role".to_string(),
            ));
        }

        info!(user_id = %user_id, role_id = %role_id, removed_by = %session.id, "Role unassigned");
        Ok(())
    }

    /// Effective permission of an employee on every feature
    pub async fn user_permissions(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<Vec<FeaturePermission>> {
        PermissionService::require_self_or(pool, session, user_id, features::ROLES, Action::Read)
            .await?;
        Self::find_user(pool, company_id, user_id).await?;

        let rows = PermissionRepository::effective_for_user(pool, user_id).await?;
        Ok(complete_feature_permissions(rows))
    }

    /// Load a user of a company or fail with 404
    pub async fn find_user(pool: &PgPool, company_id: &Uuid, user_id: &Uuid) -> AppResult<User> {
        UserRepository::find_by_id(pool, company_id, user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User"))
    }
}
