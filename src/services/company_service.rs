//! Company service

use sqlx::{PgConnection, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::{
    constants::{ADMIN_ROLE_NAME, features},
    db::repositories::{
        CompanyRepository, NewUser, PermissionRepository, RoleRepository, UserRepository,
    },
    error::{AppError, AppResult},
    handlers::companies::{
        request::{CreateCompanyRequest, ListCompaniesQuery, UpdateCompanyRequest},
        response::{CompanyResponse, CreatedCompanyResponse},
    },
    middleware::AuthenticatedUser,
    models::{Action, Company, CompanyStats, PermissionSet, Role, User},
    services::PermissionService,
    utils::{Page, PageQuery, check_phone, hash_password},
};

/// Everything written when a company is bootstrapped
pub struct CompanyBootstrap<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub address: Option<&'a str>,
    pub is_root: bool,
    pub role_name: &'a str,
    pub admin_first_name: &'a str,
    pub admin_last_name: &'a str,
    pub admin_email: &'a str,
    /// Argon2 PHC string
    pub admin_password_hash: &'a str,
}

/// Company service for business logic
pub struct CompanyService;

impl CompanyService {
    /// Create a company, a role holding every permission, its first user and
    /// the assignment. Callers own the transaction.
    pub async fn bootstrap(
        conn: &mut PgConnection,
        input: &CompanyBootstrap<'_>,
    ) -> AppResult<(Company, Role, User)> {
        let company = CompanyRepository::create(
            &mut *conn,
            input.name,
            input.email,
            input.phone,
            input.address,
            input.is_root,
        )
        .await?;

        let role = RoleRepository::create(
            &mut *conn,
            &company.id,
            input.role_name,
            Some("Full access to every feature"),
        )
        .await?;
        PermissionRepository::create_for_all_features(&mut *conn, &role.id, PermissionSet::FULL)
            .await?;

        let user = UserRepository::create(
            &mut *conn,
            &NewUser {
                company_id: company.id,
                first_name: input.admin_first_name,
                last_name: input.admin_last_name,
                email: input.admin_email,
                password_hash: input.admin_password_hash,
                phone: None,
                job_title: None,
            },
        )
        .await?;
        RoleRepository::assign(&mut *conn, &user.id, &role.id).await?;

        Ok((company, role, user))
    }

    /// Create a tenant with its administrator (root only)
    pub async fn create_company(
        pool: &PgPool,
        session: &AuthenticatedUser,
        payload: CreateCompanyRequest,
    ) -> AppResult<CreatedCompanyResponse> {
        PermissionService::require_root(session)?;
        check_phone(payload.phone.as_deref())?;

        let password_hash = hash_password(&payload.admin.password)?;

        let mut tx = pool.begin().await?;
        let (company, role, admin) = Self::bootstrap(
            &mut tx,
            &CompanyBootstrap {
                name: &payload.name,
                email: &payload.email,
                phone: payload.phone.as_deref(),
                address: payload.address.as_deref(),
                is_root: false,
                role_name: ADMIN_ROLE_NAME,
                admin_first_name: &payload.admin.first_name,
                admin_last_name: &payload.admin.last_name,
                admin_email: &payload.admin.email,
                admin_password_hash: &password_hash,
            },
        )
        .await?;
        tx.commit().await?;

        info!(company_id = %company.id, admin_id = %admin.id, created_by = %session.id, "Company created");

        Ok(CreatedCompanyResponse {
            company: company.into(),
            admin: admin.into(),
            role: role.into(),
        })
    }

    /// List companies (root only)
    pub async fn list_companies(
        pool: &PgPool,
        session: &AuthenticatedUser,
        query: ListCompaniesQuery,
    ) -> AppResult<Page<CompanyResponse>> {
        PermissionService::require_root(session)?;

        let page = PageQuery::new(query.page, query.page_size);
        let (companies, total) = CompanyRepository::list(
            pool,
            query.search.as_deref(),
            page.offset(),
            page.limit(),
        )
        .await?;

        Ok(Page::new(companies, &page, total).map(Into::into))
    }

    /// Get company by ID
    pub async fn get_company(pool: &PgPool, id: &Uuid) -> AppResult<CompanyResponse> {
        let company = CompanyRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::not_found("Company"))?;

        Ok(company.into())
    }

    /// Update company profile
    pub async fn update_company(
        pool: &PgPool,
        session: &AuthenticatedUser,
        id: &Uuid,
        payload: UpdateCompanyRequest,
    ) -> AppResult<CompanyResponse> {
        PermissionService::require(pool, session, features::USERS, Action::Update).await?;
        check_phone(payload.phone.as_deref())?;

        let company = CompanyRepository::update(
            pool,
            id,
            payload.name.as_deref(),
            payload.email.as_deref(),
            payload.phone.as_deref(),
            payload.address.as_deref(),
        )
        .await?
        .ok_or_else(|| AppError::not_found("Company"))?;

        info!(company_id = %company.id, updated_by = %session.id, "Company updated");
        Ok(company.into())
    }

    /// Delete a tenant and everything it owns (root only)
    pub async fn delete_company(
        pool: &PgPool,
        session: &AuthenticatedUser,
        id: &Uuid,
    ) -> AppResult<()> {
        PermissionService::require_root(session)?;

        let company = CompanyRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::not_found("Company"))?;

        if company.is_root {
            return Err(AppError::Forbidden(
                "The root company cannot be deleted".to_string(),
            ));
        }

        CompanyRepository::delete(pool, id).await?;
        info!(company_id = %id, deleted_by = %session.id, "Company deleted");
        Ok(())
    }

    /// Dashboard totals
    pub async fn get_stats(pool: &PgPool, id: &Uuid) -> AppResult<CompanyStats> {
        CompanyRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::not_found("Company"))?;

        CompanyRepository::stats(pool, id).await
    }
}
