//! Intern service

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    constants::{features, intern_statuses},
    db::repositories::{InternRepository, ProjectRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::interns::{
        request::{AssignProjectRequest, CreateInternRequest, ListInternsQuery, UpdateInternRequest},
        response::InternResponse,
    },
    middleware::AuthenticatedUser,
    models::Action,
    services::PermissionService,
    utils::{Page, PageQuery, check_phone, validate_date_range, validate_status},
};

/// Intern service for business logic
pub struct InternService;

impl InternService {
    /// List interns of a company
    pub async fn list_interns(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        query: ListInternsQuery,
    ) -> AppResult<Page<InternResponse>> {
        PermissionService::require(pool, session, features::INTERNS, Action::Read).await?;

        if let Some(status) = query.status.as_deref() {
            validate_status(status, intern_statuses::ALL)?;
        }

        let page = PageQuery::new(query.page, query.page_size);
        let (interns, total) = InternRepository::list(
            pool,
            company_id,
            query.search.as_deref(),
            query.status.as_deref(),
            query.project_id.as_ref(),
            page.offset(),
            page.limit(),
        )
        .await?;

        Ok(Page::new(interns, &page, total).map(Into::into))
    }

    /// Register an intern
    pub async fn create_intern(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        payload: CreateInternRequest,
    ) -> AppResult<InternResponse> {
        PermissionService::require(pool, session, features::INTERNS, Action::Create).await?;
        check_phone(payload.phone.as_deref())?;
        validate_date_range(payload.start_date, payload.end_date)?;
        Self::check_references(pool, company_id, payload.supervisor_id, payload.project_id)
            .await?;

        let intern = InternRepository::create(pool, company_id, &payload).await?;

        info!(intern_id = %intern.id, company_id = %company_id, "Intern created");
        Ok(intern.into())
    }

    /// Get an intern
    pub async fn get_intern(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<InternResponse> {
        PermissionService::require(pool, session, features::INTERNS, Action::Read).await?;

        let intern = InternRepository::find_by_id(pool, company_id, id)
            .await?
            .ok_or_else(|| AppError::not_found("Intern"))?;

        Ok(intern.into())
    }

    /// Update an intern
    pub async fn update_intern(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
        payload: UpdateInternRequest,
    ) -> AppResult<InternResponse> {
        PermissionService::require(pool, session, features::INTERNS, Action::Update).await?;
        check_phone(payload.phone.as_deref())?;

        if let Some(status) = payload.status.as_deref() {
            validate_status(status, intern_statuses::ALL)?;
        }

        let current = InternRepository::find_by_id(pool, company_id, id)
            .await?
            .ok_or_else(|| AppError::not_found("Intern"))?;

        validate_date_range(
            payload.start_date.unwrap_or(current.start_date),
            payload.end_date.or(current.end_date),
        )?;
        Self::check_references(pool, company_id, payload.supervisor_id, None).await?;

        let intern = InternRepository::update(pool, company_id, id, &payload)
            .await?
            .ok_or_else(|| AppError::not_found("Intern"))?;

        info!(intern_id = %intern.id, updated_by = %session.id, "Intern updated");
        Ok(intern.into())
    }

    /// Put an intern on a project, or take them off with `null`
    pub async fn assign_project(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
        payload: AssignProjectRequest,
    ) -> AppResult<InternResponse> {
        PermissionService::require(pool, session, features::INTERNS, Action::Update).await?;
        Self::check_references(pool, company_id, None, payload.project_id).await?;

        let intern =
            InternRepository::set_project(pool, company_id, id, payload.project_id.as_ref())
                .await?
                .ok_or_else(|| AppError::not_found("Intern"))?;

        info!(
            intern_id = %intern.id,
            project_id = ?intern.project_id,
            updated_by = %session.id,
            "Intern project assignment changed"
        );
        Ok(intern.into())
    }

    /// Delete an intern
    pub async fn delete_intern(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<()> {
        PermissionService::require(pool, session, features::INTERNS, Action::Delete).await?;

        if !InternRepository::delete(pool, company_id, id).await? {
            return Err(AppError::not_found("Intern"));
        }

        info!(intern_id = %id, deleted_by = %session.id, "Intern deleted");
        Ok(())
    }

    /// Supervisor and project must be rows of the same company
    async fn check_references(
        pool: &PgPool,
        company_id: &Uuid,
        supervisor_id: Option<Uuid>,
        project_id: Option<Uuid>,
    ) -> AppResult<()> {
        if let Some(supervisor_id) = supervisor_id {
            if !UserRepository::exists_in_company(pool, company_id, &supervisor_id).await? {
                return Err(AppError::InvalidInput(
                    "Supervisor must be an employee of the company".to_string(),
                ));
            }
        }

        if let Some(project_id) = project_id {
            if !ProjectRepository::exists_in_company(pool, company_id, &project_id).await? {
                return Err(AppError::InvalidInput(
                    "Project must belong to the company".to_string(),
                ));
            }
        }

        Ok(())
    }
}
