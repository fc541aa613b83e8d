//! Condidat service

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    constants::{condidat_statuses, features},
    db::repositories::{CondidatRepository, TestRepository},
    error::{AppError, AppResult},
    handlers::{
        condidats::{
            request::{
                CreateCondidatRequest, ListCondidatsQuery, UpdateCondidatRequest,
                UpdateCondidatStatusRequest,
            },
            response::CondidatResponse,
        },
        tests::response::TestResponse,
    },
    middleware::AuthenticatedUser,
    models::{Action, Condidat},
    services::PermissionService,
    utils::{Page, PageQuery, check_phone, validate_status},
};

/// Condidat service for business logic
pub struct CondidatService;

impl CondidatService {
    /// List condidats of a company
    pub async fn list_condidats(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        query: ListCondidatsQuery,
    ) -> AppResult<Page<CondidatResponse>> {
        PermissionService::require(pool, session, features::CONDIDATS, Action::Read).await?;

        if let Some(status) = query.status.as_deref() {
            validate_status(status, condidat_statuses::ALL)?;
        }

        let page = PageQuery::new(query.page, query.page_size);
        let (condidats, total) = CondidatRepository::list(
            pool,
            company_id,
            query.search.as_deref(),
            query.status.as_deref(),
            page.offset(),
            page.limit(),
        )
        .await?;

        Ok(Page::new(condidats, &page, total).map(Into::into))
    }

    /// Register a condidat; new condidats start in `new`
    pub async fn create_condidat(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        payload: CreateCondidatRequest,
    ) -> AppResult<CondidatResponse> {
        PermissionService::require(pool, session, features::CONDIDATS, Action::Create).await?;
        check_phone(payload.phone.as_deref())?;

        let condidat = CondidatRepository::create(pool, company_id, &payload).await?;

        info!(condidat_id = %condidat.id, company_id = %company_id, "Condidat created");
        Ok(condidat.into())
    }

    /// Get a condidat
    pub async fn get_condidat(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<CondidatResponse> {
        PermissionService::require(pool, session, features::CONDIDATS, Action::Read).await?;
        Ok(Self::find_condidat(pool, company_id, id).await?.into())
    }

    /// Update a condidat's profile
    pub async fn update_condidat(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
        payload: UpdateCondidatRequest,
    ) -> AppResult<CondidatResponse> {
        PermissionService::require(pool, session, features::CONDIDATS, Action::Update).await?;
        check_phone(payload.phone.as_deref())?;

        let condidat = CondidatRepository::update(pool, company_id, id, &payload)
            .await?
            .ok_or_else(|| AppError::not_found("Condidat"))?;

        info!(condidat_id = %condidat.id, updated_by = %session.id, "Condidat updated");
        Ok(condidat.into())
    }

    /// Move a condidat through the pipeline
    pub async fn update_status(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
        payload: UpdateCondidatStatusRequest,
    ) -> AppResult<CondidatResponse> {
        PermissionService::require(pool, session, features::CONDIDATS, Action::Update).await?;
        validate_status(&payload.status, condidat_statuses::ALL)?;

        let condidat = CondidatRepository::update_status(pool, company_id, id, &payload.status)
            .await?
            .ok_or_else(|| AppError::not_found("Condidat"))?;

        info!(condidat_id = %condidat.id, status = %condidat.status, updated_by = %session.id, "Condidat status changed");
        Ok(condidat.into())
    }

    /// Delete a condidat and their tests
    pub async fn delete_condidat(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<()> {
        PermissionService::require(pool, session, features::CONDIDATS, Action::Delete).await?;

        if !CondidatRepository::delete(pool, company_id, id).await? {
            return Err(AppError::not_found("Condidat"));
        }

        info!(condidat_id = %id, deleted_by = %session.id, "Condidat deleted");
        Ok(())
    }

    /// Tests taken by a condidat
    pub async fn list_condidat_tests(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<Vec<TestResponse>> {
        PermissionService::require(pool, session, features::TESTS, Action::Read).await?;
        Self::find_condidat(pool, company_id, id).await?;

        let tests = TestRepository::list_for_condidat(pool, company_id, id).await?;
        Ok(tests.into_iter().map(Into::into).collect())
    }

    pub async fn find_condidat(pool: &PgPool, company_id: &Uuid, id: &Uuid) -> AppResult<Condidat> {
        CondidatRepository::find_by_id(pool, company_id, id)
            .await?
            .ok_or_else(|| AppError::not_found("Condidat"))
    }
}
