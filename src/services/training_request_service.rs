//! Training request service

use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    constants::{features, request_statuses},
    db::repositories::{
        NewNotification, NotificationRepository, TrainingRequestRepository, UserRepository,
    },
    error::{AppError, AppResult},
    handlers::{
        mission_orders::request::DecisionRequest,
        training_requests::{
            request::{
                CreateTrainingRequestRequest, ListTrainingRequestsQuery,
                UpdateTrainingRequestRequest,
            },
            response::TrainingRequestResponse,
        },
    },
    middleware::AuthenticatedUser,
    models::{Action, EditAccess, TrainingRequest, check_decision},
    services::PermissionService,
    utils::{Page, PageQuery, validate_date_range, validate_status},
};

/// Training request service for business logic
pub struct TrainingRequestService;

impl TrainingRequestService {
    /// An employee asks for a training for themselves
    pub async fn file_own(
        pool: &PgPool,
        company_id: &Uuid,
        user_id: &Uuid,
        payload: CreateTrainingRequestRequest,
    ) -> AppResult<TrainingRequestResponse> {
        check_period(payload.start_date, payload.end_date)?;

        let request = TrainingRequestRepository::create(pool, company_id, user_id, &payload).await?;

        info!(training_request_id = %request.id, user_id = %user_id, "Training request filed");
        Ok(request.into())
    }

    /// File a training request on behalf of any user of the company
    pub async fn issue(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        payload: CreateTrainingRequestRequest,
    ) -> AppResult<TrainingRequestResponse> {
        PermissionService::require(pool, session, features::TRAINING_REQUESTS, Action::Create)
            .await?;
        check_period(payload.start_date, payload.end_date)?;

        let user_id = payload
            .user_id
            .ok_or_else(|| AppError::Validation("user_id is required".to_string()))?;
        if !UserRepository::exists_in_company(pool, company_id, &user_id).await? {
            return Err(AppError::InvalidInput(
                "User must be an employee of the company".to_string(),
            ));
        }

        let request =
            TrainingRequestRepository::create(pool, company_id, &user_id, &payload).await?;

        info!(training_request_id = %request.id, user_id = %user_id, issued_by = %session.id, "Training request issued");
        Ok(request.into())
    }

    /// List training requests of a company
    pub async fn list_training_requests(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        query: ListTrainingRequestsQuery,
    ) -> AppResult<Page<TrainingRequestResponse>> {
        PermissionService::require(pool, session, features::TRAINING_REQUESTS, Action::Read)
            .await?;
        let user_id = query.user_id;
        Self::list(pool, company_id, user_id.as_ref(), query).await
    }

    /// Training requests of one user
    pub async fn list_user_training_requests(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        user_id: &Uuid,
        query: ListTrainingRequestsQuery,
    ) -> AppResult<Page<TrainingRequestResponse>> {
        PermissionService::require_self_or(
            pool,
            session,
            user_id,
            features::TRAINING_REQUESTS,
            Action::Read,
        )
        .await?;
        Self::list(pool, company_id, Some(user_id), query).await
    }

    /// Get a training request
    pub async fn get_training_request(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<TrainingRequestResponse> {
        let request = Self::find(pool, company_id, id).await?;
        PermissionService::require_self_or(
            pool,
            session,
            &request.user_id,
            features::TRAINING_REQUESTS,
            Action::Read,
        )
        .await?;

        Ok(request.into())
    }

    /// Update a training request
    pub async fn update_training_request(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
        payload: UpdateTrainingRequestRequest,
    ) -> AppResult<TrainingRequestResponse> {
        let current = Self::find(pool, company_id, id).await?;
        let access = Self::edit_access(pool, session, &current, Action::Update).await?;
        check_period(
            payload.start_date.or(current.start_date),
            payload.end_date.or(current.end_date),
        )?;

        let request =
            TrainingRequestRepository::update(pool, company_id, id, &payload, access.required_status())
                .await?
                .ok_or_else(|| Self::vanished(access))?;

        info!(training_request_id = %request.id, updated_by = %session.id, "Training request updated");
        Ok(request.into())
    }

    /// Delete a training request
    pub async fn delete_training_request(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<()> {
        let current = Self::find(pool, company_id, id).await?;
        let access = Self::edit_access(pool, session, &current, Action::Delete).await?;

        let deleted =
            TrainingRequestRepository::delete(pool, company_id, id, access.required_status()).await?;
        if !deleted {
            return Err(Self::vanished(access));
        }

        info!(training_request_id = %id, deleted_by = %session.id, "Training request deleted");
        Ok(())
    }

    /// Accept or reject a pending training request and notify its owner
    pub async fn decide(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
        payload: DecisionRequest,
    ) -> AppResult<TrainingRequestResponse> {
        PermissionService::require(pool, session, features::TRAINING_REQUESTS, Action::Update)
            .await?;

        let current = Self::find(pool, company_id, id).await?;
        check_decision(&current.status, &payload.status)?;

        let mut tx = pool.begin().await?;
        let request = TrainingRequestRepository::decide(
            &mut *tx,
            company_id,
            id,
            &payload.status,
            &session.id,
        )
        .await?
        .ok_or_else(|| AppError::Conflict("Training request was already decided".to_string()))?;

        let content = format!(
            "Your training request '{}' was {}",
            request.title, request.status
        );
        let link = format!(
            "/companies/{}/training-requests/{}",
            request.company_id, request.id
        );
        NotificationRepository::create(
            &mut *tx,
            company_id,
            &request.user_id,
            NewNotification {
                title: "Training request decided",
                content: &content,
                link: Some(&link),
            },
        )
        .await?;
        tx.commit().await?;

        info!(
            training_request_id = %request.id,
            status = %request.status,
            decided_by = %session.id,
            "Training request decided"
        );
        Ok(request.into())
    }

    async fn list(
        pool: &PgPool,
        company_id: &Uuid,
        user_id: Option<&Uuid>,
        query: ListTrainingRequestsQuery,
    ) -> AppResult<Page<TrainingRequestResponse>> {
        if let Some(status) = query.status.as_deref() {
            validate_status(status, request_statuses::ALL)?;
        }

        let page = PageQuery::new(query.page, query.page_size);
        let (requests, total) = TrainingRequestRepository::list(
            pool,
            company_id,
            user_id,
            query.status.as_deref(),
            page.offset(),
            page.limit(),
        )
        .await?;

        Ok(Page::new(requests, &page, total).map(Into::into))
    }

    async fn find(pool: &PgPool, company_id: &Uuid, id: &Uuid) -> AppResult<TrainingRequest> {
        TrainingRequestRepository::find_by_id(pool, company_id, id)
            .await?
            .ok_or_else(|| AppError::not_found("Training request"))
    }

    /// Owners may change their training request until it is decided; everyone else needs the permission
    async fn edit_access(
        pool: &PgPool,
        session: &AuthenticatedUser,
        request: &TrainingRequest,
        action: Action,
    ) -> AppResult<EditAccess> {
        if let Some(access) = EditAccess::for_owner(&request.user_id, &request.status, &session.id) {
            return Ok(access);
        }
        PermissionService::require(pool, session, features::TRAINING_REQUESTS, action).await?;
        Ok(EditAccess::Permission)
    }

    /// The row changed between the access check and the write
    fn vanished(access: EditAccess) -> AppError {
        match access {
            EditAccess::OwnerWhilePending => {
                AppError::Conflict("Training request was decided in the meantime".to_string())
            }
            EditAccess::Permission => AppError::not_found("Training request"),
        }
    }
}

/// Both dates are optional; the range is only checked once both are known
fn check_period(start: Option<NaiveDate>, end: Option<NaiveDate>) -> AppResult<()> {
    match start {
        Some(start) => validate_date_range(start, end),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_period() {
        let day = |d| NaiveDate::from_ymd_opt(2025, 6, d);
        assert!(check_period(day(1), day(5)).is_ok());
        assert!(check_period(day(5), day(1)).is_err());
        assert!(check_period(None, day(1)).is_ok());
        assert!(check_period(day(1), None).is_ok());
    }
}
