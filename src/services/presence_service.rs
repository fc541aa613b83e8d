//! Presence service

use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    constants::{features, presence_statuses},
    db::repositories::{PresenceFilter, PresenceRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::presences::{
        request::{
            CreatePresenceRequest, ListPresencesQuery, PresenceRangeQuery, UpdatePresenceRequest,
        },
        response::PresenceResponse,
    },
    middleware::AuthenticatedUser,
    models::{Action, PresenceSummary},
    services::PermissionService,
    utils::{Page, PageQuery, validate_status},
};

/// Presence service for business logic
pub struct PresenceService;

impl PresenceService {
    /// List presences of a company
    pub async fn list_presences(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        query: ListPresencesQuery,
    ) -> AppResult<Page<PresenceResponse>> {
        PermissionService::require(pool, session, features::PRESENCES, Action::Read).await?;

        if let Some(status) = query.status.as_deref() {
            validate_status(status, presence_statuses::ALL)?;
        }
        validate_period(query.from, query.to)?;

        let page = PageQuery::new(query.page, query.page_size);
        let filter = PresenceFilter {
            user_id: query.user_id.as_ref(),
            status: query.status.as_deref(),
            from: query.from,
            to: query.to,
        };
        let (presences, total) =
            PresenceRepository::list(pool, company_id, filter, page.offset(), page.limit()).await?;

        Ok(Page::new(presences, &page, total).map(Into::into))
    }

    /// Record a user's presence for a day
    pub async fn create_presence(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        payload: CreatePresenceRequest,
    ) -> AppResult<PresenceResponse> {
        PermissionService::require(pool, session, features::PRESENCES, Action::Create).await?;
        validate_status(&payload.status, presence_statuses::ALL)?;
        validate_times(payload.check_in, payload.check_out)?;

        if !UserRepository::exists_in_company(pool, company_id, &payload.user_id).await? {
            return Err(AppError::InvalidInput(
                "User must be an employee of the company".to_string(),
            ));
        }

        let presence = PresenceRepository::create(pool, company_id, &payload)
            .await
            .map_err(|e| match e {
                AppError::AlreadyExists(_) => AppError::AlreadyExists(format!(
                    "Presence already recorded for {}",
                    payload.date
                )),
                other => other,
            })?;

        info!(presence_id = %presence.id, user_id = %presence.user_id, date = %presence.date, "Presence recorded");
        Ok(presence.into())
    }

    /// Get a presence
    pub async fn get_presence(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<PresenceResponse> {
        PermissionService::require(pool, session, features::PRESENCES, Action::Read).await?;

        let presence = PresenceRepository::find_by_id(pool, company_id, id)
            .await?
            .ok_or_else(|| AppError::not_found("Presence"))?;

        Ok(presence.into())
    }

    /// Update a presence
    pub async fn update_presence(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
        payload: UpdatePresenceRequest,
    ) -> AppResult<PresenceResponse> {
        PermissionService::require(pool, session, features::PRESENCES, Action::Update).await?;

        if let Some(status) = payload.status.as_deref() {
            validate_status(status, presence_statuses::ALL)?;
        }

        let current = PresenceRepository::find_by_id(pool, company_id, id)
            .await?
            .ok_or_else(|| AppError::not_found("Presence"))?;
        validate_times(
            payload.check_in.or(current.check_in),
            payload.check_out.or(current.check_out),
        )?;

        let presence = PresenceRepository::update(pool, company_id, id, &payload)
            .await?
            .ok_or_else(|| AppError::not_found("Presence"))?;

        info!(presence_id = %presence.id, updated_by = %session.id, "Presence updated");
        Ok(presence.into())
    }

    /// Delete a presence
    pub async fn delete_presence(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<()> {
        PermissionService::require(pool, session, features::PRESENCES, Action::Delete).await?;

        if !PresenceRepository::delete(pool, company_id, id).await? {
            return Err(AppError::not_found("Presence"));
        }

        info!(presence_id = %id, deleted_by = %session.id, "Presence deleted");
        Ok(())
    }

    /// Presences of one user over a period
    pub async fn list_user_presences(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        user_id: &Uuid,
        query: PresenceRangeQuery,
    ) -> AppResult<Page<PresenceResponse>> {
        PermissionService::require_self_or(pool, session, user_id, features::PRESENCES, Action::Read)
            .await?;
        validate_period(query.from, query.to)?;
        Self::check_user(pool, company_id, user_id).await?;

        let page = PageQuery::new(query.page, query.page_size);
        let filter = PresenceFilter {
            user_id: Some(user_id),
            from: query.from,
            to: query.to,
            ..Default::default()
        };
        let (presences, total) =
            PresenceRepository::list(pool, company_id, filter, page.offset(), page.limit()).await?;

        Ok(Page::new(presences, &page, total).map(Into::into))
    }

    /// Attendance summary of one user over a period
    pub async fn user_summary(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        user_id: &Uuid,
        query: PresenceRangeQuery,
    ) -> AppResult<PresenceSummary> {
        PermissionService::require_self_or(pool, session, user_id, features::PRESENCES, Action::Read)
            .await?;
        validate_period(query.from, query.to)?;
        Self::check_user(pool, company_id, user_id).await?;

        let counts =
            PresenceRepository::counts(pool, company_id, user_id, query.from, query.to).await?;
        Ok(counts.into())
    }

    async fn check_user(pool: &PgPool, company_id: &Uuid, user_id: &Uuid) -> AppResult<()> {
        if UserRepository::exists_in_company(pool, company_id, user_id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("User"))
        }
    }
}

fn validate_times(check_in: Option<NaiveTime>, check_out: Option<NaiveTime>) -> AppResult<()> {
    match (check_in, check_out) {
        (Some(check_in), Some(check_out)) if check_out < check_in => Err(AppError::Validation(
            "check_out must not be before check_in".to_string(),
        )),
        (None, Some(_)) => Err(AppError::Validation(
            "check_out requires a check_in".to_string(),
        )),
        _ => Ok(()),
    }
}

fn validate_period(from: Option<NaiveDate>, to: Option<NaiveDate>) -> AppResult<()> {
    match (from, to) {
        (Some(from), Some(to)) if to < from => Err(AppError::Validation(
            "'to' must not be before 'from'".to_string(),
        )),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_check_out_after_check_in() {
        assert!(validate_times(Some(time(9, 0)), Some(time(17, 30))).is_ok());
        assert!(validate_times(Some(time(9, 0)), Some(time(9, 0))).is_ok());
        assert!(validate_times(Some(time(17, 0)), Some(time(9, 0))).is_err());
    }

    #[test]
    fn test_check_out_without_check_in() {
        assert!(validate_times(None, Some(time(17, 0))).is_err());
        assert!(validate_times(Some(time(9, 0)), None).is_ok());
        assert!(validate_times(None, None).is_ok());
    }

    #[test]
    fn test_period() {
        let day = |d| NaiveDate::from_ymd_opt(2025, 3, d).unwrap();
        assert!(validate_period(Some(day(1)), Some(day(31))).is_ok());
        assert!(validate_period(Some(day(10)), Some(day(2))).is_err());
        assert!(validate_period(None, Some(day(2))).is_ok());
    }
}
