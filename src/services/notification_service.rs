//! Notification service
//!
//! Reading and clearing notifications is self-service: the session check
//! on the route already pins the caller to `user_id`.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    constants::features,
    db::repositories::{NewNotification, NotificationRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::notifications::{
        request::{ListNotificationsQuery, SendNotificationRequest},
        response::{CountResponse, NotificationResponse},
    },
    middleware::AuthenticatedUser,
    models::Action,
    services::PermissionService,
    utils::{Page, PageQuery},
};

pub struct NotificationService;

impl NotificationService {
    /// Notifications of a user, newest first
    pub async fn list_notifications(
        pool: &PgPool,
        company_id: &Uuid,
        user_id: &Uuid,
        query: ListNotificationsQuery,
    ) -> AppResult<Page<NotificationResponse>> {
        let page = PageQuery::new(query.page, query.page_size);
        let (notifications, total) = NotificationRepository::list_for_user(
            pool,
            company_id,
            user_id,
            query.seen,
            page.offset(),
            page.limit(),
        )
        .await?;

        Ok(Page::new(notifications, &page, total).map(Into::into))
    }

    pub async fn unseen_count(
        pool: &PgPool,
        company_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<CountResponse> {
        let count = NotificationRepository::unseen_count(pool, company_id, user_id).await?;
        Ok(CountResponse { count })
    }

    pub async fn mark_seen(
        pool: &PgPool,
        company_id: &Uuid,
        user_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<NotificationResponse> {
        let notification = NotificationRepository::mark_seen(pool, company_id, user_id, id)
            .await?
            .ok_or_else(|| AppError::not_found("Notification"))?;

        Ok(notification.into())
    }

    pub async fn mark_all_seen(
        pool: &PgPool,
        company_id: &Uuid,
        user_id: &Uuid,
    ) -> AppResult<CountResponse> {
        let count = NotificationRepository::mark_all_seen(pool, company_id, user_id).await?;
        Ok(CountResponse {
            count: count as i64,
        })
    }

    pub async fn delete_notification(
        pool: &PgPool,
        company_id: &Uuid,
        user_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<()> {
        if !NotificationRepository::delete(pool, company_id, user_id, id).await? {
            return Err(AppError::not_found("Notification"));
        }
        Ok(())
    }

    /// Notify one user, or every active user of the company when no user is given
    pub async fn send(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        payload: SendNotificationRequest,
    ) -> AppResult<CountResponse> {
        PermissionService::require(pool, session, features::NOTIFICATIONS, Action::Create).await?;

        let notification = NewNotification {
            title: &payload.title,
            content: &payload.content,
            link: payload.link.as_deref(),
        };

        let count = match payload.user_id {
            Some(user_id) => {
                if !UserRepository::exists_in_company(pool, company_id, &user_id).await? {
                    return Err(AppError::InvalidInput(
                        "User must be an employee of the company".to_string(),
                    ));
                }
                NotificationRepository::create(pool, company_id, &user_id, notification).await?;
                1
            }
            None => {
                let recipients = UserRepository::active_ids(pool, company_id).await?;
                NotificationRepository::create_many(pool, company_id, &recipients, notification)
                    .await?
            }
        };

        info!(
            company_id = %company_id,
            recipients = count,
            sent_by = %session.id,
            "Notification sent"
        );
        Ok(CountResponse {
            count: count as i64,
        })
    }
}
