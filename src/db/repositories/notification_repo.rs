//! Notification repository

use sqlx::{PgExecutor, PgPool};
use uuid::Uuid;

use crate::{error::AppResult, models::Notification};

/// Content of a notification, shared by single and broadcast sends
#[derive(Debug, Clone, Copy)]
pub struct NewNotification<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub link: Option<&'a str>,
}

/// Repository for notification database operations
pub struct NotificationRepository;

impl NotificationRepository {
    /// Notify one user
    pub async fn create<'e, E>(
        executor: E,
        company_id: &Uuid,
        user_id: &Uuid,
        notification: NewNotification<'_>,
    ) -> AppResult<Notification>
    where
        E: PgExecutor<'e>,
    {
        let notification = sqlx::query_as::<_, Notification>(
            r#"
            INSERT INTO notifications (company_id, user_id, title, content, link)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(company_id)
        .bind(user_id)
        .bind(notification.title)
        .bind(notification.content)
        .bind(notification.link)
        .fetch_one(executor)
        .await?;

        Ok(notification)
    }

    /// Notify several users at once; returns the number of rows written
    pub async fn create_many<'e, E>(
        executor: E,
        company_id: &Uuid,
        user_ids: &[Uuid],
        notification: NewNotification<'_>,
    ) -> AppResult<u64>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query(
            r#"
            INSERT INTO notifications (company_id, user_id, title, content, link)
            SELECT $1, user_id, $3, $4, $5
            FROM UNNEST($2::uuid[]) AS u(user_id)
            "#,
        )
        .bind(company_id)
        .bind(user_ids)
        .bind(notification.title)
        .bind(notification.content)
        .bind(notification.link)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }

    /// Notifications of a user, newest first
    pub async fn list_for_user(
        pool: &PgPool,
        company_id: &Uuid,
        user_id: &Uuid,
        seen: Option<bool>,
        offset: i64,
        limit: i64,
    ) -> AppResult<(Vec<Notification>, i64)> {
        let notifications = sqlx::query_as::<_, Notification>(
            r#"
            SELECT * FROM notifications
            WHERE company_id = $1 AND user_id = $2
                AND ($3::boolean IS NULL OR seen = $3)
            ORDER BY created_at DESC
            OFFSET $4 LIMIT $5
            "#,
        )
        .bind(company_id)
        .bind(user_id)
        .bind(seen)
        .bind(offset)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM notifications
            WHERE company_id = $1 AND user_id = $2
                AND ($3::boolean IS NULL OR seen = $3)
            "#,
        )
        .bind(company_id)
        .bind(user_id)
        .bind(seen)
        .fetch_one(pool)
        .await?;

        Ok((notifications, count))
    }

    pub async fn unseen_count(pool: &PgPool, company_id: &Uuid, user_id: &Uuid) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM notifications
            WHERE company_id = $1 AND user_id = $2 AND NOT seen
            "#,
        )
        .bind(company_id)
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(count)
    }

    /// Mark one of the user's notifications as seen
    pub async fn mark_seen(
        pool: &PgPool,
        company_id: &Uuid,
        user_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<Option<Notification>> {
        let notification = sqlx::query_as::<_, Notification>(
            r#"
            UPDATE notifications
            SET seen = TRUE
            WHERE id = $1 AND company_id = $2 AND user_id = $3
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(company_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

        Ok(notification)
    }

    /// Mark every unseen notification of the user as seen
    pub async fn mark_all_seen(pool: &PgPool, company_id: &Uuid, user_id: &Uuid) -> AppResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE notifications
            SET seen = TRUE
            WHERE company_id = $1 AND user_id = $2 AND NOT seen
            "#,
        )
        .bind(company_id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Delete one of the user's notifications
    pub async fn delete(
        pool: &PgPool,
        company_id: &Uuid,
        user_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<bool> {
        let result = sqlx::query(
            r#"DELETE FROM notifications WHERE id = $1 AND company_id = $2 AND user_id = $3"#,
        )
        .bind(id)
        .bind(company_id)
        .bind(user_id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
