//! Notification response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::Notification;

/// Notification response
#[derive(Debug, Serialize)]
pub struct NotificationResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub content: String,
    pub link: Option<String>,
    pub seen: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationResponse {
    fn from(n: Notification) -> Self {
        Self {
            id: n.id,
            user_id: n.user_id,
            title: n.title,
            content: n.content,
            link: n.link,
            seen: n.seen,
            created_at: n.created_at,
        }
    }
}

/// A bare count (unseen notifications, rows marked, notifications sent)
#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: i64,
}
