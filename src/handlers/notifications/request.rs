//! Notification request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::constants::MAX_DESCRIPTION_LENGTH;

/// Send a notification to one user, or to every active user when `user_id` is null
#[derive(Debug, Deserialize, Validate)]
pub struct SendNotificationRequest {
    pub user_id: Option<Uuid>,

    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[validate(length(min = 1, max = MAX_DESCRIPTION_LENGTH))]
    pub content: String,

    #[validate(length(max = 1024))]
    pub link: Option<String>,
}

/// List notifications query parameters
#[derive(Debug, Deserialize)]
pub struct ListNotificationsQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub seen: Option<bool>,
}
