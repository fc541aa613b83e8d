//! Presence request DTOs

use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// Record presence request
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePresenceRequest {
    pub user_id: Uuid,

    pub date: NaiveDate,

    pub check_in: Option<NaiveTime>,

    pub check_out: Option<NaiveTime>,

    #[validate(length(min = 1))]
    pub status: String,

    #[validate(length(max = 1024))]
    pub note: Option<String>,
}

/// Update presence request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePresenceRequest {
    pub check_in: Option<NaiveTime>,

    pub check_out: Option<NaiveTime>,

    pub status: Option<String>,

    #[validate(length(max = 1024))]
    pub note: Option<String>,
}

/// List presences query parameters
#[derive(Debug, Deserialize)]
pub struct ListPresencesQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub user_id: Option<Uuid>,
    pub status: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Date range for a user's presences and summary
#[derive(Debug, Deserialize)]
pub struct PresenceRangeQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}
