//! Mission order request DTOs

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::constants::{MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH};

/// File a mission order; `user_id` is only read on the company-wide route
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMissionOrderRequest {
    pub user_id: Option<Uuid>,

    #[validate(length(min = 1, max = MAX_DESCRIPTION_LENGTH))]
    pub object: String,

    #[validate(length(min = 1, max = 255))]
    pub destination: String,

    #[validate(length(max = MAX_NAME_LENGTH))]
    pub transport: Option<String>,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,
}

/// Update mission order request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMissionOrderRequest {
    #[validate(length(min = 1, max = MAX_DESCRIPTION_LENGTH))]
    pub object: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub destination: Option<String>,

    #[validate(length(max = MAX_NAME_LENGTH))]
    pub transport: Option<String>,

    pub start_date: Option<NaiveDate>,

    pub end_date: Option<NaiveDate>,
}

/// Accept or reject a pending request
#[derive(Debug, Deserialize, Validate)]
pub struct DecisionRequest {
    #[validate(length(min = 1))]
    pub status: String,
}

/// List mission orders query parameters
#[derive(Debug, Deserialize)]
pub struct ListMissionOrdersQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub status: Option<String>,
    pub user_id: Option<Uuid>,
}
