//! Training request DTOs

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::constants::{MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH};

/// File a training request; `user_id` is only read on the company-wide route
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTrainingRequestRequest {
    pub user_id: Option<Uuid>,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub title: String,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    #[validate(length(max = 255))]
    pub organization: Option<String>,

    pub start_date: Option<NaiveDate>,

    pub end_date: Option<NaiveDate>,
}

/// Update training request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTrainingRequestRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub title: Option<String>,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    #[validate(length(max = 255))]
    pub organization: Option<String>,

    pub start_date: Option<NaiveDate>,

    pub end_date: Option<NaiveDate>,
}

/// List training requests query parameters
#[derive(Debug, Deserialize)]
pub struct ListTrainingRequestsQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub status: Option<String>,
    pub user_id: Option<Uuid>,
}
