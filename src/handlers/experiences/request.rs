//! User experience request DTOs

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH};

/// Create experience request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateExperienceRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub title: String,

    #[validate(length(min = 1, max = 255))]
    pub employer: String,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    pub start_date: NaiveDate,

    pub end_date: Option<NaiveDate>,
}

/// Update experience request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateExperienceRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub employer: Option<String>,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    pub start_date: Option<NaiveDate>,

    pub end_date: Option<NaiveDate>,
}
