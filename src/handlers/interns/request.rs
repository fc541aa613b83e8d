//! Intern request DTOs

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::constants::MAX_NAME_LENGTH;

/// Create intern request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateInternRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub first_name: String,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub last_name: String,

    #[validate(email)]
    pub email: String,

    pub phone: Option<String>,

    #[validate(length(max = MAX_NAME_LENGTH))]
    pub school: Option<String>,

    #[validate(length(max = MAX_NAME_LENGTH))]
    pub speciality: Option<String>,

    pub start_date: NaiveDate,

    pub end_date: Option<NaiveDate>,

    pub supervisor_id: Option<Uuid>,

    pub project_id: Option<Uuid>,
}

/// Update intern request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateInternRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub last_name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    pub phone: Option<String>,

    #[validate(length(max = MAX_NAME_LENGTH))]
    pub school: Option<String>,

    #[validate(length(max = MAX_NAME_LENGTH))]
    pub speciality: Option<String>,

    pub start_date: Option<NaiveDate>,

    pub end_date: Option<NaiveDate>,

    pub supervisor_id: Option<Uuid>,

    pub status: Option<String>,
}

/// Assign (or clear with `null`) the intern's project
#[derive(Debug, Deserialize, Validate)]
pub struct AssignProjectRequest {
    pub project_id: Option<Uuid>,
}

/// List interns query parameters
#[derive(Debug, Deserialize)]
pub struct ListInternsQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub search: Option<String>,
    pub status: Option<String>,
    pub project_id: Option<Uuid>,
}
