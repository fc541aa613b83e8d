//! Project request DTOs

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH};

/// Create project request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProjectRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub title: String,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    #[serde(default)]
    pub technologies: Vec<String>,

    pub start_date: NaiveDate,

    pub end_date: Option<NaiveDate>,

    pub status: Option<String>,

    #[validate(range(min = 0, max = 100))]
    pub progress: Option<i32>,
}

/// Update project request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProjectRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub title: Option<String>,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH))]
    pub description: Option<String>,

    pub technologies: Option<Vec<String>>,

    pub start_date: Option<NaiveDate>,

    pub end_date: Option<NaiveDate>,

    pub status: Option<String>,

    #[validate(range(min = 0, max = 100))]
    pub progress: Option<i32>,
}

/// List projects query parameters
#[derive(Debug, Deserialize)]
pub struct ListProjectsQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub search: Option<String>,
    pub status: Option<String>,
}
