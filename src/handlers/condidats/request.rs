//! Condidat request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_NAME_LENGTH;

/// Create condidat request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCondidatRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub first_name: String,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub last_name: String,

    #[validate(email)]
    pub email: String,

    pub phone: Option<String>,

    #[validate(length(max = MAX_NAME_LENGTH))]
    pub education_level: Option<String>,

    #[validate(length(max = MAX_NAME_LENGTH))]
    pub speciality: Option<String>,

    #[serde(default)]
    #[validate(range(min = 0, max = 60))]
    pub experience_years: i32,

    #[validate(url)]
    pub cv_url: Option<String>,
}

/// Update condidat request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCondidatRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub last_name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    pub phone: Option<String>,

    #[validate(length(max = MAX_NAME_LENGTH))]
    pub education_level: Option<String>,

    #[validate(length(max = MAX_NAME_LENGTH))]
    pub speciality: Option<String>,

    #[validate(range(min = 0, max = 60))]
    pub experience_years: Option<i32>,

    #[validate(url)]
    pub cv_url: Option<String>,
}

/// Move a condidat through the pipeline
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCondidatStatusRequest {
    #[validate(length(min = 1))]
    pub status: String,
}

/// List condidats query parameters
#[derive(Debug, Deserialize)]
pub struct ListCondidatsQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub search: Option<String>,
    pub status: Option<String>,
}
