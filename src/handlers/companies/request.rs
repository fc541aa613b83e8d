//! Company request DTOs

use serde::Deserialize;
use validator::Validate;

use crate::constants::{MAX_NAME_LENGTH, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

/// First user of a new company
#[derive(Debug, Deserialize, Validate)]
pub struct CompanyAdminRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub first_name: String,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub last_name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = MIN_PASSWORD_LENGTH, max = MAX_PASSWORD_LENGTH))]
    pub password: String,
}

/// Create company request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCompanyRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    pub phone: Option<String>,

    #[validate(length(max = 512))]
    pub address: Option<String>,

    #[validate(nested)]
    pub admin: CompanyAdminRequest,
}

/// Update company request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCompanyRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    pub phone: Option<String>,

    #[validate(length(max = 512))]
    pub address: Option<String>,
}

/// List companies query parameters
#[derive(Debug, Deserialize)]
pub struct ListCompaniesQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub search: Option<String>,
}
