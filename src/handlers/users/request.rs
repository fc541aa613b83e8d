//! User request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::constants::{MAX_NAME_LENGTH, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

/// Create user request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub first_name: String,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub last_name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = MIN_PASSWORD_LENGTH, max = MAX_PASSWORD_LENGTH))]
    pub password: String,

    pub phone: Option<String>,

    #[validate(length(max = MAX_NAME_LENGTH))]
    pub job_title: Option<String>,

    /// Roles assigned right away
    #[serde(default)]
    pub role_ids: Vec<Uuid>,
}

/// Update user request
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH))]
    pub last_name: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    pub phone: Option<String>,

    #[validate(length(max = MAX_NAME_LENGTH))]
    pub job_title: Option<String>,

    /// Only honoured for callers holding `users.update`
    pub is_active: Option<bool>,
}

/// Change own password request
#[derive(Debug, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1))]
    pub current_password: String,

    #[validate(length(min = MIN_PASSWORD_LENGTH, max = MAX_PASSWORD_LENGTH))]
    pub new_password: String,
}

/// Assign role request
#[derive(Debug, Deserialize, Validate)]
pub struct AssignRoleRequest {
    pub role_id: Uuid,
}

/// List users query parameters
#[derive(Debug, Deserialize)]
pub struct ListUsersQuery {
    pub page: Option<u32>,
    pub page_size: Option<u32>,
    pub search: Option<String>,
    pub is_active: Option<bool>,
}
