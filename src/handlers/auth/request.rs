//! Login payload

use serde::Deserialize;
use validator::Validate;

use crate::constants::MAX_PASSWORD_LENGTH;

/// Credentials of any user, root included
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 1, max = MAX_PASSWORD_LENGTH, message = "must not be empty"))]
    pub password: String,
}
