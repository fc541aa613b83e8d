//! Authentication response DTOs

use serde::Serialize;

use crate::{
    handlers::{
        companies::response::CompanyResponse, roles::response::RoleResponse,
        users::response::UserResponse,
    },
    models::FeaturePermission,
};

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    /// Seconds until the token expires
    pub expires_in: i64,
    pub user: UserResponse,
    pub company: CompanyResponse,
}

/// The current session's user, company and rights
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: UserResponse,
    pub company: CompanyResponse,
    pub is_root: bool,
    pub roles: Vec<RoleResponse>,
    pub permissions: Vec<FeaturePermission>,
}
