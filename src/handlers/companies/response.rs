//! Company response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    handlers::{roles::response::RoleResponse, users::response::UserResponse},
    models::Company,
};

/// Company response
#[derive(Debug, Serialize)]
pub struct CompanyResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub is_root: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Company> for CompanyResponse {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
            email: company.email,
            phone: company.phone,
            address: company.address,
            is_root: company.is_root,
            created_at: company.created_at,
            updated_at: company.updated_at,
        }
    }
}

/// A freshly bootstrapped company with its first administrator
#[derive(Debug, Serialize)]
pub struct CreatedCompanyResponse {
    pub company: CompanyResponse,
    pub admin: UserResponse,
    pub role: RoleResponse,
}
